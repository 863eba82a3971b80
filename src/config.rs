use crate::error::ProbeError;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9922";
pub const DEFAULT_TOPIC_NAME: &str = "test-topic";

/// Where the probe points and which topic it creates.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: Url,
    pub topic_name: String,
}

impl ProbeConfig {
    pub fn new(base_url: &str, topic_name: impl Into<String>) -> Result<Self, ProbeError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ProbeError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ProbeError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: parsed,
            topic_name: topic_name.into(),
        })
    }

    /// The emulator on its usual local port, with the probe's topic.
    pub fn local() -> Result<Self, ProbeError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TOPIC_NAME)
    }
}
