use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::requests::{CreateTopicRequest, PublishRequest};
use crate::responses::{ProbeReport, ProbeResponse, PublishOutcome, TopicCreation};
use reqwest::header::CONTENT_TYPE;
use std::io::Write;
use url::Url;

const TOPICS_PATH: &[&str] = &["api", "topics"];
const PUBLISH_PATH: &[&str] = &["api", "publish"];

/// Client for the emulator's REST API. Every call is awaited before the next
/// one starts.
pub struct Probe {
    client: reqwest::Client,
    config: ProbeConfig,
}

impl Probe {
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Appends `segments` to the base url, keeping any path prefix it has.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ProbeError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProbeError::InvalidBaseUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn create_topic(&self, name: &str) -> Result<ProbeResponse, ProbeError> {
        let url = self.endpoint(TOPICS_PATH)?;
        tracing::info!("creating topic {} at {}", name, url);

        let response = self
            .client
            .post(url)
            .json(&CreateTopicRequest {
                name: name.to_string(),
            })
            .send()
            .await?;
        capture(response).await
    }

    pub async fn publish(&self, request: &PublishRequest) -> Result<ProbeResponse, ProbeError> {
        let url = self.endpoint(PUBLISH_PATH)?;
        tracing::info!("publishing {:?} to {}", request, url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;
        capture(response).await
    }

    /// Creates the topic, then publishes once with a `null` message and once
    /// without one. Report lines go to `out`. Publishing is skipped unless
    /// creation answered 201.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ProbeReport, ProbeError> {
        let creation = self.create_topic(&self.config.topic_name).await?;
        writeln!(
            out,
            "Create topic response: {} - {}",
            creation.status, creation.body
        )?;

        let arn = match TopicCreation::from_response(&creation)? {
            TopicCreation::Created { arn } => arn,
            TopicCreation::Rejected { status } => {
                tracing::warn!("topic creation answered {}, not publishing", status);
                return Ok(ProbeReport {
                    creation,
                    null_message: None,
                    missing_message: None,
                });
            }
        };

        let null_message = self
            .publish_and_report(
                out,
                "Null message test response",
                &PublishRequest::with_null_message(&arn),
            )
            .await?;

        let missing_message = self
            .publish_and_report(
                out,
                "Missing message test response",
                &PublishRequest::without_message(&arn),
            )
            .await?;

        Ok(ProbeReport {
            creation,
            null_message: Some(null_message),
            missing_message: Some(missing_message),
        })
    }

    async fn publish_and_report<W: Write>(
        &self,
        out: &mut W,
        label: &str,
        request: &PublishRequest,
    ) -> Result<ProbeResponse, ProbeError> {
        let response = self.publish(request).await?;
        writeln!(out, "{}: {} - {}", label, response.status, response.body)?;

        match PublishOutcome::from_response(&response) {
            PublishOutcome::Accepted { message_id } => {
                tracing::info!("{}: accepted as message {}", label, message_id)
            }
            PublishOutcome::Rejected { error } => {
                tracing::info!("{}: rejected with {:?}", label, error)
            }
            PublishOutcome::Unrecognized => {
                tracing::info!("{}: body not recognized", label)
            }
        }
        Ok(response)
    }
}

async fn capture(response: reqwest::Response) -> Result<ProbeResponse, ProbeError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    tracing::debug!("received {} with {} bytes", status, body.len());
    Ok(ProbeResponse { status, body })
}
