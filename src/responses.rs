use crate::error::ProbeError;
use serde::Deserialize;

pub const STATUS_CREATED: u16 = 201;

/// A response as it came off the wire, kept verbatim for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

// POST /api/topics
#[derive(Deserialize, Debug)]
pub struct TopicResponse {
    pub arn: String,
    pub name: Option<String>,
}

// POST /api/publish
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PublishAccepted {
    message_id: String,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    error: String,
}

/// Whether topic creation gave us something to publish to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicCreation {
    Created { arn: String },
    Rejected { status: u16 },
}

impl TopicCreation {
    /// Only a 201 is decoded. Any other status, including the 200 the
    /// emulator sends for a topic that already exists, is a rejection.
    pub fn from_response(response: &ProbeResponse) -> Result<Self, ProbeError> {
        if response.status != STATUS_CREATED {
            return Ok(TopicCreation::Rejected {
                status: response.status,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&response.body)?;
        if value.get("arn").is_none() {
            return Err(ProbeError::MissingArn {
                body: response.body.clone(),
            });
        }
        let topic: TopicResponse = serde_json::from_value(value)?;
        tracing::debug!("decoded topic {} ({:?})", topic.arn, topic.name);
        Ok(TopicCreation::Created { arn: topic.arn })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Accepted { message_id: String },
    Rejected { error: String },
    Unrecognized,
}

impl PublishOutcome {
    /// Best-effort decode, used for logging only.
    pub fn from_response(response: &ProbeResponse) -> Self {
        if let Ok(accepted) = serde_json::from_str::<PublishAccepted>(&response.body) {
            return PublishOutcome::Accepted {
                message_id: accepted.message_id,
            };
        }
        match serde_json::from_str::<ApiError>(&response.body) {
            Ok(err) => PublishOutcome::Rejected { error: err.error },
            Err(_) => PublishOutcome::Unrecognized,
        }
    }
}

#[derive(Debug)]
pub struct ProbeReport {
    pub creation: ProbeResponse,
    pub null_message: Option<ProbeResponse>,
    pub missing_message: Option<ProbeResponse>,
}

impl ProbeReport {
    pub fn published(&self) -> bool {
        self.null_message.is_some() || self.missing_message.is_some()
    }
}
