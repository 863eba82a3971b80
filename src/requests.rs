use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CreateTopicRequest {
    pub name: String,
}

/// Body of `POST /api/publish`.
///
/// `message` is tri-state: `None` leaves the key out, `Some(None)` sends an
/// explicit `null`, `Some(Some(_))` sends the text.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub topic_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Option<String>>,
}

impl PublishRequest {
    #[cfg(test)]
    pub fn with_message(topic_arn: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            message: Some(Some(message.into())),
        }
    }

    pub fn with_null_message(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            message: Some(None),
        }
    }

    pub fn without_message(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            message: None,
        }
    }
}
