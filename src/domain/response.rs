use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
/// Normalized response envelope.
///
/// Exactly one variant per response, selected by the wire `success`
/// discriminant (`1` or `0`). An [`ApiResponse::Error`] is an ordinary
/// return value: the service understood the request and rejected it.
pub enum ApiResponse<T> {
    Success(ApiSuccess<T>),
    Error(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collapse the union into a `Result`, moving both variants out.
    pub fn into_result(self) -> Result<ApiSuccess<T>, ApiError> {
        match self {
            Self::Success(success) => Ok(success),
            Self::Error(error) => Err(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Success half of the response envelope.
pub struct ApiSuccess<T> {
    /// Server-side timestamp, kept exactly as received.
    pub date: String,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Application-level rejection reported by the service.
pub struct ApiError {
    pub code: String,
    pub date: String,
    pub description: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error {}: {}", self.code, self.description)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Success payload of the `SENDMESSAGE` action.
///
/// Per-channel details are present only for the channels the service
/// actually attempted.
pub struct SendMessageResult {
    #[serde(rename = "messageID")]
    pub message_id: String,
    #[serde(default)]
    pub viber: Option<ViberSendResult>,
    #[serde(default)]
    pub sms: Option<SmsSendResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Viber acceptance details for a sent message.
pub struct ViberSendResult {
    pub status: String,
    pub date: String,
    pub label: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// SMS acceptance details for a sent message.
pub struct SmsSendResult {
    pub status: String,
    pub date: String,
    pub cost: f64,
}
