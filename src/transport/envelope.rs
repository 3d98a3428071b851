use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{ActionKind, ApiError, ApiResponse, ApiSuccess};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response discriminant success={success} is neither 0 nor 1")]
    UnknownDiscriminant { success: u64 },

    #[error("success response is missing the `{field}` field")]
    MissingSuccessField { field: &'static str },

    #[error("error response is missing the `error` object")]
    MissingErrorBody,
}

#[derive(Debug, Serialize)]
struct RequestEnvelope<'a, T> {
    auth: AuthEnvelope<'a>,
    action: ActionKind,
    data: &'a T,
}

#[derive(Debug, Serialize)]
struct AuthEnvelope<'a> {
    key: &'a str,
}

/// Serialize one `{auth, action, data}` envelope for the wire.
pub fn encode_request_envelope<T: Serialize>(
    key: &str,
    action: ActionKind,
    data: &T,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&RequestEnvelope {
        auth: AuthEnvelope { key },
        action,
        data,
    })
}

// No `serde(default)` here: missing `Option` fields already decode to `None`,
// and a default attribute would put a `T: Default` bound on the derived impl.
#[derive(Debug, Deserialize)]
struct ResponseWire<T> {
    success: u64,
    date: Option<String>,
    data: Option<T>,
    error: Option<ApiError>,
}

/// Decode a response body into the success/error union.
///
/// The `success` discriminant alone selects the variant; the HTTP status
/// code plays no part at this layer.
pub fn decode_api_response<T: DeserializeOwned>(
    json: &str,
) -> Result<ApiResponse<T>, TransportError> {
    let wire: ResponseWire<T> = serde_json::from_str(json)?;
    match wire.success {
        1 => {
            let date = wire
                .date
                .ok_or(TransportError::MissingSuccessField { field: "date" })?;
            let data = wire
                .data
                .ok_or(TransportError::MissingSuccessField { field: "data" })?;
            Ok(ApiResponse::Success(ApiSuccess { date, data }))
        }
        0 => {
            let error = wire.error.ok_or(TransportError::MissingErrorBody)?;
            Ok(ApiResponse::Error(error))
        }
        other => Err(TransportError::UnknownDiscriminant { success: other }),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendMessage, SendMessageResult, SmsMessage};

    use super::*;

    #[test]
    fn encode_request_envelope_matches_wire_shape() {
        let message = SendMessage {
            recipient: "380931234567".to_owned(),
            channels: vec!["sms".to_owned()],
            viber: None,
            sms: Some(SmsMessage {
                source: "InfoCenter".to_owned(),
                ttl: 5,
                flash: None,
                text: "hi".to_owned(),
            }),
        };

        let body =
            encode_request_envelope("secret", ActionKind::SendMessage, &message).unwrap();
        assert_eq!(
            body,
            concat!(
                r#"{"auth":{"key":"secret"},"action":"SENDMESSAGE","#,
                r#""data":{"recipient":"380931234567","channels":["sms"],"#,
                r#""sms":{"source":"InfoCenter","ttl":5,"text":"hi"}}}"#,
            )
        );
    }

    #[test]
    fn decode_success_envelope_with_channel_results() {
        let json = r#"
        {
          "success": 1,
          "date": "2024-01-01T00:00:00Z",
          "data": {
            "messageID": "abc123",
            "viber": {
              "status": "ACCEPTD",
              "date": "2024-01-01T00:00:01Z",
              "label": "promo",
              "cost": 0.45
            },
            "sms": {
              "status": "ACCEPTD",
              "date": "2024-01-01T00:00:02Z",
              "cost": 0.30
            }
          }
        }
        "#;

        let response = decode_api_response::<SendMessageResult>(json).unwrap();
        let success = response.into_result().unwrap();
        assert_eq!(success.date, "2024-01-01T00:00:00Z");
        assert_eq!(success.data.message_id, "abc123");

        let viber = success.data.viber.unwrap();
        assert_eq!(viber.status, "ACCEPTD");
        assert_eq!(viber.label, "promo");
        assert_eq!(viber.cost, 0.45);

        let sms = success.data.sms.unwrap();
        assert_eq!(sms.cost, 0.30);
    }

    #[test]
    fn decode_error_envelope() {
        let json = r#"
        {
          "success": 0,
          "error": {
            "code": "ERR_AUTH",
            "date": "2024-01-01T00:00:00Z",
            "description": "invalid key"
          }
        }
        "#;

        let response = decode_api_response::<SendMessageResult>(json).unwrap();
        let error = response.into_result().unwrap_err();
        assert_eq!(error.code, "ERR_AUTH");
        assert_eq!(error.description, "invalid key");
    }

    #[test]
    fn decode_rejects_success_without_data() {
        let json = r#"{"success": 1, "date": "2024-01-01T00:00:00Z"}"#;
        let err = decode_api_response::<SendMessageResult>(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingSuccessField { field: "data" }
        ));
    }

    #[test]
    fn decode_rejects_error_without_error_object() {
        let json = r#"{"success": 0}"#;
        let err = decode_api_response::<SendMessageResult>(json).unwrap_err();
        assert!(matches!(err, TransportError::MissingErrorBody));
    }

    #[test]
    fn decode_rejects_unknown_discriminant() {
        let json = r#"{"success": 2}"#;
        let err = decode_api_response::<SendMessageResult>(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnknownDiscriminant { success: 2 }
        ));
    }

    #[test]
    fn decode_rejects_non_json_body() {
        let err = decode_api_response::<SendMessageResult>("<html>oops</html>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
