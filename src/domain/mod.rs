//! Domain layer: request payloads, response payloads, and the action mapping (no I/O).

mod request;
mod response;

pub use request::{ActionKind, ApiAction, SendMessage, SmsMessage, ViberButton, ViberMessage};
pub use response::{
    ApiError, ApiResponse, ApiSuccess, SendMessageResult, SmsSendResult, ViberSendResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn full_message() -> SendMessage {
        SendMessage {
            recipient: "380931234567".to_owned(),
            channels: vec!["viber".to_owned(), "sms".to_owned()],
            viber: Some(ViberMessage {
                source: "InfoCenter".to_owned(),
                ttl: 60,
                text: "hello from viber".to_owned(),
                button: Some(ViberButton {
                    caption: "Open".to_owned(),
                    url: "https://example.com/offer".to_owned(),
                }),
                image: Some("https://example.com/logo.png".to_owned()),
            }),
            sms: Some(SmsMessage {
                source: "InfoCenter".to_owned(),
                ttl: 5,
                flash: Some(1),
                text: "hello from sms".to_owned(),
            }),
        }
    }

    #[test]
    fn action_kind_matches_wire_tag() {
        assert_eq!(ActionKind::SendMessage.as_str(), "SENDMESSAGE");
        assert_eq!(
            serde_json::to_string(&ActionKind::SendMessage).unwrap(),
            r#""SENDMESSAGE""#
        );
    }

    #[test]
    fn send_message_round_trips_through_json() {
        let message = full_message();
        let json = serde_json::to_string(&message).unwrap();
        let back: SendMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn absent_options_are_omitted_from_the_wire() {
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

        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("viber").is_none());
        assert!(value["sms"].get("flash").is_none());
        assert_eq!(value["channels"], serde_json::json!(["sms"]));
    }

    #[test]
    fn channel_order_is_preserved() {
        let message = full_message();
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["channels"], serde_json::json!(["viber", "sms"]));
    }

    #[test]
    fn api_response_into_result_splits_variants() {
        let success: ApiResponse<u32> = ApiResponse::Success(ApiSuccess {
            date: "2024-01-01T00:00:00Z".to_owned(),
            data: 7,
        });
        assert!(success.is_success());
        assert_eq!(success.into_result().unwrap().data, 7);

        let error: ApiResponse<u32> = ApiResponse::Error(ApiError {
            code: "ERR_AUTH".to_owned(),
            date: "2024-01-01T00:00:00Z".to_owned(),
            description: "invalid key".to_owned(),
        });
        assert!(!error.is_success());
        let err = error.into_result().unwrap_err();
        assert_eq!(err.code, "ERR_AUTH");
        assert_eq!(err.to_string(), "API error ERR_AUTH: invalid key");
    }
}
