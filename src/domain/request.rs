use serde::{Deserialize, Serialize};

use crate::domain::response::SendMessageResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Wire tag identifying which remote operation a request envelope invokes.
pub enum ActionKind {
    #[serde(rename = "SENDMESSAGE")]
    SendMessage,
}

impl ActionKind {
    /// The tag exactly as it appears in the envelope's `action` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "SENDMESSAGE",
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SendMessage {}
}

/// Pairs a request payload type with its action tag and success payload type.
///
/// Every operation goes through the same endpoint and the same
/// `{auth, action, data}` envelope; this trait is the single mapping site
/// tying a payload to its `action` tag and its `data` result shape, so a
/// caller can never pair one action's payload with another action's result.
/// Adding an operation means one new payload struct and one `impl ApiAction`.
pub trait ApiAction: Serialize + sealed::Sealed {
    /// Tag written into the envelope's `action` field.
    const KIND: ActionKind;

    /// Success payload carried in the response envelope's `data` field.
    type Output: serde::de::DeserializeOwned;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Payload for the `SENDMESSAGE` action.
///
/// Nothing here is validated client-side: `channels` may be empty and both
/// `viber` and `sms` may be absent. The service owns its validation rules
/// and reports violations through the error envelope.
pub struct SendMessage {
    /// Destination address, passed through exactly as given.
    pub recipient: String,
    /// Delivery channels in priority order, e.g. `["viber", "sms"]`.
    pub channels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viber: Option<ViberMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsMessage>,
}

impl ApiAction for SendMessage {
    const KIND: ActionKind = ActionKind::SendMessage;
    type Output = SendMessageResult;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Viber leg of a [`SendMessage`] payload.
pub struct ViberMessage {
    /// Sender name registered with SMS-FLY.
    pub source: String,
    /// Message lifetime before the service gives up on this channel.
    pub ttl: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ViberButton>,
    /// Image URL shown with the message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Action button attached to a Viber message.
pub struct ViberButton {
    pub caption: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// SMS leg of a [`SendMessage`] payload.
pub struct SmsMessage {
    /// Alphanumeric sender id registered with SMS-FLY.
    pub source: String,
    /// Message lifetime before the service gives up on this channel.
    pub ttl: u32,
    /// Flash-SMS flag; omitted from the wire when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<u8>,
    pub text: String,
}
