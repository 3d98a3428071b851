//! Typed Rust client for the SMS-FLY v2 messaging API (SMS and Viber).
//!
//! SMS-FLY exposes a single JSON endpoint: every request is an
//! `{auth, action, data}` envelope, every response is a `success`-tagged
//! union. The crate keeps a small layered design: a domain layer of plain
//! payload types, a transport layer for the wire envelope, and a client
//! layer issuing one HTTPS POST per operation.
//!
//! Application-level rejections (`success: 0`) come back as the
//! [`ApiResponse::Error`] value, even when the service delivers them on a
//! 4xx/5xx HTTP status. Anything else that goes wrong, a request that never
//! completed, an undecodable body, or a non-2xx status without a
//! `success: 0` body, surfaces as [`SmsFlyError`].
//!
//! ```rust,no_run
//! use smsfly::{ApiKey, ApiResponse, SendMessage, SmsFlyClient, SmsMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsfly::SmsFlyError> {
//!     let client = SmsFlyClient::new(ApiKey::new("..."));
//!     let message = SendMessage {
//!         recipient: "380931234567".to_owned(),
//!         channels: vec!["sms".to_owned()],
//!         viber: None,
//!         sms: Some(SmsMessage {
//!             source: "InfoCenter".to_owned(),
//!             ttl: 5,
//!             flash: None,
//!             text: "hello".to_owned(),
//!         }),
//!     };
//!     match client.send_message(message).await? {
//!         ApiResponse::Success(resp) => println!("queued: {}", resp.data.message_id),
//!         ApiResponse::Error(err) => eprintln!("rejected: {}", err),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ApiKey, SmsFlyClient, SmsFlyClientBuilder, SmsFlyError};
pub use domain::{
    ActionKind, ApiAction, ApiError, ApiResponse, ApiSuccess, SendMessage, SendMessageResult,
    SmsMessage, SmsSendResult, ViberButton, ViberMessage, ViberSendResult,
};
