//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiAction, ApiResponse, SendMessage, SendMessageResult};

const DEFAULT_ENDPOINT: &str = "https://sms-fly.ua/api/v2/api.php";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .timeout(self.timeout)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API key issued by SMS-FLY.
///
/// Stored exactly as given for the client's lifetime; no format validation
/// is applied. The service itself rejects bad keys with an error envelope.
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an API key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as sent in the wire `auth.key` field.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsFlyClient`].
///
/// Application-level rejections are not represented here: a decoded
/// `success: 0` envelope comes back as [`ApiResponse::Error`], an ordinary
/// value. This enum covers only requests that never produced a decodable
/// response envelope.
pub enum SmsFlyError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-2xx HTTP status whose body did not decode as a response envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// 2xx response whose body could not be decoded as a response envelope.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The request envelope could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsFlyClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsFlyClientBuilder {
    api_key: ApiKey,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl SmsFlyClientBuilder {
    /// Create a builder with the default endpoint and the 10 second timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the SMS-FLY endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-request timeout (dispatch to completion).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`SmsFlyClient`].
    pub fn build(self) -> Result<SmsFlyClient, SmsFlyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsFlyError::Transport(Box::new(err)))?;

        Ok(SmsFlyClient {
            api_key: self.api_key,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

#[derive(Clone)]
/// Typed SMS-FLY API client.
///
/// Holds the API key for its lifetime and issues exactly one HTTPS POST per
/// operation to `https://sms-fly.ua/api/v2/api.php`, with a 10 second
/// per-request timeout. Every call builds its own envelope and request, so
/// the client can be cloned and shared across tasks freely.
pub struct SmsFlyClient {
    api_key: ApiKey,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsFlyClient {
    /// Create a client using the default endpoint and timeout.
    ///
    /// For more customization, use [`SmsFlyClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> SmsFlyClientBuilder {
        SmsFlyClientBuilder::new(api_key)
    }

    /// Send a message over the configured channels (`SENDMESSAGE`).
    ///
    /// Returns `Ok` with either union variant for a 2xx response, and with
    /// the error variant for `success: 0` rejections delivered on 4xx/5xx
    /// HTTP statuses. Everything else is a fault:
    /// - [`SmsFlyError::Transport`] when no response arrived at all,
    /// - [`SmsFlyError::HttpStatus`] for a non-2xx status without a
    ///   `success: 0` body,
    /// - [`SmsFlyError::Parse`] for a 2xx status with an undecodable body.
    pub async fn send_message(
        &self,
        message: SendMessage,
    ) -> Result<ApiResponse<SendMessageResult>, SmsFlyError> {
        self.request(&message).await
    }

    /// One envelope, one POST, one decision. On a 2xx status the decoded
    /// envelope is the outcome, whichever variant it carries. On a non-2xx
    /// status only a decoded `success: 0` envelope is rescued as the error
    /// variant; anything else there, including a `success: 1` body, is an
    /// [`SmsFlyError::HttpStatus`] fault.
    async fn request<A: ApiAction>(
        &self,
        data: &A,
    ) -> Result<ApiResponse<A::Output>, SmsFlyError> {
        let body =
            crate::transport::encode_request_envelope(self.api_key.as_str(), A::KIND, data)
                .map_err(SmsFlyError::Encode)?;

        let response = self
            .http
            .post_json(&self.endpoint, body)
            .await
            .map_err(SmsFlyError::Transport)?;

        let decoded = crate::transport::decode_api_response::<A::Output>(&response.body);

        if (200..=299).contains(&response.status) {
            return decoded.map_err(|err| SmsFlyError::Parse(Box::new(err)));
        }

        match decoded {
            Ok(parsed @ ApiResponse::Error(_)) => Ok(parsed),
            Ok(ApiResponse::Success(_)) | Err(_) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                Err(SmsFlyError::HttpStatus {
                    status: response.status,
                    body,
                })
            }
        }
    }
}
