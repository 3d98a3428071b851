//! Transport layer: wire-format details of the request/response envelopes.

mod envelope;

pub use envelope::{decode_api_response, encode_request_envelope};
