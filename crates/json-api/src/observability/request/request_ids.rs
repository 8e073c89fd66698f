//! Request correlation ids.

use std::fmt::{Display, Formatter, Result as FmtResult};

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// The id a request is logged under, taken from the client or minted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    /// Use the client's id when it sent a non-blank one.
    pub(super) fn from_header(value: Option<String>) -> Self {
        match value.map(|value| value.trim().to_owned()) {
            Some(value) if !value.is_empty() => Self(value),
            _ => Self(Uuid::now_v7().to_string()),
        }
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    /// Copy the id onto the response so clients can quote it.
    pub(super) fn echo(&self, res: &mut Response) {
        match HeaderValue::from_str(&self.0) {
            Ok(value) => {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(source) => {
                warn!(request_id = %self, "request id is not a valid header value: {source}");
            }
        }
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
