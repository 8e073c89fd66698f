//! Request helper extensions.

use std::future::Future;

use salvo::{Request, oapi::extract::PathParam};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::validation::{self, ValidationError, ValidationReason};

use crate::errors::ApiError;

/// Read request bodies and query strings the way the handlers expect.
pub(crate) trait RequestExt {
    /// Parse a JSON object body into `T`.
    fn json_body_or_400<T>(&mut self) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send;

    /// Read a query parameter verbatim, if present.
    fn query_text(&self, key: &str) -> Option<String>;

    /// True when the query string names `key`, with or without a value.
    fn has_query(&self, key: &str) -> bool;
}

impl RequestExt for Request {
    fn json_body_or_400<T>(&mut self) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            let value = self
                .parse_json::<Value>()
                .await
                .map_err(|source| ApiError::bad_request(format!("invalid JSON body: {source}")))?;

            if !value.is_object() {
                return Err(ValidationError::new("value", ValidationReason::NotAnObject).into());
            }

            serde_json::from_value(value)
                .map_err(|source| ApiError::bad_request(format!("invalid JSON body: {source}")))
        }
    }

    fn query_text(&self, key: &str) -> Option<String> {
        self.queries().get(key).cloned()
    }

    fn has_query(&self, key: &str) -> bool {
        self.queries().contains_key(key)
    }
}

/// Identifiers taken from the path.
pub(crate) trait PathParamExt {
    /// Parse the segment as a UUID, answering 400 when it is not one.
    fn uuid_or_400(&self) -> Result<Uuid, ApiError>;
}

impl PathParamExt for PathParam<String> {
    fn uuid_or_400(&self) -> Result<Uuid, ApiError> {
        validation::identifier("id", self.as_str()).map_err(ApiError::from)
    }
}
