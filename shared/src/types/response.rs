//! The uniform API response envelope

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard response envelope returned by every backend operation.
///
/// The shape is uniform regardless of operation: `{status, message, data,
/// meta}`. `data` carries the operation payload and serializes to `{}` for
/// operations that have none (see [`Empty`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub status: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Response payload
    pub data: T,

    /// Response metadata
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data,
            meta: Meta::default(),
        }
    }

    /// Map the payload to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            status: self.status,
            message: self.message,
            data: f(self.data),
            meta: self.meta,
        }
    }
}

impl ApiResponse<Empty> {
    /// Create a successful response with no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(message, Empty {})
    }

    /// Create a failed response with no payload
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: Empty {},
            meta: Meta::default(),
        }
    }
}

/// Empty payload, serialized as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Response metadata
///
/// Every field is optional so the default serializes to `{}`; responses that
/// must be indistinguishable from each other stay byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Additional metadata
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Meta {
    /// Attach a request ID for tracing
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
