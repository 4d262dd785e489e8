// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON-RPC 2.0 wire layer.
//!
//! This module provides the request/response envelope types, the client
//! error taxonomy, and the [`Transport`] trait that decouples the typed
//! client from any particular carrier. HTTP is the only carrier shipped;
//! IPC or WebSocket carriers would implement the same trait.

mod quantity;

pub use quantity::{parse_u128, parse_u64, u64_from_hex, QuantityError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during an RPC call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid hex quantity: {0}")]
    Quantity(#[from] QuantityError),

    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> Request<'a> {
    /// Build a versioned request for the given method and params.
    #[must_use]
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

/// The error object a node returns in place of a result.
#[derive(Debug, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

impl Response {
    /// Collapse the envelope into its result payload.
    ///
    /// A populated error object takes precedence over any result. A missing
    /// result decodes as JSON null, which some methods legitimately return.
    pub fn into_result(self) -> Result<Value, ClientError> {
        if let Some(err) = self.error {
            return Err(ClientError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// Carrier abstraction for JSON-RPC calls.
///
/// Implementations submit a single request and return the decoded result
/// payload, with the envelope already stripped.
pub trait Transport {
    /// Invoke `method` with `params` and return the raw result value.
    fn call(&self, method: &str, params: Value) -> Result<Value, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = Request::new(7, "aqua_gasPrice", json!([]));
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            json!({"jsonrpc": "2.0", "id": 7, "method": "aqua_gasPrice", "params": []})
        );
    }

    #[test]
    fn test_response_result() {
        let response: Response =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": "0x1"})).unwrap();
        assert_eq!(response.into_result().unwrap(), json!("0x1"));
    }

    #[test]
    fn test_response_error_wins_over_result() {
        let response: Response = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x1",
            "error": {"code": -32601, "message": "method not found"}
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, ClientError::Rpc { code: -32601, .. }));
    }

    #[test]
    fn test_response_missing_result_is_null() {
        let response: Response =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn test_rpc_error_message() {
        let err = ClientError::Rpc {
            code: -32601,
            message: "method not found".to_string(),
        };
        assert_eq!(err.to_string(), "rpc error -32601: method not found");
    }
}
