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

//! Blocking HTTP transport.
//!
//! POSTs one JSON-RPC request per call to the node's HTTP endpoint. There
//! is no retry or reconnect logic; every call is one-shot and the caller
//! decides what a failure means.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::rpc::{ClientError, Request, Response, Transport};

/// Default HTTP RPC endpoint of a local node.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8543";

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Node endpoint URL.
    pub url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Blocking JSON-RPC transport over HTTP.
///
/// Request ids are allocated from a shared counter, so a transport can be
/// shared across calls without id reuse.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Build a transport for the given endpoint.
    pub fn new(config: &HttpConfig) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// The endpoint this transport talks to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn call(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = Request::new(id, method, params);
        debug!("rpc call {} (id {})", method, id);

        let body = self
            .client
            .post(&self.url)
            .json(&request)
            .send()?
            .error_for_status()?
            .text()?;

        let response: Response = serde_json::from_str(&body)?;
        response.into_result()
    }
}
