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

//! Client library for Aquachain-style nodes.
//!
//! This library provides the pieces a console host needs to greet its user
//! with a node status banner. It supports multiple layers that can be used
//! independently or composed together:
//!
//! - **RPC layer**: JSON-RPC 2.0 envelope, hex quantity codec, and the
//!   [`Transport`] trait (HTTP shipped, other carriers pluggable)
//! - **Client layer**: [`NodeClient`] with one typed accessor per RPC call
//! - **Status layer**: [`NodeStatus`] assembly with per-field degradation
//! - **Banner layer**: fixed-format welcome banner rendering and printing
//!
//! # Quick Start
//!
//! Use [`NodeClient`] with [`print_welcome`] for full-stack operation:
//!
//! ```no_run
//! use aqua_client::{ClientConfig, NodeClient};
//!
//! fn main() -> Result<(), aqua_client::ClientError> {
//!     let client = NodeClient::connect(ClientConfig {
//!         url: "http://127.0.0.1:8543".to_string(),
//!         ..Default::default()
//!     })?;
//!
//!     let mut stdout = std::io::stdout();
//!     aqua_client::print_welcome(&client, &mut stdout);
//!     Ok(())
//! }
//! ```
//!
//! # Using Individual Layers
//!
//! The typed client works without the banner:
//!
//! ```no_run
//! use aqua_client::{ClientConfig, NodeClient};
//!
//! # fn main() -> Result<(), aqua_client::ClientError> {
//! let client = NodeClient::connect(ClientConfig::default())?;
//! let head = client.latest_block()?;
//! println!("block {} gas limit {}", head.number, head.gas_limit);
//! # Ok(())
//! # }
//! ```
//!
//! And the banner renders from any [`StatusSource`], so hosts with their
//! own node plumbing only implement the trait:
//!
//! ```
//! use aqua_client::{render_banner, BlockHeader, NodeStatus};
//!
//! let status = NodeStatus {
//!     instance: "Aquachain/v1.7.18/linux-amd64/go1.21".to_string(),
//!     chain_id: 61717561,
//!     gas_price_gwei: 1.0,
//!     coinbase: None,
//!     head: BlockHeader {
//!         number: 42,
//!         hash: "0xdead".to_string(),
//!         timestamp: 1_700_000_000,
//!         gas_limit: 8_000_000,
//!         difficulty: 2_000_000,
//!         version: 2,
//!     },
//!     data_dir: None,
//!     client_version: None,
//! };
//!
//! for line in render_banner(&status) {
//!     println!("{}", line);
//! }
//! ```

pub mod banner;
pub mod block;
pub mod http;
pub mod rpc;
pub mod status;

use std::time::Duration;

use serde_json::{json, Value};

pub use banner::{algorithm_name, print_welcome, render_banner};
pub use block::BlockHeader;
pub use http::{HttpConfig, HttpTransport, DEFAULT_RPC_URL};
pub use rpc::{ClientError, Transport};
pub use status::{fetch_status, AdminSource, NodeStatus, StatusSource, Unavailable};

/// Configuration for the full-stack client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Node endpoint URL.
    pub url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether to query the admin namespace for datadir and node info.
    pub probe_admin: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            timeout: Duration::from_secs(10),
            probe_admin: true,
        }
    }
}

/// Typed JSON-RPC client for an Aquachain-style node.
///
/// One method per RPC call the status banner needs. Implements
/// [`StatusSource`], so it plugs straight into [`print_welcome`].
#[derive(Debug)]
pub struct NodeClient<T: Transport = HttpTransport> {
    transport: T,
    probe_admin: bool,
}

impl NodeClient<HttpTransport> {
    /// Connect over HTTP with the given configuration.
    ///
    /// This only builds the transport; no request is issued until an
    /// accessor is called.
    pub fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&HttpConfig {
            url: config.url,
            timeout: config.timeout,
        })?;
        Ok(Self {
            transport,
            probe_admin: config.probe_admin,
        })
    }
}

impl<T: Transport> NodeClient<T> {
    /// Wrap an existing transport.
    #[must_use]
    pub fn with_transport(transport: T, probe_admin: bool) -> Self {
        Self {
            transport,
            probe_admin,
        }
    }

    /// `web3_clientVersion`: the node software identifier.
    pub fn client_version(&self) -> Result<String, ClientError> {
        self.call_string("web3_clientVersion")
    }

    /// `aqua_chainId`: the chain id, hex encoded as the node returns it.
    pub fn chain_id_hex(&self) -> Result<String, ClientError> {
        self.call_string("aqua_chainId")
    }

    /// `aqua_gasPrice`: the suggested gas price in wei.
    pub fn gas_price_wei(&self) -> Result<u128, ClientError> {
        let hex = self.call_string("aqua_gasPrice")?;
        Ok(rpc::parse_u128(&hex)?)
    }

    /// `aqua_coinbase`: the mining/signing account, if one is configured.
    pub fn coinbase(&self) -> Result<Option<String>, ClientError> {
        match self.transport.call("aqua_coinbase", json!([]))? {
            Value::Null => Ok(None),
            Value::String(address) => Ok(Some(address)),
            other => Err(ClientError::InvalidResponse(format!(
                "aqua_coinbase returned a non-address result: {}",
                other
            ))),
        }
    }

    /// `aqua_getBlockByNumber("latest", false)`: the latest block header.
    pub fn latest_block(&self) -> Result<BlockHeader, ClientError> {
        let value = self
            .transport
            .call("aqua_getBlockByNumber", json!(["latest", false]))?;
        if value.is_null() {
            return Err(ClientError::InvalidResponse(
                "aqua_getBlockByNumber returned null for latest".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `admin_datadir`: the node's data directory.
    pub fn data_dir(&self) -> Result<String, ClientError> {
        self.call_string("admin_datadir")
    }

    /// `admin_nodeInfo`: the node's own name string.
    pub fn node_name(&self) -> Result<String, ClientError> {
        let value = self.transport.call("admin_nodeInfo", json!([]))?;
        value
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::InvalidResponse("admin_nodeInfo lacks a name field".to_string())
            })
    }

    fn call_string(&self, method: &str) -> Result<String, ClientError> {
        match self.transport.call(method, json!([]))? {
            Value::String(text) => Ok(text),
            other => Err(ClientError::InvalidResponse(format!(
                "{} returned a non-string result: {}",
                method, other
            ))),
        }
    }
}

// Method lookup prefers the inherent accessors, so the same-named calls
// below are not recursive.
impl<T: Transport> StatusSource for NodeClient<T> {
    fn node_version(&self) -> Result<String, Unavailable> {
        self.client_version().map_err(Unavailable::new)
    }

    fn chain_id_hex(&self) -> Result<String, Unavailable> {
        self.chain_id_hex().map_err(Unavailable::new)
    }

    fn gas_price_wei(&self) -> Result<u128, Unavailable> {
        self.gas_price_wei().map_err(Unavailable::new)
    }

    fn coinbase(&self) -> Result<Option<String>, Unavailable> {
        self.coinbase().map_err(Unavailable::new)
    }

    fn latest_block(&self) -> Result<BlockHeader, Unavailable> {
        self.latest_block().map_err(Unavailable::new)
    }

    fn admin(&self) -> Option<&dyn AdminSource> {
        if self.probe_admin {
            Some(self)
        } else {
            None
        }
    }
}

impl<T: Transport> AdminSource for NodeClient<T> {
    fn data_dir(&self) -> Result<String, Unavailable> {
        self.data_dir().map_err(Unavailable::new)
    }

    fn node_name(&self) -> Result<String, Unavailable> {
        self.node_name().map_err(Unavailable::new)
    }
}
