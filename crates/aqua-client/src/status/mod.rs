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

//! Node status assembly.
//!
//! [`fetch_status`] pulls the fields the welcome banner reports from a
//! [`StatusSource`] and assembles them into a [`NodeStatus`]. Optional
//! fields degrade to absent when their accessor fails; the chain id, gas
//! price, and head block are mandatory and propagate their failures to
//! the caller.

use log::warn;
use thiserror::Error;

use crate::block::BlockHeader;
use crate::rpc::parse_u64;

/// Wei per gigawei.
const WEI_PER_GWEI: f64 = 1e9;

/// A status accessor failed.
///
/// Carries only the displayable message; the cause taxonomy stays behind
/// the source boundary.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct Unavailable(pub String);

impl Unavailable {
    /// Wrap any displayable error.
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

/// Read access to the node fields the banner reports.
///
/// The library's [`NodeClient`](crate::NodeClient) implements this over
/// JSON-RPC; tests implement it with canned values.
pub trait StatusSource {
    /// Node software identifier (client version string).
    fn node_version(&self) -> Result<String, Unavailable>;

    /// Chain id as the node returns it, hex encoded.
    fn chain_id_hex(&self) -> Result<String, Unavailable>;

    /// Suggested gas price in wei.
    fn gas_price_wei(&self) -> Result<u128, Unavailable>;

    /// Configured mining/signing account, if any.
    fn coinbase(&self) -> Result<Option<String>, Unavailable>;

    /// The latest block header.
    fn latest_block(&self) -> Result<BlockHeader, Unavailable>;

    /// Admin surface, when the node exposes one.
    fn admin(&self) -> Option<&dyn AdminSource>;
}

/// Privileged fields only nodes with an admin namespace expose.
pub trait AdminSource {
    /// The node's data directory.
    fn data_dir(&self) -> Result<String, Unavailable>;

    /// The node's own name string from its node info record.
    fn node_name(&self) -> Result<String, Unavailable>;
}

/// Snapshot of node state for the welcome banner.
///
/// Built fresh on every fetch and never cached.
#[derive(Debug, Clone)]
pub struct NodeStatus {
    /// Node software identifier, or `"unknown"` if the node would not say.
    pub instance: String,

    /// Decoded chain id.
    pub chain_id: u64,

    /// Suggested gas price converted to gigawei.
    pub gas_price_gwei: f64,

    /// Mining/signing account, absent when the node has none.
    pub coinbase: Option<String>,

    /// Latest block header.
    pub head: BlockHeader,

    /// Node data directory, populated only through the admin surface.
    pub data_dir: Option<String>,

    /// Node name from the admin node info record. Carried for hosts that
    /// want it; the banner does not print it.
    pub client_version: Option<String>,
}

/// Assemble a [`NodeStatus`] from the given source.
///
/// The instance name and coinbase degrade on failure, each with a logged
/// diagnostic; admin fields degrade silently. The chain id, gas price,
/// and head block are mandatory and their failures propagate.
pub fn fetch_status(source: &dyn StatusSource) -> Result<NodeStatus, Unavailable> {
    let instance = match source.node_version() {
        Ok(version) => version,
        Err(e) => {
            warn!("error getting instance: {}", e);
            "unknown".to_string()
        }
    };

    let chain_id = parse_u64(&source.chain_id_hex()?).map_err(Unavailable::new)?;
    let gas_price_gwei = source.gas_price_wei()? as f64 / WEI_PER_GWEI;

    let coinbase = match source.coinbase() {
        Ok(coinbase) => coinbase,
        Err(e) => {
            warn!("getting coinbase: {}", e);
            None
        }
    };

    let head = source.latest_block()?;

    let (data_dir, client_version) = match source.admin() {
        Some(admin) => (admin.data_dir().ok(), admin.node_name().ok()),
        None => (None, None),
    };

    Ok(NodeStatus {
        instance,
        chain_id,
        gas_price_gwei,
        coinbase,
        head,
        data_dir,
        client_version,
    })
}
