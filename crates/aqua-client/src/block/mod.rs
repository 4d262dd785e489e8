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

//! Head block decoding.
//!
//! Models the subset of an `aqua_getBlockByNumber` result the status
//! banner needs. All numeric fields arrive as hex quantities; unknown
//! keys in the result object are ignored.

use serde::Deserialize;

use crate::rpc::u64_from_hex;

/// Decoded head-block fields.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    /// Block height.
    #[serde(deserialize_with = "u64_from_hex")]
    pub number: u64,

    /// Block hash, as the node printed it.
    pub hash: String,

    /// Unix timestamp in seconds.
    #[serde(deserialize_with = "u64_from_hex")]
    pub timestamp: u64,

    /// Gas limit in units.
    #[serde(rename = "gasLimit", deserialize_with = "u64_from_hex")]
    pub gas_limit: u64,

    /// Mining difficulty, or the next signer index on chains where the
    /// field doubles as a round-robin position.
    #[serde(deserialize_with = "u64_from_hex")]
    pub difficulty: u64,

    /// Proof-of-work algorithm version. Headers that predate versioning
    /// omit the key, which decodes as 0.
    #[serde(default, deserialize_with = "u64_from_hex")]
    pub version: u64,
}
