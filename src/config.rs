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

//! Application configuration management.
//!
//! This module handles persistent configuration storage using TOML format:
//! the node endpoint, the request timeout, and whether to probe the admin
//! namespace.

use aqua_client::DEFAULT_RPC_URL;
use serde::{Deserialize, Serialize};

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Configuration schema version for migrations
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// Node RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Query the admin namespace for datadir and node info
    #[serde(default = "default_true")]
    pub probe_admin: bool,
}

// Default value functions for serde
fn default_config_version() -> u32 {
    1
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            rpc_url: default_rpc_url(),
            timeout_secs: default_timeout_secs(),
            probe_admin: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, creating defaults on first run
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load("aquastatus", "config")
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store("aquastatus", "config", self)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<std::path::PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path("aquastatus", "config")
    }
}
