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

//! Welcome banner rendering.
//!
//! Formats a [`NodeStatus`] into the fixed line layout the console prints
//! at startup, and drives the whole fetch-render-print sequence behind a
//! single failure boundary.

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use log::warn;
use thiserror::Error;

use crate::status::{fetch_status, NodeStatus, StatusSource, Unavailable};

/// Difficulty values below this render as a signer index.
const SIGNER_INDEX_LIMIT: u64 = 1000;

/// Errors covered by the welcome boundary.
#[derive(Debug, Error)]
enum WelcomeError {
    #[error("{0}")]
    Status(#[from] Unavailable),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Display name for a proof-of-work algorithm version.
///
/// Unrecognized versions, including zero and negatives, map to
/// `"Unknown"`.
#[must_use]
pub fn algorithm_name(version: i64) -> &'static str {
    match version {
        1 => "Ethash",
        2 => "Argon2id",
        3 => "Argon2id-B",
        4 => "Argon2id-C",
        _ => "Unknown",
    }
}

fn format_timestamp(seconds: u64) -> String {
    let local = i64::try_from(seconds)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single());
    match local {
        Some(datetime) => datetime.format("%a %b %d %Y %H:%M:%S %:z").to_string(),
        None => seconds.to_string(),
    }
}

/// Render the banner lines for a status snapshot.
///
/// Line order and prefixes are fixed. The datadir line appears only when
/// the status carries a data directory; an absent coinbase renders as the
/// literal `undefined`.
#[must_use]
pub fn render_banner(status: &NodeStatus) -> Vec<String> {
    let head = &status.head;
    let mut lines = vec![
        format!("instance:   {}", status.instance),
        format!(
            "at block:   {} ({})",
            head.number,
            format_timestamp(head.timestamp)
        ),
        format!("    head:   {}", head.hash),
        format!(
            "coinbase:   {}",
            status.coinbase.as_deref().unwrap_or("undefined")
        ),
        format!("  gasPrice: {} gigawei", status.gas_price_gwei),
        format!("  gasLimit: {} units", head.gas_limit),
    ];

    if head.difficulty < SIGNER_INDEX_LIMIT {
        lines.push(format!("nextsigner: {}", head.difficulty));
    } else {
        lines.push(format!(
            "difficulty: {:.2} MH",
            head.difficulty as f64 / 1_000_000.0
        ));
    }

    lines.push(format!("   chainId: {}", status.chain_id));
    lines.push(format!(
        "      algo: {} ({})",
        head.version,
        algorithm_name(head.version as i64)
    ));

    if let Some(data_dir) = &status.data_dir {
        lines.push(format!("   datadir: {}", data_dir));
    }

    lines
}

fn write_banner(source: &dyn StatusSource, out: &mut dyn Write) -> Result<(), WelcomeError> {
    let status = fetch_status(source)?;
    for line in render_banner(&status) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the welcome banner for a node.
///
/// Never fails: any error escaping the fetch-and-render sequence collapses
/// to a single `error in welcome:` line on the same sink. Nothing is
/// written until the status fetch has completed, so a failed fetch never
/// leaves a half-printed banner.
pub fn print_welcome(source: &dyn StatusSource, out: &mut dyn Write) {
    if let Err(e) = write_banner(source, out) {
        if writeln!(out, "error in welcome: {}", e).is_err() {
            warn!("error in welcome: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockHeader;
    use crate::status::AdminSource;

    fn sample_status() -> NodeStatus {
        NodeStatus {
            instance: "v1.0".to_string(),
            chain_id: 3,
            gas_price_gwei: 1.0,
            coinbase: Some("0xabc".to_string()),
            head: BlockHeader {
                number: 42,
                hash: "0xdead".to_string(),
                timestamp: 1_700_000_000,
                gas_limit: 8_000_000,
                difficulty: 2_000_000,
                version: 2,
            },
            data_dir: None,
            client_version: None,
        }
    }

    struct CannedSource(NodeStatus);

    impl StatusSource for CannedSource {
        fn node_version(&self) -> Result<String, Unavailable> {
            Ok(self.0.instance.clone())
        }

        fn chain_id_hex(&self) -> Result<String, Unavailable> {
            Ok(format!("{:#x}", self.0.chain_id))
        }

        fn gas_price_wei(&self) -> Result<u128, Unavailable> {
            Ok((self.0.gas_price_gwei * 1e9) as u128)
        }

        fn coinbase(&self) -> Result<Option<String>, Unavailable> {
            Ok(self.0.coinbase.clone())
        }

        fn latest_block(&self) -> Result<BlockHeader, Unavailable> {
            Ok(self.0.head.clone())
        }

        fn admin(&self) -> Option<&dyn AdminSource> {
            None
        }
    }

    struct DownSource;

    impl StatusSource for DownSource {
        fn node_version(&self) -> Result<String, Unavailable> {
            Err(Unavailable::new("connection refused"))
        }

        fn chain_id_hex(&self) -> Result<String, Unavailable> {
            Err(Unavailable::new("connection refused"))
        }

        fn gas_price_wei(&self) -> Result<u128, Unavailable> {
            Err(Unavailable::new("connection refused"))
        }

        fn coinbase(&self) -> Result<Option<String>, Unavailable> {
            Err(Unavailable::new("connection refused"))
        }

        fn latest_block(&self) -> Result<BlockHeader, Unavailable> {
            Err(Unavailable::new("connection refused"))
        }

        fn admin(&self) -> Option<&dyn AdminSource> {
            None
        }
    }

    #[test]
    fn test_algorithm_name_known_versions() {
        assert_eq!(algorithm_name(1), "Ethash");
        assert_eq!(algorithm_name(2), "Argon2id");
        assert_eq!(algorithm_name(3), "Argon2id-B");
        assert_eq!(algorithm_name(4), "Argon2id-C");
    }

    #[test]
    fn test_algorithm_name_unknown_versions() {
        assert_eq!(algorithm_name(0), "Unknown");
        assert_eq!(algorithm_name(5), "Unknown");
        assert_eq!(algorithm_name(-1), "Unknown");
        assert_eq!(algorithm_name(i64::MAX), "Unknown");
        assert_eq!(algorithm_name(i64::MIN), "Unknown");
    }

    #[test]
    fn test_low_difficulty_renders_signer_index() {
        let mut status = sample_status();
        status.head.difficulty = 999;
        let lines = render_banner(&status);
        assert!(lines.contains(&"nextsigner: 999".to_string()));
    }

    #[test]
    fn test_threshold_difficulty_renders_megahash() {
        let mut status = sample_status();
        status.head.difficulty = 1000;
        let lines = render_banner(&status);
        assert!(lines.contains(&"difficulty: 0.00 MH".to_string()));
    }

    #[test]
    fn test_difficulty_scales_to_megahash() {
        let mut status = sample_status();
        status.head.difficulty = 5_000_000;
        let lines = render_banner(&status);
        assert!(lines.contains(&"difficulty: 5.00 MH".to_string()));
    }

    #[test]
    fn test_missing_coinbase_renders_undefined() {
        let mut status = sample_status();
        status.coinbase = None;
        let lines = render_banner(&status);
        assert!(lines.contains(&"coinbase:   undefined".to_string()));
    }

    #[test]
    fn test_algo_line_pairs_version_and_name() {
        let lines = render_banner(&sample_status());
        assert!(lines.contains(&"      algo: 2 (Argon2id)".to_string()));
    }

    #[test]
    fn test_integral_gas_price_renders_bare() {
        let lines = render_banner(&sample_status());
        assert!(lines.contains(&"  gasPrice: 1 gigawei".to_string()));
    }

    #[test]
    fn test_fractional_gas_price_keeps_fraction() {
        let mut status = sample_status();
        status.gas_price_gwei = 0.5;
        let lines = render_banner(&status);
        assert!(lines.contains(&"  gasPrice: 0.5 gigawei".to_string()));
    }

    #[test]
    fn test_datadir_line_only_when_present() {
        let mut status = sample_status();
        let without = render_banner(&status);
        assert!(!without.iter().any(|line| line.starts_with("   datadir:")));

        status.data_dir = Some("/home/aqua/.aquachain".to_string());
        let with = render_banner(&status);
        assert!(with.contains(&"   datadir: /home/aqua/.aquachain".to_string()));
    }

    #[test]
    fn test_banner_line_order() {
        let lines = render_banner(&sample_status());
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "instance:   v1.0");
        assert!(lines[1].starts_with("at block:   42 ("));
        assert_eq!(lines[2], "    head:   0xdead");
        assert_eq!(lines[3], "coinbase:   0xabc");
        assert_eq!(lines[4], "  gasPrice: 1 gigawei");
        assert_eq!(lines[5], "  gasLimit: 8000000 units");
        assert_eq!(lines[6], "difficulty: 2.00 MH");
        assert_eq!(lines[7], "   chainId: 3");
        assert_eq!(lines[8], "      algo: 2 (Argon2id)");
    }

    #[test]
    fn test_print_welcome_happy_path() {
        let source = CannedSource(sample_status());
        let mut out = Vec::new();
        print_welcome(&source, &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("instance:   v1.0"));
        assert!(text.contains("at block:   42 ("));
        assert!(text.contains("  gasPrice: 1 gigawei"));
        assert!(text.contains("      algo: 2 (Argon2id)"));
        assert!(!text.contains("error in welcome"));
    }

    #[test]
    fn test_print_welcome_failure_collapses_to_one_line() {
        let mut out = Vec::new();
        print_welcome(&DownSource, &mut out);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "error in welcome: connection refused\n");
    }
}
