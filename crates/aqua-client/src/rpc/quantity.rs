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

//! Hex quantity codec.
//!
//! Aquachain-style nodes encode unsigned integers as hexadecimal strings
//! with a `0x` prefix (`"0x2a"`). This module decodes them into native
//! integers and plugs into serde through a `deserialize_with` adapter.

use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors that can occur while decoding a hex quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty hex quantity")]
    Empty,

    #[error("invalid hex digit in quantity: {0}")]
    InvalidDigit(String),

    #[error("hex quantity out of range: {0}")]
    OutOfRange(String),
}

fn strip_radix_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn quantity_digits(input: &str) -> Result<&str, QuantityError> {
    let digits = strip_radix_prefix(input.trim());
    if digits.is_empty() {
        return Err(QuantityError::Empty);
    }
    // from_str_radix tolerates a leading sign; the wire grammar is digits only.
    if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) {
        return Err(QuantityError::InvalidDigit(input.to_string()));
    }
    Ok(digits)
}

/// Decode a hex quantity (`"0x2a"`, prefix optional) into a `u64`.
pub fn parse_u64(input: &str) -> Result<u64, QuantityError> {
    let digits = quantity_digits(input)?;
    u64::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => QuantityError::OutOfRange(input.to_string()),
        _ => QuantityError::InvalidDigit(input.to_string()),
    })
}

/// Decode a hex quantity into a `u128`. Wei amounts need the wider type.
pub fn parse_u128(input: &str) -> Result<u128, QuantityError> {
    let digits = quantity_digits(input)?;
    u128::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => QuantityError::OutOfRange(input.to_string()),
        _ => QuantityError::InvalidDigit(input.to_string()),
    })
}

/// Deserialize a hex quantity string into a `u64`.
pub fn u64_from_hex<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_u64(&raw).map_err(serde::de::Error::custom)
}
