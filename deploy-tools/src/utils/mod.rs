// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

pub mod color;
#[cfg(test)]
pub(crate) mod testing;

/// Placeholder marker left in unconfigured environment values.
pub const PLACEHOLDER_MARKER: &str = "PLACEHOLDER";

/// Whether a configured value is missing, blank, or still a placeholder.
pub fn is_unset(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(value) => value.trim().is_empty() || value.contains(PLACEHOLDER_MARKER),
    }
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}
