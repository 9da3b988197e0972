// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{primitives::FixedBytes, signers::local::PrivateKeySigner};

use crate::utils::{decode0x, is_unset};

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("private key is missing or a placeholder; cannot sign transactions")]
    MissingKey,
    #[error("invalid private key: {0}")]
    InvalidKey(String),
}

/// Canonical `0x`-prefixed form of a hex private key.
pub fn normalize_key(raw: &str) -> String {
    let key = raw.trim();
    if key.starts_with("0x") {
        key.to_string()
    } else {
        format!("0x{key}")
    }
}

/// Builds a local signer from a configured private key.
pub fn load_signer(raw: Option<&str>) -> Result<PrivateKeySigner, KeyError> {
    let raw = match raw {
        Some(raw) if !is_unset(Some(raw)) => raw,
        _ => return Err(KeyError::MissingKey),
    };
    let bytes = decode0x(normalize_key(raw)).map_err(|err| KeyError::InvalidKey(err.to_string()))?;
    if bytes.len() != 32 {
        return Err(KeyError::InvalidKey(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    let key: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    PrivateKeySigner::from_bytes(&key).map_err(|err| KeyError::InvalidKey(err.to_string()))
}
