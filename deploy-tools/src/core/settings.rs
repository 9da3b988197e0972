// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Validation of the environment-provided deployment parameters.
//!
//! Everything here is checked before any network call is made, so a bad value never leaves a
//! half-finished deployment behind.

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use super::signer::{load_signer, KeyError};
use crate::utils::is_unset;

/// Deployment parameters as read from the environment.
#[derive(Clone, Default)]
pub struct RawSettings {
    pub private_key: Option<String>,
    /// Comma-separated recipient addresses.
    pub recipient_wallets: Option<String>,
    pub gas_wallet: Option<String>,
    pub token_address: Option<String>,
}

/// Validated deployment parameters.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub signer: PrivateKeySigner,
    pub recipients: Vec<Address>,
    pub gas_wallet: Address,
    pub token_address: Address,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("recipient wallet list is missing or a placeholder")]
    MissingRecipients,
    #[error("recipient wallet list contains no addresses")]
    EmptyRecipients,
    #[error("invalid address in recipient wallet list: '{0}'")]
    InvalidRecipient(String),
    #[error("token address is missing or a placeholder")]
    MissingToken,
    #[error("invalid token address: '{0}'")]
    InvalidToken(String),
    #[error("invalid address: '{0}'")]
    InvalidAddress(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    Key(#[from] KeyError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl RawSettings {
    pub fn validate(&self) -> Result<RunSettings, SettingsError> {
        let signer = load_signer(self.private_key.as_deref())?;

        let recipients = parse_recipients(self.recipient_wallets.as_deref())?;
        info!(@grey, "using recipient wallets: {:?}", recipients);

        let gas_wallet = self
            .gas_wallet
            .as_deref()
            .filter(|raw| !is_unset(Some(*raw)))
            .and_then(parse_address);
        let gas_wallet = match gas_wallet {
            Some(address) => {
                info!(@grey, "using gas wallet: {}", address);
                address
            }
            None => {
                warn!(@yellow, "gas wallet is missing, a placeholder, or invalid; deriving it from the private key");
                signer.address()
            }
        };

        let token_address = match self.token_address.as_deref() {
            Some(raw) if !is_unset(Some(raw)) => {
                parse_address(raw).ok_or_else(|| ValidationError::InvalidToken(raw.to_string()))?
            }
            _ => return Err(ValidationError::MissingToken.into()),
        };
        info!(@grey, "using token address: {}", token_address);

        Ok(RunSettings {
            signer,
            recipients,
            gas_wallet,
            token_address,
        })
    }
}

/// Parses an address, enforcing the EIP-55 checksum on mixed-case input.
pub fn parse_address(text: &str) -> Option<Address> {
    let text = text.trim();
    let digits = text.strip_prefix("0x").unwrap_or(text);
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        Address::parse_checksummed(format!("0x{digits}"), None).ok()
    } else {
        digits.parse().ok()
    }
}

/// [`parse_address`] with an error naming the rejected input.
pub fn try_parse_address(text: &str) -> Result<Address, ValidationError> {
    parse_address(text).ok_or_else(|| ValidationError::InvalidAddress(text.to_string()))
}

/// Parses a comma-separated address list; every entry must be an address.
pub fn parse_recipients(raw: Option<&str>) -> Result<Vec<Address>, ValidationError> {
    let raw = match raw {
        Some(raw) if !is_unset(Some(raw)) => raw,
        _ => return Err(ValidationError::MissingRecipients),
    };
    let entries: Vec<&str> = raw.split(',').map(str::trim).collect();
    if entries.iter().all(|entry| entry.is_empty()) {
        return Err(ValidationError::EmptyRecipients);
    }
    entries
        .into_iter()
        .map(|entry| parse_address(entry).ok_or_else(|| ValidationError::InvalidRecipient(entry.to_string())))
        .collect()
}
