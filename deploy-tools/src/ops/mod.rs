// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment runs built from the core components.

use std::collections::BTreeMap;

use alloy::primitives::{address, Address};

use crate::core::deployment::{DeploymentConfig, DeploymentRecord};

pub use deploy::deploy;
pub use run::run;

mod deploy;
mod run;

/// Contract deployed first, with the price feed as its only argument.
pub const API_KEY_GENERATOR: &str = "QuantumAPIKeyGenerator";

/// Contract deployed second, with the validated wallet and token parameters.
pub const REVENUE_DISTRIBUTOR: &str = "RevenueDistributor";

/// Chainlink ETH/USD price feed on Sepolia.
pub const SEPOLIA_ETH_USD_PRICE_FEED: Address = address!("694AA1769357215Ee4efb405d6FD64CBbE9d5F7B");

/// Settings shared by every kind of run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Explicitly configured endpoint, tried before the network's candidates.
    pub endpoint: Option<String>,
    /// Network whose candidate endpoints are used as fallbacks.
    pub network: String,
    pub deployment: DeploymentConfig,
}

/// Deployed addresses keyed by the name the calling process expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentSummary(BTreeMap<String, Address>);

impl DeploymentSummary {
    /// Summary of every recorded deployment, keyed by `key(contract_name)`.
    pub fn from_record(record: &DeploymentRecord, key: impl Fn(&str) -> &str) -> Self {
        Self(
            record
                .iter()
                .map(|(name, address)| (key(name).to_string(), address))
                .collect(),
        )
    }

    /// Single-line JSON object with checksummed addresses.
    pub fn to_json(&self) -> crate::Result<String> {
        let map: BTreeMap<&str, String> = self
            .0
            .iter()
            .map(|(name, address)| (name.as_str(), address.to_checksum(None)))
            .collect();
        Ok(serde_json::to_string(&map)?)
    }
}
