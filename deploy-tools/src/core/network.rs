// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Static table of known networks and their candidate RPC endpoints.

use alloy::primitives::Address;
use serde::Serialize;

/// Network used for fallback endpoints when none is requested.
pub const DEFAULT_NETWORK: &str = "sepolia";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    pub chain_id: u64,
    pub name: &'static str,
    pub explorer_url: &'static str,
    /// Probed in order, first live endpoint wins.
    pub rpc_candidates: &'static [&'static str],
    pub native_currency: NativeCurrency,
}

impl NetworkProfile {
    /// Block explorer page for an address on this network.
    pub fn address_url(&self, address: Address) -> String {
        format!("{}/address/{address}", self.explorer_url.trim_end_matches('/'))
    }
}

/// Network key paired with its profile, in declaration order.
pub type NetworkTable = [(&'static str, NetworkProfile)];

pub static NETWORKS: &NetworkTable = &[
    (
        "sepolia",
        NetworkProfile {
            chain_id: 11_155_111,
            name: "Ethereum Sepolia",
            explorer_url: "https://sepolia.etherscan.io",
            rpc_candidates: &[
                "https://rpc.sepolia.org",
                "https://eth-sepolia.g.alchemy.com/v2/demo",
                "https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID",
                "https://ethereum-sepolia.publicnode.com",
            ],
            native_currency: NativeCurrency {
                name: "Sepolia Ether",
                symbol: "ETH",
                decimals: 18,
            },
        },
    ),
    (
        "polygon",
        NetworkProfile {
            chain_id: 137,
            name: "Polygon Mainnet",
            explorer_url: "https://polygonscan.com",
            rpc_candidates: &[
                "https://polygon-rpc.com",
                "https://rpc-mainnet.maticvigil.com",
                "https://nd-144-848-522.p2pify.com/8390b396e95c479e950882e37cf7135e",
            ],
            native_currency: NativeCurrency {
                name: "MATIC",
                symbol: "MATIC",
                decimals: 18,
            },
        },
    ),
    (
        "mumbai",
        NetworkProfile {
            chain_id: 80_001,
            name: "Polygon Mumbai",
            explorer_url: "https://mumbai.polygonscan.com",
            rpc_candidates: &[
                "https://rpc-mumbai.maticvigil.com",
                "https://polygon-mumbai.infura.io/v3/YOUR_INFURA_PROJECT_ID",
            ],
            native_currency: NativeCurrency {
                name: "MATIC",
                symbol: "MATIC",
                decimals: 18,
            },
        },
    ),
    (
        "bsc",
        NetworkProfile {
            chain_id: 56,
            name: "BNB Smart Chain",
            explorer_url: "https://bscscan.com",
            rpc_candidates: &[
                "https://bsc-dataseed.binance.org/",
                "https://bsc-dataseed1.defibit.io/",
            ],
            native_currency: NativeCurrency {
                name: "BNB",
                symbol: "BNB",
                decimals: 18,
            },
        },
    ),
    (
        "bsc-testnet",
        NetworkProfile {
            chain_id: 97,
            name: "BNB Testnet",
            explorer_url: "https://testnet.bscscan.com",
            rpc_candidates: &[
                "https://data-seed-prebsc-1-s1.binance.org:8545/",
                "https://data-seed-prebsc-2-s1.binance.org:8545/",
            ],
            native_currency: NativeCurrency {
                name: "BNB",
                symbol: "BNB",
                decimals: 18,
            },
        },
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("configuration for network '{key}' not found (known networks: {known})")]
    UnknownNetwork { key: String, known: String },
}

/// Looks up a network profile by key.
pub fn lookup<'a>(table: &'a NetworkTable, key: &str) -> Result<&'a NetworkProfile, NetworkError> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, profile)| profile)
        .ok_or_else(|| NetworkError::UnknownNetwork {
            key: key.to_string(),
            known: table
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Reverse lookup used to label whatever endpoint we ended up connected to.
pub fn by_chain_id(table: &NetworkTable, chain_id: u64) -> Option<(&'static str, &NetworkProfile)> {
    table
        .iter()
        .find(|(_, profile)| profile.chain_id == chain_id)
        .map(|(key, profile)| (*key, profile))
}
