// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use deploy_tools::{
    core::{
        deployment::DeploymentConfig,
        endpoint::HttpProbe,
        network::DEFAULT_NETWORK,
    },
    ops::RunConfig,
};

use crate::constants::{DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_RECEIPT_TIMEOUT_SECS};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Private key as a hex string, with or without 0x. Prefer the environment variable over the
    /// flag, which exposes your key to shell history
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct DeploymentArgs {
    /// Directory containing the `artifacts-*` build output
    #[arg(long, default_value = ".")]
    pub artifacts_root: PathBuf,
    /// Seconds to wait for each deployment receipt (0 waits indefinitely)
    #[arg(long, default_value_t = DEFAULT_RECEIPT_TIMEOUT_SECS)]
    pub receipt_timeout_secs: u64,
}

impl DeploymentArgs {
    pub fn config(&self) -> DeploymentConfig {
        let timeout = match self.receipt_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        DeploymentConfig::builder()
            .artifacts_root(self.artifacts_root.clone())
            .receipt_timeout(timeout)
            .build()
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint, tried before the network's fallback endpoints
    #[arg(short, long, env = "RPC_URL")]
    pub endpoint: Option<String>,
    /// Network whose endpoints are tried when the endpoint is missing or unreachable
    #[arg(long, default_value = DEFAULT_NETWORK)]
    pub network: String,
    /// Seconds allowed for each endpoint to answer the liveness probe
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_SECS)]
    pub probe_timeout_secs: u64,
}

impl ProviderArgs {
    pub fn probe(&self) -> HttpProbe {
        HttpProbe {
            timeout: Duration::from_secs(self.probe_timeout_secs),
        }
    }

    pub fn run_config(&self, deployment: &DeploymentArgs) -> RunConfig {
        RunConfig {
            endpoint: self.endpoint.clone(),
            network: self.network.clone(),
            deployment: deployment.config(),
        }
    }
}
