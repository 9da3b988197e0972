// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Full deployment run: both contracts, all or nothing.

use alloy::{dyn_abi::DynSolValue, primitives::Address};

use super::{DeploymentSummary, RunConfig, API_KEY_GENERATOR, REVENUE_DISTRIBUTOR};
use crate::{
    core::{
        artifact::resolve_artifact_path,
        deployment::{ConstructorArgs, Deployer},
        endpoint::{select_endpoint, Probe},
        network::NETWORKS,
        settings::RawSettings,
    },
    Result,
};

/// Summary key of the API key generator address.
pub const API_KEY_GENERATOR_KEY: &str = "API_KEY_GENERATOR_ADDRESS";

/// Summary key of the revenue distributor address.
pub const REVENUE_DISTRIBUTOR_KEY: &str = "SMART_CONTRACT_ADDRESS";

/// Deploys the API key generator and the revenue distributor.
///
/// Settings and artifacts are checked before any endpoint is contacted. Any failure aborts the
/// run and no summary is produced.
pub async fn run(
    config: &RunConfig,
    settings: &RawSettings,
    price_feed: Address,
    probe: &impl Probe,
) -> Result<DeploymentSummary> {
    let settings = settings.validate()?;
    for contract in [API_KEY_GENERATOR, REVENUE_DISTRIBUTOR] {
        resolve_artifact_path(&config.deployment.artifacts_root, contract)?;
    }

    let connection =
        select_endpoint(config.endpoint.as_deref(), NETWORKS, &config.network, probe).await?;
    let mut deployer = Deployer::new(
        &connection,
        settings.signer.clone(),
        config.deployment.clone(),
    );

    info!(@blue, "deploying {}", API_KEY_GENERATOR);
    deployer
        .deploy_contract(
            API_KEY_GENERATOR,
            &ConstructorArgs::Values(vec![DynSolValue::Address(price_feed)]),
        )
        .await?;

    info!(@blue, "deploying {}", REVENUE_DISTRIBUTOR);
    let recipients = settings
        .recipients
        .iter()
        .copied()
        .map(DynSolValue::Address)
        .collect();
    deployer
        .deploy_contract(
            REVENUE_DISTRIBUTOR,
            &ConstructorArgs::Values(vec![
                DynSolValue::Array(recipients),
                DynSolValue::Address(settings.gas_wallet),
                DynSolValue::Address(settings.token_address),
            ]),
        )
        .await?;

    Ok(DeploymentSummary::from_record(&deployer.into_record(), summary_key))
}

/// Name the calling process expects for a deployed contract's address.
fn summary_key(contract_name: &str) -> &str {
    match contract_name {
        API_KEY_GENERATOR => API_KEY_GENERATOR_KEY,
        REVENUE_DISTRIBUTOR => REVENUE_DISTRIBUTOR_KEY,
        other => other,
    }
}
