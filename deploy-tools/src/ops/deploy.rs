// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Single contract deployment with string constructor arguments.

use super::{DeploymentSummary, RunConfig};
use crate::{
    core::{
        artifact::resolve_artifact_path,
        deployment::{ConstructorArgs, Deployer},
        endpoint::{select_endpoint, Probe},
        network::NETWORKS,
        signer::load_signer,
    },
    Result,
};

/// Deploys one supported contract, coercing `constructor_args` against its ABI.
pub async fn deploy(
    config: &RunConfig,
    private_key: Option<&str>,
    contract_name: &str,
    constructor_args: Vec<String>,
    probe: &impl Probe,
) -> Result<DeploymentSummary> {
    let signer = load_signer(private_key)?;
    resolve_artifact_path(&config.deployment.artifacts_root, contract_name)?;

    let connection =
        select_endpoint(config.endpoint.as_deref(), NETWORKS, &config.network, probe).await?;
    let mut deployer = Deployer::new(&connection, signer, config.deployment.clone());
    deployer
        .deploy_contract(contract_name, &ConstructorArgs::Text(constructor_args))
        .await?;

    Ok(DeploymentSummary::from_record(&deployer.into_record(), |name| name))
}
