// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_tools::ops;

use crate::{
    common_args::{AuthArgs, DeploymentArgs, ProviderArgs},
    error::DeployContractsResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the contract to deploy.
    #[arg(long)]
    contract: String,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    deployment: DeploymentArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DeployContractsResult {
    let config = args.provider.run_config(&args.deployment);
    let summary = ops::deploy(
        &config,
        args.auth.private_key.as_deref(),
        &args.contract,
        args.constructor_args,
        &args.provider.probe(),
    )
    .await?;
    println!("{}", summary.to_json()?);
    Ok(())
}
