// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use deploy_tools::{
    core::settings::{try_parse_address, RawSettings},
    ops::{self, SEPOLIA_ETH_USD_PRICE_FEED},
};

use crate::{
    common_args::{AuthArgs, DeploymentArgs, ProviderArgs},
    error::DeployContractsResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Comma-separated addresses receiving distributed revenue
    #[arg(long, env = "USDT_WALLETS")]
    recipient_wallets: Option<String>,
    /// Wallet paying for gas; derived from the private key when unset or invalid
    #[arg(long, env = "GAS_WALLET")]
    gas_wallet: Option<String>,
    /// Address of the token being distributed
    #[arg(long, env = "USDT_TOKEN_ADDRESS")]
    token_address: Option<String>,
    /// Price feed passed to the API key generator
    #[arg(long, value_parser = try_parse_address, default_value_t = SEPOLIA_ETH_USD_PRICE_FEED)]
    price_feed: Address,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    deployment: DeploymentArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DeployContractsResult {
    let settings = RawSettings {
        private_key: args.auth.private_key,
        recipient_wallets: args.recipient_wallets,
        gas_wallet: args.gas_wallet,
        token_address: args.token_address,
    };
    let config = args.provider.run_config(&args.deployment);
    let summary = ops::run(&config, &settings, args.price_feed, &args.provider.probe()).await?;
    println!("{}", summary.to_json()?);
    Ok(())
}
