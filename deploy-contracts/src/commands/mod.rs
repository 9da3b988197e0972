// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::DeployContractsResult;

mod deploy;
mod networks;
mod run;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the API key generator and revenue distributor, then print their addresses
    #[clap(visible_alias = "r")]
    Run(run::Args),
    /// Deploy a single supported contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the known networks and their fallback endpoints
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> DeployContractsResult {
    match cmd {
        Command::Run(args) => run::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
