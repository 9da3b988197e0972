// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_tools::core::network::{NetworkProfile, NETWORKS};
use eyre::WrapErr;

use crate::error::DeployContractsResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the table as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(args: Args) -> DeployContractsResult {
    if args.json {
        let mut table = serde_json::Map::new();
        for (key, profile) in NETWORKS {
            let value = serde_json::to_value(profile).wrap_err("failed to serialize network table")?;
            table.insert(key.to_string(), value);
        }
        println!("{}", serde_json::Value::Object(table));
        return Ok(());
    }

    for (key, profile) in NETWORKS {
        print_network(key, profile);
    }
    Ok(())
}

fn print_network(key: &str, profile: &NetworkProfile) {
    let currency = &profile.native_currency;
    println!(
        "{key}: {} (chain id {}, {} {} with {} decimals)",
        profile.name, profile.chain_id, currency.name, currency.symbol, currency.decimals
    );
    println!("  explorer: {}", profile.explorer_url);
    for url in profile.rpc_candidates {
        println!("  rpc: {url}");
    }
}
