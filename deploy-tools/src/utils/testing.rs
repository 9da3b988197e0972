// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Fixtures shared by unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, SystemTime},
};

use alloy::{
    primitives::{Address, B256},
    providers::{mock::Asserter, Provider, ProviderBuilder},
    transports::TransportErrorKind,
};
use serde_json::{json, Value};

use crate::core::endpoint::{Connection, Probe, ProbeError};

/// Anvil's first development key.
pub const DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Creation code that returns an empty runtime.
pub const CREATION_CODE: &str = "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe";

/// Connection whose responses are scripted through the returned asserter.
pub fn mocked_connection(url: &str) -> (Connection, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased();
    (Connection::new(url, 31337, provider), asserter)
}

/// Probe that records every attempt and only answers for the listed urls.
pub struct RecordingProbe {
    live: Vec<String>,
    asserter: Asserter,
    attempts: Mutex<Vec<String>>,
}

impl RecordingProbe {
    pub fn live(urls: &[&str]) -> Self {
        Self {
            live: urls.iter().map(|url| url.to_string()).collect(),
            asserter: Asserter::new(),
            attempts: Mutex::default(),
        }
    }

    /// Asserter backing every connection handed out by this probe.
    pub fn asserter(&self) -> &Asserter {
        &self.asserter
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl Probe for RecordingProbe {
    async fn probe(&self, url: &str) -> Result<Connection, ProbeError> {
        self.attempts.lock().unwrap().push(url.to_string());
        if self.live.iter().any(|live| live == url) {
            let provider = ProviderBuilder::new()
                .connect_mocked_client(self.asserter.clone())
                .erased();
            Ok(Connection::new(url, 11_155_111, provider))
        } else {
            Err(TransportErrorKind::custom_str("connection refused").into())
        }
    }
}

pub fn artifact_json(abi: Value, bytecode: &str) -> Value {
    json!({
        "_format": "hh-sol-artifact-1",
        "abi": abi,
        "bytecode": bytecode,
        "deployedBytecode": "0x",
        "linkReferences": {},
        "deployedLinkReferences": {},
    })
}

/// ABI with a single constructor taking the given `(name, type)` inputs.
pub fn constructor_abi(inputs: &[(&str, &str)]) -> Value {
    let inputs: Vec<Value> = inputs
        .iter()
        .map(|(name, ty)| json!({ "name": name, "type": ty, "internalType": ty }))
        .collect();
    json!([{ "type": "constructor", "inputs": inputs, "stateMutability": "nonpayable" }])
}

/// Writes `<root>/<dir>/contracts/<sol>/<contract>.json`.
pub fn write_artifact(root: &Path, dir: &str, sol: &str, contract: &str, artifact: &Value) -> PathBuf {
    let contract_dir = root.join(dir).join("contracts").join(sol);
    fs::create_dir_all(&contract_dir).unwrap();
    let path = contract_dir.join(format!("{contract}.json"));
    fs::write(&path, serde_json::to_vec_pretty(artifact).unwrap()).unwrap();
    path
}

/// Sets a directory's modification time to `secs` after the epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
    fs::File::open(path).unwrap().set_modified(time).unwrap();
}

/// JSON-RPC receipt for a contract-creation transaction.
pub fn receipt_json(tx_hash: B256, contract_address: Option<Address>, success: bool) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0xbb),
        "blockNumber": "0x10",
        "from": DEV_ADDRESS,
        "to": null,
        "gasUsed": "0x186a0",
        "effectiveGasPrice": "0x3b9aca00",
        "contractAddress": contract_address,
        "type": "0x0",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x186a0",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
    })
}
