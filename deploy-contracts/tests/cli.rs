// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Exercises the `deploy-contracts` binary, against a scripted JSON-RPC node where a run gets as
//! far as deploying.

use std::{
    fs,
    path::Path,
    process::Output,
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc,
    },
};

use alloy::primitives::{Address, B256};
use assert_cmd::Command;
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;

// Well-known development key, never used on a real network.
const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const TOKEN: &str = "0x90F79bf6EB2c4f870365E785982E1f101E93b906";
const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
// Nothing listens on port 1, so any accidental probe fails fast.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

/// Creation code that returns an empty runtime.
const CREATION_CODE: &str = "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe";

/// Answers the calls a deployment makes. The n-th submitted transaction gets hash
/// `repeat_byte(n + 1)` and creates a contract at `repeat_byte(0xa0 + n)`.
#[derive(Default)]
struct ScriptedNode {
    sent: AtomicU8,
}

impl ScriptedNode {
    fn answer(&self, method: &str, params: &Value) -> Result<Value, String> {
        let result = match method {
            "eth_chainId" => json!("0xaa36a7"),
            "eth_gasPrice" => json!("0x3b9aca00"),
            "eth_getTransactionCount" => json!(format!("{:#x}", self.sent.load(Ordering::SeqCst))),
            "eth_estimateGas" => json!("0x30d40"),
            "eth_getBalance" => json!("0xde0b6b3a7640000"),
            "eth_sendRawTransaction" => json!(tx_hash(self.sent.fetch_add(1, Ordering::SeqCst))),
            "eth_getTransactionReceipt" => {
                let hash: B256 = serde_json::from_value(params[0].clone()).map_err(|err| err.to_string())?;
                receipt(hash, deployed_address(hash[0] - 1))
            }
            other => return Err(format!("unsupported method {other}")),
        };
        Ok(result)
    }
}

async fn rpc(State(node): State<Arc<ScriptedNode>>, Json(request): Json<Value>) -> Json<Value> {
    let method = request["method"].as_str().unwrap_or_default();
    let response = match node.answer(method, &request["params"]) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }),
        Err(message) => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "error": { "code": -32601, "message": message },
        }),
    };
    Json(response)
}

/// Serves a [`ScriptedNode`] on a background thread and returns its url.
fn spawn_node() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    listener.set_nonblocking(true).unwrap();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let router = Router::new()
                .route("/", post(rpc))
                .with_state(Arc::new(ScriptedNode::default()));
            axum::serve(listener, router).await.unwrap();
        });
    });
    url
}

fn tx_hash(n: u8) -> B256 {
    B256::repeat_byte(n + 1)
}

fn deployed_address(n: u8) -> Address {
    Address::repeat_byte(0xa0 + n)
}

fn receipt(tx_hash: B256, contract_address: Address) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0xbb),
        "blockNumber": "0x10",
        "from": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
        "to": null,
        "gasUsed": "0x30d40",
        "effectiveGasPrice": "0x3b9aca00",
        "contractAddress": contract_address,
        "type": "0x0",
        "status": "0x1",
        "cumulativeGasUsed": "0x30d40",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
    })
}

fn write_artifact(root: &Path, sol: &str, contract: &str, inputs: &[(&str, &str)]) {
    let dir = root.join("artifacts-1").join("contracts").join(sol);
    fs::create_dir_all(&dir).unwrap();
    let inputs: Vec<Value> = inputs
        .iter()
        .map(|(name, ty)| json!({ "name": name, "type": ty, "internalType": ty }))
        .collect();
    let artifact = json!({
        "abi": [{ "type": "constructor", "inputs": inputs, "stateMutability": "nonpayable" }],
        "bytecode": CREATION_CODE,
    });
    fs::write(dir.join(format!("{contract}.json")), artifact.to_string()).unwrap();
}

fn compiled_artifacts() -> TempDir {
    let root = TempDir::new().unwrap();
    write_artifact(
        root.path(),
        "APIKeyGenerator.sol",
        "QuantumAPIKeyGenerator",
        &[("priceFeed", "address")],
    );
    write_artifact(
        root.path(),
        "RevenueDistributor.sol",
        "RevenueDistributor",
        &[("wallets", "address[]"), ("gasWallet", "address"), ("token", "address")],
    );
    root
}

fn deploy_contracts() -> Command {
    let mut cmd = Command::cargo_bin("deploy-contracts").unwrap();
    cmd.env_clear();
    cmd
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn run_in(root: &TempDir) -> Command {
    let mut cmd = deploy_contracts();
    cmd.arg("run")
        .arg("--artifacts-root")
        .arg(root.path())
        .env("RPC_URL", DEAD_ENDPOINT)
        .env("PRIVATE_KEY", DEV_PRIVATE_KEY)
        .env("USDT_TOKEN_ADDRESS", TOKEN);
    cmd
}

#[test]
fn networks_lists_known_networks() {
    let output = deploy_contracts().arg("networks").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sepolia"));
    assert!(stdout.contains("11155111"));
    assert!(stdout.contains("bsc-testnet"));
}

#[test]
fn networks_as_json() {
    let output = deploy_contracts()
        .args(["networks", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["sepolia"]["chain_id"], 11155111);
    assert_eq!(table["polygon"]["native_currency"]["symbol"], "MATIC");
}

#[test]
fn invalid_recipient_fails_without_output() {
    let root = TempDir::new().unwrap();
    let output = run_in(&root)
        .env(
            "USDT_WALLETS",
            format!("{RECIPIENT},  0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC\t,invalid"),
        )
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("invalid address in recipient wallet list: 'invalid'"));
}

#[test]
fn missing_private_key_fails() {
    let root = TempDir::new().unwrap();
    let output = run_in(&root)
        .env_remove("PRIVATE_KEY")
        .env("USDT_WALLETS", RECIPIENT)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("private key is missing"));
}

#[test]
fn placeholder_private_key_fails() {
    let root = TempDir::new().unwrap();
    let output = run_in(&root)
        .env("PRIVATE_KEY", "YOUR_PRIVATE_KEY_PLACEHOLDER")
        .env("USDT_WALLETS", RECIPIENT)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_artifacts_fail_before_deploying() {
    let root = TempDir::new().unwrap();
    let output = run_in(&root)
        .env("USDT_WALLETS", RECIPIENT)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("no artifact directory matching 'artifacts-*'"));
}

#[test]
fn deploy_rejects_unknown_contract() {
    let root = TempDir::new().unwrap();
    let output = deploy_contracts()
        .args(["deploy", "--contract", "Nonexistent", "--artifacts-root"])
        .arg(root.path())
        .env("RPC_URL", DEAD_ENDPOINT)
        .env("PRIVATE_KEY", DEV_PRIVATE_KEY)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr(&output);
    assert!(stderr.contains("unknown contract name: Nonexistent"));
    assert!(stderr.contains("QuantumAPIKeyGenerator"));
}

#[test]
fn run_prints_both_addresses() {
    let root = compiled_artifacts();
    let output = run_in(&root)
        .env("RPC_URL", spawn_node())
        .env("USDT_WALLETS", RECIPIENT)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let summary: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        summary,
        json!({
            "API_KEY_GENERATOR_ADDRESS": deployed_address(0).to_checksum(None),
            "SMART_CONTRACT_ADDRESS": deployed_address(1).to_checksum(None),
        })
    );
}

#[test]
fn mis_checksummed_price_feed_is_rejected() {
    let root = TempDir::new().unwrap();
    let output = run_in(&root)
        .env("USDT_WALLETS", RECIPIENT)
        .args(["--price-feed", "0x694AA1769357215Ee4EfB405d6fD64cbbE9d5f7B"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("invalid address"));
}

#[test]
fn usage_errors_exit_with_failure() {
    let output = deploy_contracts()
        .args(["run", "--price-feed", "nothex"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = deploy_contracts().arg("--help").output().unwrap();
    assert!(output.status.success());
}
