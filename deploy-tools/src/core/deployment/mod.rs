// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::BTreeMap,
    path::PathBuf,
    time::Duration,
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::{Address, TxHash, U256},
    signers::local::PrivateKeySigner,
    transports::{RpcError, TransportErrorKind},
};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::{load_contract, ArtifactError},
        endpoint::Connection,
        network::{self, NETWORKS},
    },
    utils::color::{Color, DebugColor},
};
use request::{wait_for_receipt, DeploymentRequest};

pub mod request;

/// Default upper bound on waiting for a deployment receipt.
pub const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(600);

/// Interval between receipt polls.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, TypedBuilder)]
pub struct DeploymentConfig {
    /// Directory containing the `artifacts-*` build output.
    #[builder(setter(into))]
    pub artifacts_root: PathBuf,
    /// `None` waits for the receipt indefinitely.
    #[builder(default = Some(DEFAULT_RECEIPT_TIMEOUT))]
    pub receipt_timeout: Option<Duration>,
    #[builder(default = RECEIPT_POLL_INTERVAL)]
    pub poll_interval: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("not connected to an Ethereum node at {url}")]
    NotConnected { url: String },
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("failed to sign deployment tx: {0}")]
    Signing(String),
    #[error(
        "not enough funds in account {} to pay for deployment\n         balance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .cost).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no receipt for tx {tx_hash} within {timeout:?}")]
    ReceiptTimeout { tx_hash: TxHash, timeout: Duration },
    #[error("deployment of {contract} failed: no address returned in receipt of tx {tx_hash}")]
    NoAddressInReceipt { contract: String, tx_hash: TxHash },
}

/// Constructor arguments for a deployment.
#[derive(Debug, Clone)]
pub enum ConstructorArgs {
    /// Already typed values.
    Values(Vec<DynSolValue>),
    /// Strings coerced against the constructor's parameter types.
    Text(Vec<String>),
}

impl Default for ConstructorArgs {
    fn default() -> Self {
        Self::Values(Vec::new())
    }
}

impl ConstructorArgs {
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Text(args) => args.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// ABI-encodes the arguments for the constructor in `abi`.
    pub fn encode(&self, abi: &JsonAbi) -> Result<Vec<u8>, DeploymentError> {
        let Some(constructor) = abi.constructor() else {
            if self.is_empty() {
                return Ok(Vec::new());
            }
            return Err(DeploymentError::InvalidConstructor(format!(
                "contract has no constructor but {} arguments were given",
                self.len()
            )));
        };
        if constructor.inputs.len() != self.len() {
            return Err(DeploymentError::InvalidConstructor(format!(
                "mismatch number of constructor arguments (want ({}) ({}); got {})",
                constructor
                    .inputs
                    .iter()
                    .map(|param| param.ty.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
                constructor.inputs.len(),
                self.len(),
            )));
        }

        let values = match self {
            Self::Values(values) => values.clone(),
            Self::Text(args) => {
                let mut values = Vec::with_capacity(args.len());
                for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
                    let ty = param.resolve().map_err(|err| {
                        DeploymentError::InvalidConstructor(format!(
                            "could not resolve constructor arg type {}: {err}",
                            param.ty
                        ))
                    })?;
                    let value = ty.coerce_str(arg).map_err(|err| {
                        DeploymentError::InvalidConstructor(format!(
                            "could not parse constructor arg {} as {}: {err}",
                            param.name, param.ty
                        ))
                    })?;
                    values.push(value);
                }
                values
            }
        };

        constructor
            .abi_encode_input(&values)
            .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))
    }
}

/// Addresses deployed during one run, by contract name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRecord(BTreeMap<String, Address>);

impl DeploymentRecord {
    pub fn insert(&mut self, contract_name: impl Into<String>, address: Address) {
        self.0.insert(contract_name.into(), address);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.0.iter().map(|(name, address)| (name.as_str(), *address))
    }
}

/// Deploys contracts one at a time over a single connection.
pub struct Deployer<'a> {
    connection: &'a Connection,
    signer: PrivateKeySigner,
    config: DeploymentConfig,
    record: DeploymentRecord,
}

impl<'a> Deployer<'a> {
    pub fn new(connection: &'a Connection, signer: PrivateKeySigner, config: DeploymentConfig) -> Self {
        Self {
            connection,
            signer,
            config,
            record: DeploymentRecord::default(),
        }
    }

    pub fn into_record(self) -> DeploymentRecord {
        self.record
    }

    /// Deploys a supported contract and records its address.
    ///
    /// The artifact is loaded before anything is sent to the node, and nothing is recorded unless
    /// the receipt carries a contract address.
    pub async fn deploy_contract(
        &mut self,
        contract_name: &str,
        args: &ConstructorArgs,
    ) -> Result<Address, DeploymentError> {
        let artifact = load_contract(&self.config.artifacts_root, contract_name)?;

        if !self.connection.is_live().await {
            return Err(DeploymentError::NotConnected {
                url: self.connection.url().to_string(),
            });
        }

        let from_address = self.signer.address();
        info!(@grey, "deploying {} from account: {}", contract_name, from_address.debug_lavender());

        let mut code = artifact.bytecode.to_vec();
        code.extend(args.encode(&artifact.abi)?);

        let provider = self.connection.provider();
        let tx_hash = DeploymentRequest::new(from_address, code.into())
            .send(&self.signer, provider)
            .await?;
        info!(@grey, "transaction sent for {}: {}", contract_name, tx_hash.debug_lavender());

        let receipt = wait_for_receipt(
            tx_hash,
            self.config.poll_interval,
            self.config.receipt_timeout,
            provider,
        )
        .await?;
        let address = receipt
            .contract_address
            .ok_or_else(|| DeploymentError::NoAddressInReceipt {
                contract: contract_name.to_string(),
                tx_hash,
            })?;

        info!(@mint, "{} deployed to: {}", contract_name, address);
        debug!(@grey, "gas used: {}", receipt.gas_used);
        if let Some((_, profile)) = network::by_chain_id(NETWORKS, self.connection.chain_id()) {
            info!(@grey, "view on {}: {}", profile.name, profile.address_url(address));
        }

        self.record.insert(contract_name, address);
        Ok(address)
    }
}
