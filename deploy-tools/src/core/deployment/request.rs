// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract-creation transaction for a compiled artifact

use std::time::Duration;

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// Deployment transaction request for creation code (bytecode followed by encoded constructor
/// arguments).
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
}

impl DeploymentRequest {
    pub fn new(sender: Address, code: Bytes) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code),
        }
    }

    /// Fills chain id, gas price, nonce and gas limit from the node.
    ///
    /// Nothing is cached between requests, so this assumes a single sequential writer per
    /// account.
    pub async fn fill(
        self,
        sender: Address,
        provider: &impl Provider,
    ) -> Result<TransactionRequest, DeploymentError> {
        let chain_id = provider.get_chain_id().await?;
        let gas_price = provider.get_gas_price().await?;
        let nonce = provider.get_transaction_count(sender).await?;
        let tx = self
            .tx
            .with_chain_id(chain_id)
            .with_gas_price(gas_price)
            .with_nonce(nonce);
        let gas = provider.estimate_gas(tx.clone()).await?;
        debug!(@grey, "chain id {}, gas price {} wei, nonce {}, gas limit {}", chain_id, gas_price, nonce, gas);
        Ok(tx.with_gas_limit(gas))
    }

    /// Signs locally, submits the raw transaction and returns its hash.
    pub async fn send(
        self,
        signer: &PrivateKeySigner,
        provider: &impl Provider,
    ) -> Result<TxHash, DeploymentError> {
        let from_address = signer.address();
        let tx = self.fill(from_address, provider).await?;

        // check balance before signing
        let cost = U256::from(tx.gas.unwrap_or_default())
            * U256::from(tx.gas_price.unwrap_or_default());
        let balance = provider.get_balance(from_address).await?;
        if balance < cost {
            return Err(DeploymentError::NotEnoughFunds {
                from_address,
                balance,
                cost,
            });
        }

        let wallet = EthereumWallet::new(signer.clone());
        let envelope = tx
            .build(&wallet)
            .await
            .map_err(|err| DeploymentError::Signing(err.to_string()))?;
        let pending = provider.send_tx_envelope(envelope).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());
        Ok(tx_hash)
    }
}

/// Polls for the receipt of `tx_hash` until it exists, or until `timeout` if one is given.
pub async fn wait_for_receipt(
    tx_hash: TxHash,
    poll_interval: Duration,
    timeout: Option<Duration>,
    provider: &impl Provider,
) -> Result<TransactionReceipt, DeploymentError> {
    let receipt = match timeout {
        Some(timeout) => tokio::time::timeout(timeout, poll_receipt(tx_hash, poll_interval, provider))
            .await
            .map_err(|_| DeploymentError::ReceiptTimeout { tx_hash, timeout })??,
        None => poll_receipt(tx_hash, poll_interval, provider).await?,
    };
    if !receipt.status() {
        return Err(DeploymentError::Reverted { tx_hash });
    }
    Ok(receipt)
}

// Polls with plain `eth_getTransactionReceipt` calls instead of `PendingTransactionBuilder`
// watching, so the node sees exactly one request per poll and no block subscription.
async fn poll_receipt(
    tx_hash: TxHash,
    poll_interval: Duration,
    provider: &impl Provider,
) -> Result<TransactionReceipt, DeploymentError> {
    loop {
        if let Some(receipt) = provider.get_transaction_receipt(tx_hash).await? {
            return Ok(receipt);
        }
        tokio::time::sleep(poll_interval).await;
    }
}
