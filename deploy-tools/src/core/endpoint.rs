// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Picks the RPC endpoint a run is bound to.

use std::{fmt, time::Duration};

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::{RpcError, TransportErrorKind},
};

use super::network::{self, NetworkError, NetworkTable};
use crate::utils::{color::DebugColor, is_unset};

/// Default time allowed for a single liveness probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider bound to one RPC endpoint for the lifetime of a run.
#[derive(Clone)]
pub struct Connection {
    url: String,
    chain_id: u64,
    provider: DynProvider,
}

impl Connection {
    pub fn new(url: impl Into<String>, chain_id: u64, provider: DynProvider) -> Self {
        Self {
            url: url.into(),
            chain_id,
            provider,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Chain id reported by the endpoint when it was probed.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Whether the endpoint still answers JSON-RPC calls.
    pub async fn is_live(&self) -> bool {
        self.provider.get_chain_id().await.is_ok()
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("url", &self.url)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Liveness check for a candidate endpoint.
#[allow(async_fn_in_trait)]
pub trait Probe {
    /// Connects to `url` and returns a bound connection if it responds.
    async fn probe(&self, url: &str) -> Result<Connection, ProbeError>;
}

/// Probes endpoints over HTTP by asking for the chain id.
#[derive(Debug, Clone, Copy)]
pub struct HttpProbe {
    pub timeout: Duration,
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl Probe for HttpProbe {
    async fn probe(&self, url: &str) -> Result<Connection, ProbeError> {
        let provider = ProviderBuilder::new().connect(url).await?.erased();
        let chain_id = tokio::time::timeout(self.timeout, provider.get_chain_id())
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout))??;
        Ok(Connection::new(url, chain_id, provider))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("no live endpoint for {network} after trying {attempted} candidates")]
    NoLiveEndpoint { network: String, attempted: usize },
}

/// Selects the first live endpoint.
///
/// The configured endpoint is tried first unless it is missing or a placeholder. After that the
/// candidates of `default_network` are probed once each, in declaration order.
pub async fn select_endpoint(
    configured: Option<&str>,
    table: &NetworkTable,
    default_network: &str,
    probe: &impl Probe,
) -> Result<Connection, EndpointError> {
    match configured {
        Some(url) if !is_unset(configured) => {
            info!(@grey, "attempting to connect to configured endpoint: {}", url);
            match probe.probe(url).await {
                Ok(connection) => {
                    info!(@mint, "connected to configured endpoint: {}", url);
                    return Ok(connection);
                }
                Err(err) => {
                    warn!(@yellow, "failed to connect to configured endpoint {}: {}; trying fallbacks", url, err)
                }
            }
        }
        _ => warn!(@yellow, "endpoint is missing or a placeholder; trying {} fallbacks", default_network),
    }

    let profile = network::lookup(table, default_network)?;
    info!(@grey, "attempting to connect to {} using {} endpoints", profile.name, profile.rpc_candidates.len());
    for url in profile.rpc_candidates {
        match probe.probe(url).await {
            Ok(connection) => {
                info!(@mint, "connected to {} via fallback endpoint: {}", profile.name, url);
                debug!(@grey, "connection: {}", connection.debug_lavender());
                return Ok(connection);
            }
            Err(err) => warn!(@yellow, "failed to connect to fallback endpoint {}: {}", url, err),
        }
    }

    Err(EndpointError::NoLiveEndpoint {
        network: profile.name.to_string(),
        attempted: profile.rpc_candidates.len(),
    })
}
