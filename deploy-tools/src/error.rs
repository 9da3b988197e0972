// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    artifact::ArtifactError, deployment::DeploymentError, endpoint::EndpointError,
    network::NetworkError, settings::SettingsError, signer::KeyError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Endpoint(#[from] EndpointError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Key(#[from] KeyError),
    #[error("{0}")]
    Settings(#[from] SettingsError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
