// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Locates and loads Hardhat build artifacts.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

use crate::utils::decode0x;

/// Build output directories are matched with this pattern.
pub const ARTIFACT_DIR_PATTERN: &str = "artifacts-*";

/// A deployable contract and the Solidity file it is compiled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtifactRef {
    pub contract_name: &'static str,
    pub solidity_file: &'static str,
}

pub static CONTRACTS: &[ArtifactRef] = &[
    ArtifactRef {
        contract_name: "QuantumAPIKeyGenerator",
        solidity_file: "APIKeyGenerator.sol",
    },
    ArtifactRef {
        contract_name: "RevenueDistributor",
        solidity_file: "RevenueDistributor.sol",
    },
];

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("unknown contract name: {name}. Supported contracts are: {supported}")]
    UnknownContract { name: String, supported: String },
    #[error(
        "no artifact directory matching '{pattern}' found in {}; compile the contracts first (npx hardhat compile)",
        .root.display()
    )]
    DirectoryMissing { pattern: &'static str, root: PathBuf },
    #[error(
        "contract artifact not found at {} within the latest artifact directory {}",
        .path.display(),
        .dir.display()
    )]
    FileMissing { path: PathBuf, dir: PathBuf },
    #[error("malformed artifact {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("artifact root is not valid utf-8: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Looks up a supported contract by name.
pub fn artifact_ref(contract_name: &str) -> Result<&'static ArtifactRef, ArtifactError> {
    CONTRACTS
        .iter()
        .find(|r| r.contract_name == contract_name)
        .ok_or_else(|| ArtifactError::UnknownContract {
            name: contract_name.to_string(),
            supported: CONTRACTS
                .iter()
                .map(|r| r.contract_name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Path of a contract's artifact inside the most recently modified artifact directory under
/// `root`.
pub fn resolve_artifact_path(root: &Path, contract_name: &str) -> Result<PathBuf, ArtifactError> {
    let artifact = artifact_ref(contract_name)?;
    let dir = latest_artifact_dir(root)?;
    let path = dir
        .join("contracts")
        .join(artifact.solidity_file)
        .join(format!("{}.json", artifact.contract_name));
    if !path.is_file() {
        return Err(ArtifactError::FileMissing { path, dir });
    }
    debug!(@grey, "located artifact for {} at {}", contract_name, path.display());
    Ok(path)
}

/// Picks the matching directory with the greatest modification time.
fn latest_artifact_dir(root: &Path) -> Result<PathBuf, ArtifactError> {
    let root_str = root
        .to_str()
        .ok_or_else(|| ArtifactError::InvalidRoot(root.to_path_buf()))?;
    let pattern = Path::new(&glob::Pattern::escape(root_str)).join(ARTIFACT_DIR_PATTERN);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| ArtifactError::InvalidRoot(root.to_path_buf()))?;

    let entries = glob::glob(pattern)?.map(|entry| entry.map_err(glob::GlobError::into_error));
    newest_dir(entries)?.ok_or_else(|| ArtifactError::DirectoryMissing {
        pattern: ARTIFACT_DIR_PATTERN,
        root: root.to_path_buf(),
    })
}

/// Newest directory among `entries`, skipping anything that is not a directory.
///
/// On equal timestamps the first directory is kept. An unreadable entry fails the lookup, since
/// it may be the newest.
fn newest_dir(
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Result<Option<PathBuf>, ArtifactError> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let dir = entry?;
        if !dir.is_dir() {
            continue;
        }
        let modified = fs::metadata(&dir)?.modified()?;
        match &latest {
            Some((time, current)) if modified == *time => {
                warn!(@yellow, "{} and {} share a modification time; keeping {}", current.display(), dir.display(), current.display())
            }
            Some((time, _)) if modified < *time => {}
            _ => latest = Some((modified, dir)),
        }
    }
    Ok(latest.map(|(_, dir)| dir))
}

/// ABI and creation bytecode of a compiled contract.
#[derive(Debug, Clone)]
pub struct CompiledArtifact {
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    #[serde(default)]
    abi: Option<JsonAbi>,
    #[serde(default)]
    bytecode: Option<String>,
}

/// Parses an artifact file, requiring a non-empty ABI and bytecode.
pub fn load_artifact(path: &Path) -> Result<CompiledArtifact, ArtifactError> {
    let malformed = |reason: String| ArtifactError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let contents = fs::read(path)?;
    let raw: RawArtifact =
        serde_json::from_slice(&contents).map_err(|err| malformed(err.to_string()))?;

    let abi = match raw.abi {
        Some(abi) if !abi.is_empty() => abi,
        _ => return Err(malformed("abi not found".to_string())),
    };
    let bytecode = match raw.bytecode.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() && code != "0x" => code,
        _ => return Err(malformed("bytecode not found".to_string())),
    };
    let bytecode = decode0x(bytecode)
        .map_err(|err| malformed(format!("bytecode is not valid hex (unlinked libraries?): {err}")))?;

    Ok(CompiledArtifact {
        abi,
        bytecode: bytecode.into(),
    })
}

/// Resolves and loads the artifact of a supported contract.
pub fn load_contract(root: &Path, contract_name: &str) -> Result<CompiledArtifact, ArtifactError> {
    let path = resolve_artifact_path(root, contract_name)?;
    let artifact = load_artifact(&path)?;
    info!(@grey, "loaded abi and bytecode for {} from {}", contract_name, path.display());
    Ok(artifact)
}
