// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type DeployContractsResult = Result<(), DeployContractsError>;

#[derive(Debug)]
pub struct DeployContractsError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DeployContractsError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for DeployContractsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for DeployContractsError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for DeployContractsError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<deploy_tools::Error> for DeployContractsError {
    fn from(err: deploy_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
