// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod deployment;
pub mod endpoint;
pub mod network;
pub mod settings;
pub mod signer;
