// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_tools::core::{deployment::DEFAULT_RECEIPT_TIMEOUT, endpoint::DEFAULT_PROBE_TIMEOUT};

/// Seconds allowed for an endpoint to answer the liveness probe.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = DEFAULT_PROBE_TIMEOUT.as_secs();

/// Seconds to wait for a deployment receipt.
pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = DEFAULT_RECEIPT_TIMEOUT.as_secs();
