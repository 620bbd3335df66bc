// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.

/// Prefix on every hex-encoded digest.
pub const DIGEST_PREFIX: &str = "0x";

/// Separator between the account identifier and the component tag.
pub const COMPONENT_SEPARATOR: &str = ":";

/// Nominal size in bytes of a served proof payload.
pub const PROOF_SIZE_BYTES: u32 = 2048;

/// Nominal bandwidth in bytes for one query round trip.
pub const BANDWIDTH_BYTES: u32 = 4096;

/// Storage saved relative to a full node, in percent.
pub const STORAGE_REDUCTION_PCT: f64 = 99.8;

/// Bandwidth saved relative to a full node, in percent.
pub const BANDWIDTH_REDUCTION_PCT: f64 = 95.0;

/// Sync time saved relative to a full node, in percent.
pub const SYNC_TIME_REDUCTION_PCT: f64 = 99.9;

/// Account type reported when the ledger gives us nothing better.
pub const DEFAULT_ACCOUNT_TYPE: &str = "token";

/// Token balance reported when the ledger gives us nothing better.
pub const DEFAULT_TOKEN_BALANCE: &str = "0";
