// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical hash primitive.
//!
//! All digests the kernel emits are SHA-256. Keep it that way: clients that
//! recompute hashes from an account identifier depend on it.

use sha2::{Digest as _, Sha256};

use crate::types::digest::Digest;

pub fn sha256(data: &[u8]) -> Digest {
    Digest::from_bytes(Sha256::digest(data).into())
}

pub fn hash_str(data: &str) -> Digest {
    sha256(data.as_bytes())
}
