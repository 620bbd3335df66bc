// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Opaque account identifier on the ledger, e.g. `acc://alice.acme/tokens`.
///
/// The only invariant is non-emptiness; the kernel never interprets the
/// contents beyond hashing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(raw: impl Into<String>) -> KernelResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(KernelError::EmptyAccount);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = KernelError;

    fn try_from(raw: String) -> KernelResult<Self> {
        Self::new(raw)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
