// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_ACCOUNT_TYPE, DEFAULT_TOKEN_BALANCE};
use crate::types::id::AccountId;

/// Live account facts as reported by the ledger, already normalized.
///
/// Every field is independent: the ledger may report any subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub account_type: Option<String>,
    pub token_balance: Option<String>,
    pub credit_balance: Option<i64>,
}

/// Account metadata returned alongside a proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub url: AccountId,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_balance: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub credit_balance: i64,
    /// Observation time, epoch seconds.
    pub timestamp: i64,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl AccountInfo {
    /// Defaults used when the ledger could not be reached.
    pub fn new(url: AccountId, timestamp: i64) -> Self {
        Self {
            url,
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
            token_balance: DEFAULT_TOKEN_BALANCE.to_string(),
            credit_balance: 0,
            timestamp,
        }
    }

    /// Overwrites the fields the snapshot carries; the rest keep their value.
    pub fn apply(&mut self, snapshot: &AccountSnapshot) {
        if let Some(kind) = &snapshot.account_type {
            self.account_type = kind.clone();
        }
        if let Some(balance) = &snapshot.token_balance {
            self.token_balance = balance.clone();
        }
        if let Some(credits) = snapshot.credit_balance {
            self.credit_balance = credits;
        }
    }
}
