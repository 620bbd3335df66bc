// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::api::QueryResponse;
use crate::network::LedgerClient;
use crystal_kernel::proof::build_proof;
use crystal_kernel::types::account::AccountInfo;
use crystal_kernel::types::id::AccountId;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Turns an account identifier into a served proof bundle.
///
/// Holds no mutable state; one instance is shared by every request.
pub struct Engine {
    ledger: LedgerClient,
}

impl Engine {
    pub fn new(ledger: LedgerClient) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &LedgerClient {
        &self.ledger
    }

    /// Resolves live account data (best effort) and assembles the proof.
    ///
    /// Never fails: an unreachable or misbehaving ledger only means the
    /// account fields keep their defaults. The proof does not depend on it.
    pub async fn query(&self, account: AccountId) -> QueryResponse {
        let started = Instant::now();

        let snapshot = match self.ledger.query_account(&account).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(account = %account, "Ledger query failed, using defaults: {}", e);
                metrics::increment_counter!("crystal_upstream_failures_total");
                None
            }
        };

        let elapsed = started.elapsed();
        let query_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        metrics::histogram!("crystal_query_duration_seconds", elapsed.as_secs_f64());

        let now = unix_now();
        let now_secs = i64::try_from(now.as_secs()).unwrap_or(i64::MAX);

        let mut info = AccountInfo::new(account.clone(), now_secs);
        if let Some(snapshot) = &snapshot {
            info.apply(snapshot);
        }

        let proof = build_proof(&account, query_time_ms, now_secs);
        tracing::debug!(account = %account, root = %proof.bpt_hash, query_time_ms, "Proof assembled");

        QueryResponse {
            account: info,
            proof,
            timestamp: i64::try_from(now.as_millis()).unwrap_or(i64::MAX),
        }
    }
}

fn unix_now() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}
