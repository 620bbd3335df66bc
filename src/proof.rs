//! Account proof assembly.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::bpt::{root_hash, ComponentHashes};
use crate::config::{
    BANDWIDTH_BYTES, BANDWIDTH_REDUCTION_PCT, PROOF_SIZE_BYTES, STORAGE_REDUCTION_PCT,
    SYNC_TIME_REDUCTION_PCT,
};
use crate::types::digest::Digest;
use crate::types::enums::StepKind;
use crate::types::id::AccountId;

pub const STEP_ACCOUNT_DESCRIPTION: &str = "Retrieved account data and BPT components from mainnet";
/// Level-2 text. Earlier deployments of the service used a different
/// wording here; clients should key on the step `type`, not `description`.
pub const STEP_ROOT_DESCRIPTION: &str = "Computed BPT hash per the BPT specification";
pub const STEP_VERIFICATION_DESCRIPTION: &str = "Cryptographic proof complete";

/// One stage of proof construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub level: u8,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub description: String,
    pub hash: Digest,
    /// Epoch seconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetrics {
    pub storage_reduction: f64,
    pub bandwidth_reduction: f64,
    pub sync_time_reduction: f64,
}

impl ComparisonMetrics {
    /// Reductions relative to running a full node. Fixed, not measured.
    pub fn full_node_baseline() -> Self {
        Self {
            storage_reduction: STORAGE_REDUCTION_PCT,
            bandwidth_reduction: BANDWIDTH_REDUCTION_PCT,
            sync_time_reduction: SYNC_TIME_REDUCTION_PCT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Wall-clock milliseconds from request start to resolver completion.
    pub query_time: u64,
    pub proof_size: u32,
    pub bandwidth_used: u32,
    pub comparison_to_full_node: ComparisonMetrics,
}

impl PerformanceMetrics {
    pub fn new(query_time: u64) -> Self {
        Self {
            query_time,
            proof_size: PROOF_SIZE_BYTES,
            bandwidth_used: BANDWIDTH_BYTES,
            comparison_to_full_node: ComparisonMetrics::full_node_baseline(),
        }
    }
}

/// The proof bundle served for an account.
///
/// `verified` reflects a completed structural assembly. It is not the
/// outcome of checking anything against consensus state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofData {
    pub account_hash: Digest,
    pub main_state_hash: Digest,
    pub secondary_state_hash: Digest,
    pub chains_hash: Digest,
    pub pending_hash: Digest,
    pub bpt_hash: Digest,
    pub verified: bool,
    pub steps: Vec<ProofStep>,
    pub performance: PerformanceMetrics,
}

impl ProofData {
    pub fn components(&self) -> ComponentHashes {
        ComponentHashes {
            main: self.main_state_hash,
            secondary: self.secondary_state_hash,
            chains: self.chains_hash,
            pending: self.pending_hash,
        }
    }
}

fn step(level: u8, kind: StepKind, description: &str, hash: Digest, timestamp: i64) -> ProofStep {
    ProofStep {
        level,
        kind,
        description: description.to_string(),
        hash,
        timestamp,
    }
}

/// Fixed three-level trail: account retrieval, root computation, verification.
pub fn proof_steps(main: Digest, root: Digest, timestamp: i64) -> Vec<ProofStep> {
    alloc::vec![
        step(1, StepKind::Account, STEP_ACCOUNT_DESCRIPTION, main, timestamp),
        step(2, StepKind::Bvn, STEP_ROOT_DESCRIPTION, root, timestamp),
        step(3, StepKind::Verification, STEP_VERIFICATION_DESCRIPTION, root, timestamp),
    ]
}

/// Assembles the proof for `account`.
///
/// `query_time_ms` is the caller's measured resolver latency and `timestamp`
/// (epoch seconds) stamps every step. Nothing here touches the network,
/// the disk or a clock, and it cannot fail for a valid `AccountId`.
pub fn build_proof(account: &AccountId, query_time_ms: u64, timestamp: i64) -> ProofData {
    let components = ComponentHashes::derive(account);
    let root = root_hash(&components);

    ProofData {
        account_hash: components.main,
        main_state_hash: components.main,
        secondary_state_hash: components.secondary,
        chains_hash: components.chains,
        pending_hash: components.pending,
        bpt_hash: root,
        verified: true,
        steps: proof_steps(components.main, root, timestamp),
        performance: PerformanceMetrics::new(query_time_ms),
    }
}
