//! Structural consistency checks for served proofs.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloc::vec::Vec;
use core::fmt;

use crate::bpt::{root_hash, ComponentHashes};
use crate::proof::ProofData;
use crate::types::digest::Digest;
use crate::types::enums::{StateComponent, StepKind};
use crate::types::id::AccountId;

/// Step kinds by level, 1-based.
const STEP_KINDS: [StepKind; 3] = [StepKind::Account, StepKind::Bvn, StepKind::Verification];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Component {
        component: StateComponent,
        expected: Digest,
        found: Digest,
    },
    Root {
        expected: Digest,
        found: Digest,
    },
    AccountHash {
        expected: Digest,
        found: Digest,
    },
    StepCount(usize),
    StepLevel {
        index: usize,
        found: u8,
    },
    StepKind {
        level: u8,
        found: StepKind,
    },
    StepHash {
        level: u8,
        expected: Digest,
        found: Digest,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Component { component, expected, found } => write!(
                f,
                "{} hash mismatch: expected {}, found {}",
                component.tag(),
                expected,
                found
            ),
            Mismatch::Root { expected, found } => {
                write!(f, "BPT hash mismatch: expected {}, found {}", expected, found)
            }
            Mismatch::AccountHash { expected, found } => {
                write!(f, "account hash mismatch: expected {}, found {}", expected, found)
            }
            Mismatch::StepCount(n) => write!(f, "expected 3 proof steps, found {}", n),
            Mismatch::StepLevel { index, found } => {
                write!(f, "step {} has level {}, expected {}", index, found, index + 1)
            }
            Mismatch::StepKind { level, found } => {
                write!(f, "step at level {} has unexpected type {:?}", level, found)
            }
            Mismatch::StepHash { level, expected, found } => write!(
                f,
                "step at level {} references {}, expected {}",
                level, found, expected
            ),
        }
    }
}

/// Re-derives every digest in `proof` from `account` and checks the step trail.
///
/// Passing means the proof is exactly what `build_proof` assembles for this
/// account. It says nothing about the account's actual ledger state.
pub fn check_proof(account: &AccountId, proof: &ProofData) -> Result<(), Vec<Mismatch>> {
    let mut mismatches = Vec::new();

    let expected = ComponentHashes::derive(account);
    let found = proof.components();
    for component in StateComponent::ALL {
        let (e, f) = (expected.get(component), found.get(component));
        if e != f {
            mismatches.push(Mismatch::Component { component, expected: e, found: f });
        }
    }

    // Against the re-derived components, not the served ones.
    let root = root_hash(&expected);
    if proof.bpt_hash != root {
        mismatches.push(Mismatch::Root { expected: root, found: proof.bpt_hash });
    }

    if proof.account_hash != expected.main {
        mismatches.push(Mismatch::AccountHash {
            expected: expected.main,
            found: proof.account_hash,
        });
    }

    if proof.steps.len() != STEP_KINDS.len() {
        mismatches.push(Mismatch::StepCount(proof.steps.len()));
    } else {
        let step_hashes = [expected.main, root, root];
        for (index, step) in proof.steps.iter().enumerate() {
            if usize::from(step.level) != index + 1 {
                mismatches.push(Mismatch::StepLevel { index, found: step.level });
            }
            let level = (index + 1) as u8;
            if step.kind != STEP_KINDS[index] {
                mismatches.push(Mismatch::StepKind { level, found: step.kind });
            }
            if step.hash != step_hashes[index] {
                mismatches.push(Mismatch::StepHash {
                    level,
                    expected: step_hashes[index],
                    found: step.hash,
                });
            }
        }
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(mismatches)
    }
}
