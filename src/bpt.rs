// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Component hash derivation and root combination.
//!
//! These are stand-ins for the ledger's Binary Patricia Trie entry: each
//! component digest is derived from the account identifier alone, so the
//! same identifier always yields the same digests with no chain state.
//!
//! ```text
//! main      = H(account ":main")
//! secondary = H(account ":secondary")
//! chains    = H(account ":chains")
//! pending   = H(account ":pending")
//! root      = H(hex(main) hex(secondary) hex(chains) hex(pending))
//! ```
//!
//! `hex(x)` is the full `0x`-prefixed text form of the digest.

use alloc::string::String;
use sha2::{Digest as _, Sha256};

use crate::config::COMPONENT_SEPARATOR;
use crate::hash::sha256;
use crate::types::digest::Digest;
use crate::types::enums::StateComponent;
use crate::types::id::AccountId;

pub fn component_hash(account: &AccountId, component: StateComponent) -> Digest {
    let mut input = String::with_capacity(
        account.as_str().len() + COMPONENT_SEPARATOR.len() + component.tag().len(),
    );
    input.push_str(account.as_str());
    input.push_str(COMPONENT_SEPARATOR);
    input.push_str(component.tag());
    sha256(input.as_bytes())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentHashes {
    pub main: Digest,
    pub secondary: Digest,
    pub chains: Digest,
    pub pending: Digest,
}

impl ComponentHashes {
    pub fn derive(account: &AccountId) -> Self {
        Self {
            main: component_hash(account, StateComponent::Main),
            secondary: component_hash(account, StateComponent::Secondary),
            chains: component_hash(account, StateComponent::Chains),
            pending: component_hash(account, StateComponent::Pending),
        }
    }

    pub fn get(&self, component: StateComponent) -> Digest {
        match component {
            StateComponent::Main => self.main,
            StateComponent::Secondary => self.secondary,
            StateComponent::Chains => self.chains,
            StateComponent::Pending => self.pending,
        }
    }

    /// Digests in root combination order.
    pub fn ordered(&self) -> [Digest; 4] {
        StateComponent::ALL.map(|c| self.get(c))
    }
}

/// Hashes the concatenated text forms of `parts`, in the order given.
pub fn combine(parts: &[Digest]) -> Digest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.to_hex().as_bytes());
    }
    Digest::from_bytes(hasher.finalize().into())
}

pub fn root_hash(components: &ComponentHashes) -> Digest {
    combine(&components.ordered())
}
