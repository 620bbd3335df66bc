// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::bpt::{combine, component_hash, root_hash, ComponentHashes};
use crate::hash::hash_str;
use crate::types::enums::StateComponent;
use crate::types::id::AccountId;
use std::string::ToString;

const ALICE: &str = "acc://alice.acme/tokens";
const ALICE_MAIN: &str = "0x3a1d88dd19e35fbbd855a528fa2efc6eb9bbbcc7729a7837329620a058f10d6d";
const ALICE_SECONDARY: &str = "0xbf398326360a218c25cc7cc274b0cc9a376cf07390d92c6688933c0a9204870d";
const ALICE_CHAINS: &str = "0x97a66535bfa647bf4139e1d813ccde8735206dcd67a2e15ab39418ec466e3165";
const ALICE_PENDING: &str = "0xa2793926a7bd0d07f2f1ac42928db979184118cb664c00c1e32429a017d73deb";
const ALICE_ROOT: &str = "0x8676f5e3479bf1a44fe90975e1d7b8e9ff0437ad90fd451c7e402d4fd0bc386c";

fn alice() -> AccountId {
    AccountId::new(ALICE).unwrap()
}

#[test]
fn test_component_hash_vectors() {
    let hashes = ComponentHashes::derive(&alice());
    assert_eq!(hashes.main.to_string(), ALICE_MAIN);
    assert_eq!(hashes.secondary.to_string(), ALICE_SECONDARY);
    assert_eq!(hashes.chains.to_string(), ALICE_CHAINS);
    assert_eq!(hashes.pending.to_string(), ALICE_PENDING);
}

#[test]
fn test_component_hash_is_tagged_input() {
    let account = alice();
    for component in StateComponent::ALL {
        let expected = hash_str(&format!("{}:{}", ALICE, component.tag()));
        assert_eq!(component_hash(&account, component), expected);
    }
}

#[test]
fn test_root_hash_vector() {
    let hashes = ComponentHashes::derive(&alice());
    assert_eq!(root_hash(&hashes).to_string(), ALICE_ROOT);

    let concatenated = format!(
        "{}{}{}{}",
        ALICE_MAIN, ALICE_SECONDARY, ALICE_CHAINS, ALICE_PENDING
    );
    assert_eq!(root_hash(&hashes), hash_str(&concatenated));
}

#[test]
fn test_root_depends_on_order() {
    let h = ComponentHashes::derive(&alice());
    let documented = root_hash(&h);

    assert_ne!(documented, combine(&[h.secondary, h.main, h.chains, h.pending]));
    assert_ne!(documented, combine(&[h.main, h.secondary, h.pending, h.chains]));
    assert_ne!(documented, combine(&[h.pending, h.chains, h.secondary, h.main]));
}

#[test]
fn test_root_changes_with_any_component() {
    let h = ComponentHashes::derive(&alice());
    let root = root_hash(&h);
    let other = hash_str("tampered");

    for component in StateComponent::ALL {
        let mut swapped = h;
        match component {
            StateComponent::Main => swapped.main = other,
            StateComponent::Secondary => swapped.secondary = other,
            StateComponent::Chains => swapped.chains = other,
            StateComponent::Pending => swapped.pending = other,
        }
        assert_ne!(swapped, h);
        assert_ne!(root_hash(&swapped), root, "{}", component.tag());
    }
}

#[test]
fn test_components_are_distinct() {
    let ordered = ComponentHashes::derive(&alice()).ordered();
    for i in 0..ordered.len() {
        for j in (i + 1)..ordered.len() {
            assert_ne!(ordered[i], ordered[j]);
        }
    }
}
