// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

/// The four sub-states whose digests make up an account's BPT entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateComponent {
    Main,
    Secondary,
    Chains,
    Pending,
}

impl StateComponent {
    /// Root combination order.
    pub const ALL: [StateComponent; 4] = [
        StateComponent::Main,
        StateComponent::Secondary,
        StateComponent::Chains,
        StateComponent::Pending,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            StateComponent::Main => "main",
            StateComponent::Secondary => "secondary",
            StateComponent::Chains => "chains",
            StateComponent::Pending => "pending",
        }
    }
}

/// Stage of proof construction a step documents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Account,
    Bvn,
    Verification,
}
