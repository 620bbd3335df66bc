// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! crystal-kernel: deterministic account proof assembly for the Crystal light client.
//!
//! Everything in this crate is a pure function of its inputs. Clocks, latency
//! measurement and upstream ledger access live in `crystal-node`; the kernel
//! only receives their results.

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod config;
pub mod error;
pub mod types;
pub mod hash;
pub mod bpt;
pub mod proof;
pub mod verify;

#[cfg(test)]
pub mod tests;
