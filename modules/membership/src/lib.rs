#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::clone_on_copy)]
#![cfg_attr(not(test), no_std)]

//! Gossip-based cluster membership.
//!
//! Every process keeps a view of the live peer instances (id, address, role, heartbeat) and
//! reconciles it with randomly chosen partners. Snapshots of the membership are fingerprinted
//! by their member ids, so two nodes that agree on membership can confirm it by comparing a
//! single hash and only exchange heartbeat counters. Older fingerprints stay resolvable for a
//! while, which lets a slightly stale peer receive just the members it is missing.
//!
//! The `core` module is `no_std` (with `alloc`) and free of I/O: time is passed in as
//! milliseconds and randomness through [`rand::Rng`]. The `std` module provides a UDP
//! transport and a tokio task that drives a node.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
