// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vignette Gesture: input state machines for AR placement interactions.
//!
//! This crate provides small, focused state machines for the gestures that
//! drive an AR placement session. Each module handles one interaction
//! pattern:
//!
//! - [`double_tap`]: Turn a stream of single taps into confirmed placements
//!   on a double tap within a bounded time window
//! - [`reveal`]: A set-exactly-once latch behind tap-to-reveal controls
//!
//! ## Design Philosophy
//!
//! Each state machine is designed to be:
//!
//! - **Timer-less**: Correctness depends only on wall-clock deltas compared
//!   at event-arrival time; no background timeout callbacks are needed
//! - **Stateful but simple**: Track just enough state to compute the next
//!   decision
//! - **Integration-friendly**: The caller supplies timestamps and routes
//!   events; nothing here assumes a particular toolkit or event loop
//!
//! ## Usage Patterns
//!
//! ### Double-Tap Placement
//!
//! Use [`double_tap::DoubleTapGate`] to confirm a placement only on the
//! second tap of a pair arriving within the tolerance:
//!
//! ```rust
//! use vignette_gesture::double_tap::{DoubleTapGate, TapDecision};
//!
//! let mut gate = DoubleTapGate::new();
//!
//! // First tap arms the gate.
//! assert_eq!(gate.observe(5_000), TapDecision::First);
//!
//! // A second tap 800 ms later confirms the placement.
//! assert_eq!(gate.observe(5_800), TapDecision::Confirmed);
//!
//! // The gate is reset; the next tap starts a fresh pair.
//! assert_eq!(gate.observe(6_000), TapDecision::First);
//! ```
//!
//! ### Tap-to-Reveal
//!
//! Use [`reveal::RevealLatch`] to populate a lazily shown control exactly
//! once:
//!
//! ```rust
//! use vignette_gesture::reveal::RevealLatch;
//!
//! let mut latch = RevealLatch::new();
//! assert!(latch.trip());
//! assert!(!latch.trip());
//! assert!(latch.is_revealed());
//! ```
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

pub mod double_tap;
pub mod reveal;
