// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap gate: debounce plane taps into confirmed placements.
//!
//! ## Usage
//!
//! 1) Feed every tap-on-plane event into [`DoubleTapGate::observe`] together
//!    with its arrival time in milliseconds.
//! 2) Act on [`TapDecision::Confirmed`]; the other decisions only update
//!    internal state.
//!
//! The gate is timer-less: it never waits on a background timeout. A first
//! tap arms it indefinitely, and the decision for each later tap depends
//! only on the delta between the two arrival times.
//!
//! ## Minimal example
//!
//! ```
//! use vignette_gesture::double_tap::{DoubleTapGate, TapDecision};
//!
//! let mut gate = DoubleTapGate::new();
//!
//! // A lone tap arms the gate but places nothing.
//! assert_eq!(gate.observe(1_000), TapDecision::First);
//!
//! // Too slow: this tap becomes the new first tap instead.
//! assert_eq!(gate.observe(2_500), TapDecision::Rearmed);
//!
//! // Fast enough: placement confirmed, gate reset.
//! assert_eq!(gate.observe(3_000), TapDecision::Confirmed);
//! assert!(!gate.is_armed());
//! ```

/// What a tap event meant to the gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TapDecision {
    /// No tap was pending; this tap armed the gate.
    First,
    /// A pending tap existed and this one arrived within the tolerance.
    /// The pair is a confirmed placement and the gate is reset.
    Confirmed,
    /// A pending tap existed but the tolerance was exceeded; this tap
    /// replaced it as the new first tap.
    Rearmed,
}

/// Debounces single taps into double-tap confirmations.
///
/// State is the arrival time of the pending first tap, if any. It persists
/// until a qualifying event arrives; there is no upper bound on how long the
/// gate stays armed.
///
/// Timestamps are caller-supplied milliseconds from any nondecreasing clock.
#[derive(Copy, Clone, Debug)]
pub struct DoubleTapGate {
    tolerance_ms: u64,
    first_tap: Option<u64>,
}

impl DoubleTapGate {
    /// Window within which the second tap must arrive, in milliseconds.
    pub const DEFAULT_TOLERANCE_MS: u64 = 1000;

    /// Create a gate with the default tolerance.
    pub const fn new() -> Self {
        Self::with_tolerance(Self::DEFAULT_TOLERANCE_MS)
    }

    /// Create a gate with a custom tolerance in milliseconds.
    pub const fn with_tolerance(tolerance_ms: u64) -> Self {
        Self {
            tolerance_ms,
            first_tap: None,
        }
    }

    /// Record a tap arriving at `now_ms` and decide what it meant.
    ///
    /// A second tap strictly inside the tolerance confirms; a delta equal to
    /// the tolerance re-arms.
    pub fn observe(&mut self, now_ms: u64) -> TapDecision {
        match self.first_tap {
            None => {
                self.first_tap = Some(now_ms);
                TapDecision::First
            }
            Some(first) if now_ms.saturating_sub(first) < self.tolerance_ms => {
                self.first_tap = None;
                TapDecision::Confirmed
            }
            Some(_) => {
                self.first_tap = Some(now_ms);
                TapDecision::Rearmed
            }
        }
    }

    /// Returns `true` while a first tap is pending.
    pub const fn is_armed(&self) -> bool {
        self.first_tap.is_some()
    }

    /// The configured tolerance in milliseconds.
    pub const fn tolerance_ms(&self) -> u64 {
        self.tolerance_ms
    }

    /// Forget any pending first tap.
    pub fn reset(&mut self) {
        self.first_tap = None;
    }
}

impl Default for DoubleTapGate {
    fn default() -> Self {
        Self::new()
    }
}
