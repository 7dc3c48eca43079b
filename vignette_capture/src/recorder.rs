// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Video recorder seam.
//!
//! Continuous capture is owned entirely by the host (recorder setup,
//! quality profile, output file); the toggle state machine only starts and
//! stops it.

/// The host's continuous-capture recorder.
pub trait VideoSink {
    /// Start or stop recording; returns whether recording is active
    /// afterwards.
    fn toggle(&mut self) -> bool;
}
