// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording toggle: the two-state machine behind the capture button.
//!
//! ## Usage
//!
//! Classify raw presses on the capture button into [`PressEvent`]s and feed
//! them to [`RecordingToggle::handle`]; act on the returned
//! [`CaptureAction`], if any. A `None` means the event was not consumed and
//! may fall through to other handlers.
//!
//! ## Minimal example
//!
//! ```
//! use vignette_capture::toggle::{CaptureAction, PressEvent, RecordingToggle};
//!
//! let mut toggle = RecordingToggle::new();
//!
//! // Idle: a short press takes a still.
//! assert_eq!(
//!     toggle.handle(PressEvent::Short),
//!     Some(CaptureAction::TakeStill)
//! );
//!
//! // A long press starts recording; lifting the finger stops it.
//! assert_eq!(
//!     toggle.handle(PressEvent::Long),
//!     Some(CaptureAction::StartRecording)
//! );
//! assert_eq!(
//!     toggle.handle(PressEvent::Release),
//!     Some(CaptureAction::StopRecording { confirm: true })
//! );
//! assert!(!toggle.is_recording());
//! ```

/// A classified press on the capture button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressEvent {
    /// A tap.
    Short,
    /// A press held past the long-press threshold.
    Long,
    /// The finger lifted off the button.
    Release,
}

/// What the toggle decided a press means.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaptureAction {
    /// Take a single still photo of the scene.
    TakeStill,
    /// Begin continuous capture.
    StartRecording,
    /// End continuous capture. `confirm` asks for a user-visible
    /// saved-confirmation notice.
    StopRecording {
        /// Whether to surface a save confirmation.
        confirm: bool,
    },
}

/// Two-state capture toggle: idle or recording.
///
/// There is no pending state and no queueing: at most one still capture or
/// one recording session is logically in flight.
#[derive(Copy, Clone, Debug, Default)]
pub struct RecordingToggle {
    recording: bool,
}

impl RecordingToggle {
    /// Create a toggle in the idle state.
    pub const fn new() -> Self {
        Self { recording: false }
    }

    /// Feed a press event; returns the action to perform, or `None` when
    /// the event is not consumed.
    pub fn handle(&mut self, event: PressEvent) -> Option<CaptureAction> {
        match (event, self.recording) {
            // Stills only while idle; a tap mid-recording does nothing.
            (PressEvent::Short, false) => Some(CaptureAction::TakeStill),
            (PressEvent::Short, true) => None,
            (PressEvent::Long, false) => {
                self.recording = true;
                Some(CaptureAction::StartRecording)
            }
            (PressEvent::Long, true) => {
                self.recording = false;
                Some(CaptureAction::StopRecording { confirm: false })
            }
            (PressEvent::Release, true) => {
                self.recording = false;
                Some(CaptureAction::StopRecording { confirm: true })
            }
            (PressEvent::Release, false) => None,
        }
    }

    /// Whether continuous capture is active.
    pub const fn is_recording(&self) -> bool {
        self.recording
    }
}
