// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture controller: wires the press surface to the capture paths.
//!
//! The controller owns the toggle state machine and the collaborators it
//! drives. The host forwards classified presses to
//! [`CaptureController::on_press`] and uses the returned flag to decide
//! whether the event was consumed.

use tracing::warn;

use crate::notice::{Notice, Notifier};
use crate::photo::{FrameSource, PhotoPipeline};
use crate::recorder::VideoSink;
use crate::store::GalleryStore;
use crate::toggle::{CaptureAction, PressEvent, RecordingToggle};

/// Owns the recording toggle and dispatches its decisions.
#[derive(Debug)]
pub struct CaptureController<V, F, G, N> {
    toggle: RecordingToggle,
    video: V,
    photo: PhotoPipeline<F, G, N>,
    notifier: N,
}

impl<V, F, G, N> CaptureController<V, F, G, N>
where
    V: VideoSink,
    F: FrameSource + Send + Sync + 'static,
    G: GalleryStore + Send + Sync + 'static,
    N: Notifier + Clone + Send + 'static,
{
    /// Build a controller in the idle state.
    pub fn new(video: V, photo: PhotoPipeline<F, G, N>, notifier: N) -> Self {
        Self {
            toggle: RecordingToggle::new(),
            video,
            photo,
            notifier,
        }
    }

    /// Feed a classified press on the capture button.
    ///
    /// Returns `true` when the event was consumed. Still captures run on
    /// their own worker thread; recording starts and stops synchronously
    /// through the [`VideoSink`].
    pub fn on_press(&mut self, event: PressEvent) -> bool {
        let Some(action) = self.toggle.handle(event) else {
            return false;
        };
        match action {
            CaptureAction::TakeStill => {
                if let Err(error) = self.photo.take_photo() {
                    warn!(%error, "photo worker failed to start");
                }
            }
            CaptureAction::StartRecording => {
                if !self.video.toggle() {
                    warn!("recorder reported inactive after start");
                }
            }
            CaptureAction::StopRecording { confirm } => {
                if self.video.toggle() {
                    warn!("recorder reported active after stop");
                }
                if confirm {
                    self.notifier.notify(Notice::VideoSaved);
                }
            }
        }
        true
    }

    /// Whether continuous capture is active.
    pub fn is_recording(&self) -> bool {
        self.toggle.is_recording()
    }
}
