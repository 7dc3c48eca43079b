// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vignette Capture: photo and video capture for the AR scene view.
//!
//! ## Overview
//!
//! One press surface drives two capture paths:
//!
//! - a short press takes a still photo of the scene view, but only while
//!   idle;
//! - a long press toggles continuous video recording, and lifting the
//!   finger while recording stops it and confirms the save.
//!
//! [`toggle::RecordingToggle`] is that contract as a state machine, and
//! [`controller::CaptureController`] wires its decisions to the
//! collaborators: a [`recorder::VideoSink`] for continuous capture and a
//! [`photo::PhotoPipeline`] for stills.
//!
//! ## The still pipeline
//!
//! A still capture copies pixels out of the scene view, encodes a JPEG, and
//! hands it to the gallery — all off the UI thread. Each capture gets its
//! own short-lived worker thread that ends right after the write;
//! success and failure come back through a [`notice::Notifier`] whose
//! implementations re-dispatch to the UI thread.
//!
//! ## Permissions
//!
//! Writing into the shared gallery needs a runtime permission beyond the AR
//! base set; [`permissions::with_capture_permissions`] appends it to a
//! host-supplied list.

pub mod controller;
pub mod error;
pub mod notice;
pub mod permissions;
pub mod photo;
pub mod recorder;
pub mod store;
pub mod toggle;

pub use controller::CaptureController;
pub use error::{CaptureError, StoreError};
pub use notice::{Notice, Notifier};
pub use permissions::{Permission, with_capture_permissions};
pub use photo::{CaptureConfig, Frame, FrameSource, PhotoPipeline};
pub use recorder::VideoSink;
pub use store::{GalleryStore, ImageRequest};
pub use toggle::{CaptureAction, PressEvent, RecordingToggle};
