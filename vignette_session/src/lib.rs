// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vignette Session: the placement session controller.
//!
//! ## Overview
//!
//! This crate turns confirmed double taps on detected planes into placed
//! furniture: it owns the model catalog, debounces taps, loads the model and
//! its delete-overlay control concurrently, builds the
//! `anchor → model → overlay` node hierarchy through the host's
//! [`StageGraph`](vignette_scene::StageGraph), and keeps every live overlay
//! facing the camera once per frame.
//!
//! ## Event flow
//!
//! The host routes events in; the session never registers callbacks:
//!
//! 1) Tap-on-plane events go to [`PlacementSession::on_plane_tap`], which
//!    answers with a [`PlacementRequest`] on a confirmed double tap.
//! 2) The host awaits [`PlacementSession::place`] with the request. Both
//!    asset loads run concurrently and the placement proceeds only on joint
//!    success.
//! 3) Taps on a placed model go to [`PlacementSession::on_model_tap`]
//!    (reveals the delete overlay, once); activating the overlay goes to
//!    [`PlacementSession::on_overlay_activated`] (deletes the object).
//! 4) The host's frame-update listener calls
//!    [`PlacementSession::on_frame`].
//!
//! ## Threading
//!
//! Everything here is confined to the single thread that owns the scene
//! graph. The scene traits carry no `Send` bounds, and `place` takes
//! `&mut self`, so a second placement cannot start while one is awaiting
//! its loads.

pub mod catalog;
pub mod error;
pub mod loader;
mod session;

pub use catalog::{AssetKey, Catalog, CatalogEntry, ThumbnailKey};
pub use error::{LoadError, PlaceError};
pub use loader::{AssetSource, OverlayStyle};
pub use session::{PlacedKeys, PlacementRequest, PlacementSession, SessionConfig};
