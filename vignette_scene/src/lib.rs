// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vignette Scene: the scene-graph seam for an AR placement session.
//!
//! ## Overview
//!
//! This crate defines what the placement session needs from an AR toolkit —
//! and nothing more. It does not render, hit-test, or track planes. Instead,
//! the host implements [`StageGraph`] and [`Manipulator`] over its real
//! scene graph, and the session drives those traits plus the small amount of
//! geometry bookkeeping that lives here:
//!
//! - [`types`]: world-space [`Pose`](types::Pose), axis-aligned
//!   [`Aabb`](types::Aabb) bounds, and the [`PlaneHit`](types::PlaneHit)
//!   carried by tap-on-plane events
//! - [`graph`]: the [`StageGraph`] and [`Manipulator`] collaborator traits
//!   and the [`ModelRenderable`](graph::ModelRenderable) capability query
//! - [`registry`]: the ordered collection of live overlay nodes traversed
//!   once per rendered frame
//! - [`billboard`]: the camera-facing rotation applied to revealed overlays
//!
//! ## Node handles
//!
//! Node identity is an associated `NodeKey` type chosen by the host's
//! [`StageGraph`] implementation: a small copyable handle, typically an
//! index or a slot/generation pair. The session never inspects it.

pub use kurbo;
pub use nalgebra;

pub mod billboard;
pub mod graph;
pub mod registry;
pub mod types;

pub use graph::{Manipulator, ModelRenderable, StageGraph};
pub use registry::OverlayRegistry;
pub use types::{Aabb, PlaneHit, PlaneId, Pose};
