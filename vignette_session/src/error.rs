// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for the placement session.
//!
//! Every failure is non-fatal: the debouncer is already reset when a
//! placement fails, so the user can simply double-tap again.

use thiserror::Error;

/// Why an asset failed to resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The 3D model renderable could not be loaded.
    #[error("model asset failed to load: {0}")]
    Model(String),
    /// The view-backed overlay control could not be built.
    #[error("overlay control failed to build: {0}")]
    Overlay(String),
}

/// Why a confirmed placement produced no object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// One of the two asset loads failed; no partial object was created.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The loaded model exposes no bounding box, so the overlay control
    /// cannot be positioned above it.
    #[error("loaded model exposes no bounding box")]
    UnboundedModel,
}
