// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery store seam: persist one named image where the platform's
//! gallery can see it.
//!
//! How the write happens — direct file path on older devices, a media-store
//! insert on newer ones — is the implementation's concern. Cleanup of a
//! partially written file after an I/O failure is likewise left to the
//! implementation.

use crate::error::StoreError;

/// An encoded image plus the gallery location it should be stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    /// File name shown in the gallery.
    pub display_name: String,
    /// Gallery-relative directory, e.g. `DCIM/Vignette`.
    pub relative_path: String,
    /// Encoded JPEG bytes.
    pub jpeg: Vec<u8>,
}

/// Persists captured images into the device gallery.
///
/// Called from the capture worker thread; implementations must be safe to
/// share across captures.
pub trait GalleryStore {
    /// Write `request` to a gallery-visible location.
    fn save_image(&self, request: ImageRequest) -> Result<(), StoreError>;
}
