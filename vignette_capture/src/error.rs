// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture error taxonomy.
//!
//! A failed capture writes nothing and leaves the recording state
//! untouched; all failures are reported as notices and the session stays
//! usable.

use thiserror::Error;

/// Why a gallery write failed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O failure while writing the image.
    #[error("gallery I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The gallery refused the request.
    #[error("gallery rejected the image: {0}")]
    Rejected(String),
}

/// Why a still capture produced no photo.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Copying pixels out of the scene view failed.
    #[error("pixel copy failed: {0}")]
    Copy(String),
    /// JPEG encoding failed.
    #[error("jpeg encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    /// The encoded image could not be stored.
    #[error("gallery write failed: {0}")]
    Store(#[from] StoreError),
}
