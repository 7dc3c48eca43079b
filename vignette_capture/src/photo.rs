// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Still-photo pipeline: copy, encode, store, notify.
//!
//! [`PhotoPipeline::take_photo`] is called on the UI thread and returns
//! immediately. The pixel copy, JPEG encode, and gallery write all happen
//! on a dedicated worker thread spawned for that one capture; the thread
//! ends as soon as the write and notification are done. Dropping the
//! returned handle detaches the worker.

use std::io;
use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Local};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CaptureError;
use crate::notice::{Notice, Notifier};
use crate::store::{GalleryStore, ImageRequest};

/// Capture tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Gallery-relative directory captures are stored under.
    pub album_path: String,
    /// JPEG quality, 1–100.
    pub jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            album_path: "DCIM/Vignette".to_owned(),
            jpeg_quality: 100,
        }
    }
}

/// One RGBA8 frame copied out of the scene view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major.
    pub pixels: Vec<u8>,
}

/// Copies pixels out of the scene view.
///
/// The copy blocks and is called on the capture worker thread, never on
/// the UI thread.
pub trait FrameSource {
    /// Copy the scene view's current pixels.
    fn capture_frame(&self) -> Result<Frame, CaptureError>;
}

/// The still-photo pipeline.
///
/// Cheap to construct around shared collaborators; one instance serves any
/// number of captures, each on its own worker thread.
#[derive(Debug)]
pub struct PhotoPipeline<F, G, N> {
    source: Arc<F>,
    store: Arc<G>,
    notifier: N,
    config: CaptureConfig,
}

impl<F, G, N> PhotoPipeline<F, G, N>
where
    F: FrameSource + Send + Sync + 'static,
    G: GalleryStore + Send + Sync + 'static,
    N: Notifier + Clone + Send + 'static,
{
    /// Build a pipeline with the default configuration.
    pub fn new(source: Arc<F>, store: Arc<G>, notifier: N) -> Self {
        Self::with_config(source, store, notifier, CaptureConfig::default())
    }

    /// Build a pipeline with an explicit configuration.
    pub fn with_config(source: Arc<F>, store: Arc<G>, notifier: N, config: CaptureConfig) -> Self {
        Self {
            source,
            store,
            notifier,
            config,
        }
    }

    /// Capture one still photo of the scene view.
    ///
    /// Returns once the worker thread is spawned; the outcome arrives as a
    /// [`Notice`] later. The returned handle may be joined (tests do) or
    /// dropped to detach the worker.
    pub fn take_photo(&self) -> io::Result<thread::JoinHandle<()>> {
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let notifier = self.notifier.clone();
        let config = self.config.clone();
        let display_name = capture_display_name(&Local::now());

        thread::Builder::new()
            .name("vignette-photo".to_owned())
            .spawn(move || {
                match save_frame(&*source, &*store, &config, &display_name) {
                    Ok(()) => {
                        debug!(name = %display_name, "photo saved to gallery");
                        notifier.notify(Notice::PhotoSaved);
                    }
                    Err(error) => {
                        warn!(%error, "photo capture failed");
                        notifier.notify(Notice::PhotoFailed(error.to_string()));
                    }
                }
            })
    }
}

/// Timestamped gallery display name for a capture taken at `at`.
pub fn capture_display_name(at: &DateTime<Local>) -> String {
    format!("{}_capture.jpg", at.format("%Y%m%d%H%M%S"))
}

fn save_frame<F, G>(
    source: &F,
    store: &G,
    config: &CaptureConfig,
    display_name: &str,
) -> Result<(), CaptureError>
where
    F: FrameSource + ?Sized,
    G: GalleryStore + ?Sized,
{
    let frame = source.capture_frame()?;
    let jpeg = encode_jpeg(&frame, config.jpeg_quality)?;
    store.save_image(ImageRequest {
        display_name: display_name.to_owned(),
        relative_path: config.album_path.clone(),
        jpeg,
    })?;
    Ok(())
}

fn encode_jpeg(frame: &Frame, quality: u8) -> Result<Vec<u8>, CaptureError> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.pixels.len() != expected {
        return Err(CaptureError::Copy(format!(
            "frame buffer holds {} bytes, expected {expected}",
            frame.pixels.len()
        )));
    }

    // JPEG carries no alpha channel; drop it.
    let rgb: Vec<u8> = frame
        .pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, quality);
    encoder.write_image(&rgb, frame.width, frame.height, ExtendedColorType::Rgb8)?;
    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn solid_frame(width: u32, height: u32) -> Frame {
        Frame {
            width,
            height,
            pixels: vec![0x80; width as usize * height as usize * 4],
        }
    }

    #[test]
    fn display_name_is_timestamp_plus_suffix() {
        let at = Local.with_ymd_and_hms(2025, 3, 9, 14, 30, 5).unwrap();
        assert_eq!(capture_display_name(&at), "20250309143005_capture.jpg");
    }

    #[test]
    fn encode_produces_a_jpeg_stream() {
        let jpeg = encode_jpeg(&solid_frame(4, 2), 100).unwrap();
        assert_eq!(&jpeg[..2], &[0xff, 0xd8], "JPEG SOI marker");
    }

    #[test]
    fn encode_rejects_a_short_pixel_buffer() {
        let frame = Frame {
            width: 4,
            height: 4,
            pixels: vec![0; 7],
        };

        let result = encode_jpeg(&frame, 100);

        assert!(matches!(result, Err(CaptureError::Copy(_))));
    }

    #[test]
    fn default_config_targets_the_capture_album_at_full_quality() {
        let config = CaptureConfig::default();
        assert_eq!(config.album_path, "DCIM/Vignette");
        assert_eq!(config.jpeg_quality, 100);
    }
}
