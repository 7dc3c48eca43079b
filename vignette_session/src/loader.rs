// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asset-loading seam: the host's renderable factory.
//!
//! Loading a model and building the view-backed overlay control are both
//! asynchronous and may fail independently. The session issues the two
//! loads concurrently and joins them; implementations only need to resolve
//! one asset at a time.
//!
//! Futures returned here are awaited on the UI-owned thread, so
//! implementations need not be `Send`.

use serde::{Deserialize, Serialize};
use vignette_scene::ModelRenderable;

use crate::catalog::AssetKey;
use crate::error::LoadError;

/// Styling for the delete control wrapped by the overlay renderable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Button label.
    pub label: String,
    /// Background color as RGB.
    pub background: [u8; 3],
    /// Label color as RGB.
    pub text: [u8; 3],
}

impl OverlayStyle {
    /// The red-background, white-text "Delete" control.
    pub fn delete() -> Self {
        Self {
            label: "Delete".to_owned(),
            background: [0xff, 0x00, 0x00],
            text: [0xff, 0xff, 0xff],
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::delete()
    }
}

/// Resolves catalog assets into renderables.
#[allow(
    async_fn_in_trait,
    reason = "futures are awaited on the UI-owned thread; no auto-trait bound is wanted"
)]
pub trait AssetSource {
    /// Loaded 3D model renderable.
    type Model: ModelRenderable;
    /// View-backed overlay renderable.
    type Overlay;

    /// Load the 3D model renderable for `asset`.
    async fn load_model(&self, asset: AssetKey) -> Result<Self::Model, LoadError>;

    /// Build the overlay renderable wrapping a control styled by `style`.
    async fn build_overlay(&self, style: &OverlayStyle) -> Result<Self::Overlay, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_the_delete_control() {
        let style = OverlayStyle::default();
        assert_eq!(style.label, "Delete");
        assert_eq!(style.background, [0xff, 0x00, 0x00]);
        assert_eq!(style.text, [0xff, 0xff, 0xff]);
    }
}
