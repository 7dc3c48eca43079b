// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model catalog: the fixed list of placeable models and the current
//! selection.
//!
//! The catalog is populated once at startup and never reordered. Selection
//! is single: picking an entry replaces the previous pick. Keys are opaque
//! handles the host resolves against its own asset storage.

/// Opaque identifier of a 3D model asset, resolved by the host's loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetKey(pub u32);

/// Opaque identifier of a catalog thumbnail, resolved by the host's UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThumbnailKey(pub u32);

/// One placeable model: thumbnail, display name, and asset source.
///
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Thumbnail shown in the model picker.
    pub thumbnail: ThumbnailKey,
    /// Display name shown in the picker and header.
    pub title: String,
    /// Asset source for the 3D model renderable.
    pub asset: AssetKey,
}

impl CatalogEntry {
    /// Create a catalog entry.
    pub fn new(thumbnail: ThumbnailKey, title: impl Into<String>, asset: AssetKey) -> Self {
        Self {
            thumbnail,
            title: title.into(),
            asset,
        }
    }
}

/// Fixed ordered list of placeable models plus the current selection.
///
/// A non-empty catalog always has a selected entry; the first entry is
/// selected initially.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    selected: usize,
}

impl Catalog {
    /// Build a catalog from its entries. The first entry starts selected.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    /// Select the entry at `index`, returning it. Out-of-range indices
    /// leave the selection unchanged and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&CatalogEntry> {
        if index < self.entries.len() {
            self.selected = index;
            self.entries.get(index)
        } else {
            None
        }
    }

    /// The currently selected entry, or `None` for an empty catalog.
    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.entries.get(self.selected)
    }

    /// Index of the currently selected entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}
