// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement session: debouncing, object lifecycle, and the per-frame
//! overlay tick.

use core::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vignette_gesture::double_tap::{DoubleTapGate, TapDecision};
use vignette_gesture::reveal::RevealLatch;
use vignette_scene::billboard::facing_rotation;
use vignette_scene::{Manipulator, ModelRenderable, OverlayRegistry, PlaneHit, StageGraph};

use crate::catalog::{AssetKey, Catalog};
use crate::error::PlaceError;
use crate::loader::{AssetSource, OverlayStyle};

/// Session tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Window within which the second tap of a pair must arrive.
    pub double_tap_tolerance_ms: u64,
    /// Styling of the per-object delete control.
    pub overlay: OverlayStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            double_tap_tolerance_ms: DoubleTapGate::DEFAULT_TOLERANCE_MS,
            overlay: OverlayStyle::default(),
        }
    }
}

/// A confirmed placement: where, and which asset.
///
/// Produced by [`PlacementSession::on_plane_tap`] and consumed by
/// [`PlacementSession::place`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    /// The plane hit the object will be anchored at.
    pub hit: PlaneHit,
    /// The selected catalog asset.
    pub asset: AssetKey,
}

/// Node keys of a freshly placed object hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedKeys<K> {
    /// The anchor fixed at the plane hit.
    pub anchor: K,
    /// The transformable model node, child of the anchor.
    pub model: K,
    /// The overlay node, child of the model node.
    pub overlay: K,
}

/// One placed object: its node hierarchy, the not-yet-revealed overlay
/// renderable, and the reveal latch.
struct Placed<S: StageGraph> {
    anchor: S::NodeKey,
    model: S::NodeKey,
    overlay: S::NodeKey,
    pending: Option<S::Overlay>,
    reveal: RevealLatch,
}

/// The placement session controller.
///
/// Owns all session state — catalog selection, the double-tap gate, the
/// placed-object table, and the live-overlay registry — and mutates the
/// scene only through the [`StageGraph`] passed into each call.
pub struct PlacementSession<S: StageGraph> {
    config: SessionConfig,
    gate: DoubleTapGate,
    catalog: Catalog,
    registry: OverlayRegistry<S::NodeKey>,
    placed: Vec<Placed<S>>,
}

impl<S: StageGraph> PlacementSession<S> {
    /// Create a session over `catalog` with the default configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    /// Create a session over `catalog` with an explicit configuration.
    pub fn with_config(catalog: Catalog, config: SessionConfig) -> Self {
        Self {
            gate: DoubleTapGate::with_tolerance(config.double_tap_tolerance_ms),
            config,
            catalog,
            registry: OverlayRegistry::new(),
            placed: Vec::new(),
        }
    }

    /// The model catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The model catalog, for selection changes.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// The live-overlay registry.
    pub fn registry(&self) -> &OverlayRegistry<S::NodeKey> {
        &self.registry
    }

    /// Number of currently placed objects.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Feed a tap-on-plane event arriving at `now_ms`.
    ///
    /// Returns a [`PlacementRequest`] only when this tap completes a double
    /// tap within the tolerance and a catalog entry is selected. The gate is
    /// reset on confirmation, so the user can retry immediately if the
    /// subsequent placement fails.
    pub fn on_plane_tap(&mut self, hit: PlaneHit, now_ms: u64) -> Option<PlacementRequest> {
        if self.gate.observe(now_ms) != TapDecision::Confirmed {
            return None;
        }
        let Some(entry) = self.catalog.selected() else {
            warn!("double tap confirmed but the catalog is empty");
            return None;
        };
        debug!(title = %entry.title, "placement confirmed");
        Some(PlacementRequest {
            hit,
            asset: entry.asset,
        })
    }

    /// Place an object for a confirmed request.
    ///
    /// Loads the model and builds the overlay control concurrently, and
    /// proceeds only on joint success; the first load failure cancels the
    /// sibling load and aborts with no scene mutation and no registry entry.
    /// On success the hierarchy is `anchor → model → overlay`, the model
    /// node is selected for manipulation, and the overlay node sits at
    /// `(0, bounding-box height, 0)` with its renderable still unset.
    pub async fn place<L, M>(
        &mut self,
        scene: &mut S,
        manipulator: &mut M,
        loader: &L,
        request: PlacementRequest,
    ) -> Result<PlacedKeys<S::NodeKey>, PlaceError>
    where
        L: AssetSource<Model = S::Model, Overlay = S::Overlay>,
        M: Manipulator<S::NodeKey>,
    {
        let loaded = tokio::try_join!(
            loader.load_model(request.asset),
            loader.build_overlay(&self.config.overlay),
        );
        let (model, overlay) = match loaded {
            Ok(pair) => pair,
            Err(error) => {
                warn!(%error, "placement aborted: asset load failed");
                return Err(error.into());
            }
        };
        let Some(bounds) = model.bounding_box() else {
            warn!("placement aborted: model exposes no bounding box");
            return Err(PlaceError::UnboundedModel);
        };

        let anchor = scene.create_anchor(&request.hit.pose);
        let model_node = scene.create_node(anchor);
        scene.attach_model(model_node, model);
        manipulator.select(model_node);

        let overlay_node = scene.create_node(model_node);
        scene.set_local_position(overlay_node, Vector3::new(0.0, bounds.height(), 0.0));

        self.registry.insert(overlay_node);
        self.placed.push(Placed {
            anchor,
            model: model_node,
            overlay: overlay_node,
            pending: Some(overlay),
            reveal: RevealLatch::new(),
        });
        debug!(?anchor, ?model_node, ?overlay_node, "object placed");
        Ok(PlacedKeys {
            anchor,
            model: model_node,
            overlay: overlay_node,
        })
    }

    /// Handle a tap on a placed model node.
    ///
    /// A tap that is not part of an in-progress manipulation reveals the
    /// object's delete overlay; once revealed it stays revealed, and later
    /// qualifying taps are no-ops.
    pub fn on_model_tap<M>(&mut self, scene: &mut S, manipulator: &M, node: S::NodeKey)
    where
        M: Manipulator<S::NodeKey>,
    {
        if manipulator.is_transforming(node) {
            return;
        }
        let Some(placed) = self.placed.iter_mut().find(|p| p.model == node) else {
            return;
        };
        if placed.reveal.trip()
            && let Some(overlay) = placed.pending.take()
        {
            scene.attach_overlay(placed.overlay, overlay);
            debug!(node = ?placed.overlay, "delete overlay revealed");
        }
    }

    /// Handle activation of a placed object's delete control.
    ///
    /// Removes the anchor subtree — and with it the model and overlay
    /// nodes — and drops the overlay from the registry. Returns `true` if
    /// `node` belonged to a placed object.
    pub fn on_overlay_activated(&mut self, scene: &mut S, node: S::NodeKey) -> bool {
        let Some(index) = self.placed.iter().position(|p| p.overlay == node) else {
            return false;
        };
        let placed = self.placed.remove(index);
        scene.remove_subtree(placed.anchor);
        self.registry.remove(placed.overlay);
        debug!(anchor = ?placed.anchor, "placed object deleted");
        true
    }

    /// Per-frame tick: turn every revealed overlay towards the camera.
    ///
    /// Overlays whose renderable is still unset are skipped. A node placed
    /// during frame N gets its first update in frame N+1.
    pub fn on_frame(&self, scene: &mut S) {
        let camera = scene.camera_position();
        for node in self.registry.iter() {
            if !scene.has_overlay(node) {
                continue;
            }
            let position = scene.world_position(node);
            scene.set_world_rotation(node, facing_rotation(&position, &camera));
        }
    }

    /// Tear the session down with its scene: removes every placed object
    /// and resets the gesture state. The catalog and selection survive.
    pub fn end_scene(&mut self, scene: &mut S) {
        for placed in self.placed.drain(..) {
            scene.remove_subtree(placed.anchor);
        }
        self.registry.clear();
        self.gate.reset();
        debug!("scene ended, session cleared");
    }
}

impl<S: StageGraph> fmt::Debug for PlacementSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementSession")
            .field("placed", &self.placed.len())
            .field("registry", &self.registry.len())
            .field("armed", &self.gate.is_armed())
            .finish_non_exhaustive()
    }
}
