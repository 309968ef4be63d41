//! Replaying display lists onto a surface
//!
//! The replayer applies items strictly in the order they were recorded,
//! resolving resource identifiers through a [`ResourceHeap`]. The first item
//! that cannot be applied aborts the replay; items before it have already
//! reached the surface.

use tracing::{debug, error, trace, warn};

use crate::display_list::DisplayList;
use crate::error::{ReplayError, Result};
use crate::items::ItemType;
use crate::resources::{FilterResults, ResourceHeap};
use crate::surface::DrawingSurface;

/// Configuration for the replayer.
#[derive(Clone, Debug)]
pub struct ReplayConfig {
    /// Log every applied item at trace level.
    pub trace_items: bool,
    /// Warn when save/restore or transparency layers are left unbalanced.
    pub check_balance: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            trace_items: false,
            check_balance: true,
        }
    }
}

impl ReplayConfig {
    /// Create a config for testing (quiet, no balance warnings).
    pub fn testing() -> Self {
        Self {
            trace_items: false,
            check_balance: false,
        }
    }

    /// Create a config that traces every item and checks balance.
    pub fn strict() -> Self {
        Self {
            trace_items: true,
            check_balance: true,
        }
    }

    /// Enable or disable per-item tracing.
    pub fn with_trace_items(mut self, trace_items: bool) -> Self {
        self.trace_items = trace_items;
        self
    }

    /// Enable or disable the balance check.
    pub fn with_balance_check(mut self, check_balance: bool) -> Self {
        self.check_balance = check_balance;
        self
    }
}

/// What a completed replay did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub items_applied: usize,
    pub resources_resolved: usize,
    /// Saves minus restores
    pub save_depth: isize,
    /// Layers begun minus layers the surface actually closed
    pub transparency_layer_depth: isize,
}

impl ReplaySummary {
    pub fn is_balanced(&self) -> bool {
        self.save_depth == 0 && self.transparency_layer_depth == 0
    }
}

/// Drives display lists onto a surface
pub struct Replayer<'a> {
    surface: &'a mut dyn DrawingSurface,
    resources: &'a ResourceHeap,
    filter_results: FilterResults,
    config: ReplayConfig,
}

impl<'a> Replayer<'a> {
    pub fn new(surface: &'a mut dyn DrawingSurface, resources: &'a ResourceHeap) -> Self {
        Self {
            surface,
            resources,
            filter_results: FilterResults::new(),
            config: ReplayConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Filter outputs cached by the surface so far
    pub fn filter_results(&self) -> &FilterResults {
        &self.filter_results
    }

    /// Apply every item of `list` in order
    pub fn replay(&mut self, list: &DisplayList) -> Result<ReplaySummary> {
        debug!(items = list.len(), "replay started");
        let mut summary = ReplaySummary::default();

        for (index, item) in list.iter().enumerate() {
            let item_type = item.item_type();
            if self.config.trace_items {
                trace!(index, item = %item_type, "applying item");
            }

            // An end with no open layer never reaches the surface
            let closes_layer = item_type == ItemType::EndTransparencyLayer
                && self.surface.is_in_transparency_layer();

            let resolved = item
                .apply_with_resources(&mut *self.surface, self.resources, &mut self.filter_results)
                .map_err(|source| {
                    error!(index, item = %item_type, "replay aborted");
                    ReplayError::Item { index, source }
                })?;

            summary.items_applied += 1;
            if resolved {
                summary.resources_resolved += 1;
            }
            match item_type {
                ItemType::Save => summary.save_depth += 1,
                ItemType::Restore => summary.save_depth -= 1,
                ItemType::BeginTransparencyLayer => summary.transparency_layer_depth += 1,
                ItemType::EndTransparencyLayer if closes_layer => {
                    summary.transparency_layer_depth -= 1
                }
                ItemType::EndTransparencyLayer => {
                    debug!(index, "end of transparency layer skipped, no layer open")
                }
                _ => {}
            }
        }

        if self.config.check_balance {
            if summary.save_depth != 0 {
                warn!(depth = summary.save_depth, "unbalanced save/restore in display list");
            }
            if summary.transparency_layer_depth != 0 {
                warn!(
                    depth = summary.transparency_layer_depth,
                    "unbalanced transparency layers in display list"
                );
            }
        }

        debug!(
            applied = summary.items_applied,
            resources = summary.resources_resolved,
            "replay finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplyError;
    use crate::items::{
        BeginTransparencyLayer, DrawImageBuffer, EndTransparencyLayer, FillRect, Restore, Save,
    };
    use crate::resources::ImageBuffer;
    use crate::testing::{CallLogSurface, SurfaceCall};
    use crate::types::ImagePaintingOptions;
    use tessel_core::{Rect, RenderingResourceId, Size};

    fn draw_buffer(id: u64) -> DrawImageBuffer {
        DrawImageBuffer::new(
            RenderingResourceId::new(id),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            ImagePaintingOptions::default(),
        )
    }

    #[test]
    fn test_replay_applies_in_order() {
        let mut list = DisplayList::new();
        list.append(Save);
        list.append(FillRect::new(Rect::new(0.0, 0.0, 1.0, 1.0)));
        list.append(Restore);

        let heap = ResourceHeap::new();
        let mut surface = CallLogSurface::new();
        let summary = Replayer::new(&mut surface, &heap)
            .with_config(ReplayConfig::testing())
            .replay(&list)
            .unwrap();

        assert_eq!(summary.items_applied, 3);
        assert!(summary.is_balanced());
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::Save,
                SurfaceCall::FillRect(Rect::new(0.0, 0.0, 1.0, 1.0)),
                SurfaceCall::Restore,
            ]
        );
    }

    #[test]
    fn test_replay_resolves_resources() {
        let mut list = DisplayList::new();
        list.append(draw_buffer(4));

        let mut heap = ResourceHeap::new();
        heap.add_image_buffer(ImageBuffer::new(RenderingResourceId::new(4), Size::new(10.0, 10.0)));
        let mut surface = CallLogSurface::new();
        let summary = Replayer::new(&mut surface, &heap).replay(&list).unwrap();

        assert_eq!(summary.resources_resolved, 1);
        assert!(matches!(
            surface.last_call(),
            Some(SurfaceCall::DrawImageBuffer { image_buffer, .. }) if *image_buffer == RenderingResourceId::new(4)
        ));
    }

    #[test]
    fn test_replay_aborts_at_missing_resource() {
        let mut list = DisplayList::new();
        list.append(Save);
        list.append(draw_buffer(99));
        list.append(Restore);

        let heap = ResourceHeap::new();
        let mut surface = CallLogSurface::new();
        let err = Replayer::new(&mut surface, &heap)
            .with_config(ReplayConfig::testing())
            .replay(&list)
            .unwrap_err();

        assert_eq!(err.index(), 1);
        assert_eq!(
            err,
            ReplayError::Item {
                index: 1,
                source: ApplyError::MissingResource {
                    item_type: ItemType::DrawImageBuffer,
                    id: RenderingResourceId::new(99),
                },
            }
        );
        // Only the item before the failure reached the surface
        assert_eq!(surface.calls(), &[SurfaceCall::Save]);
    }

    #[test]
    fn test_unbalanced_summary() {
        let mut list = DisplayList::new();
        list.append(Save);
        list.append(Save);
        list.append(Restore);

        let heap = ResourceHeap::new();
        let mut surface = CallLogSurface::new();
        let summary = Replayer::new(&mut surface, &heap).replay(&list).unwrap();
        assert_eq!(summary.save_depth, 1);
        assert!(!summary.is_balanced());
    }

    #[test]
    fn test_skipped_layer_end_is_not_counted() {
        let mut list = DisplayList::new();
        list.append(EndTransparencyLayer);
        list.append(BeginTransparencyLayer::new(0.5));
        list.append(EndTransparencyLayer);

        let heap = ResourceHeap::new();
        let mut surface = CallLogSurface::new();
        let summary = Replayer::new(&mut surface, &heap)
            .with_config(ReplayConfig::testing())
            .replay(&list)
            .unwrap();

        assert_eq!(summary.items_applied, 3);
        assert_eq!(summary.transparency_layer_depth, 0);
        assert!(summary.is_balanced());
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::BeginTransparencyLayer(0.5),
                SurfaceCall::EndTransparencyLayer,
            ]
        );
    }

    #[test]
    fn test_config_builders() {
        let config = ReplayConfig::testing().with_trace_items(true);
        assert!(config.trace_items);
        assert!(!config.check_balance);
        assert!(ReplayConfig::strict().check_balance);
    }
}
