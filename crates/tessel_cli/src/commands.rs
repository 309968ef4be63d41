//! Subcommand implementations

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tessel_core::Rect;
use tessel_display_list::testing::CallLogSurface;
use tessel_display_list::{
    DisplayList, ItemType, Recorder, ReplayConfig, ReplaySummary, Replayer, ResourceHeap,
};
use tracing::{debug, info};

/// Read a JSON display list from disk
pub fn load_display_list(path: &Path) -> Result<DisplayList> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let list: DisplayList = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse display list {}", path.display()))?;
    info!(items = list.len(), path = %path.display(), "loaded display list");
    Ok(list)
}

// ─────────────────────────────────────────────────────────────────────────────
// dump
// ─────────────────────────────────────────────────────────────────────────────

/// Debug trace of the whole list, optionally followed by per-type counts
pub fn dump_report(list: &DisplayList, counts: bool) -> String {
    let mut out = list.to_string();
    out.push('\n');

    if counts {
        let mut counts: Vec<(ItemType, usize)> = list.item_type_counts().into_iter().collect();
        counts.sort();
        out.push('\n');
        for (item_type, count) in counts {
            let _ = writeln!(out, "{item_type:<32} {count}");
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds of one item, measured in the state it was recorded in
#[derive(Clone, Debug, PartialEq)]
pub struct ItemBounds {
    pub index: usize,
    pub item_type: ItemType,
    pub local: Option<Rect>,
    pub global: Option<Rect>,
}

/// Measure every item while tracking stroke thickness through a recorder
///
/// Resource-bearing items never change graphics state, so they are measured
/// but not applied.
pub fn measure_bounds(list: &DisplayList) -> Result<Vec<ItemBounds>> {
    let mut tracker = Recorder::new();
    let mut bounds = Vec::with_capacity(list.len());

    for (index, item) in list.iter().enumerate() {
        let item_type = item.item_type();
        bounds.push(ItemBounds {
            index,
            item_type,
            local: item.local_bounds(&tracker),
            global: item.global_bounds(),
        });

        if item_type.uses_resource() {
            debug!(index, item = %item_type, "skipping resource item while measuring");
            continue;
        }
        item.apply(&mut tracker)
            .with_context(|| format!("Failed to apply item {index} ({item_type})"))?;
    }
    Ok(bounds)
}

pub fn bounds_report(bounds: &[ItemBounds], all: bool) -> String {
    let mut out = String::new();
    for entry in bounds {
        let rect = entry.local.or(entry.global);
        match rect {
            Some(rect) => {
                let _ = writeln!(out, "{:>5}  {:<32} {rect}", entry.index, entry.item_type);
            }
            None if all => {
                let _ = writeln!(out, "{:>5}  {:<32} -", entry.index, entry.item_type);
            }
            None => {}
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// replay
// ─────────────────────────────────────────────────────────────────────────────

/// Result of replaying onto the call-logging surface
#[derive(Clone, Debug)]
pub struct ReplayOutcome {
    pub summary: ReplaySummary,
    pub surface_calls: usize,
}

/// Replay `list` onto a call-logging surface
///
/// Fails with the index of the first item that could not be applied.
pub fn replay(list: &DisplayList, heap: &ResourceHeap, config: ReplayConfig) -> Result<ReplayOutcome> {
    let mut surface = CallLogSurface::new();
    let summary = Replayer::new(&mut surface, heap)
        .with_config(config)
        .replay(list)
        .context("Replay aborted")?;

    Ok(ReplayOutcome {
        summary,
        surface_calls: surface.len(),
    })
}

pub fn replay_report(outcome: &ReplayOutcome) -> String {
    let summary = &outcome.summary;
    let mut out = String::new();
    let _ = writeln!(out, "items applied:       {}", summary.items_applied);
    let _ = writeln!(out, "resources resolved:  {}", summary.resources_resolved);
    let _ = writeln!(out, "surface calls:       {}", outcome.surface_calls);
    let _ = writeln!(out, "save depth:          {}", summary.save_depth);
    let _ = writeln!(out, "layer depth:         {}", summary.transparency_layer_depth);
    let _ = writeln!(
        out,
        "balanced:            {}",
        if summary.is_balanced() { "yes" } else { "no" }
    );
    out
}
