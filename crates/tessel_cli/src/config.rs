//! Resource manifest handling
//!
//! A manifest is a TOML file describing the resources a display list refers
//! to by identifier. Replaying against it lets resource-bearing items resolve
//! without a real renderer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tessel_core::{RenderingResourceId, Size};
use tessel_display_list::{Font, FontMetrics, ImageBuffer, MediaPlayer, NativeImage, ResourceHeap};

/// Top-level resource manifest (heap.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ResourceManifest {
    #[serde(default)]
    pub image_buffers: Vec<ImageBufferEntry>,
    #[serde(default)]
    pub native_images: Vec<NativeImageEntry>,
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
    #[serde(default)]
    pub media_players: Vec<MediaPlayerEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ImageBufferEntry {
    pub id: u64,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_resolution_scale")]
    pub resolution_scale: f32,
}

fn default_resolution_scale() -> f32 {
    1.0
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NativeImageEntry {
    pub id: u64,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FontEntry {
    pub id: u64,
    #[serde(default = "default_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: f32,
    /// Defaults to 80% of the font size
    #[serde(default)]
    pub ascent: Option<f32>,
    /// Defaults to 20% of the font size
    #[serde(default)]
    pub descent: Option<f32>,
}

fn default_family() -> String {
    "sans-serif".to_string()
}

fn default_font_size() -> f32 {
    16.0
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MediaPlayerEntry {
    pub id: u64,
    #[serde(default = "default_media_width")]
    pub width: f32,
    #[serde(default = "default_media_height")]
    pub height: f32,
}

fn default_media_width() -> f32 {
    640.0
}

fn default_media_height() -> f32 {
    480.0
}

impl ResourceManifest {
    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("No resource manifest found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let manifest: ResourceManifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize manifest")
    }

    pub fn resource_count(&self) -> usize {
        self.image_buffers.len()
            + self.native_images.len()
            + self.fonts.len()
            + self.media_players.len()
    }

    /// Build a resource heap holding every entry
    ///
    /// An identifier may appear only once per resource kind.
    pub fn into_heap(self) -> Result<ResourceHeap> {
        let mut heap = ResourceHeap::new();

        let mut seen = HashSet::new();
        for entry in self.image_buffers {
            ensure_unique(&mut seen, "image buffer", entry.id)?;
            heap.add_image_buffer(
                ImageBuffer::new(id(entry.id), Size::new(entry.width, entry.height))
                    .with_resolution_scale(entry.resolution_scale),
            );
        }

        let mut seen = HashSet::new();
        for entry in self.native_images {
            ensure_unique(&mut seen, "native image", entry.id)?;
            heap.add_native_image(NativeImage::new(
                id(entry.id),
                Size::new(entry.width, entry.height),
            ));
        }

        let mut seen = HashSet::new();
        for entry in self.fonts {
            ensure_unique(&mut seen, "font", entry.id)?;
            let metrics = FontMetrics::new(
                entry.ascent.unwrap_or(entry.size * 0.8),
                entry.descent.unwrap_or(entry.size * 0.2),
            );
            heap.add_font(Font::new(id(entry.id), entry.family, entry.size, metrics));
        }

        let mut seen = HashSet::new();
        for entry in self.media_players {
            ensure_unique(&mut seen, "media player", entry.id)?;
            heap.add_media_player(MediaPlayer::new(
                id(entry.id),
                Size::new(entry.width, entry.height),
            ));
        }

        Ok(heap)
    }
}

fn id(raw: u64) -> RenderingResourceId {
    RenderingResourceId::new(raw)
}

fn ensure_unique(seen: &mut HashSet<u64>, kind: &str, raw: u64) -> Result<()> {
    if !seen.insert(raw) {
        anyhow::bail!("Duplicate {kind} identifier {raw} in resource manifest");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [[image_buffers]]
        id = 1
        width = 32
        height = 32
        resolution_scale = 2.0

        [[native_images]]
        id = 2
        width = 64
        height = 48

        [[fonts]]
        id = 3
        family = "Inter"

        [[media_players]]
        id = 4
    "#;

    #[test]
    fn test_parse_with_defaults() {
        let manifest = ResourceManifest::from_toml(MANIFEST).unwrap();
        assert_eq!(manifest.resource_count(), 4);
        assert_eq!(manifest.fonts[0].size, 16.0);
        assert_eq!(manifest.media_players[0].width, 640.0);
        assert_eq!(manifest.image_buffers[0].resolution_scale, 2.0);
    }

    #[test]
    fn test_into_heap() {
        let heap = ResourceManifest::from_toml(MANIFEST)
            .unwrap()
            .into_heap()
            .unwrap();

        assert_eq!(heap.len(), 4);
        let font = heap.font(RenderingResourceId::new(3)).unwrap();
        assert_eq!(font.family(), "Inter");
        assert_eq!(font.metrics().ascent, 12.8);
        let buffer = heap.image_buffer(RenderingResourceId::new(1)).unwrap();
        assert_eq!(buffer.resolution_scale(), 2.0);
        assert!(heap.native_image(RenderingResourceId::new(2)).is_some());
        assert!(heap.media_player(RenderingResourceId::new(4)).is_some());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = ResourceManifest::from_toml("").unwrap();
        assert_eq!(manifest.resource_count(), 0);
        assert!(manifest.into_heap().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let manifest = ResourceManifest::from_toml(
            r#"
            [[fonts]]
            id = 7
            [[fonts]]
            id = 7
            "#,
        )
        .unwrap();
        let err = manifest.into_heap().unwrap_err();
        assert!(err.to_string().contains("Duplicate font identifier 7"));
    }

    #[test]
    fn test_same_identifier_across_kinds_is_allowed() {
        let manifest = ResourceManifest::from_toml(
            r#"
            [[image_buffers]]
            id = 5
            width = 1
            height = 1
            [[native_images]]
            id = 5
            width = 1
            height = 1
            "#,
        )
        .unwrap();
        assert_eq!(manifest.into_heap().unwrap().len(), 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let manifest = ResourceManifest::from_toml(MANIFEST).unwrap();
        let text = manifest.to_toml().unwrap();
        let parsed = ResourceManifest::from_toml(&text).unwrap();
        assert_eq!(parsed.resource_count(), 4);
    }

    #[test]
    fn test_missing_file() {
        let err = ResourceManifest::load(Path::new("/nonexistent/heap.toml")).unwrap_err();
        assert!(err.to_string().contains("No resource manifest found"));
    }
}
