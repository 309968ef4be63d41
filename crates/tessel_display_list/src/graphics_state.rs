//! Batched paint-state changes
//!
//! A [`GraphicsState`] holds only the properties that changed; unset fields
//! leave the surface's current value alone.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessel_core::{BlendMode, Color, CompositeOperator, Size};
use tessel_paint::StrokeStyle;

use crate::types::InterpolationQuality;

/// Shadow cast by subsequent drawing
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    pub offset: Size,
    pub blur_radius: f32,
    pub color: Color,
}

impl fmt::Display for DropShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset ({},{}) blur {} color {}",
            self.offset.width, self.offset.height, self.blur_radius, self.color
        )
    }
}

/// Set of paint-state properties to change in one step
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicsState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_thickness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_operator: Option<CompositeOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_shadow: Option<DropShadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_antialias: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_interpolation_quality: Option<InterpolationQuality>,
}

impl GraphicsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_stroke_thickness(mut self, thickness: f32) -> Self {
        self.stroke_thickness = Some(thickness);
        self
    }

    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke_style = Some(style);
        self
    }

    pub fn with_composite_operator(mut self, op: CompositeOperator) -> Self {
        self.composite_operator = Some(op);
        self
    }

    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = Some(mode);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_drop_shadow(mut self, shadow: DropShadow) -> Self {
        self.drop_shadow = Some(shadow);
        self
    }

    pub fn with_antialiasing(mut self, enabled: bool) -> Self {
        self.should_antialias = Some(enabled);
        self
    }

    pub fn with_image_interpolation_quality(mut self, quality: InterpolationQuality) -> Self {
        self.image_interpolation_quality = Some(quality);
        self
    }

    /// Overlay `other` on top of this state; properties set in `other` win
    pub fn merge(&mut self, other: &GraphicsState) {
        fn take<T: Copy>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }

        take(&mut self.fill_color, other.fill_color);
        take(&mut self.stroke_color, other.stroke_color);
        take(&mut self.stroke_thickness, other.stroke_thickness);
        take(&mut self.stroke_style, other.stroke_style);
        take(&mut self.composite_operator, other.composite_operator);
        take(&mut self.blend_mode, other.blend_mode);
        take(&mut self.alpha, other.alpha);
        take(&mut self.drop_shadow, other.drop_shadow);
        take(&mut self.should_antialias, other.should_antialias);
        take(
            &mut self.image_interpolation_quality,
            other.image_interpolation_quality,
        );
    }

    /// Number of properties this state changes
    pub fn changed_count(&self) -> usize {
        [
            self.fill_color.is_some(),
            self.stroke_color.is_some(),
            self.stroke_thickness.is_some(),
            self.stroke_style.is_some(),
            self.composite_operator.is_some(),
            self.blend_mode.is_some(),
            self.alpha.is_some(),
            self.drop_shadow.is_some(),
            self.should_antialias.is_some(),
            self.image_interpolation_quality.is_some(),
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.changed_count() == 0
    }
}

impl fmt::Display for GraphicsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut field = |f: &mut fmt::Formatter<'_>, name: &str, value: &dyn fmt::Display| {
            let sep = if first { "" } else { ", " };
            first = false;
            write!(f, "{sep}{name}={value}")
        };

        f.write_str("[")?;
        if let Some(v) = &self.fill_color {
            field(f, "fill-color", v)?;
        }
        if let Some(v) = &self.stroke_color {
            field(f, "stroke-color", v)?;
        }
        if let Some(v) = &self.stroke_thickness {
            field(f, "stroke-thickness", v)?;
        }
        if let Some(v) = &self.stroke_style {
            field(f, "stroke-style", v)?;
        }
        if let Some(v) = &self.composite_operator {
            field(f, "composite-operator", v)?;
        }
        if let Some(v) = &self.blend_mode {
            field(f, "blend-mode", v)?;
        }
        if let Some(v) = &self.alpha {
            field(f, "alpha", v)?;
        }
        if let Some(v) = &self.drop_shadow {
            field(f, "drop-shadow", v)?;
        }
        if let Some(v) = &self.should_antialias {
            field(f, "antialias", v)?;
        }
        if let Some(v) = &self.image_interpolation_quality {
            field(f, "image-interpolation-quality", v)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_set_fields_only() {
        let mut state = GraphicsState::new()
            .with_fill_color(Color::RED)
            .with_alpha(0.5);
        state.merge(&GraphicsState::new().with_alpha(1.0).with_stroke_thickness(2.0));

        assert_eq!(state.fill_color, Some(Color::RED));
        assert_eq!(state.alpha, Some(1.0));
        assert_eq!(state.stroke_thickness, Some(2.0));
        assert_eq!(state.changed_count(), 3);
    }

    #[test]
    fn test_display_lists_set_fields() {
        let state = GraphicsState::new()
            .with_stroke_thickness(2.0)
            .with_blend_mode(BlendMode::Multiply);
        assert_eq!(state.to_string(), "[stroke-thickness=2, blend-mode=multiply]");
        assert_eq!(GraphicsState::new().to_string(), "[]");
        assert!(GraphicsState::new().is_empty());
    }
}
