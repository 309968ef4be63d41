//! Small value types carried by drawing items

use std::fmt;

use serde::{Deserialize, Serialize};
use tessel_core::{BlendMode, CompositeOperator, Size};

/// Index of a glyph in its font
pub type GlyphId = u16;

/// Pen advance after drawing a glyph
pub type GlyphAdvance = Size;

/// Resampling quality when drawing scaled images
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationQuality {
    #[default]
    Default,
    DoNotInterpolate,
    Low,
    Medium,
    High,
}

impl fmt::Display for InterpolationQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterpolationQuality::Default => "default",
            InterpolationQuality::DoNotInterpolate => "do-not-interpolate",
            InterpolationQuality::Low => "low",
            InterpolationQuality::Medium => "medium",
            InterpolationQuality::High => "high",
        })
    }
}

/// How an image is composited when drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePaintingOptions {
    pub composite_operator: CompositeOperator,
    pub blend_mode: BlendMode,
    pub interpolation_quality: InterpolationQuality,
}

impl ImagePaintingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_composite_operator(mut self, op: CompositeOperator) -> Self {
        self.composite_operator = op;
        self
    }

    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    pub fn with_interpolation_quality(mut self, quality: InterpolationQuality) -> Self {
        self.interpolation_quality = quality;
        self
    }
}

impl fmt::Display for ImagePaintingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "composite={} blend={} interpolation={}",
            self.composite_operator, self.blend_mode, self.interpolation_quality
        )
    }
}

/// Glyph rasterization mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSmoothingMode {
    #[default]
    AutoSmoothing,
    NoSmoothing,
    Antialiased,
    SubpixelAntialiased,
}

impl fmt::Display for FontSmoothingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontSmoothingMode::AutoSmoothing => "auto",
            FontSmoothingMode::NoSmoothing => "none",
            FontSmoothingMode::Antialiased => "antialiased",
            FontSmoothingMode::SubpixelAntialiased => "subpixel-antialiased",
        })
    }
}

/// Kind of underline drawn under a document marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentMarkerLineStyleMode {
    TextCheckingDictationPhraseWithAlternatives,
    #[default]
    Spelling,
    Grammar,
    AutocorrectionReplacement,
    DictationAlternatives,
}

impl fmt::Display for DocumentMarkerLineStyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentMarkerLineStyleMode::TextCheckingDictationPhraseWithAlternatives => {
                "text-checking-dictation-phrase-with-alternatives"
            }
            DocumentMarkerLineStyleMode::Spelling => "spelling",
            DocumentMarkerLineStyleMode::Grammar => "grammar",
            DocumentMarkerLineStyleMode::AutocorrectionReplacement => "autocorrection-replacement",
            DocumentMarkerLineStyleMode::DictationAlternatives => "dictation-alternatives",
        })
    }
}

/// Full style passed to a surface when drawing marker dots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMarkerLineStyle {
    pub mode: DocumentMarkerLineStyleMode,
    pub should_use_dark_appearance: bool,
}
