//! Stroke and fill style enums

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Alternating dash and gap lengths
pub type DashArray = SmallVec<[f32; 4]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Fill rule used when clipping or filling with a path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Line style for text decorations and borders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeStyle {
    NoStroke,
    #[default]
    Solid,
    Double,
    Dotted,
    Dashed,
    Wavy,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        })
    }
}

impl fmt::Display for WindRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindRule::NonZero => "non-zero",
            WindRule::EvenOdd => "even-odd",
        })
    }
}

impl fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeStyle::NoStroke => "no-stroke",
            StrokeStyle::Solid => "solid",
            StrokeStyle::Double => "double",
            StrokeStyle::Dotted => "dotted",
            StrokeStyle::Dashed => "dashed",
            StrokeStyle::Wavy => "wavy",
        })
    }
}
