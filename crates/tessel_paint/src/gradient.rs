//! Gradient fills

use std::fmt;

use serde::{Deserialize, Serialize};
use tessel_core::{Color, Point};

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Point,
        radius: f32,
        stops: Vec<GradientStop>,
    },
    Conic {
        center: Point,
        angle: f32,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: two_stops(from, to),
        }
    }

    /// Create a simple radial gradient between two colors
    pub fn radial_simple(center: Point, radius: f32, from: Color, to: Color) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops: two_stops(from, to),
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. }
            | Gradient::Radial { stops, .. }
            | Gradient::Conic { stops, .. } => stops,
        }
    }
}

fn two_stops(from: Color, to: Color) -> Vec<GradientStop> {
    vec![
        GradientStop {
            offset: 0.0,
            color: from,
        },
        GradientStop {
            offset: 1.0,
            color: to,
        },
    ]
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gradient::Linear { start, end, .. } => write!(f, "linear {start} {end}")?,
            Gradient::Radial { center, radius, .. } => write!(f, "radial {center} {radius}")?,
            Gradient::Conic { center, angle, .. } => write!(f, "conic {center} {angle}")?,
        }
        f.write_str(" stops [")?;
        for (i, stop) in self.stops().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", stop.offset, stop.color)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_stops() {
        let gradient = Gradient::linear_simple(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Color::RED,
            Color::BLUE,
        );
        assert_eq!(
            gradient.to_string(),
            "linear (0,0) (10,0) stops [0 #FF0000, 1 #0000FF]"
        );
    }
}
