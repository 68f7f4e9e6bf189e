use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Brush shapes available for stamping
///
/// Every shape is centered on the stamp position and parameterized by the
/// brush size `s`:
/// - `Circle`: disk of radius `s`
/// - `Square`: square of side `s`
/// - `Oval`: ellipse with radii `s` (horizontal) and `s / 2` (vertical)
/// - `Rectangle`: `2s` wide, `s` tall
/// - `Triangle`: apex at `(0, -s)`, base corners at `(s, s)` and `(-s, s)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BrushShape {
    #[default]
    Circle = 0,
    Square = 1,
    Oval = 2,
    Rectangle = 3,
    Triangle = 4,
}

impl BrushShape {
    pub const ALL: [BrushShape; 5] = [
        BrushShape::Circle,
        BrushShape::Square,
        BrushShape::Oval,
        BrushShape::Rectangle,
        BrushShape::Triangle,
    ];

    /// Lowercase name as used by the UI shape selector
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Oval => "oval",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }

    /// Half width and half height of the shape's axis-aligned bounds
    pub fn half_extents(self, size: f32) -> Vec2 {
        match self {
            Self::Circle | Self::Triangle => Vec2::splat(size),
            Self::Square => Vec2::splat(size / 2.0),
            Self::Oval | Self::Rectangle => Vec2::new(size, size / 2.0),
        }
    }

    /// Vertices of the triangle shape relative to its center
    pub fn triangle_vertices(size: f32) -> [Vec2; 3] {
        [
            Vec2::new(0.0, -size),
            Vec2::new(size, size),
            Vec2::new(-size, size),
        ]
    }

    /// Whether `local` (relative to the shape center) lies inside the shape
    pub fn contains(self, local: Vec2, size: f32) -> bool {
        if size <= 0.0 {
            return false;
        }

        match self {
            Self::Circle => local.length_squared() <= size * size,
            Self::Square | Self::Rectangle => {
                let half = self.half_extents(size);
                local.x.abs() <= half.x && local.y.abs() <= half.y
            }
            Self::Oval => {
                let radii = self.half_extents(size);
                let n = local / radii;
                n.length_squared() <= 1.0
            }
            Self::Triangle => {
                let [a, b, c] = Self::triangle_vertices(size);
                // Inside when the point is on the same side of all three edges
                let d1 = (b - a).perp_dot(local - a);
                let d2 = (c - b).perp_dot(local - b);
                let d3 = (a - c).perp_dot(local - c);
                let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(has_neg && has_pos)
            }
        }
    }
}

impl fmt::Display for BrushShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrushShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == name)
            .ok_or_else(|| ValidationError::UnknownShape(s.to_string()))
    }
}
