use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MorphosError;

/// Named target shapes the particle swarm can morph into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ShapeKind {
    Earth = 0,
    Heart = 1,
    Flower = 2,
    Saturn = 3,
    Buddha = 4,
    Galaxy = 5,
    Dna = 6,
    Cube = 7,
    Mobius = 8,
}

/// All shapes in stable index order.
pub const ALL_SHAPES: [ShapeKind; 9] = [
    ShapeKind::Earth,
    ShapeKind::Heart,
    ShapeKind::Flower,
    ShapeKind::Saturn,
    ShapeKind::Buddha,
    ShapeKind::Galaxy,
    ShapeKind::Dna,
    ShapeKind::Cube,
    ShapeKind::Mobius,
];

impl ShapeKind {
    /// Lowercase name used by hosts and config files.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Earth => "earth",
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Buddha => "buddha",
            ShapeKind::Galaxy => "galaxy",
            ShapeKind::Dna => "dna",
            ShapeKind::Cube => "cube",
            ShapeKind::Mobius => "mobius",
        }
    }

    /// Stable index into per-shape tables.
    pub fn index(self) -> usize {
        self as u8 as usize
    }

    /// Stable attraction mode: pointer repulsion is suppressed for this shape.
    pub fn is_stable(self) -> bool {
        self == ShapeKind::Earth
    }

    /// Whether the pointer ray is hit-tested against this shape's bounding sphere.
    pub fn is_hittable(self) -> bool {
        self == ShapeKind::Earth
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = MorphosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ALL_SHAPES
            .iter()
            .copied()
            .find(|k| k.name() == lowered)
            .ok_or_else(|| MorphosError::UnknownShape(s.to_string()))
    }
}
