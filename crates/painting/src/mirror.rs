//! Rotational symmetry configuration

use std::f32::consts::TAU;

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_MIRROR_COUNT;
use crate::validation::{ValidationError, clamp_mirror_count, validate_mirror_count};

/// Fold count and pivot for a stamp
///
/// Copy `i` (for `i` in `0..count`) is the stamp rotated by `i * 2π / count`
/// about `center`. Copy 0 is the unrotated original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Number of copies, always >= 1
    pub count: u32,
    /// Pivot in surface pixel coordinates (may lie outside the surface)
    pub center: Vec2,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            count: 1,
            center: Vec2::ZERO,
        }
    }
}

impl MirrorConfig {
    /// Create a config, rejecting counts outside 1..=MAX_MIRROR_COUNT
    pub fn new(count: i64, center: Vec2) -> Result<Self, ValidationError> {
        Ok(Self {
            count: validate_mirror_count(count)?,
            center,
        })
    }

    /// Create a config, clamping the count into 1..=MAX_MIRROR_COUNT
    pub fn clamped(count: i64, center: Vec2) -> Self {
        if !(1..=MAX_MIRROR_COUNT as i64).contains(&count) {
            debug!("MirrorConfig: clamping count {}", count);
        }
        Self {
            count: clamp_mirror_count(count),
            center,
        }
    }

    /// Same fold count around a different pivot
    pub fn with_center(self, center: Vec2) -> Self {
        Self { center, ..self }
    }

    /// Angle between neighbouring copies in radians
    #[inline]
    pub fn angle_step(&self) -> f32 {
        TAU / self.count as f32
    }

    /// Frame of copy `index`: maps pivot-relative coordinates to surface coordinates
    #[inline]
    pub fn frame(&self, index: u32) -> Affine2 {
        Affine2::from_angle_translation(index as f32 * self.angle_step(), self.center)
    }

    /// Surface positions of every copy of a stamp placed at `position`
    pub fn copy_centers(&self, position: Vec2) -> Vec<Vec2> {
        let local = position - self.center;
        (0..self.count)
            .map(|i| self.frame(i).transform_point2(local))
            .collect()
    }
}
