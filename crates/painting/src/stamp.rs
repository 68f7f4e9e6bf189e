//! Symmetric stamp rendering
//!
//! A stamp paints the brush shape at the pointer position and at
//! `mirror.count - 1` rotated copies about the mirror pivot. Each copy is the
//! whole shape drawn in a rotated frame, so the shapes turn with their copy
//! (a triangle's apex always points away from the pivot the same way).
//! Pattern fills are sampled in that frame too, anchored at the pivot.

use glam::{Affine2, Vec2};
use tracing::debug;

use crate::brush::BrushSpec;
use crate::mirror::MirrorConfig;
use crate::surface::CpuSurface;

/// Paint `brush` at `position` and its rotational copies onto `surface`
///
/// Parameters are assumed valid (`brush.size >= 1`, `mirror.count >= 1`);
/// the validated constructors on [`BrushSpec`] and [`MirrorConfig`] guarantee
/// that. Copies falling outside the surface are clipped.
pub fn stamp(surface: &mut CpuSurface, position: Vec2, brush: &BrushSpec, mirror: &MirrorConfig) {
    debug!(
        "stamp: pos=({:.1}, {:.1}), shape={}, size={}, copies={}, pivot=({:.1}, {:.1})",
        position.x,
        position.y,
        brush.shape,
        brush.size,
        mirror.count,
        mirror.center.x,
        mirror.center.y
    );

    let local_center = position - mirror.center;
    for index in 0..mirror.count {
        let frame = mirror.frame(index);
        if paint_copy(surface, &frame, local_center, brush).is_none() {
            debug!("  copy {} outside surface bounds", index);
        }
    }
}

/// Paint one copy of the shape centered at `local_center` in `frame`
///
/// Returns bounding box of affected region (x, y, width, height), or None if
/// the copy is completely outside the surface.
fn paint_copy(
    surface: &mut CpuSurface,
    frame: &Affine2,
    local_center: Vec2,
    brush: &BrushSpec,
) -> Option<(u32, u32, u32, u32)> {
    let size = brush.size as f32;
    let half = brush.shape.half_extents(size);

    // Surface bounds of the rotated shape box
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|corner| frame.transform_point2(local_center + corner));

    let min = corners.iter().fold(Vec2::splat(f32::INFINITY), |a, &b| a.min(b));
    let max = corners
        .iter()
        .fold(Vec2::splat(f32::NEG_INFINITY), |a, &b| a.max(b));

    // Clamp to surface bounds
    let x_min = (min.x.floor().max(0.0) as u32).min(surface.width);
    let y_min = (min.y.floor().max(0.0) as u32).min(surface.height);
    let x_max = (max.x.ceil().max(0.0) as u32).min(surface.width);
    let y_max = (max.y.ceil().max(0.0) as u32).min(surface.height);

    if x_min >= x_max || y_min >= y_max {
        return None;
    }

    let to_frame = frame.inverse();
    for py in y_min..y_max {
        for px in x_min..x_max {
            // Test the pixel center in the copy's own frame
            let pixel = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let in_frame = to_frame.transform_point2(pixel);
            if !brush.shape.contains(in_frame - local_center, size) {
                continue;
            }

            if let Some(color) = brush.fill_at(in_frame) {
                surface.blend_pixel(px, py, color);
            }
        }
    }

    Some((x_min, y_min, x_max - x_min, y_max - y_min))
}
