//! Perspective projection into terminal screen space.

use nalgebra::Point3;

/// Distance between the origin and the focal plane, baked into the
/// inverse-depth term.
pub const FOCAL_OFFSET: f32 = 5.0;

// Screen scaling. The 2:1 horizontal/vertical ratio compensates for the
// aspect of a terminal character cell; both values are part of the output
// format and stay fixed.
const X_SCALE: f32 = 30.0;
const Y_SCALE: f32 = 15.0;

/// Screen-space placement of a shape, in character cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenOffset {
    pub x: f32,
    pub y: f32,
}

impl ScreenOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Project a rotated point to integer screen coordinates plus its inverse
/// depth `1/(z + 5)`.
///
/// Returns `None` when the point sits on the focal plane and the perspective
/// divide would blow up. Coordinates truncate toward zero; callers bounds-
/// check against the buffer dimensions.
pub fn project(p: &Point3<f32>, offset: ScreenOffset, height: usize) -> Option<(i32, i32, f32)> {
    let denom = p.z + FOCAL_OFFSET;
    if denom.abs() < 1e-6 {
        return None;
    }
    let inv_depth = 1.0 / denom;
    let x = offset.x + X_SCALE * inv_depth * p.x;
    let y = offset.y + (height / 2) as f32 + Y_SCALE * inv_depth * p.y;
    Some((x as i32, y as i32, inv_depth))
}
