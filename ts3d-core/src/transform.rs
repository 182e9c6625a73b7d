//! Rotation state and the fused two-axis point rotation.

use nalgebra::Point3;

/// Accumulated rotation angles around the X axis (pitch) and Y axis (yaw),
/// in radians.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Rotation {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    pub fn zero() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// Advance both angles by per-frame increments (in radians).
    pub fn advance(&mut self, dpitch: f32, dyaw: f32) {
        self.pitch += dpitch;
        self.yaw += dyaw;
    }

    /// Rotate a point around the Y axis by `yaw`, then around the X axis by
    /// `pitch`, fused into a single transform.
    ///
    /// The expansion is fixed; this is not a general rotation API.
    pub fn apply(&self, p: &Point3<f32>) -> Point3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Point3::new(
            p.x * cos_yaw - p.z * sin_yaw,
            p.x * sin_pitch * sin_yaw + p.y * cos_pitch + p.z * sin_pitch * cos_yaw,
            p.x * cos_pitch * sin_yaw - p.y * sin_pitch + p.z * cos_pitch * cos_yaw,
        )
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::zero()
    }
}
