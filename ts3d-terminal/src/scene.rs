//! Scene assembly: shapes anchored to screen positions, plus the shared
//! rotation, light, and shade ramp that drive each frame.

use nalgebra::Vector3;
use ts3d_core::{Cube, Frame, Pyramid, Rotation, ScreenOffset, ShadeRamp, Shape, Sphere};

/// Per-frame rotation increments (pitch, yaw) for the shared spin.
const SPIN: (f32, f32) = (0.04, 0.02);

/// How shapes are rasterized into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Solid,
    Wireframe,
}

/// A set of shapes sharing one rotation, light, and output frame.
///
/// Every shape spins in lockstep; only the screen anchor separates them.
pub struct Scene {
    shapes: Vec<(Box<dyn Shape>, ScreenOffset)>,
    frame: Frame,
    rotation: Rotation,
    spin: (f32, f32),
    light: Vector3<f32>,
    ramp: ShadeRamp,
    mode: RenderMode,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            shapes: Vec::new(),
            frame: Frame::new(width, height),
            rotation: Rotation::zero(),
            spin: SPIN,
            light: Vector3::new(0.0, 0.0, -1.0),
            ramp: ShadeRamp::default(),
            mode: RenderMode::Solid,
        }
    }

    /// The stock demo: a cube, a pyramid, and a sphere spread across the
    /// screen at quarter-width anchors.
    pub fn demo(width: usize, height: usize) -> Self {
        let mut scene = Self::new(width, height);
        let (w, h) = (width as f32, height as f32);
        scene.add_shape(
            Box::new(Cube::new(1.5)),
            ScreenOffset::new(w / 4.0, -h / 4.0),
        );
        scene.add_shape(
            Box::new(Pyramid::new(1.5)),
            ScreenOffset::new(w / 2.0, h / 4.0),
        );
        scene.add_shape(
            Box::new(Sphere::new(10, 10, 2.0)),
            ScreenOffset::new(3.0 * w / 4.0, -h / 4.0),
        );
        scene
    }

    pub fn add_shape(&mut self, shape: Box<dyn Shape>, offset: ScreenOffset) {
        self.shapes.push((shape, offset));
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn set_light(&mut self, light: Vector3<f32>) {
        self.light = light;
    }

    pub fn set_ramp(&mut self, ramp: ShadeRamp) {
        self.ramp = ramp;
    }

    pub fn set_spin(&mut self, dpitch: f32, dyaw: f32) {
        self.spin = (dpitch, dyaw);
    }

    /// Advance the shared rotation by one frame's spin.
    pub fn advance(&mut self) {
        self.rotation.advance(self.spin.0, self.spin.1);
    }

    /// Rasterize every shape at the current rotation into the frame.
    pub fn render(&mut self) {
        self.frame.clear();
        for (shape, offset) in &self.shapes {
            match self.mode {
                RenderMode::Solid => {
                    shape.render(self.rotation, self.light, &self.ramp, *offset, &mut self.frame)
                }
                RenderMode::Wireframe => shape.render_wireframe(
                    self.rotation,
                    self.light,
                    &self.ramp,
                    *offset,
                    &mut self.frame,
                ),
            }
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}
