/// TS3D Core Library - Shared geometry, shading, and rasterization logic
///
/// This library provides the stateless core functionality for terminal 3D
/// rendering, including shape meshes, Euler rotation, perspective projection,
/// and depth-buffered glyph rasterization.

pub mod geometry;
pub mod projection;
pub mod raster;
pub mod shading;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Cube, Face, Pyramid, Shape, Sphere};
pub use projection::{project, ScreenOffset};
pub use raster::Frame;
pub use shading::ShadeRamp;
pub use transform::Rotation;
