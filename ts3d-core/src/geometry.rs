//! Shape geometry and the face-shaded render path.
//!
//! Shapes own model-space vertices and index-based faces. Rendering scales
//! and rotates the vertices once per frame, shades each face from its
//! normal, and hands the corners to the frame's rasterizer.

use std::f32::consts::{PI, TAU};

use nalgebra::{Point3, Vector3};

use crate::projection::ScreenOffset;
use crate::raster::Frame;
use crate::shading::ShadeRamp;
use crate::transform::Rotation;

/// A polygonal face referencing a shape's vertices by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Tri([usize; 3]),
    Quad([usize; 4]),
}

impl Face {
    /// Vertex indices in winding order.
    pub fn indices(&self) -> &[usize] {
        match self {
            Face::Tri(idx) => idx,
            Face::Quad(idx) => idx,
        }
    }
}

/// Unit normal of the plane spanned by a face's first three corners.
///
/// Degenerate corners give a zero-length cross product that normalizes to
/// NaN components; the shade ramp maps those to its dimmest glyph.
pub fn face_normal(p1: Point3<f32>, p2: Point3<f32>, p3: Point3<f32>) -> Vector3<f32> {
    let edge1 = p2 - p1;
    let edge2 = p3 - p1;
    edge1.cross(&edge2).normalize()
}

/// A renderable mesh with a uniform scale factor.
///
/// Scale is applied to the model-space vertices on every render call rather
/// than baked into them, so it can change between frames.
pub trait Shape {
    fn vertices(&self) -> &[Point3<f32>];
    fn faces(&self) -> &[Face];
    fn scale(&self) -> f32;
    fn set_scale(&mut self, scale: f32);

    /// Scale and rotate the model-space vertices for the current frame.
    fn rotated_vertices(&self, rotation: Rotation) -> Vec<Point3<f32>> {
        let scale = self.scale();
        self.vertices()
            .iter()
            .map(|v| rotation.apply(&Point3::from(v.coords * scale)))
            .collect()
    }

    /// Rasterize every face, flat-shaded by the angle between its normal
    /// and the light direction. Triangles repeat their third corner to fit
    /// the quad rasterizer.
    fn render(
        &self,
        rotation: Rotation,
        light: Vector3<f32>,
        ramp: &ShadeRamp,
        offset: ScreenOffset,
        frame: &mut Frame,
    ) {
        let rotated = self.rotated_vertices(rotation);
        for face in self.faces() {
            let idx = face.indices();
            let p1 = rotated[idx[0]];
            let p2 = rotated[idx[1]];
            let p3 = rotated[idx[2]];
            let p4 = match *face {
                Face::Tri(_) => p3,
                Face::Quad([_, _, _, d]) => rotated[d],
            };
            let intensity = face_normal(p1, p2, p3).dot(&light);
            frame.fill_quad(p1, p2, p3, p4, ramp.glyph_for(intensity), offset);
        }
    }

    /// Trace every face's edge loop with its shaded glyph instead of
    /// filling the interior.
    fn render_wireframe(
        &self,
        rotation: Rotation,
        light: Vector3<f32>,
        ramp: &ShadeRamp,
        offset: ScreenOffset,
        frame: &mut Frame,
    ) {
        let rotated = self.rotated_vertices(rotation);
        for face in self.faces() {
            let idx = face.indices();
            let normal = face_normal(rotated[idx[0]], rotated[idx[1]], rotated[idx[2]]);
            let glyph = ramp.glyph_for(normal.dot(&light));
            for (k, &a) in idx.iter().enumerate() {
                let b = idx[(k + 1) % idx.len()];
                frame.draw_line(rotated[a], rotated[b], glyph, offset);
            }
        }
    }
}

/// An axis-aligned cube spanning (-1, -1, -1) to (1, 1, 1), made of six quads.
#[derive(Debug, Clone)]
pub struct Cube {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
    scale: f32,
}

impl Cube {
    pub fn new(scale: f32) -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, 1.0, 1.0),
        ];
        let faces = vec![
            Face::Quad([0, 1, 2, 3]),
            Face::Quad([4, 5, 6, 7]),
            Face::Quad([0, 1, 5, 4]),
            Face::Quad([1, 2, 6, 5]),
            Face::Quad([2, 3, 7, 6]),
            Face::Quad([3, 0, 4, 7]),
        ];
        Self {
            vertices,
            faces,
            scale,
        }
    }
}

impl Shape for Cube {
    fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

/// A square-based pyramid with its apex on the +z axis. Four triangular
/// sides; the base is left open.
#[derive(Debug, Clone)]
pub struct Pyramid {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
    scale: f32,
}

impl Pyramid {
    pub fn new(scale: f32) -> Self {
        let vertices = vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
        ];
        let faces = vec![
            Face::Tri([0, 1, 2]),
            Face::Tri([0, 2, 3]),
            Face::Tri([0, 3, 4]),
            Face::Tri([0, 4, 1]),
        ];
        Self {
            vertices,
            faces,
            scale,
        }
    }
}

impl Shape for Pyramid {
    fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

/// A unit sphere tessellated from latitude and longitude divisions.
///
/// The longitude seam is duplicated (columns 0 and TAU coincide) and each
/// pole repeats once per column, giving the `(lat + 1) * (long + 1)` vertex
/// grid the face indices are built against.
#[derive(Debug, Clone)]
pub struct Sphere {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
    scale: f32,
}

impl Sphere {
    pub fn new(latitude_divisions: usize, longitude_divisions: usize, scale: f32) -> Self {
        debug_assert!(latitude_divisions > 0);
        debug_assert!(longitude_divisions > 0);

        let mut vertices =
            Vec::with_capacity((latitude_divisions + 1) * (longitude_divisions + 1));
        for i in 0..=latitude_divisions {
            let theta = PI * i as f32 / latitude_divisions as f32;
            for j in 0..=longitude_divisions {
                let phi = TAU * j as f32 / longitude_divisions as f32;
                vertices.push(Point3::new(
                    theta.sin() * phi.cos(),
                    theta.sin() * phi.sin(),
                    theta.cos(),
                ));
            }
        }

        let mut faces = Vec::with_capacity(2 * latitude_divisions * longitude_divisions);
        for i in 0..latitude_divisions {
            for j in 0..longitude_divisions {
                let first = i * (longitude_divisions + 1) + j;
                let second = first + longitude_divisions + 1;
                faces.push(Face::Tri([first, second, first + 1]));
                faces.push(Face::Tri([second, second + 1, first + 1]));
            }
        }

        Self {
            vertices,
            faces,
            scale,
        }
    }
}

impl Shape for Sphere {
    fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_eight_corners_and_six_quads() {
        let cube = Cube::new(1.0);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 6);
        assert!(cube.faces().iter().all(|f| f.indices().len() == 4));
    }

    #[test]
    fn pyramid_has_five_corners_and_four_sides() {
        let pyramid = Pyramid::new(1.0);
        assert_eq!(pyramid.vertices().len(), 5);
        assert_eq!(pyramid.faces().len(), 4);
        assert!(pyramid.faces().iter().all(|f| f.indices().len() == 3));
    }

    #[test]
    fn sphere_topology_matches_its_divisions() {
        let sphere = Sphere::new(10, 10, 1.0);
        assert_eq!(sphere.vertices().len(), 121);
        assert_eq!(sphere.faces().len(), 200);

        let coarse = Sphere::new(3, 4, 1.0);
        assert_eq!(coarse.vertices().len(), 20);
        assert_eq!(coarse.faces().len(), 24);
    }

    #[test]
    fn face_indices_stay_in_bounds() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Cube::new(1.0)),
            Box::new(Pyramid::new(1.0)),
            Box::new(Sphere::new(6, 8, 1.0)),
        ];
        for shape in &shapes {
            let count = shape.vertices().len();
            for face in shape.faces() {
                assert!(face.indices().iter().all(|&i| i < count));
            }
        }
    }

    #[test]
    fn sphere_vertices_sit_on_the_unit_sphere() {
        let sphere = Sphere::new(5, 7, 1.0);
        for v in sphere.vertices() {
            assert!((v.coords.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn face_normal_is_the_unit_cross_product() {
        let n = face_normal(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
        );
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn degenerate_face_normal_is_nan() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let n = face_normal(p, p, p);
        assert!(n.x.is_nan());
    }

    #[test]
    fn rotated_vertices_apply_scale_before_rotation() {
        let cube = Cube::new(2.0);
        let rotated = cube.rotated_vertices(Rotation::zero());
        assert_eq!(rotated.len(), 8);
        assert!((rotated[6] - Point3::new(2.0, 2.0, 2.0)).norm() < 1e-6);
    }

    #[test]
    fn set_scale_grows_the_rendered_footprint() {
        let ramp = ShadeRamp::default();
        let light = Vector3::new(0.0, 0.0, -1.0);
        let offset = ScreenOffset::new(50.0, 0.0);
        let filled = |f: &Frame| f.glyphs().iter().filter(|&&g| g != ' ').count();

        let mut small = Frame::new(100, 40);
        let mut big = Frame::new(100, 40);

        let mut cube = Cube::new(0.5);
        cube.render(Rotation::zero(), light, &ramp, offset, &mut small);
        cube.set_scale(2.0);
        assert_eq!(cube.scale(), 2.0);
        cube.render(Rotation::zero(), light, &ramp, offset, &mut big);

        assert!(filled(&small) > 0);
        assert!(filled(&big) > filled(&small));
    }

    #[test]
    fn shapes_render_at_many_angles_with_ramp_glyphs_only() {
        let ramp = ShadeRamp::default();
        let light = Vector3::new(0.0, 0.0, -1.0);
        let offset = ScreenOffset::new(25.0, 0.0);
        let mut frame = Frame::new(50, 20);

        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Cube::new(1.0)),
            Box::new(Pyramid::new(1.0)),
            Box::new(Sphere::new(8, 8, 1.0)),
        ];
        let mut rotation = Rotation::zero();
        for _ in 0..50 {
            for shape in &shapes {
                frame.clear();
                shape.render(rotation, light, &ramp, offset, &mut frame);
                assert!(frame.glyphs().iter().any(|&g| g != ' '));
                for &g in frame.glyphs() {
                    assert!(g == ' ' || ramp.chars().contains(&g));
                }
            }
            rotation.advance(0.17, 0.23);
        }
    }

    #[test]
    fn wireframe_traces_fewer_cells_than_the_solid_fill() {
        let offset = ScreenOffset::new(50.0, 0.0);
        let rotation = Rotation::new(0.4, 0.9);
        let light = Vector3::new(0.0, 0.0, -1.0);
        let ramp = ShadeRamp::default();
        let filled = |f: &Frame| f.glyphs().iter().filter(|&&g| g != ' ').count();

        let mut solid = Frame::new(100, 40);
        let mut wire = Frame::new(100, 40);

        let cube = Cube::new(1.5);
        cube.render(rotation, light, &ramp, offset, &mut solid);
        cube.render_wireframe(rotation, light, &ramp, offset, &mut wire);

        // Edges only, no interiors: far fewer lit cells.
        assert!(filled(&wire) > 0);
        assert!(filled(&wire) < filled(&solid));
        for &g in wire.glyphs() {
            assert!(g == ' ' || ramp.chars().contains(&g));
        }
    }
}
