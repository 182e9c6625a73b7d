//! Depth-buffered character rasterization.
//!
//! `Frame` pairs a character buffer with an inverse-depth buffer and is the
//! sole write path into both: shapes hand it already-rotated points and it
//! projects, bounds-checks, and depth-tests every sample.

use nalgebra::Point3;

use crate::projection::{project, ScreenOffset};

/// Parametric steps per segment and per quad axis; 20 steps = 21 samples
/// including both endpoints.
const SAMPLE_STEPS: usize = 20;

/// A character framebuffer with a matching inverse-depth buffer.
///
/// Depth entries hold the inverse depth of the frontmost fragment written so
/// far. A cleared entry is `0.0`, which every fragment in front of the focal
/// plane beats, since those inverse depths are positive.
#[derive(Debug, Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    depth: Vec<f32>,
    glyphs: Vec<char>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth: vec![0.0; size],
            glyphs: vec![' '; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major character cells.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Row-major inverse-depth entries.
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    /// Reset both buffers for the next frame.
    pub fn clear(&mut self) {
        self.depth.fill(0.0);
        self.glyphs.fill(' ');
    }

    /// Depth-tested write. Samples outside the buffer are discarded; inside
    /// it, strictly greater inverse depth (closer to the viewer) wins.
    fn plot(&mut self, x: i32, y: i32, inv_depth: f32, glyph: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if inv_depth > self.depth[idx] {
            self.depth[idx] = inv_depth;
            self.glyphs[idx] = glyph;
        }
    }

    fn plot_projected(&mut self, p: &Point3<f32>, glyph: char, offset: ScreenOffset) {
        if let Some((x, y, inv_depth)) = project(p, offset, self.height) {
            self.plot(x, y, inv_depth, glyph);
        }
    }

    /// Draw a segment between two rotated points: 21 evenly spaced samples,
    /// each projected and depth-tested individually.
    pub fn draw_line(
        &mut self,
        from: Point3<f32>,
        to: Point3<f32>,
        glyph: char,
        offset: ScreenOffset,
    ) {
        for i in 0..=SAMPLE_STEPS {
            let t = i as f32 / SAMPLE_STEPS as f32;
            let p = Point3::from(from.coords.lerp(&to.coords, t));
            self.plot_projected(&p, glyph, offset);
        }
    }

    /// Fill the bilinear patch spanned by four rotated corners with a 21x21
    /// sample grid. Sample density is fixed regardless of projected size;
    /// passing the third corner twice collapses the patch into a triangle.
    pub fn fill_quad(
        &mut self,
        p1: Point3<f32>,
        p2: Point3<f32>,
        p3: Point3<f32>,
        p4: Point3<f32>,
        glyph: char,
        offset: ScreenOffset,
    ) {
        for i in 0..=SAMPLE_STEPS {
            let u = i as f32 / SAMPLE_STEPS as f32;
            for j in 0..=SAMPLE_STEPS {
                let v = j as f32 / SAMPLE_STEPS as f32;
                let p = Point3::from(
                    p1.coords * ((1.0 - u) * (1.0 - v))
                        + p2.coords * (u * (1.0 - v))
                        + p3.coords * (u * v)
                        + p4.coords * ((1.0 - u) * v),
                );
                self.plot_projected(&p, glyph, offset);
            }
        }
    }
}
