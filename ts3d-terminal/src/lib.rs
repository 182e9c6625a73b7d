/// Terminal front end for depth-buffered ASCII 3D rendering
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod scene;

pub use config::Config;
pub use scene::{RenderMode, Scene};

/// Main application struct driving the render loop
pub struct TerminalApp {
    scene: Scene,
    frame_time: Option<Duration>,
    max_frames: Option<u64>,
}

impl TerminalApp {
    /// `frame_time` of `None` runs uncapped; `max_frames` of `None` runs
    /// until the process is interrupted.
    pub fn new(scene: Scene, frame_time: Option<Duration>, max_frames: Option<u64>) -> Self {
        Self {
            scene,
            frame_time,
            max_frames,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        execute!(stdout(), terminal::Clear(ClearType::All), cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        execute!(stdout(), cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let mut frames = 0u64;

        loop {
            if let Some(max) = self.max_frames {
                if frames >= max {
                    break;
                }
            }
            let frame_start = Instant::now();

            // Render at the current angles, show, then spin for next frame
            self.scene.render();
            self.present()?;
            self.scene.advance();
            frames += 1;

            // Frame timing
            if let Some(target) = self.frame_time {
                let elapsed = frame_start.elapsed();
                if elapsed < target {
                    std::thread::sleep(target - elapsed);
                }
            }
        }

        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let frame = self.scene.frame();
        let text = compose(frame.width(), frame.glyphs());

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0), Print(text))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Flatten a row-major glyph buffer into one printable string.
///
/// Each row's first cell is emitted as a newline instead of its glyph, so
/// the string starts with a line break and column zero is never shown.
fn compose(width: usize, glyphs: &[char]) -> String {
    let mut out = String::with_capacity(glyphs.len());
    for (k, &glyph) in glyphs.iter().enumerate() {
        if k % width == 0 {
            out.push('\n');
        } else {
            out.push(glyph);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_swaps_column_zero_for_newlines() {
        let glyphs: Vec<char> = "ABCDEF".chars().collect();
        assert_eq!(compose(3, &glyphs), "\nBC\nEF");
    }

    #[test]
    fn compose_emits_one_char_per_cell() {
        let scene_width = 10;
        let glyphs = vec![' '; scene_width * 4];
        let text = compose(scene_width, &glyphs);
        assert_eq!(text.chars().count(), scene_width * 4);
        assert_eq!(text.matches('\n').count(), 4);
    }
}
