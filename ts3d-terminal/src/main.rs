/// TS3D Terminal Demo - Rotating Shapes
///
/// Spins a cube, a pyramid, and a sphere in one depth-buffered frame.
/// Flags:
///   --width N / --height N  Screen size in cells (default 100x40)
///   --fps N                 Frame pacing, 0 for uncapped (default 30)
///   --frames N              Stop after N frames (default: run forever)
///   --wireframe             Trace edges instead of filling faces
///   --ramp CHARS            Twelve shading glyphs, dark to bright

use std::env;

use anyhow::Result;
use ts3d_terminal::{Config, RenderMode, Scene, TerminalApp};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::parse(&args)?;

    let mut scene = Scene::demo(config.width, config.height);
    scene.set_ramp(config.ramp);
    if config.wireframe {
        scene.set_mode(RenderMode::Wireframe);
    }

    let mut app = TerminalApp::new(scene, config.frame_time(), config.frames);
    app.run()?;

    Ok(())
}
