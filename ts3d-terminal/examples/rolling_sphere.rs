/// Example: Render a single spinning sphere for a fixed number of frames
///
/// Usage: cargo run --example rolling_sphere

use std::io;
use std::time::Duration;

use ts3d_core::{ScreenOffset, Sphere};
use ts3d_terminal::{Scene, TerminalApp};

fn main() -> io::Result<()> {
    let mut scene = Scene::new(80, 30);
    scene.add_shape(
        Box::new(Sphere::new(12, 16, 2.5)),
        ScreenOffset::new(40.0, 0.0),
    );
    scene.set_spin(0.03, 0.07);

    // Ten seconds at 30 fps, then hand the terminal back
    let mut app = TerminalApp::new(scene, Some(Duration::from_millis(33)), Some(300));
    app.run()
}
