//! Wirecol terminal viewer - sphere vs. plane
//!
//! Interactive wireframe visualization of a sphere/plane collision test.
//! Controls:
//!   - WASD / R / F: Move the camera
//!   - Arrow keys: Look (pitch is clamped, there is no roll)
//!   - I/J/K/L/U/O: Move the sphere, +/-: change its radius
//!   - T/G: Plane distance, Z/X: tilt the plane normal
//!   - Q / ESC: Quit

use std::io;
use wirecol_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut app = TerminalApp::new()?;
    log::info!("starting terminal viewer");
    app.run()?;
    log::info!("terminal viewer closed");
    Ok(())
}
