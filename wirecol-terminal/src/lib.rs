//! Terminal host for the wirecol kernel
//!
//! Owns everything the kernel deliberately does not: the frame loop,
//! raw keyboard polling, scene parameter editing, and line drawing.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use nalgebra::Vector3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wirecol_core::{
    build_frame, LineRenderer, ParameterSource, SceneState, SegmentKind, ViewConfig, PITCH_LIMIT,
};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Wireframe palette, packed 0xRRGGBBAA.
const GRID_COLOR: u32 = 0x444444FF;
const PLANE_COLOR: u32 = 0xFFFFFFFF;
const SPHERE_COLOR: u32 = 0x4444FFFF;
const SPHERE_HIT_COLOR: u32 = 0xFF4444FF;

const MOVE_STEP: f32 = 0.05;
const LOOK_STEP: f32 = 0.05;
const RADIUS_STEP: f32 = 0.05;
const MIN_RADIUS: f32 = 0.01;
const TILT_STEP: f32 = 0.05;

/// Color policy lives with the host: the kernel reports what each segment
/// is and whether the sphere collides, the host decides what that looks
/// like.
fn segment_color(kind: SegmentKind, collision: bool) -> u32 {
    match kind {
        SegmentKind::Grid => GRID_COLOR,
        SegmentKind::Plane => PLANE_COLOR,
        SegmentKind::Sphere if collision => SPHERE_HIT_COLOR,
        SegmentKind::Sphere => SPHERE_COLOR,
    }
}

/// Turns key presses into one scene edit per frame.
///
/// This is the input boundary, so the invariants the kernel assumes are
/// enforced here: pitch clamped to `±PITCH_LIMIT`, radius kept above
/// `MIN_RADIUS`, and the plane normal renormalized after every edit.
#[derive(Default)]
pub struct KeyboardSource {
    camera_delta: Vector3<f32>,
    pitch_delta: f32,
    yaw_delta: f32,
    sphere_delta: Vector3<f32>,
    radius_delta: f32,
    distance_delta: f32,
    tilt_delta: f32,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one key press into the pending frame edit.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            // Camera movement
            KeyCode::Char('w') => self.camera_delta.z += MOVE_STEP,
            KeyCode::Char('s') => self.camera_delta.z -= MOVE_STEP,
            KeyCode::Char('a') => self.camera_delta.x -= MOVE_STEP,
            KeyCode::Char('d') => self.camera_delta.x += MOVE_STEP,
            KeyCode::Char('r') => self.camera_delta.y += MOVE_STEP,
            KeyCode::Char('f') => self.camera_delta.y -= MOVE_STEP,
            // Camera look
            KeyCode::Up => self.pitch_delta -= LOOK_STEP,
            KeyCode::Down => self.pitch_delta += LOOK_STEP,
            KeyCode::Left => self.yaw_delta -= LOOK_STEP,
            KeyCode::Right => self.yaw_delta += LOOK_STEP,
            // Sphere
            KeyCode::Char('i') => self.sphere_delta.z += MOVE_STEP,
            KeyCode::Char('k') => self.sphere_delta.z -= MOVE_STEP,
            KeyCode::Char('j') => self.sphere_delta.x -= MOVE_STEP,
            KeyCode::Char('l') => self.sphere_delta.x += MOVE_STEP,
            KeyCode::Char('u') => self.sphere_delta.y -= MOVE_STEP,
            KeyCode::Char('o') => self.sphere_delta.y += MOVE_STEP,
            KeyCode::Char('+') | KeyCode::Char('=') => self.radius_delta += RADIUS_STEP,
            KeyCode::Char('-') => self.radius_delta -= RADIUS_STEP,
            // Plane
            KeyCode::Char('t') => self.distance_delta += MOVE_STEP,
            KeyCode::Char('g') => self.distance_delta -= MOVE_STEP,
            KeyCode::Char('z') => self.tilt_delta -= TILT_STEP,
            KeyCode::Char('x') => self.tilt_delta += TILT_STEP,
            _ => {}
        }
    }
}

impl ParameterSource for KeyboardSource {
    fn apply(&mut self, scene: &mut SceneState) {
        scene.camera.position += self.camera_delta;
        scene.camera.yaw += self.yaw_delta;
        scene.camera.pitch =
            (scene.camera.pitch + self.pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        scene.sphere.center += self.sphere_delta;
        scene.sphere.radius = (scene.sphere.radius + self.radius_delta).max(MIN_RADIUS);
        scene.plane.distance += self.distance_delta;
        scene.plane.normal.x += self.tilt_delta;
        // The kernel assumes a unit normal and never renormalizes.
        scene.plane.normal = wirecol_core::vector::normalize_or_up(&scene.plane.normal);
        *self = Self::new();
    }
}

/// Interactive sphere-vs-plane viewer.
pub struct TerminalApp {
    scene: SceneState,
    source: KeyboardSource,
    config: ViewConfig,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene: SceneState::default(),
            source: KeyboardSource::new(),
            config: ViewConfig::with_size(width as f32, height as f32),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Drain pending input, then apply it to the scene exactly once.
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }
            self.source.apply(&mut self.scene);

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                other => self.source.handle_key(other),
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = build_frame(&self.scene, &self.config);

        self.renderer.clear();
        for segment in &frame.segments {
            self.renderer
                .draw_segment(segment.a, segment.b, segment_color(segment.kind, frame.collision));
        }

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(if frame.collision {
                Color::Red
            } else {
                Color::Yellow
            }),
            Print(format!(
                "wirecol | collision: {} | dist: {:+.2} | FPS: {:.1} | \
                 WASD+RF=Cam Arrows=Look IJKL+UO=Sphere +/-=Radius TG=Plane ZX=Tilt Q=Quit",
                if frame.collision { "YES" } else { "NO" },
                frame.signed_distance,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_clamps_pitch() {
        let mut scene = SceneState::default();
        let mut source = KeyboardSource::new();
        for _ in 0..100 {
            source.handle_key(KeyCode::Down);
        }
        source.apply(&mut scene);
        assert!((scene.camera.pitch - PITCH_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn test_apply_clamps_radius() {
        let mut scene = SceneState::default();
        let mut source = KeyboardSource::new();
        for _ in 0..100 {
            source.handle_key(KeyCode::Char('-'));
        }
        source.apply(&mut scene);
        assert_eq!(scene.sphere.radius, MIN_RADIUS);
    }

    #[test]
    fn test_apply_renormalizes_tilted_plane() {
        let mut scene = SceneState::default();
        let mut source = KeyboardSource::new();
        source.handle_key(KeyCode::Char('x'));
        source.handle_key(KeyCode::Char('x'));
        source.apply(&mut scene);
        assert!((scene.plane.normal.norm() - 1.0).abs() < 1e-6);
        assert!(scene.plane.normal.x > 0.0);
    }

    #[test]
    fn test_apply_resets_pending_edits() {
        let mut scene = SceneState::default();
        let before = scene.camera.position;
        let mut source = KeyboardSource::new();
        source.handle_key(KeyCode::Char('w'));
        source.apply(&mut scene);
        let moved = scene.camera.position;
        assert!((moved.z - (before.z + MOVE_STEP)).abs() < 1e-6);
        // Second frame with no input leaves the scene alone.
        source.apply(&mut scene);
        assert_eq!(scene.camera.position, moved);
    }

    #[test]
    fn test_sphere_color_follows_collision_flag() {
        assert_eq!(segment_color(SegmentKind::Sphere, true), SPHERE_HIT_COLOR);
        assert_eq!(segment_color(SegmentKind::Sphere, false), SPHERE_COLOR);
        assert_eq!(segment_color(SegmentKind::Grid, true), GRID_COLOR);
    }
}
