//! Camera pose and the view / projection / viewport pipeline

use nalgebra::{Matrix4, Vector3};

use crate::matrix;

/// Pitch range the host is expected to clamp to. Yaw stays unbounded.
pub const PITCH_LIMIT: f32 = 0.49 * std::f32::consts::PI;

/// 2-DOF orbit camera pose: pitch and yaw only, no roll.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    /// Rotation around X, pre-clamped by the host to `±PITCH_LIMIT`.
    pub pitch: f32,
    /// Rotation around Y, unbounded.
    pub yaw: f32,
}

impl CameraPose {
    pub fn new(position: Vector3<f32>, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            pitch,
            yaw,
        }
    }
}

/// Fixed projection and viewport constants, injected once at startup.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewConfig {
    /// Defaults for a viewport of the given size: fov_y 0.45 rad,
    /// near 0.1, far 100, origin at (0, 0).
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            fov_y: 0.45,
            aspect: width / height,
            near: 0.1,
            far: 100.0,
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::with_size(1280.0, 720.0)
    }
}

/// World-to-pixel transform pipeline, rebuilt from the camera pose every
/// frame. Nothing is cached across frames.
pub struct Pipeline {
    clip: Matrix4<f32>,
    screen: Matrix4<f32>,
}

impl Pipeline {
    pub fn new(pose: &CameraPose, config: &ViewConfig) -> Self {
        // Exact composition order: translate by -position, then inverse
        // pitch, then inverse yaw.
        let view = matrix::rotation_y(-pose.yaw)
            * (matrix::rotation_x(-pose.pitch) * matrix::translation(&(-pose.position)));
        let projection = matrix::perspective(config.fov_y, config.aspect, config.near, config.far);
        Self {
            clip: view * projection,
            screen: matrix::viewport(config.left, config.top, config.width, config.height),
        }
    }

    /// Map a world-space point to integer pixel coordinates.
    ///
    /// No depth or frustum test is performed: points behind the camera or
    /// outside the near/far range still produce coordinates, possibly
    /// garbage ones. The host renderer is expected to cope.
    pub fn world_to_pixel(&self, p: &Vector3<f32>) -> (i32, i32) {
        let s = matrix::transform_point(&matrix::transform_point(p, &self.clip), &self.screen);
        (s.x as i32, s.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_without_rotation_is_pure_translation() {
        let pose = CameraPose::new(Vector3::new(1.0, 2.0, 3.0), 0.0, 0.0);
        let view = matrix::rotation_y(-pose.yaw)
            * (matrix::rotation_x(-pose.pitch) * matrix::translation(&(-pose.position)));
        assert!((view - matrix::translation(&Vector3::new(-1.0, -2.0, -3.0))).norm() < 1e-6);
    }

    #[test]
    fn test_point_ahead_of_camera_lands_near_screen_center() {
        let pose = CameraPose::new(Vector3::new(0.0, 0.0, -8.0), 0.0, 0.0);
        let config = ViewConfig::default();
        let pipeline = Pipeline::new(&pose, &config);
        let (x, y) = pipeline.world_to_pixel(&Vector3::zeros());
        assert_eq!((x, y), (640, 360));
    }

    #[test]
    fn test_default_config_constants() {
        let config = ViewConfig::default();
        assert!((config.fov_y - 0.45).abs() < 1e-6);
        assert!((config.near - 0.1).abs() < 1e-6);
        assert!((config.far - 100.0).abs() < 1e-6);
        assert!((config.aspect - 1280.0 / 720.0).abs() < 1e-6);
    }
}
