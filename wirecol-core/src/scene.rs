//! Per-frame scene state and the capability seams toward the host

use nalgebra::Vector3;

use crate::camera::CameraPose;
use crate::collision::{Plane, Sphere};

/// Snapshot of everything the kernel reads in one frame.
///
/// The host owns this state and mutates it exactly once per frame through
/// its [`ParameterSource`]; the kernel treats each invocation's snapshot
/// as immutable and keeps nothing across invocations.
#[derive(Debug, Clone, Copy)]
pub struct SceneState {
    pub camera: CameraPose,
    pub sphere: Sphere,
    pub plane: Plane,
}

impl Default for SceneState {
    /// Demo scene: a unit sphere resting exactly tangent on the ground
    /// plane, viewed from slightly above.
    fn default() -> Self {
        Self {
            camera: CameraPose::new(Vector3::new(0.0, 2.0, -8.0), 0.0, 0.0),
            sphere: Sphere {
                center: Vector3::new(0.0, 1.0, 0.0),
                radius: 1.0,
            },
            plane: Plane {
                normal: Vector3::new(0.0, 1.0, 0.0),
                distance: 0.0,
            },
        }
    }
}

/// Supplies the current frame's scene values (keyboard, GUI, script, ...).
///
/// Implementations own the input-boundary invariants the kernel relies
/// on: clamp the camera pitch and the sphere radius, and renormalize the
/// plane normal after every mutation.
pub trait ParameterSource {
    fn apply(&mut self, scene: &mut SceneState);
}

/// Line-drawing capability implemented by the host renderer; the kernel
/// itself never draws. Colors are packed `0xRRGGBBAA`.
pub trait LineRenderer {
    fn draw_segment(&mut self, a: (i32, i32), b: (i32, i32), color: u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision;

    #[test]
    fn test_default_scene_is_tangent() {
        let scene = SceneState::default();
        assert_eq!(scene.plane.signed_distance(&scene.sphere.center), 1.0);
        assert!(collision::collides(&scene.sphere, &scene.plane));
    }
}
