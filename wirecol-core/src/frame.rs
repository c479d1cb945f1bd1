//! Per-frame kernel entry point: scene snapshot in, pixel segments out

use crate::camera::{Pipeline, ViewConfig};
use crate::collision;
use crate::scene::SceneState;
use crate::wireframe::{self, Segment};

/// Which generator a segment came from. The host maps kinds to colors
/// (for example highlighting the sphere on collision); the kernel never
/// picks colors itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Grid,
    Plane,
    Sphere,
}

/// A projected line segment in pixel space.
#[derive(Debug, Clone, Copy)]
pub struct PixelSegment {
    pub a: (i32, i32),
    pub b: (i32, i32),
    pub kind: SegmentKind,
}

/// Everything one kernel invocation produces.
#[derive(Debug, Clone)]
pub struct Frame {
    pub segments: Vec<PixelSegment>,
    pub collision: bool,
    pub signed_distance: f32,
}

/// Recompute the frame from the current scene snapshot: build the
/// transform pipeline, generate the wireframes, project every endpoint to
/// pixel space, and run the collision test.
///
/// Precondition: `scene.plane.normal` is unit length. The host's input
/// boundary renormalizes it after every mutation; the kernel does not.
pub fn build_frame(scene: &SceneState, config: &ViewConfig) -> Frame {
    let pipeline = Pipeline::new(&scene.camera, config);
    let mut segments = Vec::new();
    project(
        &pipeline,
        &wireframe::grid(wireframe::GRID_HALF_EXTENT, wireframe::GRID_DIVISIONS),
        SegmentKind::Grid,
        &mut segments,
    );
    project(
        &pipeline,
        &wireframe::plane(&scene.plane, wireframe::PLANE_HALF_SIZE),
        SegmentKind::Plane,
        &mut segments,
    );
    project(
        &pipeline,
        &wireframe::sphere(
            &scene.sphere,
            wireframe::SPHERE_LAT_DIVISIONS,
            wireframe::SPHERE_LON_DIVISIONS,
        ),
        SegmentKind::Sphere,
        &mut segments,
    );

    Frame {
        segments,
        collision: collision::collides(&scene.sphere, &scene.plane),
        signed_distance: scene.plane.signed_distance(&scene.sphere.center),
    }
}

fn project(
    pipeline: &Pipeline,
    segments: &[Segment],
    kind: SegmentKind,
    out: &mut Vec<PixelSegment>,
) {
    out.extend(segments.iter().map(|s| PixelSegment {
        a: pipeline.world_to_pixel(&s.a),
        b: pipeline.world_to_pixel(&s.b),
        kind,
    }));
}
