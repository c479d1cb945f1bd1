//! Wirecol core library - stateless 3D geometry kernel
//!
//! Vector and 4x4 homogeneous matrix algebra, a camera-to-screen
//! transform pipeline, a sphere/plane collision test, and procedural
//! wireframe generators. The kernel is pure and single-threaded: it keeps
//! no state across frames and performs no I/O. The frame loop, input
//! polling, and actual line drawing live in host crates behind the
//! [`scene::ParameterSource`] and [`scene::LineRenderer`] seams.

pub mod camera;
pub mod collision;
pub mod frame;
pub mod matrix;
pub mod scene;
pub mod vector;
pub mod wireframe;

// Re-export commonly used types
pub use camera::{CameraPose, Pipeline, ViewConfig, PITCH_LIMIT};
pub use collision::{collides, Plane, Sphere};
pub use frame::{build_frame, Frame, PixelSegment, SegmentKind};
pub use scene::{LineRenderer, ParameterSource, SceneState};
pub use wireframe::Segment;
