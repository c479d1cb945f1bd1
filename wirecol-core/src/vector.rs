//! Vector helpers used across the kernel
//!
//! nalgebra's `Vector3` already covers add/sub/scale/dot/cross/length;
//! this module adds the two policy decisions the kernel needs on top.

use nalgebra::Vector3;

/// Lengths at or below this are treated as degenerate when normalizing.
pub const NORMALIZE_EPSILON: f32 = 1e-5;

/// Normalize `v`, falling back to the unit Y axis when `v` is near zero.
///
/// The fallback is a documented degenerate-input policy, not an error:
/// callers must tolerate receiving an arbitrary unit vector when the
/// input has near-zero length.
pub fn normalize_or_up(v: &Vector3<f32>) -> Vector3<f32> {
    let len = v.norm();
    if len > NORMALIZE_EPSILON {
        v / len
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    }
}

/// Pick a coordinate axis that is never parallel to the unit vector `n`.
///
/// The threshold is `1/sqrt(3)`: the squared components of a unit vector
/// sum to 1, so at that boundary neither candidate axis can be
/// near-parallel to `n`, and `n.cross(&perpendicular(n))` always has
/// non-zero length.
pub fn perpendicular(n: &Vector3<f32>) -> Vector3<f32> {
    if n.x.abs() < 0.57735 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    }
}
