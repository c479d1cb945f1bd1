//! Homogeneous 4x4 transforms
//!
//! Row-vector convention: a point is the row `(x, y, z, 1)` multiplied on
//! the left of the matrix, so in a product `a * b` the transform `a` is
//! applied first. Translation and perspective terms therefore live in the
//! bottom row and the last column. `Matrix4` multiplication already is
//! `r[i][j] = sum_k a[i][k] * b[k][j]`, which is exactly the composition
//! the pipeline needs.

use nalgebra::{Matrix4, Vector3};

/// Identity with the translation terms of `t` in row 3.
pub fn translation(t: &Vector3<f32>) -> Matrix4<f32> {
    let mut m = Matrix4::identity();
    m[(3, 0)] = t.x;
    m[(3, 1)] = t.y;
    m[(3, 2)] = t.z;
    m
}

/// Right-handed rotation around the X axis.
pub fn rotation_x(angle: f32) -> Matrix4<f32> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Matrix4::identity();
    m[(1, 1)] = cos;
    m[(1, 2)] = sin;
    m[(2, 1)] = -sin;
    m[(2, 2)] = cos;
    m
}

/// Right-handed rotation around the Y axis.
///
/// There is deliberately no Z-axis rotation: the camera is a 2-DOF orbit
/// camera (pitch and yaw only), so roll never occurs.
pub fn rotation_y(angle: f32) -> Matrix4<f32> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Matrix4::identity();
    m[(0, 0)] = cos;
    m[(0, 2)] = -sin;
    m[(2, 0)] = sin;
    m[(2, 2)] = cos;
    m
}

/// Apply `m` to the point `(v, 1)` and divide out the homogeneous `w`.
///
/// A `w` at or near zero (a point exactly on the camera's eye plane)
/// produces infinite or NaN coordinates. That case is a known, unguarded
/// limitation of this pipeline, not a handled error.
pub fn transform_point(v: &Vector3<f32>, m: &Matrix4<f32>) -> Vector3<f32> {
    let x = v.x * m[(0, 0)] + v.y * m[(1, 0)] + v.z * m[(2, 0)] + m[(3, 0)];
    let y = v.x * m[(0, 1)] + v.y * m[(1, 1)] + v.z * m[(2, 1)] + m[(3, 1)];
    let z = v.x * m[(0, 2)] + v.y * m[(1, 2)] + v.z * m[(2, 2)] + m[(3, 2)];
    let w = v.x * m[(0, 3)] + v.y * m[(1, 3)] + v.z * m[(2, 3)] + m[(3, 3)];
    Vector3::new(x / w, y / w, z / w)
}

/// Perspective projection mapping view-space depth into the projective `w`.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let s = 1.0 / (fov_y * 0.5).tan();
    let mut m = Matrix4::zeros();
    m[(0, 0)] = s / aspect;
    m[(1, 1)] = s;
    m[(2, 2)] = far / (near - far);
    m[(2, 3)] = -1.0;
    m[(3, 2)] = (near * far) / (near - far);
    m
}

/// Map normalized device coordinates to the pixel rectangle
/// `(left, top)..(left + width, top + height)`.
pub fn viewport(left: f32, top: f32, width: f32, height: f32) -> Matrix4<f32> {
    let mut m = Matrix4::zeros();
    m[(0, 0)] = width * 0.5;
    m[(1, 1)] = height * 0.5;
    m[(2, 2)] = 1.0;
    m[(3, 0)] = left + width * 0.5;
    m[(3, 1)] = top + height * 0.5;
    m[(3, 3)] = 1.0;
    m
}
