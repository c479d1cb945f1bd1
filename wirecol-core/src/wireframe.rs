//! World-space wireframe generators
//!
//! Each generator returns line segments in world space; mapping them to
//! the screen is the pipeline's job and drawing them is the host's.

use nalgebra::Vector3;

use crate::collision::{Plane, Sphere};
use crate::vector;

/// Default ground grid: half extent and number of divisions per axis.
pub const GRID_HALF_EXTENT: f32 = 4.0;
pub const GRID_DIVISIONS: u32 = 20;
/// Default sphere tessellation (latitude bands x longitude steps).
pub const SPHERE_LAT_DIVISIONS: u32 = 12;
pub const SPHERE_LON_DIVISIONS: u32 = 24;
/// Half size of the quad drawn for the conceptually infinite plane.
pub const PLANE_HALF_SIZE: f32 = 5.0;

/// A world-space line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vector3<f32>,
    pub b: Vector3<f32>,
}

impl Segment {
    pub fn new(a: Vector3<f32>, b: Vector3<f32>) -> Self {
        Self { a, b }
    }
}

/// Square grid on the XZ plane at y = 0: `divisions + 1` lines parallel
/// to each axis, evenly spaced across `[-half_extent, half_extent]`, for
/// `2 * (divisions + 1)` segments total.
pub fn grid(half_extent: f32, divisions: u32) -> Vec<Segment> {
    let step = half_extent * 2.0 / divisions as f32;
    let mut segments = Vec::with_capacity(2 * (divisions as usize + 1));
    for i in 0..=divisions {
        let offset = -half_extent + i as f32 * step;
        segments.push(Segment::new(
            Vector3::new(offset, 0.0, -half_extent),
            Vector3::new(offset, 0.0, half_extent),
        ));
        segments.push(Segment::new(
            Vector3::new(-half_extent, 0.0, offset),
            Vector3::new(half_extent, 0.0, offset),
        ));
    }
    segments
}

/// Latitude rings of a sphere: `lat_div + 1` latitudes over
/// `[-pi/2, pi/2]`, each ring split into `lon_div` segments covering
/// `[0, 2*pi)`, for `(lat_div + 1) * lon_div` segments total.
///
/// The same formula applies regardless of radius; resolution only trades
/// smoothness against segment count.
pub fn sphere(sphere: &Sphere, lat_div: u32, lon_div: u32) -> Vec<Segment> {
    use std::f32::consts::PI;
    let mut segments = Vec::with_capacity(((lat_div + 1) * lon_div) as usize);
    for lat in 0..=lat_div {
        let la = (-0.5 + lat as f32 / lat_div as f32) * PI;
        for lon in 0..lon_div {
            let a = 2.0 * PI * lon as f32 / lon_div as f32;
            let b = 2.0 * PI * (lon + 1) as f32 / lon_div as f32;
            segments.push(Segment::new(
                ring_point(sphere, la, a),
                ring_point(sphere, la, b),
            ));
        }
    }
    segments
}

fn ring_point(sphere: &Sphere, la: f32, lo: f32) -> Vector3<f32> {
    sphere.center
        + sphere.radius * Vector3::new(la.cos() * lo.cos(), la.sin(), la.cos() * lo.sin())
}

/// Finite quad standing in for the infinite plane: an in-plane basis is
/// built from the normal, both axes are scaled to `half_size`, and the
/// four edges come back as a closed loop.
pub fn plane(plane: &Plane, half_size: f32) -> Vec<Segment> {
    let center = plane.normal * plane.distance;
    let e1 = vector::normalize_or_up(&plane.normal.cross(&vector::perpendicular(&plane.normal)));
    let e2 = plane.normal.cross(&e1);
    let (e1, e2) = (e1 * half_size, e2 * half_size);
    let corners = [
        center + e1 + e2,
        center + e1 - e2,
        center - e1 - e2,
        center - e1 + e2,
    ];
    (0..4)
        .map(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_segment_count() {
        assert_eq!(grid(4.0, 20).len(), 42);
        assert_eq!(grid(1.0, 1).len(), 4);
    }

    #[test]
    fn test_grid_lies_on_ground() {
        for segment in grid(GRID_HALF_EXTENT, GRID_DIVISIONS) {
            assert_eq!(segment.a.y, 0.0);
            assert_eq!(segment.b.y, 0.0);
            assert!(segment.a.x.abs() <= GRID_HALF_EXTENT + 1e-4);
            assert!(segment.a.z.abs() <= GRID_HALF_EXTENT + 1e-4);
        }
    }

    #[test]
    fn test_sphere_segment_count() {
        let s = Sphere {
            center: Vector3::zeros(),
            radius: 1.0,
        };
        assert_eq!(sphere(&s, 12, 24).len(), 13 * 24);
        assert_eq!(sphere(&s, 2, 3).len(), 9);
    }

    #[test]
    fn test_sphere_points_lie_on_surface() {
        let s = Sphere {
            center: Vector3::new(1.0, -2.0, 0.5),
            radius: 2.5,
        };
        for segment in sphere(&s, 6, 8) {
            assert!(((segment.a - s.center).norm() - s.radius).abs() < 1e-5);
            assert!(((segment.b - s.center).norm() - s.radius).abs() < 1e-5);
        }
    }

    #[test]
    fn test_plane_quad_is_a_closed_loop() {
        let p = Plane {
            normal: Vector3::new(0.0, 1.0, 0.0),
            distance: 1.0,
        };
        let edges = plane(&p, 5.0);
        assert_eq!(edges.len(), 4);
        for i in 0..4 {
            assert_eq!(edges[i].b, edges[(i + 1) % 4].a);
        }
    }

    #[test]
    fn test_plane_quad_corners_lie_on_plane() {
        let n = vector::normalize_or_up(&Vector3::new(0.3, 0.8, -0.2));
        let p = Plane {
            normal: n,
            distance: -0.75,
        };
        let half = 5.0;
        for edge in plane(&p, half) {
            assert!(p.signed_distance(&edge.a).abs() < 1e-4);
            // Corner sits half * sqrt(2) from the quad center.
            let center = n * p.distance;
            assert!(((edge.a - center).norm() - half * std::f32::consts::SQRT_2).abs() < 1e-3);
        }
    }
}
