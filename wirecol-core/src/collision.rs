//! Sphere / plane collision test

use nalgebra::Vector3;

/// A sphere. Keeping `radius` positive is the caller's job; the kernel
/// does not validate it.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vector3<f32>,
    pub radius: f32,
}

/// The plane `dot(normal, p) == distance`.
///
/// `normal` must be unit length and the kernel never renormalizes it, so
/// every external mutation has to be followed by renormalization before
/// the plane is used for collision or rendering.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub distance: f32,
}

impl Plane {
    /// Signed offset of `point` from the plane along its normal:
    /// positive on the normal's side, negative on the other.
    pub fn signed_distance(&self, point: &Vector3<f32>) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Boundary-inclusive overlap test: exact tangency counts as a collision.
pub fn collides(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(&sphere.center).abs() <= sphere.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Plane {
        Plane {
            normal: Vector3::new(0.0, 1.0, 0.0),
            distance: 0.0,
        }
    }

    #[test]
    fn test_exact_tangency_is_a_collision() {
        let sphere = Sphere {
            center: Vector3::new(0.0, 1.0, 0.0),
            radius: 1.0,
        };
        assert_eq!(ground().signed_distance(&sphere.center), 1.0);
        assert!(collides(&sphere, &ground()));
    }

    #[test]
    fn test_separated_sphere_does_not_collide() {
        let sphere = Sphere {
            center: Vector3::new(0.0, 2.0, 0.0),
            radius: 0.9,
        };
        assert_eq!(ground().signed_distance(&sphere.center), 2.0);
        assert!(!collides(&sphere, &ground()));
    }

    #[test]
    fn test_collision_from_either_side() {
        let above = Sphere {
            center: Vector3::new(3.0, 0.5, -2.0),
            radius: 1.0,
        };
        let below = Sphere {
            center: Vector3::new(-1.0, -0.5, 4.0),
            radius: 1.0,
        };
        assert!(collides(&above, &ground()));
        assert!(collides(&below, &ground()));
        assert!(ground().signed_distance(&below.center) < 0.0);
    }

    #[test]
    fn test_offset_plane() {
        let plane = Plane {
            normal: Vector3::new(0.0, 1.0, 0.0),
            distance: 2.0,
        };
        let sphere = Sphere {
            center: Vector3::new(0.0, 0.0, 0.0),
            radius: 1.5,
        };
        assert_eq!(plane.signed_distance(&sphere.center), -2.0);
        assert!(!collides(&sphere, &plane));
    }
}
