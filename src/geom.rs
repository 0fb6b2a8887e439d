//! Geometry of single triangles.

mod bounds;
pub use bounds::*;

use nalgebra::{Point3, Vector3};
use plantmesh_common::Float;

/// The three vertices of a triangle, in winding order.
pub type Triangle<Real> = [Point3<Real>; 3];

/// Twice-area normal of a triangle: `(v2 - v1) × (v3 - v1)`.
#[inline]
pub fn cross_triangle<Real: Float>(
    v1: &Point3<Real>,
    v2: &Point3<Real>,
    v3: &Point3<Real>,
) -> Vector3<Real> {
    (v2 - v1).cross(&(v3 - v1))
}

/// Unit normal of a triangle, following the right-hand rule over its winding.
///
/// Degenerate (zero-area) triangles have no direction; their normal is NaN.
#[inline]
pub fn normal_triangle<Real: Float>(
    v1: &Point3<Real>,
    v2: &Point3<Real>,
    v3: &Point3<Real>,
) -> Vector3<Real> {
    cross_triangle(v1, v2, v3).normalize()
}

/// Area of a triangle.
#[inline]
pub fn area_triangle<Real: Float>(v1: &Point3<Real>, v2: &Point3<Real>, v3: &Point3<Real>) -> Real {
    Real::HALF * cross_triangle(v1, v2, v3).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{point, vector};

    #[test]
    fn right_triangle() {
        let (a, b, c) = (
            point![0.0, 0.0, 0.0],
            point![3.0, 0.0, 0.0],
            point![0.0, 4.0, 0.0],
        );
        assert_eq!(area_triangle(&a, &b, &c), 6.0);
        assert_eq!(normal_triangle(&a, &b, &c), vector![0.0, 0.0, 1.0]);
        // reversed winding flips the normal, not the area
        assert_eq!(normal_triangle(&a, &c, &b), vector![0.0, 0.0, -1.0]);
        assert_eq!(area_triangle(&a, &c, &b), 6.0);
    }

    #[test]
    fn degenerate_triangle_has_nan_normal() {
        let (a, b, c) = (
            point![0.0f32, 0.0, 0.0],
            point![1.0, 1.0, 1.0],
            point![2.0, 2.0, 2.0],
        );
        assert_eq!(area_triangle(&a, &b, &c), 0.0);
        assert!(normal_triangle(&a, &b, &c).iter().all(|x| x.is_nan()));
    }
}
