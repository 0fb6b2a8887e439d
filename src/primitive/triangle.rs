use nalgebra::Point3;
use plantmesh_common::Float;

use super::Primitive;
use crate::Error;

/// A single isoceles triangle with its base of `width` on the y axis and its apex at
/// `(length, 0, 0)`. Faces +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<Real: Float = f64> {
    pub length: Real,
    pub width: Real,
}

impl<Real: Float> Triangle<Real> {
    #[inline]
    pub fn new(length: Real, width: Real) -> Self {
        Self { length, width }
    }
}

impl<Real: Float> Primitive<Real> for Triangle<Real> {
    const NAME: &'static str = "triangle";

    fn vertices(&self) -> Result<Vec<Point3<Real>>, Error> {
        let y = self.width * Real::HALF;
        Ok(vec![
            Point3::new(Real::ZERO, -y, Real::ZERO),
            Point3::new(self.length, Real::ZERO, Real::ZERO),
            Point3::new(Real::ZERO, y, Real::ZERO),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn triangle_faces_up() {
        let m = Triangle::new(2.0_f64, 1.0).mesh().unwrap();
        assert_eq!(m.ntriangles(), 1);
        assert_eq!(m.normals(), &[vector![0.0, 0.0, 1.0]]);
        assert_eq!(m.area(), 1.0);
    }
}
