use nalgebra::Point3;
use plantmesh_common::Float;

use super::Primitive;
use crate::Error;

/// A rectangle spanning `[0, length]` along x and `[-width/2, width/2]` along y, split into two
/// triangles. Faces +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<Real: Float = f64> {
    pub length: Real,
    pub width: Real,
}

impl<Real: Float> Rectangle<Real> {
    #[inline]
    pub fn new(length: Real, width: Real) -> Self {
        Self { length, width }
    }
}

impl<Real: Float> Primitive<Real> for Rectangle<Real> {
    const NAME: &'static str = "rectangle";

    fn vertices(&self) -> Result<Vec<Point3<Real>>, Error> {
        let (l, y, z) = (self.length, self.width * Real::HALF, Real::ZERO);
        let v1 = Point3::new(z, -y, z);
        let v2 = Point3::new(l, -y, z);
        let v3 = Point3::new(l, y, z);
        let v4 = Point3::new(z, y, z);
        Ok(vec![v1, v2, v3, v1, v3, v4])
    }
}
