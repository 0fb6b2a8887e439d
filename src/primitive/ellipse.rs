use nalgebra::Point3;
use plantmesh_common::Float;

use super::{turn, Primitive};
use crate::Error;

/// A flat ellipse inscribed in the rectangle `[0, length] × [-width/2, width/2]`, as a fan of
/// triangles around its centre. Faces +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse<Real: Float = f64> {
    pub length: Real,
    pub width: Real,
    /// Number of triangles in the fan.
    pub n: usize,
}

impl<Real: Float> Ellipse<Real> {
    pub const DEFAULT_TRIANGLES: usize = 20;

    #[inline]
    pub fn new(length: Real, width: Real) -> Self {
        Self {
            length,
            width,
            n: Self::DEFAULT_TRIANGLES,
        }
    }

    #[inline]
    pub fn with_triangles(self, n: usize) -> Self {
        Self { n, ..self }
    }
}

impl<Real: Float> Primitive<Real> for Ellipse<Real> {
    const NAME: &'static str = "ellipse";

    fn vertices(&self) -> Result<Vec<Point3<Real>>, Error> {
        if self.n < 3 {
            return Err(Error::Discretization {
                primitive: Self::NAME,
                n: self.n,
                reason: "needs at least 3 triangles",
            });
        }
        let a = self.length * Real::HALF;
        let b = self.width * Real::HALF;
        let centre = Point3::new(a, Real::ZERO, Real::ZERO);
        let rim = |i: usize| {
            let (sin, cos) = turn::<Real>(i, self.n).sin_cos();
            Point3::new(a + a * cos, b * sin, Real::ZERO)
        };
        let mut res = Vec::with_capacity(3 * self.n);
        for i in 0..self.n {
            res.extend([centre, rim(i), rim(i + 1)]);
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn ellipse_fan() {
        let m = Ellipse::new(2.0_f64, 1.0).with_triangles(64).mesh().unwrap();
        assert_eq!(m.ntriangles(), 64);
        assert!(m
            .normals()
            .iter()
            .all(|n| (n - vector![0.0, 0.0, 1.0]).norm() < 1e-12));
        // inscribed polygon approaches π·a·b from below
        let exact = std::f64::consts::PI * 1.0 * 0.5;
        assert!(m.area() < exact);
        assert!(exact - m.area() < 0.01);
    }

    #[test]
    fn ellipse_needs_three_triangles() {
        let err = Ellipse::new(1.0_f32, 1.0).with_triangles(2).vertices();
        assert_eq!(
            err,
            Err(Error::Discretization {
                primitive: "ellipse",
                n: 2,
                reason: "needs at least 3 triangles"
            })
        );
    }
}
