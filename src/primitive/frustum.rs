use nalgebra::Point3;
use plantmesh_common::Float;

use super::{ring_point, turn, Primitive};
use crate::Error;

/// A closed elliptic frustum along +x, e.g. an internode or a fruit.
///
/// The base at `x = 0` has semi-axes `width/2` (y) and `height/2` (z); the top at `x = length` is
/// the base scaled by `ratio`. The surface is cut into `n / 4` angular segments, each made of two
/// side triangles and one triangle on each cap, all facing outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidFrustum<Real: Float = f64> {
    pub length: Real,
    pub width: Real,
    pub height: Real,
    pub ratio: Real,
    /// Total number of triangles; a positive multiple of 4.
    pub n: usize,
}

impl<Real: Float> SolidFrustum<Real> {
    pub const DEFAULT_TRIANGLES: usize = 40;

    #[inline]
    pub fn new(length: Real, width: Real, height: Real, ratio: Real) -> Self {
        Self {
            length,
            width,
            height,
            ratio,
            n: Self::DEFAULT_TRIANGLES,
        }
    }

    #[inline]
    pub fn with_triangles(self, n: usize) -> Self {
        Self { n, ..self }
    }
}

impl<Real: Float> Primitive<Real> for SolidFrustum<Real> {
    const NAME: &'static str = "solid frustum";

    fn vertices(&self) -> Result<Vec<Point3<Real>>, Error> {
        if self.n == 0 || self.n % 4 != 0 {
            return Err(Error::Discretization {
                primitive: Self::NAME,
                n: self.n,
                reason: "must be a positive multiple of 4",
            });
        }
        let segments = self.n / 4;
        let a = self.width * Real::HALF;
        let b = self.height * Real::HALF;
        let (ta, tb) = (a * self.ratio, b * self.ratio);
        let base_centre = Point3::origin();
        let top_centre = Point3::new(self.length, Real::ZERO, Real::ZERO);

        let mut res = Vec::with_capacity(3 * self.n);
        for i in 0..segments {
            let (t0, t1) = (turn::<Real>(i, segments), turn::<Real>(i + 1, segments));
            let b0 = ring_point(Real::ZERO, a, b, t0);
            let b1 = ring_point(Real::ZERO, a, b, t1);
            let u0 = ring_point(self.length, ta, tb, t0);
            let u1 = ring_point(self.length, ta, tb, t1);
            res.extend([b0, b1, u1]);
            res.extend([b0, u1, u0]);
            res.extend([base_centre, b1, b0]);
            res.extend([top_centre, u0, u1]);
        }
        Ok(res)
    }
}
