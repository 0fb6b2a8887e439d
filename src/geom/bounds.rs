use nalgebra::{Point3, Vector3};
use plantmesh_common::Float;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<Real: Float> {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl<Real: Float> Aabb<Real> {
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Construct an [Aabb] containing exactly one point.
    #[inline]
    pub fn from_point(p: Point3<Real>) -> Self {
        Self::new(p, p)
    }

    /// Construct the smallest [Aabb] containing every point in `points`, or `None` if there are
    /// no points.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<Real>>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut res = Self::from_point(*points.next()?);
        for p in points {
            res.expand_to(p);
        }
        Some(res)
    }

    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        let Self { mins: i, maxs: a } = self;
        nalgebra::point![
            (i.x + a.x) / Real::TWO,
            (i.y + a.y) / Real::TWO,
            (i.z + a.z) / Real::TWO
        ]
    }

    /// The side lengths of `self`.
    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// Grow `self` such that it contains `p`.
    #[inline]
    pub fn expand_to(&mut self, p: &Point3<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }
}
