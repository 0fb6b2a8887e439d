use std::{iter::FusedIterator, slice::ChunksExact};

use nalgebra::Point3;
use plantmesh_common::Float;

use super::Mesh;
use crate::geom::Triangle;

/// Iterator over the triangles of a [Mesh], in order.
#[derive(Debug, Clone)]
pub struct Triangles<'m, Real: Float> {
    chunks: ChunksExact<'m, Point3<Real>>,
}

impl<'m, Real: Float> Triangles<'m, Real> {
    fn to_triangle(chunk: &[Point3<Real>]) -> Triangle<Real> {
        [chunk[0], chunk[1], chunk[2]]
    }
}

impl<'m, Real: Float> Iterator for Triangles<'m, Real> {
    type Item = Triangle<Real>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Self::to_triangle)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.chunks.nth(n).map(Self::to_triangle)
    }
}

impl<'m, Real: Float> DoubleEndedIterator for Triangles<'m, Real> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back().map(Self::to_triangle)
    }
}

impl<'m, Real: Float> ExactSizeIterator for Triangles<'m, Real> {}
impl<'m, Real: Float> FusedIterator for Triangles<'m, Real> {}

impl<Real: Float> Mesh<Real> {
    /// Iterate over the vertices of each triangle, in triangle order.
    #[inline]
    pub fn triangles(&self) -> Triangles<'_, Real> {
        Triangles {
            chunks: self.vertices.chunks_exact(3),
        }
    }
}

impl<'m, Real: Float> IntoIterator for &'m Mesh<Real> {
    type Item = Triangle<Real>;
    type IntoIter = Triangles<'m, Real>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.triangles()
    }
}

#[cfg(test)]
mod tests {
    use crate::Mesh;
    use nalgebra::point;

    #[test]
    fn triangles_in_order_both_ways() {
        let v = vec![
            point![0.0f32, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![0.0, 1.0, 0.0],
            point![0.0, 0.0, 1.0],
            point![1.0, 0.0, 1.0],
            point![0.0, 1.0, 1.0],
        ];
        let m = Mesh::from_vertices(v.clone()).unwrap();
        let mut it = m.triangles();
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some([v[3], v[4], v[5]]));
        assert_eq!(it.next(), Some([v[0], v[1], v[2]]));
        assert_eq!(it.next(), None);
        assert_eq!((&m).into_iter().count(), m.ntriangles());
    }
}
