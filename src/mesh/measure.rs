use plantmesh_common::Float;

use super::Mesh;
use crate::geom::{area_triangle, Aabb};

impl<Real: Float> Mesh<Real> {
    /// The area of each triangle, in triangle order.
    pub fn areas(&self) -> Vec<Real> {
        self.triangles()
            .map(|[a, b, c]| area_triangle(&a, &b, &c))
            .collect()
    }

    /// Total surface area: the sum of [areas](Self::areas), left to right.
    pub fn area(&self) -> Real {
        self.triangles()
            .fold(Real::ZERO, |acc, [a, b, c]| acc + area_triangle(&a, &b, &c))
    }

    /// Axis-aligned bounds of every vertex, or `None` for an empty mesh.
    #[inline]
    pub fn bounds(&self) -> Option<Aabb<Real>> {
        Aabb::from_points(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use crate::Mesh;
    use nalgebra::point;

    #[test]
    fn area_is_sum_of_areas() {
        let m = Mesh::from_vertices(vec![
            point![0.0, 0.0, 0.0],
            point![3.0, 0.0, 0.0],
            point![0.0, 4.0, 0.0],
            point![0.0, 0.0, 0.0],
            point![0.0, 0.1, 0.0],
            point![0.0, 0.0, 0.3],
        ])
        .unwrap();
        let areas = m.areas();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0], 6.0);
        assert_eq!(m.area(), areas[0] + areas[1]);
    }

    #[test]
    fn empty_mesh_measures() {
        let m = Mesh::<f32>::new();
        assert!(m.areas().is_empty());
        assert_eq!(m.area(), 0.0);
        assert!(m.bounds().is_none());
    }

    #[test]
    fn bounds_cover_vertices() {
        let m = Mesh::from_vertices(vec![
            point![-1.0, 0.0, 2.0],
            point![3.0, 0.5, 0.0],
            point![0.0, -4.0, 0.0],
        ])
        .unwrap();
        let b = m.bounds().unwrap();
        assert_eq!(b.mins, point![-1.0, -4.0, 0.0]);
        assert_eq!(b.maxs, point![3.0, 0.5, 2.0]);
    }
}
