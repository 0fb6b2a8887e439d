use nalgebra::Vector3;
use plantmesh_common::Float;

use super::Mesh;

impl<Real: Float> PartialEq for Mesh<Real> {
    /// Meshes are equal when their vertices and normals are; other properties are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.normals() == other.normals()
    }
}

/// Tolerances for [Mesh::approx_eq].
///
/// A pair of sequences `x`, `y` is close when `‖x - y‖ <= max(atol, rtol * max(‖x‖, ‖y‖))`, with
/// norms taken over every coordinate of the sequence at once. Without an explicit `rtol`, it is
/// `sqrt(EPSILON)` if `atol` is zero or absent, and zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerance<Real> {
    pub atol: Option<Real>,
    pub rtol: Option<Real>,
}

impl<Real: Float> Tolerance<Real> {
    #[inline]
    pub fn absolute(atol: Real) -> Self {
        Self {
            atol: Some(atol),
            rtol: None,
        }
    }

    #[inline]
    pub fn relative(rtol: Real) -> Self {
        Self {
            atol: None,
            rtol: Some(rtol),
        }
    }

    /// The `(atol, rtol)` actually used.
    pub fn resolve(&self) -> (Real, Real) {
        let atol = self.atol.unwrap_or(Real::ZERO);
        let rtol = self.rtol.unwrap_or_else(|| {
            if atol > Real::ZERO {
                Real::ZERO
            } else {
                Real::EPSILON.sqrt()
            }
        });
        (atol, rtol)
    }
}

/// Whether two sequences of vectors are within `(atol, rtol)` of each other.
fn isapprox<'v, Real: Float>(
    x: impl ExactSizeIterator<Item = &'v Vector3<Real>> + Clone,
    y: impl ExactSizeIterator<Item = &'v Vector3<Real>> + Clone,
    (atol, rtol): (Real, Real),
) -> bool {
    if x.len() != y.len() {
        return false;
    }
    if x.clone().eq(y.clone()) {
        return true;
    }
    let sq = |acc: Real, v: &Vector3<Real>| acc + v.norm_squared();
    let d = x
        .clone()
        .zip(y.clone())
        .map(|(a, b)| a - b)
        .fold(Real::ZERO, |acc, v| sq(acc, &v))
        .sqrt();
    let nx = x.fold(Real::ZERO, sq).sqrt();
    let ny = y.fold(Real::ZERO, sq).sqrt();
    d.is_finite() && d <= atol.max(rtol * nx.max(ny))
}

impl<Real: Float> Mesh<Real> {
    /// Whether `self` and `other` have approximately the same vertices and normals.
    ///
    /// Vertices and normals are compared separately, each as one long sequence; see [Tolerance].
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance<Real>) -> bool {
        let tol = tolerance.resolve();
        isapprox(
            self.vertices.iter().map(|p| &p.coords),
            other.vertices.iter().map(|p| &p.coords),
            tol,
        ) && isapprox(self.normals().iter(), other.normals().iter(), tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    fn single(x: f64) -> Mesh {
        Mesh::from_vertices(vec![
            point![0.0, 0.0, 0.0],
            point![x, 0.0, 0.0],
            point![0.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn equality_ignores_other_properties() {
        let a = single(1.0);
        let mut b = single(1.0);
        b.add_property("light", 2.0_f64, None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, single(2.0));
    }

    #[test]
    fn default_tolerance_is_relative() {
        let t = Tolerance::<f64>::default().resolve();
        assert_eq!(t, (0.0, f64::EPSILON.sqrt()));
        assert_eq!(Tolerance::absolute(0.1_f32).resolve(), (0.1, 0.0));
        assert_eq!(Tolerance::relative(0.5_f64).resolve(), (0.0, 0.5));
    }

    #[test]
    fn nearby_meshes_are_approximately_equal() {
        let a = single(1.0);
        let b = single(1.0 + 1e-12);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, Tolerance::default()));
        assert!(!a.approx_eq(&single(1.1), Tolerance::default()));
        assert!(a.approx_eq(&single(1.1), Tolerance::absolute(0.2)));
    }

    #[test]
    fn different_sizes_are_never_close() {
        let a = single(1.0);
        let b = Mesh::merge([&a, &a]).unwrap();
        assert!(!a.approx_eq(&b, Tolerance::absolute(f64::MAX)));
    }

    #[test]
    fn nan_normals_are_never_close() {
        let degenerate = |x: f64| {
            Mesh::from_vertices(vec![
                point![0.0, 0.0, 0.0],
                point![x, 0.0, 0.0],
                point![2.0 * x, 0.0, 0.0],
            ])
            .unwrap()
        };
        let a = degenerate(1.0);
        assert_ne!(a, a.clone());
        assert!(!a.approx_eq(&a.clone(), Tolerance::absolute(1.0)));
    }
}
