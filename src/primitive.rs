//! Reference producers of simple organ shapes, in a local frame where length runs along +x, width
//! along y and height along z.

mod ellipse;
mod frustum;
mod rectangle;
mod triangle;

pub use ellipse::*;
pub use frustum::*;
pub use rectangle::*;
pub use triangle::*;

use nalgebra::Point3;
use plantmesh_common::Float;

use crate::{Error, Mesh};

/// A shape which can be discretized into a triangle soup.
pub trait Primitive<Real: Float> {
    /// Human-readable name, used in errors.
    const NAME: &'static str;

    /// The triangle-major vertex sequence of the shape.
    ///
    /// # Errors
    ///
    /// * [`Discretization`](Error::Discretization) if the shape can't be built from the requested
    ///   number of triangles.
    fn vertices(&self) -> Result<Vec<Point3<Real>>, Error>;

    /// Build a [Mesh] of the shape, with normals.
    fn mesh(&self) -> Result<Mesh<Real>, Error> {
        let mesh = Mesh::from_vertices(self.vertices()?)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            primitive = Self::NAME,
            ntriangles = mesh.ntriangles(),
            "built primitive"
        );
        Ok(mesh)
    }
}

/// Point on an ellipse in the plane `x = x`, with semi-axes `a` along y and `b` along z.
#[inline]
fn ring_point<Real: Float>(x: Real, a: Real, b: Real, theta: Real) -> Point3<Real> {
    let (sin, cos) = theta.sin_cos();
    Point3::new(x, a * cos, b * sin)
}

/// The angle of step `i` of `n` around a full turn.
#[inline]
fn turn<Real: Float>(i: usize, n: usize) -> Real {
    Real::TAU() * Real::from_count(i) / Real::from_count(n)
}
