mod compare;
mod iter;
mod measure;
mod merge;
mod normal;

pub use compare::*;
pub use iter::*;

use nalgebra::{Point3, Vector3};
use plantmesh_attrs::{PropertyArray, PropertyError, PropertyKey, PropertyTable};
use plantmesh_common::{Float, Precision};

use crate::{geom::Triangle, Error};

/// A triangle soup: a surface made of triangles which each own their three vertices.
///
/// Triangle `i` is made of `vertices[3i]`, `vertices[3i + 1]` and `vertices[3i + 2]`, in winding
/// order. Each triangle may also carry any number of *properties*, one value per triangle, stored
/// in a [PropertyTable]. The unit normal of each triangle is one such property, kept up to date
/// by the mesh itself.
///
/// # Invariants
///
/// * `vertices.len() % 3 == 0`
/// * once any mutating method returns, every property holds one value per triangle
/// * the vertex order is never changed; merges and appends only ever add to the end
#[derive(Debug, Clone)]
pub struct Mesh<Real: Float = f64> {
    vertices: Vec<Point3<Real>>,
    properties: PropertyTable<Real>,
}

static_assertions::assert_impl_all!(Mesh<f32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Mesh<f64>: Send, Sync, Clone);

impl<Real: Float> Default for Mesh<Real> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Real: Float> Mesh<Real> {
    /// Construct a mesh with no triangles and no properties.
    ///
    /// The normal property doesn't exist until a triangle is added or
    /// [update_normals](Self::update_normals) is called.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            properties: PropertyTable::new(),
        }
    }

    /// Construct an empty mesh with room for `triangles` triangles before reallocating.
    ///
    /// The normal property isn't created yet, so the result is indistinguishable from
    /// [new](Self::new); once normals are first computed, their array reserves room for as many
    /// triangles as the vertex buffer can hold.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(3 * triangles),
            properties: PropertyTable::new(),
        }
    }

    /// Construct a mesh from a triangle-major vertex sequence, computing the normal of every
    /// triangle.
    ///
    /// # Errors
    ///
    /// * [`Shape`](Error::Shape) if `vertices.len()` isn't a multiple of 3.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(nvertices = vertices.len())))]
    pub fn from_vertices(vertices: Vec<Point3<Real>>) -> Result<Self, Error> {
        if vertices.len() % 3 != 0 {
            return Err(Error::Shape(vertices.len()));
        }
        let mut res = Self {
            vertices,
            properties: PropertyTable::new(),
        };
        res.update_normals();
        Ok(res)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    /// The unit normal of each triangle; empty if normals have never been materialized.
    #[inline]
    pub fn normals(&self) -> &[Vector3<Real>] {
        self.properties.normals().unwrap_or(&[])
    }

    #[inline]
    pub fn properties(&self) -> &PropertyTable<Real> {
        &self.properties
    }

    #[inline]
    pub fn property(&self, key: impl Into<PropertyKey>) -> Option<&PropertyArray<Real>> {
        self.properties.get(&key.into())
    }

    #[inline]
    pub fn ntriangles(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn nvertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The width of the floating-point type the mesh is stored in.
    #[inline]
    pub fn precision(&self) -> Precision {
        Real::PRECISION
    }

    /// Get the vertices of triangle `index` (0-based).
    ///
    /// # Errors
    ///
    /// * [`TriangleOutOfRange`](Error::TriangleOutOfRange) if `index >= self.ntriangles()`.
    pub fn triangle(&self, index: usize) -> Result<Triangle<Real>, Error> {
        if index >= self.ntriangles() {
            return Err(Error::TriangleOutOfRange {
                index,
                ntriangles: self.ntriangles(),
            });
        }
        let i = 3 * index;
        Ok([self.vertices[i], self.vertices[i + 1], self.vertices[i + 2]])
    }

    /// Append one triangle, computing its normal.
    ///
    /// # Errors
    ///
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) if the mesh tracks properties other
    ///   than normals, which the new triangle would have no values for.
    #[inline]
    pub fn push_triangle(&mut self, triangle: Triangle<Real>) -> Result<(), Error> {
        self.extend_triangles([triangle])
    }

    /// Append whole triangles, computing their normals.
    ///
    /// # Errors
    ///
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) if the mesh tracks properties other
    ///   than normals, which the new triangles would have no values for. Use [add](Self::add) to
    ///   append triangles along with property values.
    pub fn extend_triangles(
        &mut self,
        triangles: impl IntoIterator<Item = Triangle<Real>>,
    ) -> Result<(), Error> {
        self.check_bare()?;
        self.vertices.extend(triangles.into_iter().flatten());
        self.update_normals();
        Ok(())
    }

    /// Append a triangle-major vertex sequence, computing normals for the new triangles.
    ///
    /// # Errors
    ///
    /// * [`Shape`](Error::Shape) if `vertices.len()` isn't a multiple of 3.
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) as for
    ///   [extend_triangles](Self::extend_triangles).
    pub fn extend_vertices(&mut self, vertices: &[Point3<Real>]) -> Result<(), Error> {
        if vertices.len() % 3 != 0 {
            return Err(Error::Shape(vertices.len()));
        }
        self.check_bare()?;
        self.vertices.extend_from_slice(vertices);
        self.update_normals();
        Ok(())
    }

    /// Ensure that the mesh tracks no properties besides normals.
    fn check_bare(&self) -> Result<(), PropertyError> {
        let missing: Vec<_> = self
            .properties
            .schema()
            .into_iter()
            .filter(|k| !k.is_normal())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PropertyError::SchemaMismatch {
                missing,
                unexpected: Vec::new(),
            })
        }
    }
}

impl<Real: Float> TryFrom<Vec<Point3<Real>>> for Mesh<Real> {
    type Error = Error;

    #[inline]
    fn try_from(vertices: Vec<Point3<Real>>) -> Result<Self, Self::Error> {
        Self::from_vertices(vertices)
    }
}
