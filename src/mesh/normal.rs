use plantmesh_common::Float;

use super::Mesh;
use crate::geom::normal_triangle;

impl<Real: Float> Mesh<Real> {
    /// Compute the normal of every triangle which doesn't have one yet.
    ///
    /// Normals are stored in triangle order, so a normal array of length `L` means triangles
    /// `0..L` are done and only triangles `L..` are computed. Creates the normal property if it
    /// doesn't exist, even when there are no triangles.
    pub fn update_normals(&mut self) {
        let capacity = self.vertices.capacity() / 3;
        let normals = self.properties.normals_mut(capacity);
        let done = normals.len();
        let pending = (self.vertices.len() / 3).saturating_sub(done);
        if pending == 0 {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(done, pending, "updating normals");
        normals.reserve(pending);
        normals.extend(
            self.vertices[3 * done..]
                .chunks_exact(3)
                .map(|t| normal_triangle(&t[0], &t[1], &t[2])),
        );
    }
}
