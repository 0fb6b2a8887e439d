use plantmesh_attrs::PropertyError;

/// Errors related to [Meshes](crate::Mesh) and the [primitives](crate::primitive) which produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Vertex count is not a multiple of 3: {0}")]
    Shape(usize),
    #[error("Attempted to merge an empty list of meshes")]
    EmptyInput,
    #[error("Triangle index out of range: 0..{ntriangles} ∌ {index}")]
    TriangleOutOfRange { index: usize, ntriangles: usize },
    #[error(transparent)]
    Property(#[from] PropertyError),
    #[error("Cannot build {primitive} from {n} triangles: {reason}")]
    Discretization {
        primitive: &'static str,
        n: usize,
        reason: &'static str,
    },
}
