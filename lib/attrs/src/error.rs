use crate::{PropertyKey, PropertyKind};

/// Errors related to [PropertyTables](crate::PropertyTable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The receiver and donor don't track the same set of properties.
    ///
    /// `missing` lists keys the receiver tracks but the donor doesn't supply; `unexpected` lists
    /// keys the donor supplies but the receiver doesn't track.
    #[error("property schemas differ: missing {missing:?}, unexpected {unexpected:?}")]
    SchemaMismatch {
        missing: Vec<PropertyKey>,
        unexpected: Vec<PropertyKey>,
    },
    #[error("property `{key}` holds {expected} values; cannot append {found} values")]
    KindMismatch {
        key: PropertyKey,
        expected: PropertyKind,
        found: PropertyKind,
    },
    #[error("property `{key}` would hold {found} values for {expected} triangles")]
    Length {
        key: PropertyKey,
        expected: usize,
        found: usize,
    },
    #[error("property `{0}` is maintained by the mesh and cannot be set directly")]
    Reserved(PropertyKey),
}
