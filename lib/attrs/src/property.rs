use std::fmt;

use nalgebra::Point4;

mod storage;
mod table;

pub use storage::*;
pub use table::*;

/// Name of the reserved normal property, as accepted by `PropertyKey::from`.
pub const NORMAL: &str = "normal";

/// The name under which a per-triangle property is stored.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKey {
    /// Unit normal of each triangle. Always holds [Vector](PropertyArray::Vector) values.
    Normal,
    /// Any other property, e.g. `color` or `absorbed_light`.
    Named(String),
}

impl PropertyKey {
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => NORMAL,
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        match name {
            NORMAL => Self::Normal,
            _ => Self::Named(name.to_owned()),
        }
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        match name.as_str() {
            NORMAL => Self::Normal,
            _ => Self::Named(name),
        }
    }
}

impl From<&PropertyKey> for PropertyKey {
    #[inline]
    fn from(key: &PropertyKey) -> Self {
        key.clone()
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of value stored in a [PropertyArray].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Scalar,
    Vector,
    Color,
    Index,
    Flag,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Scalar => f.write_str("scalar"),
            PropertyKind::Vector => f.write_str("vector"),
            PropertyKind::Color => f.write_str("color"),
            PropertyKind::Index => f.write_str("index"),
            PropertyKind::Flag => f.write_str("flag"),
        }
    }
}

pub type Rgba<C> = Point4<C>;
