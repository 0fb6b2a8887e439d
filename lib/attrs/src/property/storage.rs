use nalgebra::Vector3;
use plantmesh_common::Float;

use crate::{PropertyKind, Rgba};

/// Per-triangle values of a single property, with runtime typing.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyArray<Real: Float> {
    Scalar(Vec<Real>),
    Vector(Vec<Vector3<Real>>),
    Color(Vec<Rgba<Real>>),
    Index(Vec<u32>),
    Flag(Vec<bool>),
}

/// A single property value, to be broadcast over some number of triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<Real: Float> {
    Scalar(Real),
    Vector(Vector3<Real>),
    Color(Rgba<Real>),
    Index(u32),
    Flag(bool),
}

/// Data handed to a mesh for one property: either one value per triangle, or a single value
/// which is repeated for every triangle it applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyData<Real: Float> {
    Array(PropertyArray<Real>),
    Broadcast(PropertyValue<Real>),
}

/// Evaluate `$act` with `$inner` bound to the `Vec` inside a [PropertyArray], whatever its variant.
macro_rules! with_inner {
    ($array:expr, $inner:ident => $act:expr) => {
        match $array {
            PropertyArray::Scalar($inner) => $act,
            PropertyArray::Vector($inner) => $act,
            PropertyArray::Color($inner) => $act,
            PropertyArray::Index($inner) => $act,
            PropertyArray::Flag($inner) => $act,
        }
    };
}

/// Evaluate `$act` with the inner `Vec`s of two [PropertyArrays](PropertyArray) of the same
/// variant, or `$mismatch` with `$rest` bound to the second array if the variants differ.
macro_rules! zip_inner {
    ($a:expr, $b:expr; ($x:ident, $y:ident) => $act:expr; $rest:ident => $mismatch:expr) => {
        match ($a, $b) {
            (PropertyArray::Scalar($x), PropertyArray::Scalar($y)) => $act,
            (PropertyArray::Vector($x), PropertyArray::Vector($y)) => $act,
            (PropertyArray::Color($x), PropertyArray::Color($y)) => $act,
            (PropertyArray::Index($x), PropertyArray::Index($y)) => $act,
            (PropertyArray::Flag($x), PropertyArray::Flag($y)) => $act,
            (_, $rest) => $mismatch,
        }
    };
}

impl<Real: Float> PropertyArray<Real> {
    #[inline]
    pub fn empty(kind: PropertyKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    pub fn with_capacity(kind: PropertyKind, capacity: usize) -> Self {
        match kind {
            PropertyKind::Scalar => Self::Scalar(Vec::with_capacity(capacity)),
            PropertyKind::Vector => Self::Vector(Vec::with_capacity(capacity)),
            PropertyKind::Color => Self::Color(Vec::with_capacity(capacity)),
            PropertyKind::Index => Self::Index(Vec::with_capacity(capacity)),
            PropertyKind::Flag => Self::Flag(Vec::with_capacity(capacity)),
        }
    }

    /// Construct an array holding `n` copies of `value`.
    pub fn repeat(value: &PropertyValue<Real>, n: usize) -> Self {
        match value {
            PropertyValue::Scalar(v) => Self::Scalar(vec![*v; n]),
            PropertyValue::Vector(v) => Self::Vector(vec![*v; n]),
            PropertyValue::Color(v) => Self::Color(vec![*v; n]),
            PropertyValue::Index(v) => Self::Index(vec![*v; n]),
            PropertyValue::Flag(v) => Self::Flag(vec![*v; n]),
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Scalar(_) => PropertyKind::Scalar,
            Self::Vector(_) => PropertyKind::Vector,
            Self::Color(_) => PropertyKind::Color,
            Self::Index(_) => PropertyKind::Index,
            Self::Flag(_) => PropertyKind::Flag,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        with_inner!(self, values => values.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a copy of every value in `other`, preserving order.
    ///
    /// # Errors
    ///
    /// * the kind of `other`, if it differs from the kind of `self`; `self` is left untouched.
    pub fn extend_from(&mut self, other: &Self) -> Result<(), PropertyKind> {
        zip_inner!(self, other;
            (ours, theirs) => {
                ours.extend_from_slice(theirs);
                Ok(())
            };
            rest => Err(rest.kind()))
    }

    /// Move every value in `other` onto the end of `self`, preserving order.
    ///
    /// # Errors
    ///
    /// * `other`, unchanged, if its kind differs from the kind of `self`.
    pub fn append(&mut self, other: Self) -> Result<(), Self> {
        zip_inner!(self, other;
            (ours, theirs) => {
                ours.extend(theirs);
                Ok(())
            };
            rest => Err(rest))
    }

    pub fn as_scalars(&self) -> Option<&[Real]> {
        match self {
            Self::Scalar(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_vectors(&self) -> Option<&[Vector3<Real>]> {
        match self {
            Self::Vector(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_colors(&self) -> Option<&[Rgba<Real>]> {
        match self {
            Self::Color(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_indices(&self) -> Option<&[u32]> {
        match self {
            Self::Index(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&[bool]> {
        match self {
            Self::Flag(values) => Some(values),
            _ => None,
        }
    }
}

impl<Real: Float> PropertyValue<Real> {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Scalar(_) => PropertyKind::Scalar,
            Self::Vector(_) => PropertyKind::Vector,
            Self::Color(_) => PropertyKind::Color,
            Self::Index(_) => PropertyKind::Index,
            Self::Flag(_) => PropertyKind::Flag,
        }
    }
}

impl<Real: Float> PropertyData<Real> {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Array(array) => array.kind(),
            Self::Broadcast(value) => value.kind(),
        }
    }

    /// Resolve into one value per triangle, repeating a broadcast value `triangles` times.
    ///
    /// Arrays are returned as-is, whatever their length.
    pub fn into_array(self, triangles: usize) -> PropertyArray<Real> {
        match self {
            Self::Array(array) => array,
            Self::Broadcast(value) => PropertyArray::repeat(&value, triangles),
        }
    }
}

impl<Real: Float> From<PropertyArray<Real>> for PropertyData<Real> {
    #[inline]
    fn from(array: PropertyArray<Real>) -> Self {
        Self::Array(array)
    }
}

impl<Real: Float> From<PropertyValue<Real>> for PropertyData<Real> {
    #[inline]
    fn from(value: PropertyValue<Real>) -> Self {
        Self::Broadcast(value)
    }
}

/// Implement `From` on [PropertyArray], [PropertyValue] and [PropertyData] for one element type,
/// given the variant it's stored as.
macro_rules! impl_from_element {
    (<$R:ident> $Elem:ty => $Variant:ident) => {
        impl<$R: Float> From<Vec<$Elem>> for PropertyArray<$R> {
            #[inline]
            fn from(values: Vec<$Elem>) -> Self {
                Self::$Variant(values)
            }
        }
        impl<$R: Float> From<$Elem> for PropertyValue<$R> {
            #[inline]
            fn from(value: $Elem) -> Self {
                Self::$Variant(value)
            }
        }
        impl<$R: Float> From<Vec<$Elem>> for PropertyData<$R> {
            #[inline]
            fn from(values: Vec<$Elem>) -> Self {
                Self::Array(PropertyArray::$Variant(values))
            }
        }
        impl<$R: Float> From<$Elem> for PropertyData<$R> {
            #[inline]
            fn from(value: $Elem) -> Self {
                Self::Broadcast(PropertyValue::$Variant(value))
            }
        }
    };
    ($Real:ty: $Elem:ty => $Variant:ident) => {
        impl From<Vec<$Elem>> for PropertyArray<$Real> {
            #[inline]
            fn from(values: Vec<$Elem>) -> Self {
                Self::$Variant(values)
            }
        }
        impl From<$Elem> for PropertyValue<$Real> {
            #[inline]
            fn from(value: $Elem) -> Self {
                Self::$Variant(value)
            }
        }
        impl From<Vec<$Elem>> for PropertyData<$Real> {
            #[inline]
            fn from(values: Vec<$Elem>) -> Self {
                Self::Array(PropertyArray::$Variant(values))
            }
        }
        impl From<$Elem> for PropertyData<$Real> {
            #[inline]
            fn from(value: $Elem) -> Self {
                Self::Broadcast(PropertyValue::$Variant(value))
            }
        }
    };
}

impl_from_element!(<R> R => Scalar);
impl_from_element!(<R> Vector3<R> => Vector);
impl_from_element!(<R> Rgba<R> => Color);

// coherence won't let these be generic over Float, since upstream could implement Float for u32
impl_from_element!(f32: u32 => Index);
impl_from_element!(f64: u32 => Index);
impl_from_element!(f32: bool => Flag);
impl_from_element!(f64: bool => Flag);
