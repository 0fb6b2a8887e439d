//! Triangle-soup surface meshes for procedurally generated plant organs.
//!
//! A [Mesh] is a flat list of triangles, each owning its three vertices, plus any number of
//! per-triangle properties (see [plantmesh_attrs]). Flat normals are maintained by the mesh as it
//! grows, and meshes with the same set of properties can be [merged](Mesh::merge) into one.
//!
//! Everything is generic over [Float], so a mesh is stored, and measured, entirely in either
//! `f32` or `f64`.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod geom;
mod mesh;
pub mod primitive;

pub use error::Error;
pub use mesh::*;
pub use plantmesh_attrs::{
    PropertyArray, PropertyData, PropertyError, PropertyKey, PropertyKind, PropertyTable,
    PropertyValue, Rgba,
};
pub use plantmesh_common::{Float, Precision};
