//! Per-triangle property tables for triangle-soup meshes.
//!
//! A [PropertyTable] maps a [PropertyKey] to a [PropertyArray] holding one value per triangle.
//! The element type of each array is chosen at runtime (see [PropertyKind]), so a single table can
//! carry normals, scalar fields such as absorbed light, colors, material indices, and flags side
//! by side.
//!
//! Two tables with the same *schema* (set of keys) can be [merged](PropertyTable::merge), which
//! appends each of the donor's arrays onto the receiver's. Merges check the whole schema before
//! touching any array, so a failed merge leaves the receiver as it was.

mod error;
mod property;

pub use error::*;
pub use property::*;
