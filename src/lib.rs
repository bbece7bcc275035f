//! Rigid 3D objects built from named vertices.
//!
//! An [`Object`] owns its vertices and a single [`Position`] (orientation plus
//! translation). Rotations and translations are expressed as a [`Transform`],
//! applied to the position, and then pushed to every vertex so that each
//! vertex's current location can be read straight after the call. Rotations
//! turn about a pivot vertex chosen with [`Object::set_new_origin`], and the
//! last change can be reverted once with [`Object::undo`].
//!
//! ```
//! use rigid_object::{Object, Vertex};
//!
//! let mut cube = Object::new("edge", vec![Vertex::new(1.0, 0.0, 0.0, "x")]).unwrap();
//! cube.abs_translate(5.0, 0.0, 0.0);
//! assert_eq!(cube.vertex_named("x").unwrap().x(), 6.0);
//! ```

// Module declarations
mod error;
mod history;
pub mod math;
mod object;
mod position;
mod transform;
mod vertex;

pub use error::{ObjectError, Result};
pub use history::UndoSlot;
pub use object::Object;
pub use position::Position;
pub use transform::{Rotation, RotationPolicy, Transform, Translation, TranslationPolicy};
pub use vertex::{Vertex, VertexId};

// Re-export glam math types for convenience
pub use glam::{Quat, Vec3};
