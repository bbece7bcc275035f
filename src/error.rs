// Errors reported by object operations

use thiserror::Error;

/// Failures an [`Object`](crate::Object) rejects before mutating anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// An object was constructed without any explicit vertex.
    #[error("object '{name}' needs at least one vertex")]
    NoVertices { name: String },

    /// The pivot was reassigned to an index past the end of the vertex list.
    #[error("pivot index {index} is out of range for {len} vertices")]
    PivotOutOfRange { index: usize, len: usize },

    /// A vertex lookup used an index past the end of the vertex list.
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ObjectError>;
