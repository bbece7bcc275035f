// Object placement in world space

use std::fmt;

use glam::{Quat, Vec3};

use crate::vertex::Vertex;

/// The complete placement of an object: an orientation plus a translation.
///
/// `Position` is a plain value. Copying it takes a snapshot, and a snapshot can
/// later be written back with [`Position::overwrite`] to reproduce exactly the
/// same placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub(crate) orientation: Quat,
    pub(crate) translation: Vec3,
}

impl Position {
    /// Create an identity position
    pub fn identity() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            translation: Vec3::ZERO,
        }
    }

    /// Create a position from an orientation and a translation.
    ///
    /// The orientation is normalized on the way in.
    pub fn new(orientation: Quat, translation: Vec3) -> Self {
        Self {
            orientation: orientation.normalize(),
            translation,
        }
    }

    /// A position that moves `vertex` to the world origin without rotating.
    pub fn centered_on(vertex: &Vertex) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            translation: -vertex.current(),
        }
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Independent snapshot of this position.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Replace both fields with those of `other`.
    pub fn overwrite(&mut self, other: &Position) {
        self.orientation = other.orientation;
        self.translation = other.translation;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.orientation;
        let t = self.translation;
        write!(
            f,
            "Position quat: w:{:.6} i:{:.6} j:{:.6} k:{:.6} translation: x:{:.6} y:{:.6} z:{:.6}",
            q.w, q.x, q.y, q.z, t.x, t.y, t.z
        )
    }
}
