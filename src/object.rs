// Rigid objects built from vertices

use glam::Vec3;
use log::{debug, trace, warn};

use crate::error::{ObjectError, Result};
use crate::history::UndoSlot;
use crate::position::Position;
use crate::transform::{Rotation, RotationPolicy, Transform, Translation, TranslationPolicy};
use crate::vertex::{Vertex, VertexId};

/// A rigid object: an owned set of vertices moved together by one [`Position`].
///
/// Index 0 is always an implicit vertex named `origin` at the object-space
/// origin. It is the default pivot. Every rotate, translate, position set and
/// undo is pushed to all vertices before the call returns.
#[derive(Debug, Clone)]
pub struct Object {
    name: String,
    vertices: Vec<Vertex>,
    pivot: usize,
    position: Position,
    history: UndoSlot<Position>,
    offset: Vec3,
    next_id: u64,
}

impl Object {
    /// Creates a new object from at least one vertex.
    ///
    /// The implicit origin vertex is prepended and does not count towards that
    /// minimum.
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>) -> Result<Self> {
        let name = name.into();
        if vertices.is_empty() {
            warn!("refusing to build object '{}' without vertices", name);
            return Err(ObjectError::NoVertices { name });
        }

        let mut object = Self {
            name,
            vertices: Vec::with_capacity(vertices.len() + 1),
            pivot: 0,
            position: Position::identity(),
            history: UndoSlot::new(),
            offset: Vec3::ZERO,
            next_id: 0,
        };
        object.attach(Vertex::new(0.0, 0.0, 0.0, "origin"));
        for vertex in vertices {
            object.attach(vertex);
        }
        debug!(
            "created object '{}' with {} vertices",
            object.name,
            object.vertices.len()
        );
        Ok(object)
    }

    fn attach(&mut self, mut vertex: Vertex) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        vertex.assign_id(id);
        self.vertices.push(vertex);
        id
    }

    /// Appends a vertex, optionally making it the new pivot.
    ///
    /// The vertex joins the object where the object currently is: it picks up
    /// the current pivot, offset and position. If the last change can still be
    /// undone, the vertex remembers where it would have been before it, so an
    /// undo moves it back along with the rest of the object.
    pub fn add_vertex(&mut self, mut vertex: Vertex, make_origin: bool) -> VertexId {
        let pivot_home = self.vertices[self.pivot].home();
        vertex.set_rotation_origin(pivot_home);
        if self.offset != Vec3::ZERO {
            vertex.set_offset_origin(self.offset.x, self.offset.y, self.offset.z);
        }
        match self.history.previous() {
            Some(previous) => {
                vertex.place(&previous);
                vertex.apply_position(&self.position);
            }
            None => vertex.place(&self.position),
        }

        let id = self.attach(vertex);
        if make_origin {
            self.rebase(self.vertices.len() - 1);
        }
        id
    }

    /// Makes vertex `index` the point future rotations pivot about.
    ///
    /// Every vertex is rebased on the pivot's home coordinate. No vertex
    /// moves as a result, but the new pivot only applies from the next
    /// propagation on. With a non-identity orientation that next propagation,
    /// even a zero translation, shifts each vertex by `(p - o) - q * (p - o)`
    /// where `o` and `p` are the old and new pivot homes.
    pub fn set_new_origin(&mut self, index: usize) -> Result<()> {
        if index >= self.vertices.len() {
            warn!(
                "object '{}': pivot index {} out of range ({} vertices)",
                self.name,
                index,
                self.vertices.len()
            );
            return Err(ObjectError::PivotOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        self.rebase(index);
        Ok(())
    }

    fn rebase(&mut self, index: usize) {
        self.pivot = index;
        let pivot_home = self.vertices[index].home();
        for vertex in &mut self.vertices {
            vertex.set_rotation_origin(pivot_home);
        }
        debug!(
            "object '{}': pivot is now vertex {} '{}'",
            self.name, index, self.vertices[index].name()
        );
    }

    /// Sets the orientation to the given Euler angles (degrees).
    pub fn abs_rotate(&mut self, x: f32, y: f32, z: f32) {
        self.transform(Transform::rotate(Rotation::from_degrees(
            RotationPolicy::AbsoluteSet,
            x,
            y,
            z,
        )));
    }

    /// Rotates in the world frame on top of the current orientation.
    ///
    /// Two 90 degree turns about X end where one 180 degree absolute turn does.
    pub fn rel_rotate_abs_ref(&mut self, x: f32, y: f32, z: f32) {
        self.transform(Transform::rotate(Rotation::from_degrees(
            RotationPolicy::ComposeBeforeAbsolute,
            x,
            y,
            z,
        )));
    }

    /// Rotates in the object's own frame on top of the current orientation.
    pub fn rel_rotate_local_ref(&mut self, x: f32, y: f32, z: f32) {
        self.transform(Transform::rotate(Rotation::from_degrees(
            RotationPolicy::ComposeAfterLocal,
            x,
            y,
            z,
        )));
    }

    pub fn abs_translate(&mut self, x: f32, y: f32, z: f32) {
        self.transform(Transform::translate(Translation::from_offset(
            TranslationPolicy::AbsoluteSet,
            x,
            y,
            z,
        )));
    }

    pub fn rel_translate(&mut self, x: f32, y: f32, z: f32) {
        self.transform(Transform::translate(Translation::from_offset(
            TranslationPolicy::Relative,
            x,
            y,
            z,
        )));
    }

    /// Applies an arbitrary transform, keeping the old position for undo.
    pub fn transform(&mut self, transform: Transform) {
        self.history.record(self.position);
        transform.apply(&mut self.position);
        trace!("object '{}': {:?} -> {}", self.name, transform, self.position);
        self.propagate();
    }

    fn propagate(&mut self) {
        for vertex in &mut self.vertices {
            vertex.apply_position(&self.position);
        }
    }

    /// Places the object's base point in world space.
    ///
    /// Vertices jump straight to `home + offset`; this is meant for setup,
    /// before any rotation or translation.
    pub fn set_object_offset(&mut self, x: f32, y: f32, z: f32) {
        self.offset = Vec3::new(x, y, z);
        for vertex in &mut self.vertices {
            vertex.set_offset_origin(x, y, z);
        }
        debug!("object '{}': offset set to {}", self.name, self.offset);
    }

    /// Snapshot of the live position.
    pub fn copy_current_position(&self) -> Position {
        self.position.copy()
    }

    /// Jumps to `position`, keeping the old one for undo.
    ///
    /// A position fully describes the placement, so setting the same value
    /// again always reproduces the same vertex locations.
    pub fn set_position(&mut self, position: &Position) {
        self.history.record(self.position);
        self.position.overwrite(position);
        debug!("object '{}': position set to {}", self.name, self.position);
        self.propagate();
    }

    /// Reverts the last transform or position set.
    ///
    /// Only one step is kept; a second call in a row does nothing.
    pub fn undo(&mut self) {
        let Some(previous) = self.history.restore() else {
            debug!("object '{}': nothing to undo", self.name);
            return;
        };
        self.position.overwrite(&previous);
        for vertex in &mut self.vertices {
            vertex.undo();
        }
        debug!("object '{}': restored {}", self.name, self.position);
    }

    /// Position that brings vertex `index` to the world origin and undoes the
    /// object's current orientation.
    pub fn position_of_vertex(&self, index: usize) -> Result<Position> {
        let vertex = self.vertex(index)?;
        Ok(Position::new(
            self.position.orientation().inverse(),
            -vertex.current(),
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<&Vertex> {
        self.vertices
            .get(index)
            .ok_or(ObjectError::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Finds a vertex by name.
    pub fn vertex_named(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name() == name)
    }

    /// Index of the current pivot vertex.
    pub fn pivot(&self) -> usize {
        self.pivot
    }

    /// Number of vertices, including the implicit origin. Never less than 2.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
}
