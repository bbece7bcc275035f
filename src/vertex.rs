// Vertices of a rigid object

use std::cmp::Ordering;
use std::fmt;

use glam::Vec3;

use crate::history::UndoSlot;
use crate::math::{approx_eq, to_spherical};
use crate::position::Position;

/// Identifier handed out by the owning [`Object`](crate::Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    /// Raw counter value, unique within the owning object.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named point of a rigid object.
///
/// A vertex keeps its home coordinate untouched and splits it into the part
/// that rotates (relative to the pivot) and the parts that only translate
/// (the captured pivot location and the object offset). Its current world
/// location is always rebuilt from those pieces:
///
/// ```text
/// current = orientation * basis + rotation_origin + offset + translation
/// ```
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Coordinate as supplied, in object space
    home: Vec3,
    /// Home relative to the pivot captured by the last pivot change
    basis: Vec3,
    /// Pivot home captured by the last pivot change
    rotation_origin: Vec3,
    /// Base point of the object in world space
    offset: Vec3,
    current: Vec3,
    previous: UndoSlot<Vec3>,
    name: String,
    id: Option<VertexId>,
}

impl Vertex {
    /// Creates a standalone vertex at `(x, y, z)`.
    ///
    /// The vertex has no id until it is attached to an object.
    pub fn new(x: f32, y: f32, z: f32, name: impl Into<String>) -> Self {
        let home = Vec3::new(x, y, z);
        Self {
            home,
            basis: home,
            rotation_origin: Vec3::ZERO,
            offset: Vec3::ZERO,
            current: home,
            previous: UndoSlot::new(),
            name: name.into(),
            id: None,
        }
    }

    pub(crate) fn assign_id(&mut self, id: VertexId) {
        self.id = Some(id);
    }

    /// Rebases this vertex on a new pivot whose home coordinate is `pivot_home`.
    ///
    /// The pivot location is copied, not linked: moving the pivot vertex later
    /// does not update vertices that already captured it. The current location
    /// is left as it is.
    pub fn set_rotation_origin(&mut self, pivot_home: Vec3) {
        self.rotation_origin = pivot_home;
        self.basis = self.home - pivot_home;
    }

    /// Sets the object offset and places the vertex at `home + offset`.
    ///
    /// This bypasses any position and is meant for setting an object up before
    /// it has been rotated or translated.
    pub fn set_offset_origin(&mut self, x: f32, y: f32, z: f32) {
        self.offset = Vec3::new(x, y, z);
        self.current = self.home + self.offset;
    }

    /// Recomputes the current location from `position`, keeping the old one
    /// for a single undo.
    pub fn apply_position(&mut self, position: &Position) {
        self.previous.record(self.current);
        self.current = self.world_location(position);
    }

    /// Recomputes the current location without touching the undo history.
    pub(crate) fn place(&mut self, position: &Position) {
        self.current = self.world_location(position);
    }

    fn world_location(&self, position: &Position) -> Vec3 {
        position.orientation * self.basis
            + self.rotation_origin
            + self.offset
            + position.translation
    }

    /// Restores the location held before the last applied position.
    ///
    /// Only one step is kept; calling this again does nothing.
    pub fn undo(&mut self) {
        if let Some(previous) = self.previous.restore() {
            self.current = previous;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<VertexId> {
        self.id
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn current(&self) -> Vec3 {
        self.current
    }

    /// Location before the last applied position, if one is still held.
    pub fn previous(&self) -> Option<Vec3> {
        self.previous.previous()
    }

    pub fn x(&self) -> f32 {
        self.current.x
    }

    pub fn y(&self) -> f32 {
        self.current.y
    }

    pub fn z(&self) -> f32 {
        self.current.z
    }

    /// True when both current locations agree within `APPROX_EPSILON` on
    /// every axis. Intended for assertions, not as an equality relation.
    pub fn approx_eq(&self, other: &Vertex) -> bool {
        approx_eq(self.current, other.current)
    }

    /// Orders vertices by current location: X, then Y, then Z.
    pub fn cmp_location(&self, other: &Vertex) -> Ordering {
        let axis = |a: f32, b: f32| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        axis(self.current.x, other.current.x)
            .then_with(|| axis(self.current.y, other.current.y))
            .then_with(|| axis(self.current.z, other.current.z))
    }

    pub fn less(&self, other: &Vertex) -> bool {
        self.cmp_location(other) == Ordering::Less
    }

    /// Euclidean distance between the two current locations.
    pub fn distance_to(&self, other: &Vertex) -> f32 {
        self.current.distance(other.current)
    }

    pub fn dot(&self, other: &Vertex) -> f32 {
        self.current.dot(other.current)
    }

    /// Angle in degrees between the current and the previous location.
    pub fn dot_angle(&self) -> Option<f32> {
        let previous = self.previous.previous()?;
        let cos = self.current.dot(previous) / (self.current.length() * previous.length());
        Some(cos.clamp(-1.0, 1.0).acos().to_degrees())
    }

    /// Change in distance from the world origin since the previous location.
    pub fn distance_change(&self) -> Option<f32> {
        let previous = self.previous.previous()?;
        Some(self.current.length() - previous.length())
    }

    /// Spherical coordinates `(radius, inclination, azimuth)` of the current
    /// location, angles in degrees.
    pub fn spherical(&self) -> (f32, f32, f32) {
        to_spherical(self.current)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vertex: {} current location x:{:.6} y:{:.6} z:{:.6}",
            self.name, self.current.x, self.current.y, self.current.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Quat;

    #[test]
    fn new_vertex_sits_at_home() {
        let v = Vertex::new(1.0, 2.0, 3.0, "a");
        assert_eq!(v.current(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.home(), v.current());
        assert_eq!(v.id(), None);
        assert_eq!(v.previous(), None);
        assert_eq!(v.name(), "a");
    }

    #[test]
    fn rotation_origin_is_a_snapshot() {
        let mut v = Vertex::new(2.0, 0.0, 0.0, "a");
        v.set_rotation_origin(Vec3::new(1.0, 0.0, 0.0));
        // Rebasing twice does not accumulate
        v.set_rotation_origin(Vec3::new(1.0, 0.0, 0.0));

        let half_turn = Position::new(Quat::from_rotation_z(180f32.to_radians()), Vec3::ZERO);
        v.apply_position(&half_turn);
        assert!(approx_eq(v.current(), Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn offset_places_vertex_immediately() {
        let mut v = Vertex::new(1.0, 0.0, 0.0, "a");
        v.set_offset_origin(0.0, 10.0, 0.0);
        assert_eq!(v.current(), Vec3::new(1.0, 10.0, 0.0));

        v.apply_position(&Position::new(Quat::IDENTITY, Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(v.current(), Vec3::new(2.0, 10.0, 0.0));
    }

    #[test]
    fn undo_keeps_one_level() {
        let mut v = Vertex::new(1.0, 0.0, 0.0, "a");
        v.apply_position(&Position::new(Quat::IDENTITY, Vec3::X));
        v.apply_position(&Position::new(Quat::IDENTITY, Vec3::Y));
        v.undo();
        assert_eq!(v.current(), Vec3::new(2.0, 0.0, 0.0));
        v.undo();
        assert_eq!(v.current(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn ordering_uses_the_other_vertex_on_every_axis() {
        let a = Vertex::new(1.0, 1.0, 1.0, "a");
        let b = Vertex::new(1.0, 1.0, 2.0, "b");
        let c = Vertex::new(0.0, 5.0, 5.0, "c");
        assert!(a.less(&b));
        assert!(!b.less(&a));
        assert!(c.less(&a));
        assert_eq!(a.cmp_location(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn distance_and_dot() {
        let a = Vertex::new(1.0, 0.0, 0.0, "a");
        let b = Vertex::new(0.0, 1.0, 0.0, "b");
        assert_abs_diff_eq!(a.distance_to(&b), 2f32.sqrt(), epsilon = 1e-6);
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn angle_and_distance_change_follow_history() {
        let mut v = Vertex::new(1.0, 0.0, 0.0, "a");
        assert_eq!(v.dot_angle(), None);

        let quarter = Position::new(Quat::from_rotation_z(90f32.to_radians()), Vec3::ZERO);
        v.apply_position(&quarter);
        assert_abs_diff_eq!(v.dot_angle().unwrap(), 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(v.distance_change().unwrap(), 0.0, epsilon = 1e-5);

        v.apply_position(&Position::new(Quat::IDENTITY, Vec3::X));
        assert_abs_diff_eq!(v.distance_change().unwrap(), 1.0, epsilon = 1e-5);

        v.undo();
        assert_eq!(v.dot_angle(), None);
    }

    #[test]
    fn spherical_of_current_location() {
        let v = Vertex::new(1.0, 0.0, 0.0, "a");
        let (r, theta, phi) = v.spherical();
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(theta, 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(phi, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn display_shows_name_and_location() {
        let v = Vertex::new(1.0, 2.0, 3.0, "tip");
        assert_eq!(
            v.to_string(),
            "Vertex: tip current location x:1.000000 y:2.000000 z:3.000000"
        );
    }
}
