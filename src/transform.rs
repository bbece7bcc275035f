// Rotation and translation descriptors

use glam::{Quat, Vec3};

use crate::math::{quat_from_degrees, renormalize};
use crate::position::Position;

/// How a rotation is combined with an existing orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    None,
    AbsoluteSet,
    ComposeBeforeAbsolute,
    ComposeAfterLocal,
}

/// How a translation is combined with an existing translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationPolicy {
    None,
    AbsoluteSet,
    Relative,
}

/// The rotational half of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Leave the orientation alone.
    None,
    /// Replace the orientation.
    Absolute(Quat),
    /// Rotate in the world frame: `q * orientation`.
    ComposeWorld(Quat),
    /// Rotate in the object's local frame: `orientation * q`.
    ComposeLocal(Quat),
}

impl Rotation {
    /// Build a rotation from Euler angles in degrees under `policy`.
    pub fn from_degrees(policy: RotationPolicy, x: f32, y: f32, z: f32) -> Self {
        match policy {
            RotationPolicy::None => Rotation::None,
            RotationPolicy::AbsoluteSet => Rotation::Absolute(quat_from_degrees(x, y, z)),
            RotationPolicy::ComposeBeforeAbsolute => {
                Rotation::ComposeWorld(quat_from_degrees(x, y, z))
            }
            RotationPolicy::ComposeAfterLocal => {
                Rotation::ComposeLocal(quat_from_degrees(x, y, z))
            }
        }
    }

    pub fn policy(&self) -> RotationPolicy {
        match self {
            Rotation::None => RotationPolicy::None,
            Rotation::Absolute(_) => RotationPolicy::AbsoluteSet,
            Rotation::ComposeWorld(_) => RotationPolicy::ComposeBeforeAbsolute,
            Rotation::ComposeLocal(_) => RotationPolicy::ComposeAfterLocal,
        }
    }

    fn apply(&self, orientation: Quat) -> Quat {
        match *self {
            Rotation::None => orientation,
            Rotation::Absolute(q) => q,
            Rotation::ComposeWorld(q) => renormalize(q * orientation),
            Rotation::ComposeLocal(q) => renormalize(orientation * q),
        }
    }
}

/// The translational half of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translation {
    None,
    Absolute(Vec3),
    Relative(Vec3),
}

impl Translation {
    pub fn from_offset(policy: TranslationPolicy, x: f32, y: f32, z: f32) -> Self {
        let offset = Vec3::new(x, y, z);
        match policy {
            TranslationPolicy::None => Translation::None,
            TranslationPolicy::AbsoluteSet => Translation::Absolute(offset),
            TranslationPolicy::Relative => Translation::Relative(offset),
        }
    }

    pub fn policy(&self) -> TranslationPolicy {
        match self {
            Translation::None => TranslationPolicy::None,
            Translation::Absolute(_) => TranslationPolicy::AbsoluteSet,
            Translation::Relative(_) => TranslationPolicy::Relative,
        }
    }

    fn apply(&self, translation: Vec3) -> Vec3 {
        match *self {
            Translation::None => translation,
            Translation::Absolute(t) => t,
            Translation::Relative(t) => translation + t,
        }
    }
}

/// A one-shot change to a [`Position`].
///
/// Built per call, applied once and dropped. Each half only carries data when
/// its policy actually uses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: Rotation,
    pub translation: Translation,
}

impl Transform {
    /// Create a transform from Euler angles (degrees) and a translation offset.
    pub fn new(
        degrees: Vec3,
        rotation_policy: RotationPolicy,
        offset: Vec3,
        translation_policy: TranslationPolicy,
    ) -> Self {
        Self {
            rotation: Rotation::from_degrees(rotation_policy, degrees.x, degrees.y, degrees.z),
            translation: Translation::from_offset(
                translation_policy,
                offset.x,
                offset.y,
                offset.z,
            ),
        }
    }

    /// A transform that only rotates.
    pub fn rotate(rotation: Rotation) -> Self {
        Self {
            rotation,
            translation: Translation::None,
        }
    }

    /// A transform that only translates.
    pub fn translate(translation: Translation) -> Self {
        Self {
            rotation: Rotation::None,
            translation,
        }
    }

    /// Mutate `position` in place according to both policies.
    pub fn apply(&self, position: &mut Position) {
        position.orientation = self.rotation.apply(position.orientation);
        position.translation = self.translation.apply(position.translation);
    }
}
