// Math utilities for rigid objects

use glam::{Quat, Vec3};

/// Per-axis tolerance used when comparing vertex locations.
pub const APPROX_EPSILON: f32 = 1e-3;

/// Builds a unit quaternion from Euler angles given in degrees.
///
/// The rotation is composed intrinsically Z, then Y, then X, i.e.
/// `Rz * Ry * Rx`. The order is fixed; swapping it produces a different
/// orientation for any rotation about more than one axis.
pub fn quat_from_degrees(x: f32, y: f32, z: f32) -> Quat {
    let q = Quat::from_rotation_z(z.to_radians())
        * Quat::from_rotation_y(y.to_radians())
        * Quat::from_rotation_x(x.to_radians());
    q.normalize()
}

/// Renormalizes an orientation after composition.
///
/// Falls back to identity if the quaternion has collapsed to zero length.
pub fn renormalize(q: Quat) -> Quat {
    let len = q.length();
    if len > f32::EPSILON {
        q / len
    } else {
        Quat::IDENTITY
    }
}

/// Converts a cartesian vector into spherical coordinates.
///
/// Returns `(radius, inclination, azimuth)` with both angles in degrees.
/// Inclination is measured from +Z, azimuth from +X towards +Y.
pub fn to_spherical(v: Vec3) -> (f32, f32, f32) {
    let r = v.length();
    if r <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let theta = (v.z / r).clamp(-1.0, 1.0).acos();
    let phi = v.y.atan2(v.x);
    (r, theta.to_degrees(), phi.to_degrees())
}

/// Returns true when every axis of `a` is within `APPROX_EPSILON` of `b`.
pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, APPROX_EPSILON)
}
