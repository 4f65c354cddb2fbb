// math.rs
//
// Camera orientation math shared by Camera and GameplayCamera.
// Host rotations are degree-valued Euler triples (x = pitch, y = roll,
// z = yaw); directions are world-space unit vectors.

use glam::Vec3;
use std::f32::consts::PI;

const DEG_TO_RAD: f32 = PI / 180.0;
const RAD_TO_DEG: f32 = 180.0 / PI;

/// Unit vector a camera with the given rotation looks along.
pub fn forward_from_rotation(rotation: Vec3) -> Vec3 {
    let r = rotation * DEG_TO_RAD;
    Vec3::new(
        -r.z.sin() * r.x.cos().abs(),
        r.z.cos() * r.x.cos().abs(),
        r.x.sin(),
    )
    .normalize_or_zero()
}

/// Euler rotation (degrees) that makes a camera look along `direction`,
/// keeping the caller's `roll`.
///
/// Pitch comes from the direction's height against its ground-plane
/// length, yaw from its ground-plane heading; both via `atan2`, so a zero
/// direction degenerates to pitch 0 / yaw 0 rather than NaN.
pub fn rotation_from_direction(direction: Vec3, roll: f32) -> Vec3 {
    let dir = direction.normalize_or_zero();
    let planar = Vec3::new(dir.x, dir.y, 0.0).length();
    Vec3::new(
        dir.z.atan2(planar) * RAD_TO_DEG,
        roll,
        dir.x.atan2(dir.y) * -RAD_TO_DEG,
    )
}
