// camera.rs
//
// Scripted camera wrapper. One `Camera` per engine cam handle; every
// accessor forwards straight to the camera native table, so the engine
// stays the single source of truth for camera state.

use std::fmt;

use glam::Vec3;
use rage_natives::handles::CamHandle;
use rage_natives::CameraNatives;

use crate::entities::{Ped, PedBone, Prop, ScriptEntity, Vehicle};
use crate::enums::CameraShake;
use crate::math;

/// What a camera aims at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraTarget {
    Entity(ScriptEntity),
    PedBone(PedBone),
    /// A fixed world position. The aim point is absolute; any point
    /// offset is ignored by the engine for this form.
    Position(Vec3),
}

impl From<ScriptEntity> for CameraTarget {
    fn from(entity: ScriptEntity) -> Self {
        Self::Entity(entity)
    }
}

impl From<Ped> for CameraTarget {
    fn from(ped: Ped) -> Self {
        Self::Entity(ped.into())
    }
}

impl From<Vehicle> for CameraTarget {
    fn from(vehicle: Vehicle) -> Self {
        Self::Entity(vehicle.into())
    }
}

impl From<Prop> for CameraTarget {
    fn from(prop: Prop) -> Self {
        Self::Entity(prop.into())
    }
}

impl From<PedBone> for CameraTarget {
    fn from(bone: PedBone) -> Self {
        Self::PedBone(bone)
    }
}

impl From<Vec3> for CameraTarget {
    fn from(position: Vec3) -> Self {
        Self::Position(position)
    }
}

/// What a camera is rigidly mounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachTarget {
    Entity {
        entity: ScriptEntity,
        /// Keep the mount offset in entity space rather than world space.
        relative: bool,
    },
    /// Bone mounts are always bone-relative.
    PedBone(PedBone),
}

impl From<ScriptEntity> for AttachTarget {
    fn from(entity: ScriptEntity) -> Self {
        Self::Entity {
            entity,
            relative: true,
        }
    }
}

impl From<Ped> for AttachTarget {
    fn from(ped: Ped) -> Self {
        ScriptEntity::from(ped).into()
    }
}

impl From<Vehicle> for AttachTarget {
    fn from(vehicle: Vehicle) -> Self {
        ScriptEntity::from(vehicle).into()
    }
}

impl From<Prop> for AttachTarget {
    fn from(prop: Prop) -> Self {
        ScriptEntity::from(prop).into()
    }
}

impl From<PedBone> for AttachTarget {
    fn from(bone: PedBone) -> Self {
        Self::PedBone(bone)
    }
}

/// A scripted camera, addressed by handle against an injected host.
pub struct Camera<'n, N: ?Sized> {
    natives: &'n N,
    handle: CamHandle,
}

impl<'n, N: ?Sized> Camera<'n, N> {
    pub fn new(natives: &'n N, handle: CamHandle) -> Self {
        Self { natives, handle }
    }

    pub fn handle(&self) -> CamHandle {
        self.handle
    }
}

// Identity is the handle; manual impls keep `N` free of bounds.
impl<N: ?Sized> Clone for Camera<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: ?Sized> Copy for Camera<'_, N> {}

impl<N: ?Sized> PartialEq for Camera<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<N: ?Sized> Eq for Camera<'_, N> {}

impl<N: ?Sized> fmt::Debug for Camera<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera").field("handle", &self.handle).finish()
    }
}

impl<'n, N: CameraNatives + ?Sized> Camera<'n, N> {
    pub fn is_active(&self) -> bool {
        self.natives.is_cam_active(self.handle) != 0
    }

    pub fn set_active(&self, active: bool) {
        self.natives.set_cam_active(self.handle, active);
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from(self.natives.get_cam_coord(self.handle))
    }

    pub fn set_position(&self, position: Vec3) {
        self.natives
            .set_cam_coord(self.handle, position.x, position.y, position.z);
    }

    /// Degree-valued Euler rotation (x pitch, y roll, z yaw), order 2.
    pub fn rotation(&self) -> Vec3 {
        Vec3::from(self.natives.get_cam_rot(self.handle, 2))
    }

    pub fn set_rotation(&self, rotation: Vec3) {
        self.natives
            .set_cam_rot(self.handle, rotation.x, rotation.y, rotation.z, 2);
    }

    /// Unit vector the camera looks along; alias of [`forward_vector`].
    ///
    /// [`forward_vector`]: Camera::forward_vector
    pub fn direction(&self) -> Vec3 {
        self.forward_vector()
    }

    /// Re-aim the camera along `direction`, keeping its current roll.
    pub fn set_direction(&self, direction: Vec3) {
        let roll = self.rotation().y;
        self.set_rotation(math::rotation_from_direction(direction, roll));
    }

    pub fn forward_vector(&self) -> Vec3 {
        math::forward_from_rotation(self.rotation())
    }

    pub fn field_of_view(&self) -> f32 {
        self.natives.get_cam_fov(self.handle)
    }

    pub fn set_field_of_view(&self, fov: f32) {
        self.natives.set_cam_fov(self.handle, fov);
    }

    pub fn near_clip(&self) -> f32 {
        self.natives.get_cam_near_clip(self.handle)
    }

    pub fn set_near_clip(&self, near_clip: f32) {
        self.natives.set_cam_near_clip(self.handle, near_clip);
    }

    pub fn far_clip(&self) -> f32 {
        self.natives.get_cam_far_clip(self.handle)
    }

    pub fn set_far_clip(&self, far_clip: f32) {
        self.natives.set_cam_far_clip(self.handle, far_clip);
    }

    pub fn set_near_depth_of_field(&self, near_dof: f32) {
        self.natives.set_cam_near_dof(self.handle, near_dof);
    }

    pub fn far_depth_of_field(&self) -> f32 {
        self.natives.get_cam_far_dof(self.handle)
    }

    pub fn set_far_depth_of_field(&self, far_dof: f32) {
        self.natives.set_cam_far_dof(self.handle, far_dof);
    }

    pub fn set_depth_of_field_strength(&self, strength: f32) {
        self.natives.set_cam_dof_strength(self.handle, strength);
    }

    pub fn set_motion_blur_strength(&self, strength: f32) {
        self.natives.set_cam_motion_blur_strength(self.handle, strength);
    }

    pub fn shake(&self, kind: CameraShake, amplitude: f32) {
        self.natives
            .shake_cam(self.handle, kind.preset_name(), amplitude);
    }

    pub fn is_shaking(&self) -> bool {
        self.natives.is_cam_shaking(self.handle) != 0
    }

    pub fn set_shake_amplitude(&self, amplitude: f32) {
        self.natives.set_cam_shake_amplitude(self.handle, amplitude);
    }

    /// Cuts the shake immediately rather than letting it wind down.
    pub fn stop_shaking(&self) {
        self.natives.stop_cam_shaking(self.handle, true);
    }

    pub fn point_at(&self, target: impl Into<CameraTarget>, offset: Vec3) {
        match target.into() {
            CameraTarget::Entity(entity) => self.natives.point_cam_at_entity(
                self.handle,
                entity.entity_handle(),
                offset.x,
                offset.y,
                offset.z,
                true,
            ),
            CameraTarget::PedBone(bone) => self.natives.point_cam_at_ped_bone(
                self.handle,
                bone.owner.handle(),
                bone.index,
                offset.x,
                offset.y,
                offset.z,
                true,
            ),
            CameraTarget::Position(position) => {
                self.natives
                    .point_cam_at_coord(self.handle, position.x, position.y, position.z)
            }
        }
    }

    pub fn stop_pointing(&self) {
        self.natives.stop_cam_pointing(self.handle);
    }

    /// Activate `to`, blending from this camera over `duration` milliseconds.
    pub fn interp_to(
        &self,
        to: &Camera<'_, N>,
        duration: i32,
        ease_position: bool,
        ease_rotation: bool,
    ) {
        self.natives.set_cam_active_with_interp(
            to.handle,
            self.handle,
            duration,
            ease_position as i32,
            ease_rotation as i32,
        );
    }

    pub fn is_interpolating(&self) -> bool {
        self.natives.is_cam_interpolating(self.handle) != 0
    }

    pub fn attach_to(&self, target: impl Into<AttachTarget>, offset: Vec3) {
        match target.into() {
            AttachTarget::Entity { entity, relative } => self.natives.attach_cam_to_entity(
                self.handle,
                entity.entity_handle(),
                offset.x,
                offset.y,
                offset.z,
                relative,
            ),
            AttachTarget::PedBone(bone) => self.natives.attach_cam_to_ped_bone(
                self.handle,
                bone.owner.handle(),
                bone.index,
                offset.x,
                offset.y,
                offset.z,
                true,
            ),
        }
    }

    pub fn detach(&self) {
        self.natives.detach_cam(self.handle);
    }

    /// Destroy the engine-side camera. The wrapper keeps no tombstone;
    /// what a destroyed handle answers afterwards is host-defined.
    pub fn delete(&self) {
        self.natives.destroy_cam(self.handle, false);
    }

    pub fn exists(&self) -> bool {
        self.natives.does_cam_exist(self.handle) != 0
    }
}
