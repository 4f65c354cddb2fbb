use glam::Vec3;
use rage_natives::GameplayCamNatives;

use crate::enums::CameraShake;
use crate::math;

/// The engine's default third/first-person camera.
///
/// Unlike [`Camera`](crate::Camera) there is no handle: the gameplay
/// camera always exists, so this facade carries only the host binding.
pub struct GameplayCamera<'n, N: ?Sized> {
    natives: &'n N,
}

impl<'n, N: ?Sized> GameplayCamera<'n, N> {
    pub fn new(natives: &'n N) -> Self {
        Self { natives }
    }
}

impl<N: ?Sized> Clone for GameplayCamera<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: ?Sized> Copy for GameplayCamera<'_, N> {}

impl<'n, N: GameplayCamNatives + ?Sized> GameplayCamera<'n, N> {
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.natives.get_gameplay_cam_coords())
    }

    /// Degree-valued Euler rotation (x pitch, y roll, z yaw), order 2.
    pub fn rotation(&self) -> Vec3 {
        Vec3::from(self.natives.get_gameplay_cam_rot(2))
    }

    pub fn forward_vector(&self) -> Vec3 {
        math::forward_from_rotation(self.rotation())
    }

    pub fn relative_pitch(&self) -> f32 {
        self.natives.get_gameplay_cam_relative_pitch()
    }

    /// Applies at the engine's default scaling speed.
    pub fn set_relative_pitch(&self, pitch: f32) {
        self.natives.set_gameplay_cam_relative_pitch(pitch, 1.0);
    }

    pub fn relative_heading(&self) -> f32 {
        self.natives.get_gameplay_cam_relative_heading()
    }

    pub fn set_relative_heading(&self, heading: f32) {
        self.natives.set_gameplay_cam_relative_heading(heading);
    }

    pub fn clamp_yaw(&self, min: f32, max: f32) {
        self.natives.clamp_gameplay_cam_yaw(min, max);
    }

    pub fn clamp_pitch(&self, min: f32, max: f32) {
        self.natives.clamp_gameplay_cam_pitch(min, max);
    }

    pub fn zoom(&self) -> f32 {
        self.natives.get_gameplay_cam_zoom()
    }

    pub fn field_of_view(&self) -> f32 {
        self.natives.get_gameplay_cam_fov()
    }

    pub fn is_rendering(&self) -> bool {
        self.natives.is_gameplay_cam_rendering() != 0
    }

    pub fn is_aim_cam_active(&self) -> bool {
        self.natives.is_aim_cam_active() != 0
    }

    pub fn is_first_person_aim_cam_active(&self) -> bool {
        self.natives.is_first_person_aim_cam_active() != 0
    }

    pub fn is_looking_behind(&self) -> bool {
        self.natives.is_gameplay_cam_looking_behind() != 0
    }

    /// Same preset table as scripted cameras.
    pub fn shake(&self, kind: CameraShake, amplitude: f32) {
        self.natives.shake_gameplay_cam(kind.preset_name(), amplitude);
    }

    pub fn is_shaking(&self) -> bool {
        self.natives.is_gameplay_cam_shaking() != 0
    }

    pub fn set_shake_amplitude(&self, amplitude: f32) {
        self.natives.set_gameplay_cam_shake_amplitude(amplitude);
    }

    /// Cuts the shake immediately rather than letting it wind down.
    pub fn stop_shaking(&self) {
        self.natives.stop_gameplay_cam_shaking(true);
    }
}
