use crate::handles::{CamHandle, EntityHandle, PedHandle};

/// Native table for scripted cameras.
///
/// Method names mirror the host natives one to one. Natives that answer
/// yes/no questions return the engine's raw `i32` boolean (0 or 1);
/// coercion to `bool` happens in the wrapper layer.
pub trait CameraNatives {
    fn is_cam_active(&self, cam: CamHandle) -> i32;
    fn set_cam_active(&self, cam: CamHandle, active: bool);
    fn get_cam_coord(&self, cam: CamHandle) -> [f32; 3];
    fn set_cam_coord(&self, cam: CamHandle, x: f32, y: f32, z: f32);
    /// `order` selects the Euler rotation order; scripts use order 2.
    fn get_cam_rot(&self, cam: CamHandle, order: i32) -> [f32; 3];
    fn set_cam_rot(&self, cam: CamHandle, pitch: f32, roll: f32, yaw: f32, order: i32);
    fn get_cam_fov(&self, cam: CamHandle) -> f32;
    fn set_cam_fov(&self, cam: CamHandle, fov: f32);
    fn get_cam_near_clip(&self, cam: CamHandle) -> f32;
    fn set_cam_near_clip(&self, cam: CamHandle, near_clip: f32);
    fn get_cam_far_clip(&self, cam: CamHandle) -> f32;
    fn set_cam_far_clip(&self, cam: CamHandle, far_clip: f32);
    fn set_cam_near_dof(&self, cam: CamHandle, near_dof: f32);
    fn get_cam_far_dof(&self, cam: CamHandle) -> f32;
    fn set_cam_far_dof(&self, cam: CamHandle, far_dof: f32);
    fn set_cam_dof_strength(&self, cam: CamHandle, strength: f32);
    fn set_cam_motion_blur_strength(&self, cam: CamHandle, strength: f32);
    /// `shake_name` is one of the engine's fixed shake preset names.
    fn shake_cam(&self, cam: CamHandle, shake_name: &str, amplitude: f32);
    fn is_cam_shaking(&self, cam: CamHandle) -> i32;
    fn set_cam_shake_amplitude(&self, cam: CamHandle, amplitude: f32);
    fn stop_cam_shaking(&self, cam: CamHandle, immediately: bool);
    fn point_cam_at_entity(
        &self,
        cam: CamHandle,
        entity: EntityHandle,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    );
    fn point_cam_at_ped_bone(
        &self,
        cam: CamHandle,
        ped: PedHandle,
        bone: i32,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    );
    fn point_cam_at_coord(&self, cam: CamHandle, x: f32, y: f32, z: f32);
    fn stop_cam_pointing(&self, cam: CamHandle);
    /// Activates `to`, interpolating from `from` over `duration` milliseconds.
    /// The ease flags are raw engine ints (0 or 1).
    fn set_cam_active_with_interp(
        &self,
        to: CamHandle,
        from: CamHandle,
        duration: i32,
        ease_position: i32,
        ease_rotation: i32,
    );
    fn is_cam_interpolating(&self, cam: CamHandle) -> i32;
    fn attach_cam_to_entity(
        &self,
        cam: CamHandle,
        entity: EntityHandle,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    );
    fn attach_cam_to_ped_bone(
        &self,
        cam: CamHandle,
        ped: PedHandle,
        bone: i32,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    );
    fn detach_cam(&self, cam: CamHandle);
    fn destroy_cam(&self, cam: CamHandle, script_host_cam: bool);
    fn does_cam_exist(&self, cam: CamHandle) -> i32;
}

/// Native table for the engine's always-present gameplay camera.
pub trait GameplayCamNatives {
    fn get_gameplay_cam_coords(&self) -> [f32; 3];
    fn get_gameplay_cam_rot(&self, order: i32) -> [f32; 3];
    fn get_gameplay_cam_relative_pitch(&self) -> f32;
    /// `scaling_speed` controls how fast the pitch change applies; scripts pass 1.0.
    fn set_gameplay_cam_relative_pitch(&self, pitch: f32, scaling_speed: f32);
    fn get_gameplay_cam_relative_heading(&self) -> f32;
    fn set_gameplay_cam_relative_heading(&self, heading: f32);
    fn clamp_gameplay_cam_yaw(&self, min: f32, max: f32);
    fn clamp_gameplay_cam_pitch(&self, min: f32, max: f32);
    fn get_gameplay_cam_zoom(&self) -> f32;
    fn get_gameplay_cam_fov(&self) -> f32;
    fn is_gameplay_cam_rendering(&self) -> i32;
    fn is_aim_cam_active(&self) -> i32;
    fn is_first_person_aim_cam_active(&self) -> i32;
    fn is_gameplay_cam_looking_behind(&self) -> i32;
    fn shake_gameplay_cam(&self, shake_name: &str, intensity: f32);
    fn is_gameplay_cam_shaking(&self) -> i32;
    fn set_gameplay_cam_shake_amplitude(&self, amplitude: f32);
    fn stop_gameplay_cam_shaking(&self, immediately: bool);
}
