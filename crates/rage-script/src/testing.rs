// testing.rs
//
// Shared in-memory host double for the wrapper tests. State-changing
// natives append a formatted entry to `commands`; queries answer from
// the configured cells. A handful of paired get/set natives (camera
// transforms, smoke trail color) round-trip their last set value
// instead of logging, so accessor tests can go through the host.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use rage_natives::handles::{
    BlipHandle, CamHandle, EntityHandle, ModelHash, PedHandle, PickupHandle, PlayerHandle,
    VehicleHandle,
};
use rage_natives::{
    AudioNatives, BlipNatives, CameraNatives, ClockNatives, ControlNatives, GameNatives,
    GameplayCamNatives, PickupNatives, PlayerNatives, StreamingNatives,
};

pub(crate) struct FakeHost {
    pub commands: RefCell<Vec<String>>,

    // camera
    pub cam_coord: Cell<[f32; 3]>,
    pub cam_rot: Cell<[f32; 3]>,
    pub cam_rot_order: Cell<i32>,
    pub gameplay_cam_coords: Cell<[f32; 3]>,
    pub gameplay_cam_rot: Cell<[f32; 3]>,

    // pickups and blips
    pub pickup_coords: Cell<[f32; 3]>,
    pub next_blip: Cell<BlipHandle>,
    pub dead_blips: RefCell<HashSet<BlipHandle>>,

    // players
    pub server_ids: RefCell<HashMap<i32, i32>>,
    pub player_ped: Cell<PedHandle>,
    pub parachute_tint: Cell<i32>,
    pub reserve_parachute_tint: Cell<i32>,
    pub smoke_trail_color: Cell<[i32; 3]>,
    pub wanted_center: Cell<[f32; 3]>,

    // game
    pub hash_value: Cell<u32>,
    pub hash_calls: Cell<u32>,
    pub ui_language: Cell<i32>,
    pub local_player: Cell<PlayerHandle>,
    pub active_players: RefCell<Vec<PlayerHandle>>,
    pub active_players_calls: Cell<u32>,
    pub random_event_flag: Cell<i32>,
    pub radio_name: RefCell<Option<String>>,
    pub entity_types: RefCell<HashMap<EntityHandle, i32>>,
    pub input_disabled: Cell<bool>,

    // clock: each read returns the current value, then advances
    pub timer: Cell<u32>,
    pub timer_step: Cell<u32>,
    pub frame_time: Cell<f32>,

    // streaming: model counts as loaded once polled more than
    // `model_ready_after` times
    pub model_in_cdimage: Cell<bool>,
    pub model_valid: Cell<bool>,
    pub model_is_ped: Cell<bool>,
    pub model_is_vehicle: Cell<bool>,
    pub model_ready_after: Cell<u32>,
    pub model_poll_count: Cell<u32>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            cam_coord: Cell::new([0.0; 3]),
            cam_rot: Cell::new([0.0; 3]),
            cam_rot_order: Cell::new(0),
            gameplay_cam_coords: Cell::new([0.0; 3]),
            gameplay_cam_rot: Cell::new([0.0; 3]),
            pickup_coords: Cell::new([0.0; 3]),
            next_blip: Cell::new(BlipHandle(1)),
            dead_blips: RefCell::new(HashSet::new()),
            server_ids: RefCell::new(HashMap::new()),
            player_ped: Cell::new(PedHandle(0)),
            parachute_tint: Cell::new(-1),
            reserve_parachute_tint: Cell::new(-1),
            smoke_trail_color: Cell::new([0; 3]),
            wanted_center: Cell::new([0.0; 3]),
            hash_value: Cell::new(0),
            hash_calls: Cell::new(0),
            ui_language: Cell::new(0),
            local_player: Cell::new(PlayerHandle(0)),
            active_players: RefCell::new(Vec::new()),
            active_players_calls: Cell::new(0),
            random_event_flag: Cell::new(0),
            radio_name: RefCell::new(None),
            entity_types: RefCell::new(HashMap::new()),
            input_disabled: Cell::new(false),
            timer: Cell::new(0),
            timer_step: Cell::new(0),
            frame_time: Cell::new(0.0),
            model_in_cdimage: Cell::new(true),
            model_valid: Cell::new(true),
            model_is_ped: Cell::new(true),
            model_is_vehicle: Cell::new(false),
            model_ready_after: Cell::new(0),
            model_poll_count: Cell::new(0),
        }
    }
}

impl FakeHost {
    fn log(&self, entry: String) {
        self.commands.borrow_mut().push(entry);
    }
}

impl CameraNatives for FakeHost {
    fn is_cam_active(&self, _cam: CamHandle) -> i32 {
        0
    }

    fn set_cam_active(&self, cam: CamHandle, active: bool) {
        self.log(format!("set_cam_active({}, {})", cam.0, active));
    }

    fn get_cam_coord(&self, _cam: CamHandle) -> [f32; 3] {
        self.cam_coord.get()
    }

    fn set_cam_coord(&self, _cam: CamHandle, x: f32, y: f32, z: f32) {
        self.cam_coord.set([x, y, z]);
    }

    fn get_cam_rot(&self, _cam: CamHandle, order: i32) -> [f32; 3] {
        self.cam_rot_order.set(order);
        self.cam_rot.get()
    }

    fn set_cam_rot(&self, _cam: CamHandle, pitch: f32, roll: f32, yaw: f32, order: i32) {
        self.cam_rot_order.set(order);
        self.cam_rot.set([pitch, roll, yaw]);
    }

    fn get_cam_fov(&self, _cam: CamHandle) -> f32 {
        0.0
    }

    fn set_cam_fov(&self, cam: CamHandle, fov: f32) {
        self.log(format!("set_cam_fov({}, {})", cam.0, fov));
    }

    fn get_cam_near_clip(&self, _cam: CamHandle) -> f32 {
        0.0
    }

    fn set_cam_near_clip(&self, cam: CamHandle, near_clip: f32) {
        self.log(format!("set_cam_near_clip({}, {})", cam.0, near_clip));
    }

    fn get_cam_far_clip(&self, _cam: CamHandle) -> f32 {
        0.0
    }

    fn set_cam_far_clip(&self, cam: CamHandle, far_clip: f32) {
        self.log(format!("set_cam_far_clip({}, {})", cam.0, far_clip));
    }

    fn set_cam_near_dof(&self, cam: CamHandle, near_dof: f32) {
        self.log(format!("set_cam_near_dof({}, {})", cam.0, near_dof));
    }

    fn get_cam_far_dof(&self, _cam: CamHandle) -> f32 {
        0.0
    }

    fn set_cam_far_dof(&self, cam: CamHandle, far_dof: f32) {
        self.log(format!("set_cam_far_dof({}, {})", cam.0, far_dof));
    }

    fn set_cam_dof_strength(&self, cam: CamHandle, strength: f32) {
        self.log(format!("set_cam_dof_strength({}, {})", cam.0, strength));
    }

    fn set_cam_motion_blur_strength(&self, cam: CamHandle, strength: f32) {
        self.log(format!("set_cam_motion_blur_strength({}, {})", cam.0, strength));
    }

    fn shake_cam(&self, cam: CamHandle, shake_name: &str, amplitude: f32) {
        self.log(format!("shake_cam({}, {:?}, {})", cam.0, shake_name, amplitude));
    }

    fn is_cam_shaking(&self, _cam: CamHandle) -> i32 {
        0
    }

    fn set_cam_shake_amplitude(&self, cam: CamHandle, amplitude: f32) {
        self.log(format!("set_cam_shake_amplitude({}, {})", cam.0, amplitude));
    }

    fn stop_cam_shaking(&self, cam: CamHandle, immediately: bool) {
        self.log(format!("stop_cam_shaking({}, {})", cam.0, immediately));
    }

    fn point_cam_at_entity(
        &self,
        cam: CamHandle,
        entity: EntityHandle,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    ) {
        self.log(format!(
            "point_cam_at_entity({}, {}, {}, {}, {}, {})",
            cam.0, entity.0, offset_x, offset_y, offset_z, relative
        ));
    }

    fn point_cam_at_ped_bone(
        &self,
        cam: CamHandle,
        ped: PedHandle,
        bone: i32,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    ) {
        self.log(format!(
            "point_cam_at_ped_bone({}, {}, {}, {}, {}, {}, {})",
            cam.0, ped.0, bone, offset_x, offset_y, offset_z, relative
        ));
    }

    fn point_cam_at_coord(&self, cam: CamHandle, x: f32, y: f32, z: f32) {
        self.log(format!("point_cam_at_coord({}, {}, {}, {})", cam.0, x, y, z));
    }

    fn stop_cam_pointing(&self, cam: CamHandle) {
        self.log(format!("stop_cam_pointing({})", cam.0));
    }

    fn set_cam_active_with_interp(
        &self,
        to: CamHandle,
        from: CamHandle,
        duration: i32,
        ease_position: i32,
        ease_rotation: i32,
    ) {
        self.log(format!(
            "set_cam_active_with_interp({}, {}, {}, {}, {})",
            to.0, from.0, duration, ease_position, ease_rotation
        ));
    }

    fn is_cam_interpolating(&self, _cam: CamHandle) -> i32 {
        0
    }

    fn attach_cam_to_entity(
        &self,
        cam: CamHandle,
        entity: EntityHandle,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    ) {
        self.log(format!(
            "attach_cam_to_entity({}, {}, {}, {}, {}, {})",
            cam.0, entity.0, offset_x, offset_y, offset_z, relative
        ));
    }

    fn attach_cam_to_ped_bone(
        &self,
        cam: CamHandle,
        ped: PedHandle,
        bone: i32,
        offset_x: f32,
        offset_y: f32,
        offset_z: f32,
        relative: bool,
    ) {
        self.log(format!(
            "attach_cam_to_ped_bone({}, {}, {}, {}, {}, {}, {})",
            cam.0, ped.0, bone, offset_x, offset_y, offset_z, relative
        ));
    }

    fn detach_cam(&self, cam: CamHandle) {
        self.log(format!("detach_cam({})", cam.0));
    }

    fn destroy_cam(&self, cam: CamHandle, script_host_cam: bool) {
        self.log(format!("destroy_cam({}, {})", cam.0, script_host_cam));
    }

    fn does_cam_exist(&self, _cam: CamHandle) -> i32 {
        1
    }
}

impl GameplayCamNatives for FakeHost {
    fn get_gameplay_cam_coords(&self) -> [f32; 3] {
        self.gameplay_cam_coords.get()
    }

    fn get_gameplay_cam_rot(&self, _order: i32) -> [f32; 3] {
        self.gameplay_cam_rot.get()
    }

    fn get_gameplay_cam_relative_pitch(&self) -> f32 {
        0.0
    }

    fn set_gameplay_cam_relative_pitch(&self, pitch: f32, scaling_speed: f32) {
        self.log(format!(
            "set_gameplay_cam_relative_pitch({}, {})",
            pitch, scaling_speed
        ));
    }

    fn get_gameplay_cam_relative_heading(&self) -> f32 {
        0.0
    }

    fn set_gameplay_cam_relative_heading(&self, heading: f32) {
        self.log(format!("set_gameplay_cam_relative_heading({})", heading));
    }

    fn clamp_gameplay_cam_yaw(&self, min: f32, max: f32) {
        self.log(format!("clamp_gameplay_cam_yaw({}, {})", min, max));
    }

    fn clamp_gameplay_cam_pitch(&self, min: f32, max: f32) {
        self.log(format!("clamp_gameplay_cam_pitch({}, {})", min, max));
    }

    fn get_gameplay_cam_zoom(&self) -> f32 {
        0.0
    }

    fn get_gameplay_cam_fov(&self) -> f32 {
        0.0
    }

    fn is_gameplay_cam_rendering(&self) -> i32 {
        1
    }

    fn is_aim_cam_active(&self) -> i32 {
        0
    }

    fn is_first_person_aim_cam_active(&self) -> i32 {
        0
    }

    fn is_gameplay_cam_looking_behind(&self) -> i32 {
        0
    }

    fn shake_gameplay_cam(&self, shake_name: &str, intensity: f32) {
        self.log(format!("shake_gameplay_cam({:?}, {})", shake_name, intensity));
    }

    fn is_gameplay_cam_shaking(&self) -> i32 {
        0
    }

    fn set_gameplay_cam_shake_amplitude(&self, amplitude: f32) {
        self.log(format!("set_gameplay_cam_shake_amplitude({})", amplitude));
    }

    fn stop_gameplay_cam_shaking(&self, immediately: bool) {
        self.log(format!("stop_gameplay_cam_shaking({})", immediately));
    }
}

impl PickupNatives for FakeHost {
    fn get_pickup_coords(&self, _pickup: PickupHandle) -> [f32; 3] {
        self.pickup_coords.get()
    }

    fn has_pickup_been_collected(&self, _pickup: PickupHandle) -> i32 {
        0
    }

    fn hide_pickup(&self, pickup: PickupHandle, hidden: bool) {
        self.log(format!("hide_pickup({}, {})", pickup.0, hidden));
    }

    fn remove_pickup(&self, pickup: PickupHandle) {
        self.log(format!("remove_pickup({})", pickup.0));
    }

    fn does_pickup_exist(&self, _pickup: PickupHandle) -> i32 {
        1
    }

    fn does_pickup_object_exist(&self, _pickup: PickupHandle) -> i32 {
        1
    }
}

impl BlipNatives for FakeHost {
    fn add_blip_for_pickup(&self, pickup: PickupHandle) -> BlipHandle {
        self.log(format!("add_blip_for_pickup({})", pickup.0));
        self.next_blip.get()
    }

    fn does_blip_exist(&self, blip: BlipHandle) -> i32 {
        if self.dead_blips.borrow().contains(&blip) {
            0
        } else {
            1
        }
    }
}

impl PlayerNatives for FakeHost {
    fn get_player_server_id(&self, player: PlayerHandle) -> i32 {
        player.0
    }

    fn get_player_from_server_id(&self, server_id: i32) -> i32 {
        self.server_ids.borrow().get(&server_id).copied().unwrap_or(-1)
    }

    fn get_player_ped(&self, _player: PlayerHandle) -> PedHandle {
        self.player_ped.get()
    }

    fn get_player_name(&self, player: PlayerHandle) -> String {
        format!("Player {}", player.0)
    }

    fn network_is_player_active(&self, _player: PlayerHandle) -> i32 {
        1
    }

    fn get_player_wanted_level(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn set_player_wanted_level(&self, player: PlayerHandle, level: i32, delayed_response: bool) {
        self.log(format!(
            "set_player_wanted_level({}, {}, {})",
            player.0, level, delayed_response
        ));
    }

    fn get_player_wanted_centre_position(&self, _player: PlayerHandle) -> [f32; 3] {
        self.wanted_center.get()
    }

    fn set_player_wanted_centre_position(&self, _player: PlayerHandle, x: f32, y: f32, z: f32) {
        self.wanted_center.set([x, y, z]);
    }

    fn get_player_max_armour(&self, _player: PlayerHandle) -> i32 {
        100
    }

    fn set_player_max_armour(&self, player: PlayerHandle, value: i32) {
        self.log(format!("set_player_max_armour({}, {})", player.0, value));
    }

    fn get_player_parachute_tint_index(&self, _player: PlayerHandle) -> i32 {
        self.parachute_tint.get()
    }

    fn set_player_parachute_tint_index(&self, player: PlayerHandle, tint: i32) {
        self.log(format!("set_player_parachute_tint_index({}, {})", player.0, tint));
    }

    fn get_player_reserve_parachute_tint_index(&self, _player: PlayerHandle) -> i32 {
        self.reserve_parachute_tint.get()
    }

    fn set_player_reserve_parachute_tint_index(&self, player: PlayerHandle, tint: i32) {
        self.log(format!(
            "set_player_reserve_parachute_tint_index({}, {})",
            player.0, tint
        ));
    }

    fn set_player_can_leave_parachute_smoke_trail(&self, player: PlayerHandle, enabled: bool) {
        self.log(format!(
            "set_player_can_leave_parachute_smoke_trail({}, {})",
            player.0, enabled
        ));
    }

    fn get_player_parachute_smoke_trail_color(&self, _player: PlayerHandle) -> [i32; 3] {
        self.smoke_trail_color.get()
    }

    fn set_player_parachute_smoke_trail_color(&self, _player: PlayerHandle, r: i32, g: i32, b: i32) {
        self.smoke_trail_color.set([r, g, b]);
    }

    fn is_player_dead(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_player_free_aiming(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_player_free_aiming_at_entity(&self, _player: PlayerHandle, _entity: EntityHandle) -> i32 {
        0
    }

    fn is_player_targetting_anything(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_player_climbing(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_player_riding_train(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_player_pressing_horn(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_player_playing(&self, _player: PlayerHandle) -> i32 {
        1
    }

    fn get_player_invincible(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn set_player_invincible(&self, player: PlayerHandle, invincible: bool) {
        self.log(format!("set_player_invincible({}, {})", player.0, invincible));
    }

    fn set_police_ignore_player(&self, player: PlayerHandle, ignored: bool) {
        self.log(format!("set_police_ignore_player({}, {})", player.0, ignored));
    }

    fn set_everyone_ignore_player(&self, player: PlayerHandle, ignored: bool) {
        self.log(format!("set_everyone_ignore_player({}, {})", player.0, ignored));
    }

    fn set_dispatch_cops_for_player(&self, player: PlayerHandle, enabled: bool) {
        self.log(format!("set_dispatch_cops_for_player({}, {})", player.0, enabled));
    }

    fn set_player_can_use_cover(&self, player: PlayerHandle, enabled: bool) {
        self.log(format!("set_player_can_use_cover({}, {})", player.0, enabled));
    }

    fn can_player_start_mission(&self, _player: PlayerHandle) -> i32 {
        1
    }

    fn give_player_ragdoll_control(&self, player: PlayerHandle, enabled: bool) {
        self.log(format!("give_player_ragdoll_control({}, {})", player.0, enabled));
    }

    fn is_player_control_on(&self, _player: PlayerHandle) -> i32 {
        1
    }

    fn set_player_control(&self, player: PlayerHandle, enabled: bool, flags: i32) {
        self.log(format!("set_player_control({}, {}, {})", player.0, enabled, flags));
    }

    fn set_player_model(&self, player: PlayerHandle, model: ModelHash) {
        self.log(format!("set_player_model({}, {})", player.0, model.0));
    }

    fn get_player_sprint_time_remaining(&self, _player: PlayerHandle) -> f32 {
        0.0
    }

    fn get_player_underwater_time_remaining(&self, _player: PlayerHandle) -> f32 {
        0.0
    }

    fn is_special_ability_active(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn is_special_ability_enabled(&self, _player: PlayerHandle) -> i32 {
        0
    }

    fn enable_special_ability(&self, player: PlayerHandle, enabled: bool) {
        self.log(format!("enable_special_ability({}, {})", player.0, enabled));
    }

    fn special_ability_charge_absolute(&self, player: PlayerHandle, amount: i32, notify: bool) {
        self.log(format!(
            "special_ability_charge_absolute({}, {}, {})",
            player.0, amount, notify
        ));
    }

    fn special_ability_charge_normalized(&self, player: PlayerHandle, ratio: f32, notify: bool) {
        self.log(format!(
            "special_ability_charge_normalized({}, {}, {})",
            player.0, ratio, notify
        ));
    }

    fn special_ability_fill_meter(&self, player: PlayerHandle, notify: bool) {
        self.log(format!("special_ability_fill_meter({}, {})", player.0, notify));
    }

    fn special_ability_deplete_meter(&self, player: PlayerHandle, notify: bool) {
        self.log(format!("special_ability_deplete_meter({}, {})", player.0, notify));
    }

    fn set_player_forced_aim(&self, player: PlayerHandle, forced: bool) {
        self.log(format!("set_player_forced_aim({}, {})", player.0, forced));
    }

    fn disable_player_firing(&self, player: PlayerHandle, toggle: bool) {
        self.log(format!("disable_player_firing({}, {})", player.0, toggle));
    }

    fn set_run_sprint_multiplier_for_player(&self, player: PlayerHandle, multiplier: f32) {
        self.log(format!(
            "set_run_sprint_multiplier_for_player({}, {})",
            player.0, multiplier
        ));
    }

    fn set_swim_multiplier_for_player(&self, player: PlayerHandle, multiplier: f32) {
        self.log(format!(
            "set_swim_multiplier_for_player({}, {})",
            player.0, multiplier
        ));
    }

    fn set_fire_ammo_this_frame(&self, player: PlayerHandle) {
        self.log(format!("set_fire_ammo_this_frame({})", player.0));
    }

    fn set_explosive_ammo_this_frame(&self, player: PlayerHandle) {
        self.log(format!("set_explosive_ammo_this_frame({})", player.0));
    }

    fn set_explosive_melee_this_frame(&self, player: PlayerHandle) {
        self.log(format!("set_explosive_melee_this_frame({})", player.0));
    }

    fn set_super_jump_this_frame(&self, player: PlayerHandle) {
        self.log(format!("set_super_jump_this_frame({})", player.0));
    }

    fn set_player_may_not_enter_any_vehicle(&self, player: PlayerHandle) {
        self.log(format!("set_player_may_not_enter_any_vehicle({})", player.0));
    }

    fn set_player_may_only_enter_this_vehicle(&self, player: PlayerHandle, vehicle: VehicleHandle) {
        self.log(format!(
            "set_player_may_only_enter_this_vehicle({}, {})",
            player.0, vehicle.0
        ));
    }

    fn network_set_friendly_fire_option(&self, enabled: bool) {
        self.log(format!("network_set_friendly_fire_option({})", enabled));
    }

    fn set_can_attack_friendly(&self, ped: PedHandle, toggle: bool, also_react: bool) {
        self.log(format!(
            "set_can_attack_friendly({}, {}, {})",
            ped.0, toggle, also_react
        ));
    }
}

impl GameNatives for FakeHost {
    fn get_hash_key(&self, _input: &str) -> u32 {
        self.hash_calls.set(self.hash_calls.get() + 1);
        self.hash_value.get()
    }

    fn get_ui_language_id(&self) -> i32 {
        self.ui_language.get()
    }

    fn set_time_scale(&self, scale: f32) {
        self.log(format!("set_time_scale({})", scale));
    }

    fn player_id(&self) -> PlayerHandle {
        self.local_player.get()
    }

    fn get_active_players(&self) -> Vec<PlayerHandle> {
        self.active_players_calls.set(self.active_players_calls.get() + 1);
        self.active_players.borrow().clone()
    }

    fn get_max_wanted_level(&self) -> i32 {
        5
    }

    fn set_max_wanted_level(&self, level: i32) {
        self.log(format!("set_max_wanted_level({})", level));
    }

    fn set_wanted_level_multiplier(&self, multiplier: f32) {
        self.log(format!("set_wanted_level_multiplier({})", multiplier));
    }

    fn set_police_radar_blips(&self, enabled: bool) {
        self.log(format!("set_police_radar_blips({})", enabled));
    }

    fn is_nightvision_active(&self) -> i32 {
        0
    }

    fn set_nightvision(&self, active: bool) {
        self.log(format!("set_nightvision({})", active));
    }

    fn is_seethrough_active(&self) -> i32 {
        0
    }

    fn set_seethrough(&self, active: bool) {
        self.log(format!("set_seethrough({})", active));
    }

    fn get_mission_flag(&self) -> i32 {
        0
    }

    fn set_mission_flag(&self, active: bool) {
        self.log(format!("set_mission_flag({})", active));
    }

    fn get_random_event_flag(&self) -> i32 {
        self.random_event_flag.get()
    }

    fn set_random_event_flag(&self, flag: i32) {
        self.log(format!("set_random_event_flag({})", flag));
    }

    fn is_cutscene_active(&self) -> i32 {
        0
    }

    fn is_waypoint_active(&self) -> i32 {
        0
    }

    fn is_pause_menu_active(&self) -> i32 {
        0
    }

    fn set_pause_menu_active(&self, active: bool) {
        self.log(format!("set_pause_menu_active({})", active));
    }

    fn get_is_loading_screen_active(&self) -> i32 {
        0
    }

    fn get_player_radio_station_name(&self) -> Option<String> {
        self.radio_name.borrow().clone()
    }

    fn set_radio_to_station_name(&self, station_name: &str) {
        self.log(format!("set_radio_to_station_name({:?})", station_name));
    }

    fn get_entity_type(&self, entity: EntityHandle) -> i32 {
        self.entity_types.borrow().get(&entity).copied().unwrap_or(0)
    }
}

impl ClockNatives for FakeHost {
    fn get_game_timer(&self) -> u32 {
        let now = self.timer.get();
        self.timer.set(now.wrapping_add(self.timer_step.get()));
        now
    }

    fn get_frame_count(&self) -> i32 {
        0
    }

    fn get_frame_time(&self) -> f32 {
        self.frame_time.get()
    }
}

impl ControlNatives for FakeHost {
    fn is_control_pressed(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_disabled_control_pressed(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_control_just_pressed(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_disabled_control_just_pressed(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_control_released(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_disabled_control_released(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_control_just_released(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_disabled_control_just_released(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_control_enabled(&self, _mode: i32, _control: i32) -> i32 {
        1
    }

    fn enable_control_action(&self, mode: i32, control: i32, enable: bool) {
        self.log(format!("enable_control_action({}, {}, {})", mode, control, enable));
    }

    fn disable_control_action(&self, mode: i32, control: i32, disable: bool) {
        self.log(format!("disable_control_action({}, {}, {})", mode, control, disable));
    }

    fn enable_all_control_actions(&self, mode: i32) {
        self.log(format!("enable_all_control_actions({})", mode));
    }

    fn disable_all_control_actions(&self, mode: i32) {
        self.log(format!("disable_all_control_actions({})", mode));
    }

    fn get_control_normal(&self, _mode: i32, _control: i32) -> f32 {
        0.0
    }

    fn get_disabled_control_normal(&self, _mode: i32, _control: i32) -> f32 {
        0.0
    }

    fn set_control_normal(&self, mode: i32, control: i32, value: f32) {
        self.log(format!("set_control_normal({}, {}, {})", mode, control, value));
    }

    fn get_control_value(&self, _mode: i32, _control: i32) -> i32 {
        0
    }

    fn is_input_disabled(&self, _mode: i32) -> i32 {
        self.input_disabled.get() as i32
    }
}

impl AudioNatives for FakeHost {
    fn play_sound_frontend(&self, sound_id: i32, sound_file: &str, sound_set: &str, p3: bool) {
        self.log(format!(
            "play_sound_frontend({}, {:?}, {:?}, {})",
            sound_id, sound_file, sound_set, p3
        ));
    }

    fn trigger_music_event(&self, event: &str) {
        self.log(format!("trigger_music_event({:?})", event));
    }

    fn cancel_music_event(&self, event: &str) {
        self.log(format!("cancel_music_event({:?})", event));
    }
}

impl StreamingNatives for FakeHost {
    fn request_model(&self, model: ModelHash) {
        self.log(format!("request_model({})", model.0));
    }

    fn has_model_loaded(&self, _model: ModelHash) -> i32 {
        let polls = self.model_poll_count.get() + 1;
        self.model_poll_count.set(polls);
        (polls > self.model_ready_after.get()) as i32
    }

    fn is_model_in_cdimage(&self, _model: ModelHash) -> i32 {
        self.model_in_cdimage.get() as i32
    }

    fn is_model_valid(&self, _model: ModelHash) -> i32 {
        self.model_valid.get() as i32
    }

    fn is_model_a_ped(&self, _model: ModelHash) -> i32 {
        self.model_is_ped.get() as i32
    }

    fn is_model_a_vehicle(&self, _model: ModelHash) -> i32 {
        self.model_is_vehicle.get() as i32
    }

    fn set_model_as_no_longer_needed(&self, model: ModelHash) {
        self.log(format!("set_model_as_no_longer_needed({})", model.0));
    }
}
