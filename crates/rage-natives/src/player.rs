use crate::handles::{EntityHandle, ModelHash, PedHandle, PlayerHandle, VehicleHandle};

/// Native table for player state and per-frame player overrides.
///
/// Yes/no natives return the engine's raw `i32` boolean. Natives with a
/// sentinel return value (`get_player_from_server_id`) keep the raw `i32`
/// so the wrapper layer owns the sentinel check.
pub trait PlayerNatives {
    fn get_player_server_id(&self, player: PlayerHandle) -> i32;
    /// Returns the local handle for a server id, or -1 if that id is not
    /// connected.
    fn get_player_from_server_id(&self, server_id: i32) -> i32;
    fn get_player_ped(&self, player: PlayerHandle) -> PedHandle;
    fn get_player_name(&self, player: PlayerHandle) -> String;
    fn network_is_player_active(&self, player: PlayerHandle) -> i32;
    fn get_player_wanted_level(&self, player: PlayerHandle) -> i32;
    fn set_player_wanted_level(&self, player: PlayerHandle, level: i32, delayed_response: bool);
    fn get_player_wanted_centre_position(&self, player: PlayerHandle) -> [f32; 3];
    fn set_player_wanted_centre_position(&self, player: PlayerHandle, x: f32, y: f32, z: f32);
    fn get_player_max_armour(&self, player: PlayerHandle) -> i32;
    fn set_player_max_armour(&self, player: PlayerHandle, value: i32);
    fn get_player_parachute_tint_index(&self, player: PlayerHandle) -> i32;
    fn set_player_parachute_tint_index(&self, player: PlayerHandle, tint: i32);
    fn get_player_reserve_parachute_tint_index(&self, player: PlayerHandle) -> i32;
    fn set_player_reserve_parachute_tint_index(&self, player: PlayerHandle, tint: i32);
    fn set_player_can_leave_parachute_smoke_trail(&self, player: PlayerHandle, enabled: bool);
    /// Returns the trail color as raw 0-255 channel ints.
    fn get_player_parachute_smoke_trail_color(&self, player: PlayerHandle) -> [i32; 3];
    fn set_player_parachute_smoke_trail_color(&self, player: PlayerHandle, r: i32, g: i32, b: i32);
    fn is_player_dead(&self, player: PlayerHandle) -> i32;
    fn is_player_free_aiming(&self, player: PlayerHandle) -> i32;
    fn is_player_free_aiming_at_entity(&self, player: PlayerHandle, entity: EntityHandle) -> i32;
    fn is_player_targetting_anything(&self, player: PlayerHandle) -> i32;
    fn is_player_climbing(&self, player: PlayerHandle) -> i32;
    fn is_player_riding_train(&self, player: PlayerHandle) -> i32;
    fn is_player_pressing_horn(&self, player: PlayerHandle) -> i32;
    fn is_player_playing(&self, player: PlayerHandle) -> i32;
    fn get_player_invincible(&self, player: PlayerHandle) -> i32;
    fn set_player_invincible(&self, player: PlayerHandle, invincible: bool);
    fn set_police_ignore_player(&self, player: PlayerHandle, ignored: bool);
    fn set_everyone_ignore_player(&self, player: PlayerHandle, ignored: bool);
    fn set_dispatch_cops_for_player(&self, player: PlayerHandle, enabled: bool);
    fn set_player_can_use_cover(&self, player: PlayerHandle, enabled: bool);
    fn can_player_start_mission(&self, player: PlayerHandle) -> i32;
    fn give_player_ragdoll_control(&self, player: PlayerHandle, enabled: bool);
    fn is_player_control_on(&self, player: PlayerHandle) -> i32;
    fn set_player_control(&self, player: PlayerHandle, enabled: bool, flags: i32);
    fn set_player_model(&self, player: PlayerHandle, model: ModelHash);
    fn get_player_sprint_time_remaining(&self, player: PlayerHandle) -> f32;
    fn get_player_underwater_time_remaining(&self, player: PlayerHandle) -> f32;
    fn is_special_ability_active(&self, player: PlayerHandle) -> i32;
    fn is_special_ability_enabled(&self, player: PlayerHandle) -> i32;
    fn enable_special_ability(&self, player: PlayerHandle, enabled: bool);
    fn special_ability_charge_absolute(&self, player: PlayerHandle, amount: i32, notify: bool);
    fn special_ability_charge_normalized(&self, player: PlayerHandle, ratio: f32, notify: bool);
    fn special_ability_fill_meter(&self, player: PlayerHandle, notify: bool);
    fn special_ability_deplete_meter(&self, player: PlayerHandle, notify: bool);
    fn set_player_forced_aim(&self, player: PlayerHandle, forced: bool);
    fn disable_player_firing(&self, player: PlayerHandle, toggle: bool);
    fn set_run_sprint_multiplier_for_player(&self, player: PlayerHandle, multiplier: f32);
    fn set_swim_multiplier_for_player(&self, player: PlayerHandle, multiplier: f32);
    fn set_fire_ammo_this_frame(&self, player: PlayerHandle);
    fn set_explosive_ammo_this_frame(&self, player: PlayerHandle);
    fn set_explosive_melee_this_frame(&self, player: PlayerHandle);
    fn set_super_jump_this_frame(&self, player: PlayerHandle);
    fn set_player_may_not_enter_any_vehicle(&self, player: PlayerHandle);
    fn set_player_may_only_enter_this_vehicle(&self, player: PlayerHandle, vehicle: VehicleHandle);
    fn network_set_friendly_fire_option(&self, enabled: bool);
    fn set_can_attack_friendly(&self, ped: PedHandle, toggle: bool, also_react: bool);
}
