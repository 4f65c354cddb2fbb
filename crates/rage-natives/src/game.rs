use crate::handles::{EntityHandle, PlayerHandle};

/// Native table for session-wide game state queries and toggles.
pub trait GameNatives {
    /// Jenkins one-at-a-time hash of a string, as computed by the engine.
    fn get_hash_key(&self, input: &str) -> u32;
    fn get_ui_language_id(&self) -> i32;
    fn set_time_scale(&self, scale: f32);
    fn player_id(&self) -> PlayerHandle;
    /// Snapshot of the currently connected player ids.
    fn get_active_players(&self) -> Vec<PlayerHandle>;
    fn get_max_wanted_level(&self) -> i32;
    fn set_max_wanted_level(&self, level: i32);
    fn set_wanted_level_multiplier(&self, multiplier: f32);
    fn set_police_radar_blips(&self, enabled: bool);
    fn is_nightvision_active(&self) -> i32;
    fn set_nightvision(&self, active: bool);
    fn is_seethrough_active(&self) -> i32;
    fn set_seethrough(&self, active: bool);
    fn get_mission_flag(&self) -> i32;
    fn set_mission_flag(&self, active: bool);
    fn get_random_event_flag(&self) -> i32;
    fn set_random_event_flag(&self, flag: i32);
    fn is_cutscene_active(&self) -> i32;
    fn is_waypoint_active(&self) -> i32;
    fn is_pause_menu_active(&self) -> i32;
    fn set_pause_menu_active(&self, active: bool);
    fn get_is_loading_screen_active(&self) -> i32;
    /// Name of the station the player's radio is tuned to, or `None` when
    /// no station is playing.
    fn get_player_radio_station_name(&self) -> Option<String>;
    fn set_radio_to_station_name(&self, station_name: &str);
    /// Engine entity class code: 1 = ped, 2 = vehicle, 3 = prop, anything
    /// else means the handle does not name a live entity.
    fn get_entity_type(&self, entity: EntityHandle) -> i32;
}

/// Native table for session timers and frame statistics.
pub trait ClockNatives {
    /// Milliseconds the game has been running this session.
    fn get_game_timer(&self) -> u32;
    fn get_frame_count(&self) -> i32;
    /// Duration of the last frame in seconds.
    fn get_frame_time(&self) -> f32;
}

/// Native table for control input queries and per-frame overrides.
///
/// `mode` and `control` cross as the raw engine codes; the wrapper layer
/// owns the typed enums.
pub trait ControlNatives {
    fn is_control_pressed(&self, mode: i32, control: i32) -> i32;
    fn is_disabled_control_pressed(&self, mode: i32, control: i32) -> i32;
    fn is_control_just_pressed(&self, mode: i32, control: i32) -> i32;
    fn is_disabled_control_just_pressed(&self, mode: i32, control: i32) -> i32;
    fn is_control_released(&self, mode: i32, control: i32) -> i32;
    fn is_disabled_control_released(&self, mode: i32, control: i32) -> i32;
    fn is_control_just_released(&self, mode: i32, control: i32) -> i32;
    fn is_disabled_control_just_released(&self, mode: i32, control: i32) -> i32;
    fn is_control_enabled(&self, mode: i32, control: i32) -> i32;
    fn enable_control_action(&self, mode: i32, control: i32, enable: bool);
    fn disable_control_action(&self, mode: i32, control: i32, disable: bool);
    fn enable_all_control_actions(&self, mode: i32);
    fn disable_all_control_actions(&self, mode: i32);
    /// Analog control value in [-1, 1].
    fn get_control_normal(&self, mode: i32, control: i32) -> f32;
    fn get_disabled_control_normal(&self, mode: i32, control: i32) -> f32;
    fn set_control_normal(&self, mode: i32, control: i32, value: f32);
    fn get_control_value(&self, mode: i32, control: i32) -> i32;
    fn is_input_disabled(&self, mode: i32) -> i32;
}
