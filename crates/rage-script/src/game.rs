// game.rs
//
// Session-wide facade: hashing, clocks, global toggles, control input,
// the local player, and the audio front door. One `Game` per script,
// built over the injected host binding.

use rage_natives::handles::{EntityHandle, PedHandle, PlayerHandle, PropHandle, VehicleHandle};
use rage_natives::{AudioNatives, ClockNatives, ControlNatives, GameNatives, PlayerNatives};

use crate::audio::Audio;
use crate::cache::HandleCache;
use crate::entities::{Ped, Prop, ScriptEntity, Vehicle};
use crate::enums::{Control, InputMode, Language, RadioStation};
use crate::player::Player;

/// Lazy iterator over the players connected right now.
///
/// The id list is the snapshot taken when [`Game::players`] was called;
/// wrappers are only built as the iterator is advanced.
pub struct Players<'n, N: ?Sized> {
    natives: &'n N,
    ids: std::vec::IntoIter<PlayerHandle>,
}

impl<'n, N: ?Sized> Iterator for Players<'n, N> {
    type Item = Player<'n, N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| Player::new(self.natives, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<N: ?Sized> ExactSizeIterator for Players<'_, N> {}

/// The game session, as seen by one script.
pub struct Game<'n, N: ?Sized> {
    natives: &'n N,
    audio: Audio<'n, N>,
    player: HandleCache<PlayerHandle, Player<'n, N>>,
}

impl<'n, N: ?Sized> Game<'n, N> {
    pub fn new(natives: &'n N) -> Self {
        Self {
            natives,
            audio: Audio::new(natives),
            player: HandleCache::new(),
        }
    }
}

impl<'n, N: GameNatives + ?Sized> Game<'n, N> {
    /// Engine joaat hash of `input`; `None` hashes to 0 without a host
    /// round trip.
    pub fn generate_hash(&self, input: Option<&str>) -> u32 {
        match input {
            Some(input) => self.natives.get_hash_key(input),
            None => 0,
        }
    }

    /// UI language, or `None` for a code this layer does not know.
    pub fn language(&self) -> Option<Language> {
        Language::from_code(self.natives.get_ui_language_id())
    }

    /// Slow/stop time. Accepts 0.0 through 1.0; anything else resets the
    /// scale to 1.0 rather than clamping.
    pub fn set_time_scale(&self, scale: f32) {
        let scale = if (0.0..=1.0).contains(&scale) {
            scale
        } else {
            1.0
        };
        self.natives.set_time_scale(scale);
    }

    pub fn max_wanted_level(&self) -> i32 {
        self.natives.get_max_wanted_level()
    }

    /// Wanted levels run 0 through 5; requests outside are clamped.
    pub fn set_max_wanted_level(&self, level: i32) {
        self.natives.set_max_wanted_level(level.clamp(0, 5));
    }

    pub fn set_wanted_level_multiplier(&self, multiplier: f32) {
        self.natives.set_wanted_level_multiplier(multiplier);
    }

    pub fn set_show_police_blips_on_radar(&self, enabled: bool) {
        self.natives.set_police_radar_blips(enabled);
    }

    pub fn nightvision(&self) -> bool {
        self.natives.is_nightvision_active() != 0
    }

    pub fn set_nightvision(&self, active: bool) {
        self.natives.set_nightvision(active);
    }

    pub fn thermal_vision(&self) -> bool {
        self.natives.is_seethrough_active() != 0
    }

    pub fn set_thermal_vision(&self, active: bool) {
        self.natives.set_seethrough(active);
    }

    pub fn is_mission_active(&self) -> bool {
        self.natives.get_mission_flag() != 0
    }

    pub fn set_mission_active(&self, active: bool) {
        self.natives.set_mission_flag(active);
    }

    // The random-event flag is an int engine-side; only 1 counts as set.
    pub fn is_random_event_active(&self) -> bool {
        self.natives.get_random_event_flag() == 1
    }

    pub fn set_random_event_active(&self, active: bool) {
        self.natives.set_random_event_flag(active as i32);
    }

    pub fn is_cutscene_active(&self) -> bool {
        self.natives.is_cutscene_active() != 0
    }

    /// Whether a waypoint is set on the map.
    pub fn is_waypoint_active(&self) -> bool {
        self.natives.is_waypoint_active() != 0
    }

    pub fn is_paused(&self) -> bool {
        self.natives.is_pause_menu_active() != 0
    }

    /// Force the pause menu open or closed.
    pub fn set_paused(&self, paused: bool) {
        self.natives.set_pause_menu_active(paused);
    }

    pub fn is_loading(&self) -> bool {
        self.natives.get_is_loading_screen_active() != 0
    }

    /// Station the player's radio is tuned to. Names outside the known
    /// table, and no station at all, read as [`RadioStation::RadioOff`].
    pub fn radio_station(&self) -> RadioStation {
        self.natives
            .get_player_radio_station_name()
            .and_then(|name| RadioStation::from_station_name(&name))
            .unwrap_or(RadioStation::RadioOff)
    }

    pub fn set_radio_station(&self, station: RadioStation) {
        self.natives.set_radio_to_station_name(station.station_name());
    }

    /// Resolve an entity handle to its engine class, `None` if the
    /// handle does not name a live ped, vehicle or prop.
    pub fn entity_from_handle(&self, handle: EntityHandle) -> Option<ScriptEntity> {
        match self.natives.get_entity_type(handle) {
            1 => Some(Ped::new(PedHandle(handle.0)).into()),
            2 => Some(Vehicle::new(VehicleHandle(handle.0)).into()),
            3 => Some(Prop::new(PropHandle(handle.0)).into()),
            _ => None,
        }
    }

    /// The local player. Cached until the host moves this script to a
    /// different player slot, so wrapper-side state (PvP mirror, the
    /// character cache) survives across calls.
    pub fn player(&mut self) -> &mut Player<'n, N> {
        let natives = self.natives;
        self.player
            .resolve_with(natives.player_id(), |handle| Player::new(natives, handle))
    }

    /// Every connected player, re-queried from the host on each call.
    pub fn players(&self) -> Players<'n, N> {
        Players {
            natives: self.natives,
            ids: self.natives.get_active_players().into_iter(),
        }
    }
}

impl<'n, N: ClockNatives + ?Sized> Game<'n, N> {
    /// Milliseconds this session has been running.
    pub fn game_time(&self) -> u32 {
        self.natives.get_game_timer()
    }

    pub fn frame_count(&self) -> i32 {
        self.natives.get_frame_count()
    }

    /// Duration of the last frame, in seconds.
    pub fn last_frame_time(&self) -> f32 {
        self.natives.get_frame_time()
    }

    pub fn fps(&self) -> f32 {
        1.0 / self.last_frame_time()
    }
}

impl<'n, N: GameNatives + PlayerNatives + ?Sized> Game<'n, N> {
    /// The ped the local player is controlling.
    pub fn player_ped(&mut self) -> Ped {
        self.player().character()
    }

    pub fn pvp_enabled(&mut self) -> bool {
        self.player().pvp_enabled()
    }

    pub fn set_pvp_enabled(&mut self, enabled: bool) {
        self.player().set_pvp_enabled(enabled);
    }
}

impl<'n, N: ControlNatives + ?Sized> Game<'n, N> {
    /// Which device the engine currently takes input from. The engine
    /// flags gamepad input disabled when mouse and keyboard are active.
    pub fn current_input_mode(&self) -> InputMode {
        if self.natives.is_input_disabled(InputMode::GamePad.code()) != 0 {
            InputMode::MouseAndKeyboard
        } else {
            InputMode::GamePad
        }
    }

    pub fn is_control_pressed(&self, mode: InputMode, control: Control) -> bool {
        self.natives.is_control_pressed(mode.code(), control.code()) != 0
    }

    pub fn is_disabled_control_pressed(&self, mode: InputMode, control: Control) -> bool {
        self.natives
            .is_disabled_control_pressed(mode.code(), control.code())
            != 0
    }

    pub fn is_control_just_pressed(&self, mode: InputMode, control: Control) -> bool {
        self.natives
            .is_control_just_pressed(mode.code(), control.code())
            != 0
    }

    pub fn is_disabled_control_just_pressed(&self, mode: InputMode, control: Control) -> bool {
        self.natives
            .is_disabled_control_just_pressed(mode.code(), control.code())
            != 0
    }

    pub fn is_control_released(&self, mode: InputMode, control: Control) -> bool {
        self.natives.is_control_released(mode.code(), control.code()) != 0
    }

    pub fn is_disabled_control_released(&self, mode: InputMode, control: Control) -> bool {
        self.natives
            .is_disabled_control_released(mode.code(), control.code())
            != 0
    }

    pub fn is_control_just_released(&self, mode: InputMode, control: Control) -> bool {
        self.natives
            .is_control_just_released(mode.code(), control.code())
            != 0
    }

    pub fn is_disabled_control_just_released(&self, mode: InputMode, control: Control) -> bool {
        self.natives
            .is_disabled_control_just_released(mode.code(), control.code())
            != 0
    }

    pub fn is_control_enabled(&self, mode: InputMode, control: Control) -> bool {
        self.natives.is_control_enabled(mode.code(), control.code()) != 0
    }

    pub fn enable_control_this_frame(&self, mode: InputMode, control: Control) {
        self.natives
            .enable_control_action(mode.code(), control.code(), true);
    }

    pub fn disable_control_this_frame(&self, mode: InputMode, control: Control) {
        self.natives
            .disable_control_action(mode.code(), control.code(), true);
    }

    pub fn enable_all_controls_this_frame(&self, mode: InputMode) {
        self.natives.enable_all_control_actions(mode.code());
    }

    pub fn disable_all_controls_this_frame(&self, mode: InputMode) {
        self.natives.disable_all_control_actions(mode.code());
    }

    /// Analog reading in [-1, 1].
    pub fn control_normal(&self, mode: InputMode, control: Control) -> f32 {
        self.natives.get_control_normal(mode.code(), control.code())
    }

    pub fn disabled_control_normal(&self, mode: InputMode, control: Control) -> f32 {
        self.natives
            .get_disabled_control_normal(mode.code(), control.code())
    }

    /// Override a control with a user-defined reading this frame.
    pub fn set_control_normal(&self, mode: InputMode, control: Control, value: f32) {
        self.natives
            .set_control_normal(mode.code(), control.code(), value);
    }

    pub fn control_value(&self, mode: InputMode, control: Control) -> i32 {
        self.natives.get_control_value(mode.code(), control.code())
    }
}

impl<'n, N: AudioNatives + ?Sized> Game<'n, N> {
    /// Same as [`Audio::play_sound`].
    pub fn play_sound(&self, sound_file: &str, sound_set: &str) {
        self.audio.play_sound(sound_file, sound_set);
    }

    /// Same as [`Audio::play_music`].
    pub fn play_music(&mut self, music_file: &str) {
        self.audio.play_music(music_file);
    }

    /// Same as [`Audio::stop_music`].
    pub fn stop_music(&mut self, music_file: Option<&str>) {
        self.audio.stop_music(music_file);
    }
}
