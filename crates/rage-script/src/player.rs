// player.rs
//
// Player wrapper: per-player state, per-frame overrides, and the model
// change workflow. A Player is addressed by player slot handle; the ped
// it controls is a separate, re-resolvable entity.

use std::fmt;

use glam::Vec3;
use rage_natives::handles::{ModelHash, PedHandle, PlayerHandle};
use rage_natives::{ClockNatives, PlayerNatives, StreamingNatives};
use thiserror::Error;

use crate::cache::HandleCache;
use crate::color::Color;
use crate::entities::{Ped, ScriptEntity, Vehicle};
use crate::enums::ParachuteTint;
use crate::model::Model;

/// Why a player model change did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChangeModelError {
    #[error("model {0} is not in the game image")]
    NotInCdImage(ModelHash),
    #[error("model {0} is not a ped model")]
    NotAPed(ModelHash),
    #[error("model {0} did not stream in before the deadline")]
    StreamTimedOut(ModelHash),
}

/// A connected player.
///
/// Holds the one-slot cache for the controlled ped and the last PvP
/// value this wrapper set; everything else lives host-side.
pub struct Player<'n, N: ?Sized> {
    natives: &'n N,
    handle: PlayerHandle,
    character: HandleCache<PedHandle, Ped>,
    pvp: bool,
}

impl<'n, N: ?Sized> Player<'n, N> {
    pub fn new(natives: &'n N, handle: PlayerHandle) -> Self {
        Self {
            natives,
            handle,
            character: HandleCache::new(),
            pvp: false,
        }
    }

    pub fn handle(&self) -> PlayerHandle {
        self.handle
    }
}

impl<N: ?Sized> PartialEq for Player<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<N: ?Sized> Eq for Player<'_, N> {}

impl<N: ?Sized> fmt::Debug for Player<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("handle", &self.handle).finish()
    }
}

impl<'n, N: PlayerNatives + ?Sized> Player<'n, N> {
    /// Look up a player by server id; `None` if nobody holds that id.
    pub fn from_server_id(natives: &'n N, server_id: i32) -> Option<Self> {
        match natives.get_player_from_server_id(server_id) {
            -1 => None,
            handle => Some(Self::new(natives, PlayerHandle(handle))),
        }
    }

    pub fn server_id(&self) -> i32 {
        self.natives.get_player_server_id(self.handle)
    }

    /// The ped this player is controlling, re-resolved whenever the
    /// engine hands the player a different body.
    pub fn character(&mut self) -> Ped {
        *self
            .character
            .resolve_with(self.natives.get_player_ped(self.handle), Ped::new)
    }

    pub fn name(&self) -> String {
        self.natives.get_player_name(self.handle)
    }

    pub fn is_active(&self) -> bool {
        self.natives.network_is_player_active(self.handle) != 0
    }

    pub fn wanted_level(&self) -> i32 {
        self.natives.get_player_wanted_level(self.handle)
    }

    /// Applies immediately, skipping the engine's delayed-response path.
    pub fn set_wanted_level(&self, level: i32) {
        self.natives.set_player_wanted_level(self.handle, level, false);
    }

    /// Where the police believe this player is.
    pub fn wanted_center_position(&self) -> Vec3 {
        Vec3::from(self.natives.get_player_wanted_centre_position(self.handle))
    }

    pub fn set_wanted_center_position(&self, position: Vec3) {
        self.natives.set_player_wanted_centre_position(
            self.handle,
            position.x,
            position.y,
            position.z,
        );
    }

    pub fn max_armor(&self) -> i32 {
        self.natives.get_player_max_armour(self.handle)
    }

    pub fn set_max_armor(&self, value: i32) {
        self.natives.set_player_max_armour(self.handle, value);
    }

    /// Reads outside the known tint table collapse to [`ParachuteTint::None`].
    pub fn primary_parachute_tint(&self) -> ParachuteTint {
        ParachuteTint::from_code(self.natives.get_player_parachute_tint_index(self.handle))
            .unwrap_or(ParachuteTint::None)
    }

    pub fn set_primary_parachute_tint(&self, tint: ParachuteTint) {
        self.natives
            .set_player_parachute_tint_index(self.handle, tint.code());
    }

    pub fn reserve_parachute_tint(&self) -> ParachuteTint {
        ParachuteTint::from_code(
            self.natives
                .get_player_reserve_parachute_tint_index(self.handle),
        )
        .unwrap_or(ParachuteTint::None)
    }

    pub fn set_reserve_parachute_tint(&self, tint: ParachuteTint) {
        self.natives
            .set_player_reserve_parachute_tint_index(self.handle, tint.code());
    }

    pub fn set_can_leave_parachute_smoke_trail(&self, enabled: bool) {
        self.natives
            .set_player_can_leave_parachute_smoke_trail(self.handle, enabled);
    }

    pub fn parachute_smoke_trail_color(&self) -> Color {
        let [r, g, b] = self
            .natives
            .get_player_parachute_smoke_trail_color(self.handle);
        Color::from_rgb(r as u8, g as u8, b as u8)
    }

    pub fn set_parachute_smoke_trail_color(&self, color: Color) {
        self.natives.set_player_parachute_smoke_trail_color(
            self.handle,
            color.r as i32,
            color.g as i32,
            color.b as i32,
        );
    }

    pub fn is_dead(&self) -> bool {
        self.natives.is_player_dead(self.handle) != 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    pub fn is_aiming(&self) -> bool {
        self.natives.is_player_free_aiming(self.handle) != 0
    }

    pub fn is_climbing(&self) -> bool {
        self.natives.is_player_climbing(self.handle) != 0
    }

    pub fn is_riding_train(&self) -> bool {
        self.natives.is_player_riding_train(self.handle) != 0
    }

    pub fn is_pressing_horn(&self) -> bool {
        self.natives.is_player_pressing_horn(self.handle) != 0
    }

    pub fn is_playing(&self) -> bool {
        self.natives.is_player_playing(self.handle) != 0
    }

    pub fn is_invincible(&self) -> bool {
        self.natives.get_player_invincible(self.handle) != 0
    }

    pub fn set_invincible(&self, invincible: bool) {
        self.natives.set_player_invincible(self.handle, invincible);
    }

    pub fn set_ignored_by_police(&self, ignored: bool) {
        self.natives.set_police_ignore_player(self.handle, ignored);
    }

    pub fn set_ignored_by_everyone(&self, ignored: bool) {
        self.natives.set_everyone_ignore_player(self.handle, ignored);
    }

    pub fn set_dispatch_cops(&self, enabled: bool) {
        self.natives.set_dispatch_cops_for_player(self.handle, enabled);
    }

    pub fn set_can_use_cover(&self, enabled: bool) {
        self.natives.set_player_can_use_cover(self.handle, enabled);
    }

    pub fn can_start_mission(&self) -> bool {
        self.natives.can_player_start_mission(self.handle) != 0
    }

    pub fn set_can_control_ragdoll(&self, enabled: bool) {
        self.natives.give_player_ragdoll_control(self.handle, enabled);
    }

    pub fn can_control_character(&self) -> bool {
        self.natives.is_player_control_on(self.handle) != 0
    }

    pub fn set_can_control_character(&self, enabled: bool) {
        self.natives.set_player_control(self.handle, enabled, 0);
    }

    pub fn remaining_sprint_time(&self) -> f32 {
        self.natives.get_player_sprint_time_remaining(self.handle)
    }

    /// Seconds left before this player starts drowning.
    pub fn remaining_underwater_time(&self) -> f32 {
        self.natives.get_player_underwater_time_remaining(self.handle)
    }

    pub fn is_special_ability_active(&self) -> bool {
        self.natives.is_special_ability_active(self.handle) != 0
    }

    pub fn is_special_ability_enabled(&self) -> bool {
        self.natives.is_special_ability_enabled(self.handle) != 0
    }

    pub fn set_special_ability_enabled(&self, enabled: bool) {
        self.natives.enable_special_ability(self.handle, enabled);
    }

    pub fn charge_special_ability_absolute(&self, amount: i32) {
        self.natives
            .special_ability_charge_absolute(self.handle, amount, true);
    }

    /// `ratio` is the fill fraction, 0.0 to 1.0.
    pub fn charge_special_ability_normalized(&self, ratio: f32) {
        self.natives
            .special_ability_charge_normalized(self.handle, ratio, true);
    }

    pub fn refill_special_ability(&self) {
        self.natives.special_ability_fill_meter(self.handle, true);
    }

    pub fn deplete_special_ability(&self) {
        self.natives.special_ability_deplete_meter(self.handle, true);
    }

    pub fn is_targetting_entity(&self, entity: impl Into<ScriptEntity>) -> bool {
        self.natives
            .is_player_free_aiming_at_entity(self.handle, entity.into().entity_handle())
            != 0
    }

    pub fn is_targetting_anything(&self) -> bool {
        self.natives.is_player_targetting_anything(self.handle) != 0
    }

    pub fn set_forced_aim(&self, forced: bool) {
        self.natives.set_player_forced_aim(self.handle, forced);
    }

    pub fn disable_firing_this_frame(&self) {
        self.natives.disable_player_firing(self.handle, false);
    }

    /// The engine ignores multipliers past 1.499, so higher requests are
    /// capped there before forwarding.
    pub fn set_run_speed_mult_this_frame(&self, mult: f32) {
        self.natives
            .set_run_sprint_multiplier_for_player(self.handle, mult.min(1.499));
    }

    pub fn set_swim_speed_mult_this_frame(&self, mult: f32) {
        self.natives
            .set_swim_multiplier_for_player(self.handle, mult.min(1.499));
    }

    pub fn set_fire_ammo_this_frame(&self) {
        self.natives.set_fire_ammo_this_frame(self.handle);
    }

    pub fn set_explosive_ammo_this_frame(&self) {
        self.natives.set_explosive_ammo_this_frame(self.handle);
    }

    pub fn set_explosive_melee_this_frame(&self) {
        self.natives.set_explosive_melee_this_frame(self.handle);
    }

    pub fn set_super_jump_this_frame(&self) {
        self.natives.set_super_jump_this_frame(self.handle);
    }

    pub fn set_may_not_enter_any_vehicle(&self) {
        self.natives.set_player_may_not_enter_any_vehicle(self.handle);
    }

    pub fn set_may_only_enter_this_vehicle(&self, vehicle: Vehicle) {
        self.natives
            .set_player_may_only_enter_this_vehicle(self.handle, vehicle.handle());
    }

    /// The host exposes no PvP getter; this reports the last value set
    /// through this wrapper (`false` until then).
    pub fn pvp_enabled(&self) -> bool {
        self.pvp
    }

    pub fn set_pvp_enabled(&mut self, enabled: bool) {
        self.natives.network_set_friendly_fire_option(enabled);
        let character = self.character();
        self.natives
            .set_can_attack_friendly(character.handle(), enabled, enabled);
        self.pvp = enabled;
    }
}

impl<'n, N: PlayerNatives + StreamingNatives + ClockNatives + ?Sized> Player<'n, N> {
    /// Swap this player onto a new ped model.
    ///
    /// Fail-fast preconditions: the model must be in the game image, be
    /// a ped model, and stream in within [`Model::DEFAULT_TIMEOUT_MS`].
    /// On any failure the player's current model is left untouched.
    pub async fn change_model(&self, model: Model) -> Result<(), ChangeModelError> {
        if !model.is_in_cd_image(self.natives) {
            return Err(ChangeModelError::NotInCdImage(model.hash()));
        }
        if !model.is_ped(self.natives) {
            return Err(ChangeModelError::NotAPed(model.hash()));
        }
        if !model.request(self.natives, Model::DEFAULT_TIMEOUT_MS).await {
            return Err(ChangeModelError::StreamTimedOut(model.hash()));
        }
        self.natives.set_player_model(self.handle, model.hash());
        model.mark_as_no_longer_needed(self.natives);
        Ok(())
    }
}
