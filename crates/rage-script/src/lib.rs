pub mod audio;
pub mod cache;
pub mod camera;
pub mod color;
pub mod entities;
pub mod enums;
pub mod game;
pub mod gameplay_camera;
pub mod math;
pub mod model;
pub mod pickup;
pub mod player;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root for convenience
pub use audio::Audio;
pub use camera::{AttachTarget, Camera, CameraTarget};
pub use color::Color;
pub use entities::{Blip, Ped, PedBone, Prop, ScriptEntity, Vehicle};
pub use enums::{
    CameraShake, Control, InputMode, Language, ParachuteLandingType, ParachuteState,
    ParachuteTint, RadioStation,
};
pub use game::{Game, Players};
pub use gameplay_camera::GameplayCamera;
pub use model::Model;
pub use pickup::Pickup;
pub use player::{ChangeModelError, Player};

// The vector type and the host handle/trait surface are part of this
// crate's public API.
pub use glam::Vec3;
pub use rage_natives::handles::{
    BlipHandle, CamHandle, EntityHandle, ModelHash, PedHandle, PickupHandle, PlayerHandle,
    PropHandle, VehicleHandle,
};
pub use rage_natives::ScriptHost;
