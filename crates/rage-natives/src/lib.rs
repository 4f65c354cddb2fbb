pub mod audio;
pub mod camera;
pub mod game;
pub mod handles;
pub mod pickup;
pub mod player;
pub mod streaming;

// Re-export the trait surface and handle types at crate root for convenience
pub use audio::AudioNatives;
pub use camera::{CameraNatives, GameplayCamNatives};
pub use game::{ClockNatives, ControlNatives, GameNatives};
pub use handles::{
    BlipHandle, CamHandle, EntityHandle, ModelHash, PedHandle, PickupHandle, PlayerHandle,
    PropHandle, VehicleHandle,
};
pub use pickup::{BlipNatives, PickupNatives};
pub use player::PlayerNatives;
pub use streaming::StreamingNatives;

/// The complete native table of a script host.
///
/// Implemented automatically for any type that provides every subsystem
/// table, so an embedding runtime implements the narrow traits and
/// satisfies every wrapper bound at once.
pub trait ScriptHost:
    AudioNatives
    + BlipNatives
    + CameraNatives
    + ClockNatives
    + ControlNatives
    + GameNatives
    + GameplayCamNatives
    + PickupNatives
    + PlayerNatives
    + StreamingNatives
{
}

impl<T> ScriptHost for T where
    T: AudioNatives
        + BlipNatives
        + CameraNatives
        + ClockNatives
        + ControlNatives
        + GameNatives
        + GameplayCamNatives
        + PickupNatives
        + PlayerNatives
        + StreamingNatives
        + ?Sized
{
}
