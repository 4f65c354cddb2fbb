// enums/mod.rs
//
// Closed sets of engine codes, one file per family.
// These exist purely for type-safe marshaling against the native table;
// the numeric values are the host's and never change at runtime.

pub mod camera_shake;
pub mod controls;
pub mod language;
pub mod parachute;
pub mod radio;

pub use camera_shake::CameraShake;
pub use controls::{Control, InputMode};
pub use language::Language;
pub use parachute::{ParachuteLandingType, ParachuteState, ParachuteTint};
pub use radio::RadioStation;
