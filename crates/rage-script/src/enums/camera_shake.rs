/// Camera shake presets.
///
/// The engine addresses shakes by a fixed name string, not by code;
/// [`preset_name`](CameraShake::preset_name) gives the exact string the
/// shake natives expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CameraShake {
    Hand = 0,
    SmallExplosion = 1,
    MediumExplosion = 2,
    LargeExplosion = 3,
    Jolt = 4,
    Vibrate = 5,
    RoadVibration = 6,
    Drunk = 7,
    SkyDiving = 8,
    FamilyDrugTrip = 9,
    DeathFail = 10,
}

impl CameraShake {
    /// Total number of shake presets.
    pub const COUNT: usize = 11;

    /// The engine-side name of this preset.
    pub fn preset_name(self) -> &'static str {
        match self {
            Self::Hand => "HAND_SHAKE",
            Self::SmallExplosion => "SMALL_EXPLOSION_SHAKE",
            Self::MediumExplosion => "MEDIUM_EXPLOSION_SHAKE",
            Self::LargeExplosion => "LARGE_EXPLOSION_SHAKE",
            Self::Jolt => "JOLT_SHAKE",
            Self::Vibrate => "VIBRATE_SHAKE",
            Self::RoadVibration => "ROAD_VIBRATION_SHAKE",
            Self::Drunk => "DRUNK_SHAKE",
            Self::SkyDiving => "SKY_DIVING_SHAKE",
            Self::FamilyDrugTrip => "FAMILY5_DRUG_TRIP_SHAKE",
            Self::DeathFail => "DEATH_FAIL_IN_EFFECT_SHAKE",
        }
    }
}
