/// How a ped hits the ground after a parachute descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ParachuteLandingType {
    None = -1,
    Stumbling = 1,
    Rolling = 2,
    Ragdoll = 3,
}

impl ParachuteLandingType {
    /// Convert a raw host code to a landing type.
    /// Returns None if the value is out of range.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::None),
            1 => Some(Self::Stumbling),
            2 => Some(Self::Rolling),
            3 => Some(Self::Ragdoll),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Phase of a ped's parachute jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ParachuteState {
    None = -1,
    FreeFalling = 0,
    Deploying = 1,
    Gliding = 2,
    LandingOrFallingToDoom = 3,
}

impl ParachuteState {
    /// Convert a raw host code to a parachute state.
    /// Returns None if the value is out of range.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::None),
            0 => Some(Self::FreeFalling),
            1 => Some(Self::Deploying),
            2 => Some(Self::Gliding),
            3 => Some(Self::LandingOrFallingToDoom),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Canopy color of a player's parachute. -1 means no tint assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ParachuteTint {
    None = -1,
    Rainbow = 0,
    Red = 1,
    SeasideStripes = 2,
    WidowMaker = 3,
    Patriot = 4,
    Blue = 5,
    Black = 6,
    Hornet = 7,
    AirForce = 8,
    Desert = 9,
    Shadow = 10,
    HighAltitude = 11,
    Airborne = 12,
    Sunrise = 13,
}

impl ParachuteTint {
    /// Convert a raw host code to a tint.
    /// Returns None if the value is out of range.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::None),
            0 => Some(Self::Rainbow),
            1 => Some(Self::Red),
            2 => Some(Self::SeasideStripes),
            3 => Some(Self::WidowMaker),
            4 => Some(Self::Patriot),
            5 => Some(Self::Blue),
            6 => Some(Self::Black),
            7 => Some(Self::Hornet),
            8 => Some(Self::AirForce),
            9 => Some(Self::Desert),
            10 => Some(Self::Shadow),
            11 => Some(Self::HighAltitude),
            12 => Some(Self::Airborne),
            13 => Some(Self::Sunrise),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}
