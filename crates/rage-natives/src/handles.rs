use std::fmt;

/// Script handle for a scripted camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CamHandle(pub i32);

/// Script handle for a player slot (not the player's ped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PlayerHandle(pub i32);

/// Script handle for a ped (character/actor) entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PedHandle(pub i32);

/// Script handle for a vehicle entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct VehicleHandle(pub i32);

/// Script handle for a prop (world object) entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PropHandle(pub i32);

/// Script handle for any entity (ped, vehicle or prop).
///
/// Peds, vehicles and props share one handle space engine-side, so the
/// typed handles convert into this one losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntityHandle(pub i32);

/// Script handle for a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PickupHandle(pub i32);

/// Script handle for a map blip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BlipHandle(pub i32);

/// Jenkins one-at-a-time (joaat) hash identifying a streamable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ModelHash(pub u32);

// Model hashes are quoted in hex everywhere game data is documented.
impl fmt::Display for ModelHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<PedHandle> for EntityHandle {
    fn from(handle: PedHandle) -> Self {
        EntityHandle(handle.0)
    }
}

impl From<VehicleHandle> for EntityHandle {
    fn from(handle: VehicleHandle) -> Self {
        EntityHandle(handle.0)
    }
}

impl From<PropHandle> for EntityHandle {
    fn from(handle: PropHandle) -> Self {
        EntityHandle(handle.0)
    }
}
