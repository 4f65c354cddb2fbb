use rage_natives::handles::{BlipHandle, EntityHandle, PedHandle, PropHandle, VehicleHandle};

/// A character/actor entity, carried by handle only.
///
/// This layer references peds (camera targets, the player's character)
/// but does not wrap their state; equality is handle equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ped {
    handle: PedHandle,
}

impl Ped {
    pub fn new(handle: PedHandle) -> Self {
        Self { handle }
    }

    pub fn handle(self) -> PedHandle {
        self.handle
    }

    pub fn entity_handle(self) -> EntityHandle {
        self.handle.into()
    }

    /// Reference a skeletal attachment point on this ped by bone index.
    pub fn bone(self, index: i32) -> PedBone {
        PedBone { owner: self, index }
    }
}

/// A vehicle entity, carried by handle only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    handle: VehicleHandle,
}

impl Vehicle {
    pub fn new(handle: VehicleHandle) -> Self {
        Self { handle }
    }

    pub fn handle(self) -> VehicleHandle {
        self.handle
    }

    pub fn entity_handle(self) -> EntityHandle {
        self.handle.into()
    }
}

/// A prop (world object) entity, carried by handle only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prop {
    handle: PropHandle,
}

impl Prop {
    pub fn new(handle: PropHandle) -> Self {
        Self { handle }
    }

    pub fn handle(self) -> PropHandle {
        self.handle
    }

    pub fn entity_handle(self) -> EntityHandle {
        self.handle.into()
    }
}

/// A map blip, carried by handle only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blip {
    handle: BlipHandle,
}

impl Blip {
    pub fn new(handle: BlipHandle) -> Self {
        Self { handle }
    }

    pub fn handle(self) -> BlipHandle {
        self.handle
    }
}

/// A bone on a ped's skeleton: the owning ped plus the engine bone index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PedBone {
    pub owner: Ped,
    pub index: i32,
}

/// An entity resolved to its engine class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptEntity {
    Ped(Ped),
    Vehicle(Vehicle),
    Prop(Prop),
}

impl ScriptEntity {
    /// The untyped handle, whatever the class.
    pub fn entity_handle(self) -> EntityHandle {
        match self {
            Self::Ped(ped) => ped.entity_handle(),
            Self::Vehicle(vehicle) => vehicle.entity_handle(),
            Self::Prop(prop) => prop.entity_handle(),
        }
    }
}

impl From<Ped> for ScriptEntity {
    fn from(ped: Ped) -> Self {
        Self::Ped(ped)
    }
}

impl From<Vehicle> for ScriptEntity {
    fn from(vehicle: Vehicle) -> Self {
        Self::Vehicle(vehicle)
    }
}

impl From<Prop> for ScriptEntity {
    fn from(prop: Prop) -> Self {
        Self::Prop(prop)
    }
}
