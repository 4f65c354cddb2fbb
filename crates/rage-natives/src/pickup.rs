use crate::handles::{BlipHandle, PickupHandle};

/// Native table for pickups.
pub trait PickupNatives {
    fn get_pickup_coords(&self, pickup: PickupHandle) -> [f32; 3];
    fn has_pickup_been_collected(&self, pickup: PickupHandle) -> i32;
    fn hide_pickup(&self, pickup: PickupHandle, hidden: bool);
    fn remove_pickup(&self, pickup: PickupHandle);
    fn does_pickup_exist(&self, pickup: PickupHandle) -> i32;
    /// Whether the pickup's world object has spawned (distinct from the
    /// pickup record itself existing).
    fn does_pickup_object_exist(&self, pickup: PickupHandle) -> i32;
}

/// Native table for map blips, as far as pickups need them.
pub trait BlipNatives {
    fn add_blip_for_pickup(&self, pickup: PickupHandle) -> BlipHandle;
    fn does_blip_exist(&self, blip: BlipHandle) -> i32;
}
