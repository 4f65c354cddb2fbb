use std::fmt;

use glam::Vec3;
use rage_natives::handles::PickupHandle;
use rage_natives::{BlipNatives, PickupNatives};

use crate::entities::Blip;

/// A placed pickup, plus the one map blip this wrapper may have added
/// for it.
pub struct Pickup<'n, N: ?Sized> {
    natives: &'n N,
    handle: PickupHandle,
    added_blip: Option<Blip>,
}

impl<'n, N: ?Sized> Pickup<'n, N> {
    pub fn new(natives: &'n N, handle: PickupHandle) -> Self {
        Self {
            natives,
            handle,
            added_blip: None,
        }
    }

    pub fn handle(&self) -> PickupHandle {
        self.handle
    }
}

impl<N: ?Sized> PartialEq for Pickup<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<N: ?Sized> Eq for Pickup<'_, N> {}

impl<N: ?Sized> fmt::Debug for Pickup<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pickup")
            .field("handle", &self.handle)
            .field("added_blip", &self.added_blip)
            .finish()
    }
}

impl<'n, N: PickupNatives + ?Sized> Pickup<'n, N> {
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.natives.get_pickup_coords(self.handle))
    }

    pub fn is_collected(&self) -> bool {
        self.natives.has_pickup_been_collected(self.handle) != 0
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.natives.hide_pickup(self.handle, hidden);
    }

    pub fn delete(&self) {
        self.natives.remove_pickup(self.handle);
    }

    pub fn exists(&self) -> bool {
        self.natives.does_pickup_exist(self.handle) != 0
    }

    /// Whether the pickup's world object has spawned. A pickup record can
    /// exist while its object is still pending or already collected.
    pub fn object_exists(&self) -> bool {
        self.natives.does_pickup_object_exist(self.handle) != 0
    }
}

impl<'n, N: BlipNatives + ?Sized> Pickup<'n, N> {
    /// Add a map blip tracking this pickup; the blip is remembered so
    /// [`added_blip`](Pickup::added_blip) can hand it back later.
    pub fn add_blip(&mut self) -> Blip {
        let blip = Blip::new(self.natives.add_blip_for_pickup(self.handle));
        self.added_blip = Some(blip);
        blip
    }

    /// The blip added through this wrapper, if the host still knows it.
    /// Blips removed behind our back stop being returned; the stale
    /// record is kept only until the next `add_blip`.
    pub fn added_blip(&self) -> Option<Blip> {
        self.added_blip
            .filter(|blip| self.natives.does_blip_exist(blip.handle()) != 0)
    }
}
