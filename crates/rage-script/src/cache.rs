// cache.rs
//
// Invalidate-on-mismatch memoization for handle-keyed references.
// The host can repoint a handle at any tick (respawn, slot reuse), so a
// cached wrapper is only good while the freshly observed handle still
// matches the one it was built for.

/// Keep `cached` iff its key equals the freshly observed `current` handle,
/// otherwise build a new entry with `make`.
pub fn resolve<K, V, F>(current: K, cached: Option<(K, V)>, make: F) -> (K, V)
where
    K: Copy + PartialEq,
    F: FnOnce(K) -> V,
{
    match cached {
        Some((key, value)) if key == current => (key, value),
        _ => (current, make(current)),
    }
}

/// One-slot cache around [`resolve`], storing the latest entry.
#[derive(Debug, Default)]
pub struct HandleCache<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> HandleCache<K, V>
where
    K: Copy + PartialEq,
{
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Resolve against `current`, rebuilding with `make` on a miss, and
    /// return the live entry.
    pub fn resolve_with<F>(&mut self, current: K, make: F) -> &mut V
    where
        F: FnOnce(K) -> V,
    {
        let entry = resolve(current, self.slot.take(), make);
        let (_, value) = self.slot.insert(entry);
        value
    }

    /// The cached entry, if any, without consulting the host.
    pub fn peek(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }
}
