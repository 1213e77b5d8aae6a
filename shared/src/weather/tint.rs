//! Pre-tint material bookkeeping for the ship submeshes.
//!
//! Some weather kinds recolor the hull. The ledger remembers the material
//! handle each submesh carried before the recolor so a later switch puts the
//! exact handle back. Restores on the caller's side go through deferred
//! commands, so when a restore and a fresh tint happen in the same pass the
//! caller hands the just-restored handles back in; [`TintLedger::snapshot`]
//! prefers those over whatever a stale query still reports.

use bevy::platform::collections::HashMap;
use bevy_ecs::entity::Entity;

pub struct TintLedger<H: Clone> {
    snapshots: HashMap<Entity, H>,
}

impl<H: Clone> Default for TintLedger<H> {
    fn default() -> Self {
        Self {
            snapshots: HashMap::default(),
        }
    }
}

impl<H: Clone> TintLedger<H> {
    /// Empties the ledger, handing back each submesh with the handle it
    /// carried before it was tinted.
    pub fn restore(&mut self) -> HashMap<Entity, H> {
        self.snapshots.drain().collect()
    }

    /// Records the pre-tint handle for `entity` and returns it. `current` is
    /// what the entity carries according to the caller's query; a handle in
    /// `restored` wins over it, since an unflushed restore from the same
    /// pass means `current` can still be the previous tint.
    pub fn snapshot(&mut self, entity: Entity, current: H, restored: &HashMap<Entity, H>) -> H {
        let original = restored.get(&entity).cloned().unwrap_or(current);
        self.snapshots.insert(entity, original.clone());
        original
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn restore_returns_the_pre_tint_handle() {
        let mut world = World::new();
        let hull = world.spawn_empty().id();
        let mut ledger = TintLedger::default();

        let original = ledger.snapshot(hull, "hull-gray", &HashMap::default());
        assert_eq!(original, "hull-gray");

        let restored = ledger.restore();
        assert_eq!(restored.get(&hull), Some(&"hull-gray"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn retint_in_the_same_pass_keeps_the_pre_tint_handle() {
        // A snowy tint followed by a switch that restores and re-tints
        // before the restore is flushed: the query still reports the snowy
        // material, but the ledger must keep the untinted one.
        let mut world = World::new();
        let hull = world.spawn_empty().id();
        let mut ledger = TintLedger::default();

        ledger.snapshot(hull, "hull-gray", &HashMap::default());
        let restored = ledger.restore();

        let original = ledger.snapshot(hull, "hull-snowy", &restored);
        assert_eq!(original, "hull-gray");
        assert_eq!(ledger.restore().get(&hull), Some(&"hull-gray"));
    }

    #[test]
    fn untinted_entity_snapshots_its_current_handle() {
        let mut world = World::new();
        let hull = world.spawn_empty().id();
        let cabin = world.spawn_empty().id();
        let mut ledger = TintLedger::default();

        ledger.snapshot(hull, "hull-gray", &HashMap::default());
        let restored = ledger.restore();

        // The cabin never carried a tint, so nothing was restored for it.
        let original = ledger.snapshot(cabin, "cabin-gray", &restored);
        assert_eq!(original, "cabin-gray");
    }

    #[test]
    fn restore_on_an_empty_ledger_is_a_no_op() {
        let mut ledger: TintLedger<&str> = TintLedger::default();
        assert!(ledger.restore().is_empty());
        assert!(ledger.is_empty());
    }
}
