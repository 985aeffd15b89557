//! The client-side view of the world: the latest decoded entity list.
//!
//! # Invariants
//! - State is replaced wholesale per snapshot, never mutated in place.
//! - Exactly one redraw notification per application, fired synchronously.
//! - The store is exclusively owned by the decode-and-apply path; decode
//!   failures never reach `apply`.

use woodview_common::Entity;

/// Redraw hook invoked synchronously after each applied snapshot.
pub type RedrawFn = Box<dyn FnMut(&[Entity])>;

/// Holds the current entity list. Last snapshot wins; there is no diffing
/// against the previous state and no history.
#[derive(Default)]
pub struct ViewStore {
    entities: Vec<Entity>,
    revision: u64,
    redraw: Option<RedrawFn>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the redraw hook, replacing any previous one.
    pub fn on_redraw(&mut self, hook: impl FnMut(&[Entity]) + 'static) {
        self.redraw = Some(Box::new(hook));
    }

    /// Replace the current entity list and notify the redraw hook once.
    pub fn apply(&mut self, next: Vec<Entity>) {
        tracing::debug!(entities = next.len(), revision = self.revision + 1, "applying snapshot");
        self.entities = next;
        self.revision += 1;
        if let Some(hook) = self.redraw.as_mut() {
            hook(&self.entities);
        }
    }

    /// The latest applied entity list.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// How many snapshots have been applied.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

pub fn crate_info() -> &'static str {
    "woodview-store v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use woodview_common::EntityId;

    #[test]
    fn starts_empty_at_revision_zero() {
        let store = ViewStore::new();
        assert!(store.entities().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn apply_replaces_wholesale() {
        let mut store = ViewStore::new();
        store.apply(vec![Entity::new(EntityId(1)), Entity::new(EntityId(2))]);
        store.apply(vec![Entity::new(EntityId(3))]);

        // The entity present only in the first snapshot is gone.
        let ids: Vec<EntityId> = store.entities().iter().map(|e| e.id).collect();
        assert_eq!(ids, [EntityId(3)]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn empty_snapshot_clears_the_world() {
        let mut store = ViewStore::new();
        store.apply(vec![Entity::new(EntityId(1))]);
        store.apply(Vec::new());
        assert!(store.entities().is_empty());
    }

    #[test]
    fn exactly_one_redraw_per_apply() {
        let redraws = Rc::new(Cell::new(0u32));
        let mut store = ViewStore::new();
        store.on_redraw({
            let redraws = Rc::clone(&redraws);
            move |_| redraws.set(redraws.get() + 1)
        });

        store.apply(vec![Entity::new(EntityId(1))]);
        assert_eq!(redraws.get(), 1);
        store.apply(Vec::new());
        store.apply(Vec::new());
        assert_eq!(redraws.get(), 3);
    }

    #[test]
    fn redraw_sees_the_new_state() {
        let seen = Rc::new(Cell::new(0usize));
        let mut store = ViewStore::new();
        store.on_redraw({
            let seen = Rc::clone(&seen);
            move |entities| seen.set(entities.len())
        });
        store.apply(vec![Entity::new(EntityId(1)), Entity::new(EntityId(2))]);
        assert_eq!(seen.get(), 2);
    }
}
