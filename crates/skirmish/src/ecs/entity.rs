//! # Entity — Lightweight Identifiers for Combatants
//!
//! An [`Entity`] is just a number — it doesn't "contain" anything. The
//! [`World`](super::world::World) maps entities to their components; the
//! entity itself is only a lookup key.
//!
//! ## Design: Monotonic Ids, No Recycling
//!
//! Slot recycling (generational indices, free lists) exists to keep entity
//! handles small when millions of entities churn. This simulation tops out at
//! tens of entities, so we take the simpler guarantee instead: ids only ever
//! increase and are **never reused within a process lifetime**. A stale handle
//! held past a destroy can never alias a newer, unrelated entity — lookups
//! through it simply find nothing.

use std::collections::HashSet;
use std::fmt;

/// A lightweight handle to an entity in the [`World`](super::world::World).
///
/// Created via [`EntityRegistry::create`]; destruction is logical (removal
/// from the store and registry), never id reuse.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(pub(crate) u32);

impl Entity {
    /// Returns the raw id. Useful for diagnostics, not for general use.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues unique entity ids and tracks which are currently alive.
pub struct EntityRegistry {
    next_id: u32,
    /// Alive ids in creation order. The set gives O(1) liveness checks, the
    /// vec preserves iteration order for diagnostics.
    alive: HashSet<Entity>,
    order: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            alive: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Issue a fresh, unique entity id.
    pub fn create(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        self.alive.insert(entity);
        self.order.push(entity);
        entity
    }

    /// Drop an id from the live set. Idempotent — forgetting an id twice is
    /// harmless. The id is not reissued.
    pub fn forget(&mut self, entity: Entity) {
        if self.alive.remove(&entity) {
            self.order.retain(|&e| e != entity);
        }
    }

    /// Whether the entity has been created and not yet destroyed.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.contains(&entity)
    }

    /// Number of currently alive entities.
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Iterate live entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    /// Forget everything. Ids are still not reused afterwards.
    pub fn clear(&mut self) {
        self.alive.clear();
        self.order.clear();
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
