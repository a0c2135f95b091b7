//! # Component Store — (Kind, Entity) → Owning Slot
//!
//! One column per [`ComponentKind`], each column an insertion-ordered list of
//! `(Entity, Component)` entries. Lookups are linear probes within a column.
//!
//! ## Why not index?
//!
//! At tens of entities a linear probe beats any indexing scheme in both code
//! and cache terms, and the insertion order of a column is part of the store's
//! contract: [`ComponentStore::query`] iterates the *first* requested kind's
//! column in insertion order, filtered by membership in the rest. Systems and
//! tests rely on that stable order, so it must not be "optimized" away.

use super::component::{Component, ComponentKind, ComponentValue};
use super::entity::Entity;
use std::collections::HashMap;

/// One column of components, all of the same kind, in insertion order.
#[derive(Default)]
struct Column {
    entries: Vec<(Entity, Component)>,
}

impl Column {
    fn position(&self, entity: Entity) -> Option<usize> {
        self.entries.iter().position(|(e, _)| *e == entity)
    }
}

/// Associates components with entities, keyed by kind and entity id.
///
/// A component kind has at most one instance per entity; re-adding replaces
/// in place (keeping the original insertion position).
pub struct ComponentStore {
    columns: HashMap<ComponentKind, Column>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    /// Insert a component for an entity, replacing any existing component of
    /// the same kind. Replacement keeps the entity's slot in column order.
    pub fn insert(&mut self, entity: Entity, component: Component) {
        let column = self.columns.entry(component.kind()).or_default();
        match column.position(entity) {
            Some(index) => column.entries[index].1 = component,
            None => column.entries.push((entity, component)),
        }
    }

    /// Borrow a component by kind. Absent is `None`, never an error.
    pub fn get_raw(&self, entity: Entity, kind: ComponentKind) -> Option<&Component> {
        let column = self.columns.get(&kind)?;
        let index = column.position(entity)?;
        Some(&column.entries[index].1)
    }

    /// Typed borrow: `store.get::<Health>(entity)`.
    pub fn get<T: ComponentValue>(&self, entity: Entity) -> Option<&T> {
        self.get_raw(entity, T::KIND).and_then(T::unwrap_ref)
    }

    /// Typed mutable borrow.
    pub fn get_mut<T: ComponentValue>(&mut self, entity: Entity) -> Option<&mut T> {
        let column = self.columns.get_mut(&T::KIND)?;
        let index = column.position(entity)?;
        T::unwrap_mut(&mut column.entries[index].1)
    }

    /// Whether the entity has a component of the given kind.
    pub fn has(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.columns
            .get(&kind)
            .is_some_and(|c| c.position(entity).is_some())
    }

    /// Remove one component. Returns `true` if something was removed.
    pub fn remove(&mut self, entity: Entity, kind: ComponentKind) -> bool {
        let Some(column) = self.columns.get_mut(&kind) else {
            return false;
        };
        match column.position(entity) {
            Some(index) => {
                // Plain remove, not swap_remove: column order is contractual.
                column.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Purge every kind's row for an entity. Used by deferred destruction.
    pub fn remove_all(&mut self, entity: Entity) {
        for column in self.columns.values_mut() {
            if let Some(index) = column.position(entity) {
                column.entries.remove(index);
            }
        }
    }

    /// All entities that have *every* listed kind.
    ///
    /// Order = insertion order of the first kind's column, filtered by
    /// membership in the rest. An empty kind set yields no entities.
    pub fn query(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        let Some((first, rest)) = kinds.split_first() else {
            return Vec::new();
        };
        let Some(column) = self.columns.get(first) else {
            return Vec::new();
        };
        column
            .entries
            .iter()
            .map(|(entity, _)| *entity)
            .filter(|&entity| rest.iter().all(|kind| self.has(entity, *kind)))
            .collect()
    }

    /// Drop every component of every kind.
    pub fn clear(&mut self) {
        self.columns.clear();
    }
}

impl Default for ComponentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Health, Velocity};
    use crate::math::Transform;

    fn entity(id: u32) -> Entity {
        Entity(id)
    }

    #[test]
    fn insert_and_get() {
        let mut store = ComponentStore::new();
        store.insert(entity(0), Velocity::with_speed(3.0).wrap());
        let v = store.get::<Velocity>(entity(0)).unwrap();
        assert_eq!(v.speed, 3.0);
        assert!(store.get::<Transform>(entity(0)).is_none());
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut store = ComponentStore::new();
        store.insert(entity(0), Velocity::with_speed(1.0).wrap());
        store.insert(entity(1), Velocity::with_speed(2.0).wrap());
        store.insert(entity(0), Velocity::with_speed(9.0).wrap());

        assert_eq!(store.get::<Velocity>(entity(0)).unwrap().speed, 9.0);
        // Replacement must not move entity 0 behind entity 1.
        let order = store.query(&[ComponentKind::Velocity]);
        assert_eq!(order, vec![entity(0), entity(1)]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut store = ComponentStore::new();
        store.insert(entity(0), Health::new(100, crate::components::ActorKind::Raider).wrap());
        assert!(store.remove(entity(0), ComponentKind::Health));
        assert!(!store.remove(entity(0), ComponentKind::Health));
        assert!(!store.remove(entity(5), ComponentKind::Velocity));
    }

    #[test]
    fn remove_all_purges_every_kind() {
        let mut store = ComponentStore::new();
        store.insert(entity(0), Transform::default().wrap());
        store.insert(entity(0), Velocity::default().wrap());
        store.remove_all(entity(0));
        assert!(store.get::<Transform>(entity(0)).is_none());
        assert!(store.get::<Velocity>(entity(0)).is_none());
    }

    #[test]
    fn query_requires_all_kinds() {
        let mut store = ComponentStore::new();
        store.insert(entity(0), Transform::default().wrap());
        store.insert(entity(1), Transform::default().wrap());
        store.insert(entity(1), Velocity::default().wrap());

        let both = store.query(&[ComponentKind::Transform, ComponentKind::Velocity]);
        assert_eq!(both, vec![entity(1)]);
    }

    #[test]
    fn query_order_is_first_kind_insertion_order() {
        let mut store = ComponentStore::new();
        // Insert transforms out of id order.
        store.insert(entity(2), Transform::default().wrap());
        store.insert(entity(0), Transform::default().wrap());
        store.insert(entity(1), Transform::default().wrap());
        store.insert(entity(0), Velocity::default().wrap());
        store.insert(entity(2), Velocity::default().wrap());

        let result = store.query(&[ComponentKind::Transform, ComponentKind::Velocity]);
        assert_eq!(result, vec![entity(2), entity(0)]);
    }

    #[test]
    fn empty_kind_set_yields_nothing() {
        let store = ComponentStore::new();
        assert!(store.query(&[]).is_empty());
    }
}
