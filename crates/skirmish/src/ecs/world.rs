//! # World — The Central Container
//!
//! The [`World`] owns the entity registry, the component store, the ordered
//! system list, and the deferred-destruction queue. It is the single source
//! of truth for the entire simulation state.
//!
//! ## Frame protocol
//!
//! ```text
//! update(delta_ms):
//!   1. run every system, in registration order
//!   2. flush the destroy queue:
//!        for each queued entity: purge all component rows, forget the id
//!      (the queue is cleared unconditionally, even if empty)
//! ```
//!
//! The flush ordering is load-bearing: an entity destroyed during frame N is
//! still fully queryable by every system that runs later in frame N, and is
//! gone from frame N+1 onward. Systems must therefore not retain component
//! borrows across frames.

use super::component::{Component, ComponentKind, ComponentValue};
use super::entity::{Entity, EntityRegistry};
use super::store::ComponentStore;
use super::system::System;

/// Owns entities, components, and the ordered system list; drives the frame
/// update and deferred destruction.
pub struct World {
    registry: EntityRegistry,
    store: ComponentStore,
    systems: Vec<Box<dyn System>>,
    destroy_queue: Vec<Entity>,
}

impl World {
    pub fn new() -> Self {
        Self {
            registry: EntityRegistry::new(),
            store: ComponentStore::new(),
            systems: Vec::new(),
            destroy_queue: Vec::new(),
        }
    }

    // ── Entities ─────────────────────────────────────────────────────

    /// Create a fresh entity with no components.
    pub fn create_entity(&mut self) -> Entity {
        self.registry.create()
    }

    /// Queue an entity for destruction at the end of the current frame.
    /// Idempotent — marking twice is harmless. Components stay queryable
    /// until the frame's systems have all run.
    pub fn destroy_entity(&mut self, entity: Entity) {
        if !self.destroy_queue.contains(&entity) {
            self.destroy_queue.push(entity);
        }
    }

    /// Whether the entity has been created and not yet flushed away.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.registry.is_alive(entity)
    }

    /// Number of currently alive entities.
    pub fn entity_count(&self) -> usize {
        self.registry.alive_count()
    }

    /// Live entities in creation order.
    pub fn entities(&self) -> Vec<Entity> {
        self.registry.iter().collect()
    }

    // ── Components ───────────────────────────────────────────────────

    /// Attach a component to an entity, replacing any existing component of
    /// the same kind.
    pub fn add_component<T: ComponentValue>(&mut self, entity: Entity, component: T) {
        self.store.insert(entity, component.wrap());
    }

    /// Typed component borrow; absent is `None`, never an error.
    pub fn get<T: ComponentValue>(&self, entity: Entity) -> Option<&T> {
        self.store.get::<T>(entity)
    }

    /// Typed mutable component borrow.
    pub fn get_mut<T: ComponentValue>(&mut self, entity: Entity) -> Option<&mut T> {
        self.store.get_mut::<T>(entity)
    }

    /// Untyped component borrow by kind.
    pub fn get_raw(&self, entity: Entity, kind: ComponentKind) -> Option<&Component> {
        self.store.get_raw(entity, kind)
    }

    /// Whether the entity carries a component of the given kind.
    pub fn has(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.store.has(entity, kind)
    }

    /// Remove one component. Returns `true` if something was removed.
    pub fn remove_component(&mut self, entity: Entity, kind: ComponentKind) -> bool {
        self.store.remove(entity, kind)
    }

    /// All entities holding every listed kind, in the first kind's column
    /// insertion order.
    pub fn query(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.store.query(kinds)
    }

    // ── Systems & frame update ───────────────────────────────────────

    /// Register a system. Registration order is execution order, fixed at
    /// setup. Runs the system's `init` hook.
    pub fn add_system(&mut self, mut system: Box<dyn System>) {
        system.init(self);
        self.systems.push(system);
    }

    /// Number of registered systems.
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Run one frame: every system in order, then the destroy-queue flush.
    pub fn update(&mut self, delta_ms: f32) {
        // Take the list out so systems can borrow the world mutably.
        let mut systems = std::mem::take(&mut self.systems);
        for system in &mut systems {
            system.update(self, delta_ms);
        }
        // Anything registered mid-frame (unsupported, but harmless) keeps
        // its position after the fixed schedule.
        systems.append(&mut self.systems);
        self.systems = systems;

        self.flush_destroyed();
    }

    /// Tear down all systems (registration order), then clear all state.
    /// This is the only supported way to reset the world.
    pub fn cleanup(&mut self) {
        let mut systems = std::mem::take(&mut self.systems);
        for system in &mut systems {
            system.cleanup(self);
        }
        drop(systems);
        self.store.clear();
        self.registry.clear();
        self.destroy_queue.clear();
    }

    fn flush_destroyed(&mut self) {
        let queue = std::mem::take(&mut self.destroy_queue);
        for entity in queue {
            self.store.remove_all(entity);
            self.registry.forget(entity);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Velocity;
    use crate::math::Transform;

    struct Probe {
        ran: std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
        tag: &'static str,
    }

    impl System for Probe {
        fn name(&self) -> &'static str {
            self.tag
        }

        fn update(&mut self, _world: &mut World, _delta_ms: f32) {
            self.ran.borrow_mut().push(self.tag);
        }

        fn cleanup(&mut self, _world: &mut World) {
            self.ran.borrow_mut().push("cleanup");
        }
    }

    /// Destroys a given entity during its pass, then asserts the components
    /// are still visible to later systems in the same frame.
    struct DestroyThenObserve {
        target: Entity,
        destroy: bool,
        observed: std::rc::Rc<std::cell::RefCell<Vec<bool>>>,
    }

    impl System for DestroyThenObserve {
        fn name(&self) -> &'static str {
            "destroy_then_observe"
        }

        fn update(&mut self, world: &mut World, _delta_ms: f32) {
            if self.destroy {
                world.destroy_entity(self.target);
            }
            self.observed
                .borrow_mut()
                .push(world.get::<Transform>(self.target).is_some());
        }
    }

    #[test]
    fn systems_run_in_registration_order() {
        let ran = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut world = World::new();
        for tag in ["input", "movement", "attack"] {
            world.add_system(Box::new(Probe { ran: ran.clone(), tag }));
        }
        world.update(16.0);
        assert_eq!(*ran.borrow(), vec!["input", "movement", "attack"]);
    }

    #[test]
    fn destruction_is_deferred_to_frame_end() {
        let observed = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut world = World::new();
        let target = world.create_entity();
        world.add_component(target, Transform::default());

        world.add_system(Box::new(DestroyThenObserve {
            target,
            destroy: true,
            observed: observed.clone(),
        }));
        world.add_system(Box::new(DestroyThenObserve {
            target,
            destroy: false,
            observed: observed.clone(),
        }));

        world.update(16.0);
        // Both systems in frame N still saw the component.
        assert_eq!(*observed.borrow(), vec![true, true]);
        // From frame N+1, the entity is gone for every kind.
        assert!(world.get::<Transform>(target).is_none());
        assert!(!world.is_alive(target));

        world.update(16.0);
        assert_eq!(*observed.borrow(), vec![true, true, false, false]);
    }

    #[test]
    fn duplicate_destroy_is_a_noop() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Velocity::default());
        world.destroy_entity(e);
        world.destroy_entity(e);
        world.update(16.0);
        assert!(!world.is_alive(e));
        // Destroying an already-flushed entity is also harmless.
        world.destroy_entity(e);
        world.update(16.0);
    }

    #[test]
    fn cleanup_tears_down_systems_and_state() {
        let ran = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Transform::default());
        world.add_system(Box::new(Probe { ran: ran.clone(), tag: "a" }));
        world.add_system(Box::new(Probe { ran: ran.clone(), tag: "b" }));

        world.cleanup();
        assert_eq!(*ran.borrow(), vec!["cleanup", "cleanup"]);
        assert_eq!(world.system_count(), 0);
        assert_eq!(world.entity_count(), 0);
        assert!(world.get::<Transform>(e).is_none());
    }
}
