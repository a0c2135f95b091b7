//! # System — Per-Frame Logic Units
//!
//! A system is a logic unit run once per frame over entities matching a
//! component query. Systems are registered on the [`World`](super::world::World)
//! at setup; their registration order is their execution order, every frame,
//! with no reordering at runtime. Cross-system ordering is the only
//! concurrency-relevant guarantee in this single-threaded core — it stands in
//! for locking (collision must see the hitbox attack spawned, death must see
//! the health collision wrote).

use super::world::World;

/// A logic unit run once per frame by [`World::update`].
pub trait System {
    /// Short name for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Called once when the system is added to the world.
    fn init(&mut self, _world: &mut World) {}

    /// Called every frame in registration order. `delta_ms` is the time since
    /// the previous frame, in milliseconds.
    fn update(&mut self, world: &mut World, delta_ms: f32);

    /// Called once by [`World::cleanup`], in registration order.
    fn cleanup(&mut self, _world: &mut World) {}
}
