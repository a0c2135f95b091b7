//! # Minimal Kind-Keyed ECS
//!
//! A deliberately simple Entity Component System sized for a handful of
//! combatants. Components are stored per kind in insertion-ordered columns;
//! systems run in a fixed, caller-declared order; entity destruction is
//! deferred to the end of the frame.
//!
//! ## Module overview
//!
//! - [`entity`] — monotonic entity ids (never reused)
//! - [`component`] — [`ComponentKind`] tags and the tagged [`Component`] enum
//! - [`store`] — (kind, entity) → owning slot, insertion-ordered queries
//! - [`world`] — registry + store + schedule + destroy queue
//! - [`system`] — the per-frame [`System`] trait

pub mod component;
pub mod entity;
pub mod store;
pub mod system;
pub mod world;

pub use component::{Component, ComponentKind, ComponentValue};
pub use entity::{Entity, EntityRegistry};
pub use store::ComponentStore;
pub use system::System;
pub use world::World;
