//! Convenience re-exports — `use skirmish::prelude::*` for the common items.

pub use crate::components::{
    ActorKind, Animation, AnimationSet, Attack, Direction, Facing, FrameRef, FrameSets, Health,
    Hitbox, InputState, Sprite, TTL_PERMANENT, Velocity,
};
pub use crate::config::{CombatConfig, ConfigError};
pub use crate::ecs::{Component, ComponentKind, Entity, System, World};
pub use crate::factory::{spawn_keep, spawn_raider};
pub use crate::game::Game;
pub use crate::input::{KEY_ATTACK, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP, KeyEvent, KeyEvents};
pub use crate::math::{Aabb, Transform, Vec2};
pub use crate::present::{Presenter, PresenterHandle, RecordingPresenter, VisualId};
pub use crate::systems::{
    AnimationSystem, AttackSystem, CollisionSystem, DeathSystem, HealthBarSystem, InputSystem,
    MovementSystem, RenderBindingSystem,
};
