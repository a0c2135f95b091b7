//! Gameplay systems, in their fixed execution order:
//!
//! 1. input — drain key events, trigger attacks, run cooldowns
//! 2. movement — apply WASD velocity, clamp to the arena
//! 3. attack — spawn/tear down attack hitbox entities
//! 4. animation — advance frames, end swings
//! 5. health bar — anchor bars to their entities
//! 6. collision — age hitboxes, apply damage
//! 7. death — one-time terminal transition
//! 8. render binding — push state to the presenter
//!
//! [`Game`](crate::game::Game) registers them in this order; the
//! [`World`](crate::ecs::World) runs them in registration order every frame.

mod animation;
mod attack;
mod collision;
mod death;
mod health;
mod input;
mod movement;
mod render;

pub use animation::AnimationSystem;
pub use attack::AttackSystem;
pub use collision::CollisionSystem;
pub use death::DeathSystem;
pub use health::HealthBarSystem;
pub use input::InputSystem;
pub use movement::MovementSystem;
pub use render::RenderBindingSystem;
