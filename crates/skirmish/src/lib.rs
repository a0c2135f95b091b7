//! # Skirmish — Real-Time Melee Combat Core
//!
//! A frame-stepped combat simulation on a custom ECS: one mobile,
//! player-controlled raider versus one stationary keep in a clamped arena.
//! Rendering and input sources are external collaborators behind the
//! [`Presenter`](present::Presenter) trait and the
//! [`KeyEvents`](input::KeyEvents) queue.
//!
//! Start with `use skirmish::prelude::*` and build a [`Game`](game::Game).

pub mod components;
pub mod config;
pub mod ecs;
pub mod factory;
pub mod game;
pub mod input;
pub mod math;
pub mod prelude;
pub mod present;
pub mod systems;
