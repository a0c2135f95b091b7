//! Top-level game wiring: world construction, system order, frame stepping.

use crate::components::ActorKind;
use crate::config::CombatConfig;
use crate::ecs::{Entity, World};
use crate::factory;
use crate::input::KeyEvents;
use crate::math::Vec2;
use crate::present::PresenterHandle;
use crate::systems::{
    AnimationSystem, AttackSystem, CollisionSystem, DeathSystem, HealthBarSystem, InputSystem,
    MovementSystem, RenderBindingSystem,
};

/// Owns the world and drives it frame by frame.
///
/// The driver constructs a `Game` with its presenter and key-event queue,
/// then calls [`update`](Game::update) once per frame with the elapsed
/// milliseconds. System order is fixed here and never changes afterwards.
pub struct Game {
    world: World,
    config: CombatConfig,
    raider: Entity,
    keep: Entity,
    paused: bool,
}

impl Game {
    pub fn new(config: CombatConfig, presenter: PresenterHandle, events: KeyEvents) -> Self {
        let mut world = World::new();

        let mut death = DeathSystem::new(presenter.clone());
        {
            let mut p = presenter.borrow_mut();
            death.register_terminal(ActorKind::Raider, p.create_visual());
            death.register_terminal(ActorKind::Keep, p.create_visual());
        }

        world.add_system(Box::new(InputSystem::new(
            events,
            config.attack_cooldown_ms,
            config.swing_timeout_ms,
        )));
        world.add_system(Box::new(MovementSystem::new(
            config.arena_width,
            config.arena_height,
            config.arena_padding,
        )));
        world.add_system(Box::new(AttackSystem::new(
            presenter.clone(),
            config.hitbox_offset,
            config.hitbox_up_adjust,
            config.attack_damage,
            config.attack_ttl_ms,
        )));
        world.add_system(Box::new(AnimationSystem::new(config.attack_frame_count)));
        world.add_system(Box::new(HealthBarSystem::new(presenter.clone())));
        world.add_system(Box::new(CollisionSystem::new(presenter.clone())));
        world.add_system(Box::new(death));
        world.add_system(Box::new(RenderBindingSystem::new(presenter.clone())));

        let raider = factory::spawn_raider(
            &mut world,
            &presenter,
            &config,
            Vec2::new(config.arena_width * 0.25, config.arena_height * 0.5),
        );
        let keep = factory::spawn_keep(
            &mut world,
            &presenter,
            &config,
            Vec2::new(config.arena_width * 0.75, config.arena_height * 0.5),
        );

        log::info!(
            "skirmish ready: raider {raider} vs keep {keep}, arena {}x{}",
            config.arena_width,
            config.arena_height
        );
        Self {
            world,
            config,
            raider,
            keep,
            paused: false,
        }
    }

    /// Advance one frame. A paused game ignores time entirely.
    pub fn update(&mut self, delta_ms: f32) {
        if self.paused {
            return;
        }
        self.world.update(delta_ms);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn raider(&self) -> Entity {
        self.raider
    }

    pub fn keep(&self) -> Entity {
        self.keep
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Tear everything down. The game is unusable afterwards.
    pub fn cleanup(&mut self) {
        self.world.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Transform;
    use crate::present::RecordingPresenter;

    fn game() -> Game {
        let presenter: PresenterHandle = RecordingPresenter::new().into_handle();
        Game::new(CombatConfig::default(), presenter, KeyEvents::new())
    }

    #[test]
    fn wiring_registers_all_systems_and_both_combatants() {
        let game = game();
        assert_eq!(game.world().system_count(), 8);
        assert_eq!(game.world().entity_count(), 2);
        assert!(game.world().is_alive(game.raider()));
        assert!(game.world().is_alive(game.keep()));
    }

    #[test]
    fn paused_game_ignores_time() {
        let mut game = game();
        let raider = game.raider();
        let before = game.world().get::<Transform>(raider).unwrap().translation;

        game.pause();
        game.world_mut()
            .get_mut::<crate::components::InputState>(raider)
            .unwrap()
            .set("d", true);
        game.update(1000.0);
        assert_eq!(
            game.world().get::<Transform>(raider).unwrap().translation,
            before
        );

        game.resume();
        game.update(16.0);
        assert_ne!(
            game.world().get::<Transform>(raider).unwrap().translation,
            before
        );
    }

    #[test]
    fn cleanup_empties_the_world() {
        let mut game = game();
        game.cleanup();
        assert_eq!(game.world().entity_count(), 0);
        assert_eq!(game.world().system_count(), 0);
    }
}
