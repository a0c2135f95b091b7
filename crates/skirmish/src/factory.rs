//! Combatant construction.

use crate::components::{
    ActorKind, Animation, Attack, FrameSets, Health, Hitbox, InputState, Sprite, Velocity,
};
use crate::config::CombatConfig;
use crate::ecs::{Entity, World};
use crate::math::{Transform, Vec2};
use crate::present::{PresenterHandle, VisualId};

/// Frame counts for the raider's sheet.
const RAIDER_FRAMES: FrameSets = FrameSets {
    idle: 7,
    walking: 6,
    attack_up: 6,
    attack_down: 6,
    attack_horizontal: 6,
};

/// The keep is a static structure: one frame everywhere.
const KEEP_FRAMES: FrameSets = FrameSets {
    idle: 1,
    walking: 1,
    attack_up: 1,
    attack_down: 1,
    attack_horizontal: 1,
};

/// Spawn the mobile, player-controlled combatant at a position.
pub fn spawn_raider(
    world: &mut World,
    presenter: &PresenterHandle,
    config: &CombatConfig,
    position: Vec2,
) -> Entity {
    let (visual, bar) = {
        let mut p = presenter.borrow_mut();
        (p.create_visual(), p.create_visual())
    };

    let entity = world.create_entity();
    world.add_component(
        entity,
        Transform {
            translation: position,
            ..Transform::IDENTITY
        },
    );
    world.add_component(entity, Velocity::with_speed(config.move_speed));
    world.add_component(entity, InputState::new());
    world.add_component(entity, Sprite::new(RAIDER_FRAMES, visual));
    world.add_component(entity, Animation::new(config.frame_duration_ms));
    world.add_component(entity, Attack::new(config.hitbox_size));
    world.add_component(entity, Hitbox::body(60.0, 80.0, VisualId::NONE));
    world.add_component(
        entity,
        Health::new(config.raider_health, ActorKind::Raider).with_bar(bar, Vec2::new(0.0, -50.0)),
    );
    log::debug!("spawned raider {entity} at {position}");
    entity
}

/// Spawn the stationary structure at a position.
pub fn spawn_keep(
    world: &mut World,
    presenter: &PresenterHandle,
    config: &CombatConfig,
    position: Vec2,
) -> Entity {
    let (visual, bar) = {
        let mut p = presenter.borrow_mut();
        (p.create_visual(), p.create_visual())
    };

    let entity = world.create_entity();
    world.add_component(
        entity,
        Transform {
            translation: position,
            ..Transform::IDENTITY
        },
    );
    world.add_component(entity, Sprite::new(KEEP_FRAMES, visual));
    world.add_component(entity, Hitbox::body(280.0, 190.0, VisualId::NONE));
    world.add_component(
        entity,
        Health::new(config.keep_health, ActorKind::Keep).with_bar(bar, Vec2::new(0.0, -100.0)),
    );
    log::debug!("spawned keep {entity} at {position}");
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::ComponentKind;
    use crate::present::RecordingPresenter;

    #[test]
    fn raider_carries_the_full_component_set() {
        let mut world = World::new();
        let presenter: PresenterHandle = RecordingPresenter::new().into_handle();
        let config = CombatConfig::default();
        let raider = spawn_raider(&mut world, &presenter, &config, Vec2::new(400.0, 300.0));

        for kind in [
            ComponentKind::Transform,
            ComponentKind::Velocity,
            ComponentKind::Input,
            ComponentKind::Sprite,
            ComponentKind::Animation,
            ComponentKind::Attack,
            ComponentKind::Hitbox,
            ComponentKind::Health,
        ] {
            assert!(world.has(raider, kind), "raider missing {kind:?}");
        }
        let health = world.get::<Health>(raider).unwrap();
        assert_eq!(health.current(), config.raider_health);
        assert_eq!(health.kind, ActorKind::Raider);
        // The body hitbox takes damage, it doesn't deal it.
        assert!(!world.get::<Hitbox>(raider).unwrap().attack);
    }

    #[test]
    fn keep_is_stationary_and_uncontrolled() {
        let mut world = World::new();
        let presenter: PresenterHandle = RecordingPresenter::new().into_handle();
        let config = CombatConfig::default();
        let keep = spawn_keep(&mut world, &presenter, &config, Vec2::new(600.0, 300.0));

        assert!(!world.has(keep, ComponentKind::Velocity));
        assert!(!world.has(keep, ComponentKind::Input));
        assert!(!world.has(keep, ComponentKind::Attack));
        assert_eq!(
            world.get::<Health>(keep).unwrap().current(),
            config.keep_health
        );
    }
}
