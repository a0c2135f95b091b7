//! Attack system: hitbox entity spawn and teardown.

use crate::components::{Attack, Direction, Hitbox};
use crate::ecs::{ComponentKind, System, World};
use crate::math::{Transform, Vec2};
use crate::present::PresenterHandle;

/// Spawns an independent hitbox entity when a swing starts and tears it down
/// when the swing ends.
///
/// The hitbox is its own entity with its own [`Transform`], positioned once
/// from the attacker's position at spawn time. It does not follow the
/// attacker afterwards. The attacker's [`Attack`] component links to it so a
/// second swing can never stack a second hitbox, and so teardown knows what
/// to destroy. The collision system may destroy the hitbox first (TTL
/// expiry); teardown tolerates a stale link.
pub struct AttackSystem {
    presenter: PresenterHandle,
    offset: f32,
    up_adjust: f32,
    damage: i32,
    ttl_ms: f32,
}

impl AttackSystem {
    pub fn new(
        presenter: PresenterHandle,
        offset: f32,
        up_adjust: f32,
        damage: i32,
        ttl_ms: f32,
    ) -> Self {
        Self {
            presenter,
            offset,
            up_adjust,
            damage,
            ttl_ms,
        }
    }

    fn strike_offset(&self, direction: Direction) -> Vec2 {
        match direction {
            // Upward strikes sit slightly closer to the attacker.
            Direction::Up => Vec2::new(0.0, -(self.offset - self.up_adjust)),
            Direction::Down => Vec2::new(0.0, self.offset),
            Direction::Left => Vec2::new(-self.offset, 0.0),
            Direction::Right => Vec2::new(self.offset, 0.0),
        }
    }
}

impl System for AttackSystem {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn update(&mut self, world: &mut World, _delta_ms: f32) {
        for entity in world.query(&[ComponentKind::Attack, ComponentKind::Transform]) {
            let Some(attack) = world.get::<Attack>(entity) else {
                continue;
            };
            let attacking = attack.attacking;
            let live_hitbox = attack.live_hitbox;
            let direction = attack.direction;
            let size = attack.hitbox_size;

            match (attacking, live_hitbox) {
                (true, None) => {
                    let Some(transform) = world.get::<Transform>(entity) else {
                        continue;
                    };
                    // Position snapshot at spawn; the hitbox never tracks
                    // the attacker afterwards.
                    let center = transform.translation + self.strike_offset(direction);

                    let visual = self.presenter.borrow_mut().create_visual();
                    self.presenter.borrow_mut().set_position(visual, center);

                    let hitbox = world.create_entity();
                    world.add_component(
                        hitbox,
                        Transform {
                            translation: center,
                            ..Transform::IDENTITY
                        },
                    );
                    world.add_component(
                        hitbox,
                        Hitbox::strike(size, self.damage, self.ttl_ms, entity, visual),
                    );
                    if let Some(attack) = world.get_mut::<Attack>(entity) {
                        attack.live_hitbox = Some(hitbox);
                    }
                    log::debug!("{entity} swings {direction:?}, hitbox {hitbox} at {center}");
                }
                (false, Some(hitbox)) => {
                    // TTL expiry may have destroyed it already this frame.
                    if world.is_alive(hitbox) {
                        if let Some(hb) = world.get::<Hitbox>(hitbox) {
                            self.presenter.borrow_mut().destroy_visual(hb.visual);
                        }
                        world.remove_component(hitbox, ComponentKind::Hitbox);
                        world.destroy_entity(hitbox);
                        log::debug!("{entity} swing ended, hitbox {hitbox} torn down");
                    }
                    if let Some(attack) = world.get_mut::<Attack>(entity) {
                        attack.live_hitbox = None;
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;
    use crate::present::RecordingPresenter;

    fn fixture() -> (World, Entity) {
        let mut world = World::new();
        let presenter = RecordingPresenter::new().into_handle();
        let entity = world.create_entity();
        world.add_component(entity, Transform::from_xy(400.0, 300.0));
        world.add_component(entity, Attack::new(64.0));
        world.add_system(Box::new(AttackSystem::new(
            presenter, 50.0, 15.0, 20, 500.0,
        )));
        (world, entity)
    }

    fn begin_swing(world: &mut World, entity: Entity, direction: Direction) {
        let attack = world.get_mut::<Attack>(entity).unwrap();
        attack.attacking = true;
        attack.direction = direction;
    }

    #[test]
    fn swing_spawns_an_independent_hitbox_entity() {
        let (mut world, entity) = fixture();
        begin_swing(&mut world, entity, Direction::Right);
        world.update(16.0);

        let hitbox = world.get::<Attack>(entity).unwrap().live_hitbox.unwrap();
        assert_ne!(hitbox, entity);
        let hb = world.get::<Hitbox>(hitbox).unwrap();
        assert!(hb.attack);
        assert_eq!(hb.owner, Some(entity));
        assert_eq!(
            world.get::<Transform>(hitbox).unwrap().translation,
            Vec2::new(450.0, 300.0)
        );
    }

    #[test]
    fn upward_strike_sits_closer() {
        let (mut world, entity) = fixture();
        begin_swing(&mut world, entity, Direction::Up);
        world.update(16.0);
        let hitbox = world.get::<Attack>(entity).unwrap().live_hitbox.unwrap();
        assert_eq!(
            world.get::<Transform>(hitbox).unwrap().translation,
            Vec2::new(400.0, 265.0)
        );
    }

    #[test]
    fn hitbox_does_not_follow_the_attacker() {
        let (mut world, entity) = fixture();
        begin_swing(&mut world, entity, Direction::Right);
        world.update(16.0);
        let hitbox = world.get::<Attack>(entity).unwrap().live_hitbox.unwrap();

        world.get_mut::<Transform>(entity).unwrap().translation = Vec2::new(100.0, 100.0);
        world.update(16.0);
        assert_eq!(
            world.get::<Transform>(hitbox).unwrap().translation,
            Vec2::new(450.0, 300.0)
        );
    }

    #[test]
    fn only_one_hitbox_per_swing() {
        let (mut world, entity) = fixture();
        begin_swing(&mut world, entity, Direction::Right);
        world.update(16.0);
        world.update(16.0);
        world.update(16.0);
        // Attacker plus exactly one hitbox.
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn swing_end_tears_the_hitbox_down() {
        let (mut world, entity) = fixture();
        begin_swing(&mut world, entity, Direction::Left);
        world.update(16.0);
        let hitbox = world.get::<Attack>(entity).unwrap().live_hitbox.unwrap();

        world.get_mut::<Attack>(entity).unwrap().attacking = false;
        world.update(16.0);
        assert!(!world.is_alive(hitbox));
        assert!(world.get::<Attack>(entity).unwrap().live_hitbox.is_none());
    }
}
