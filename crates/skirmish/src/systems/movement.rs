//! Movement system: WASD velocity, arena clamping, direction memory.

use crate::components::{Attack, Direction, Facing, InputState, Velocity};
use crate::ecs::{ComponentKind, System, World};
use crate::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::math::{Transform, Vec2};

/// Applies held movement keys as velocity and integrates it into the
/// transform, clamped to the arena inset.
///
/// Attacking entities are rooted: their velocity is not even recomputed
/// while a swing runs, so they resume with whatever keys are held when it
/// ends. Movement also writes direction memory — the last pressed axis
/// becomes the next attack's direction, and horizontal keys set facing for
/// the sprite mirror.
pub struct MovementSystem {
    arena: Vec2,
    padding: f32,
}

impl MovementSystem {
    pub fn new(arena_width: f32, arena_height: f32, padding: f32) -> Self {
        Self {
            arena: Vec2::new(arena_width, arena_height),
            padding,
        }
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn update(&mut self, world: &mut World, _delta_ms: f32) {
        let movers = world.query(&[
            ComponentKind::Transform,
            ComponentKind::Velocity,
            ComponentKind::Input,
        ]);
        for entity in movers {
            if world
                .get::<Attack>(entity)
                .is_some_and(|attack| attack.attacking)
            {
                continue;
            }
            let Some(input) = world.get::<InputState>(entity) else {
                continue;
            };
            let up = input.pressed(KEY_UP);
            let down = input.pressed(KEY_DOWN);
            let left = input.pressed(KEY_LEFT);
            let right = input.pressed(KEY_RIGHT);

            let Some(velocity) = world.get_mut::<Velocity>(entity) else {
                continue;
            };
            let speed = velocity.speed;
            let mut linear = Vec2::ZERO;
            // Opposed keys cancel; the last-checked axis wins direction memory.
            if up {
                linear.y -= speed;
            }
            if down {
                linear.y += speed;
            }
            if left {
                linear.x -= speed;
            }
            if right {
                linear.x += speed;
            }
            velocity.linear = linear;

            if let Some(attack) = world.get_mut::<Attack>(entity) {
                if up {
                    attack.direction = Direction::Up;
                }
                if down {
                    attack.direction = Direction::Down;
                }
                if left {
                    attack.direction = Direction::Left;
                    attack.facing = Facing::Left;
                }
                if right {
                    attack.direction = Direction::Right;
                    attack.facing = Facing::Right;
                }
            }

            if linear != Vec2::ZERO {
                let min = Vec2::splat(self.padding);
                let max = self.arena - Vec2::splat(self.padding);
                let Some(transform) = world.get_mut::<Transform>(entity) else {
                    continue;
                };
                transform.translation = (transform.translation + linear).clamp(min, max);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;

    fn fixture(x: f32, y: f32) -> (World, Entity) {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Transform::from_xy(x, y));
        world.add_component(entity, Velocity::with_speed(3.0));
        world.add_component(entity, InputState::new());
        world.add_component(entity, Attack::new(64.0));
        world.add_system(Box::new(MovementSystem::new(800.0, 600.0, 30.0)));
        (world, entity)
    }

    fn press(world: &mut World, entity: Entity, keys: &[&str]) {
        let input = world.get_mut::<InputState>(entity).unwrap();
        for key in keys {
            input.set(key, true);
        }
    }

    #[test]
    fn diagonal_moves_full_speed_on_both_axes() {
        let (mut world, entity) = fixture(400.0, 300.0);
        press(&mut world, entity, &["w", "d"]);
        world.update(16.0);
        let pos = world.get::<Transform>(entity).unwrap().translation;
        assert_eq!(pos, Vec2::new(403.0, 297.0));
    }

    #[test]
    fn clamped_to_arena_inset() {
        let (mut world, entity) = fixture(31.0, 31.0);
        press(&mut world, entity, &["a", "w"]);
        for _ in 0..10 {
            world.update(16.0);
        }
        let pos = world.get::<Transform>(entity).unwrap().translation;
        assert_eq!(pos, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn attacking_entities_are_rooted() {
        let (mut world, entity) = fixture(400.0, 300.0);
        press(&mut world, entity, &["d"]);
        world.get_mut::<Attack>(entity).unwrap().attacking = true;
        world.update(16.0);
        let pos = world.get::<Transform>(entity).unwrap().translation;
        assert_eq!(pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn movement_sets_next_attack_direction_and_facing() {
        let (mut world, entity) = fixture(400.0, 300.0);
        press(&mut world, entity, &["a"]);
        world.update(16.0);
        {
            let attack = world.get::<Attack>(entity).unwrap();
            assert_eq!(attack.direction, Direction::Left);
            assert_eq!(attack.facing, Facing::Left);
        }

        // Releasing the key leaves direction memory in place.
        world.get_mut::<InputState>(entity).unwrap().set("a", false);
        press(&mut world, entity, &["w"]);
        world.update(16.0);
        let attack = world.get::<Attack>(entity).unwrap();
        assert_eq!(attack.direction, Direction::Up);
        // Facing only tracks horizontal keys.
        assert_eq!(attack.facing, Facing::Left);
    }

    #[test]
    fn opposed_keys_cancel() {
        let (mut world, entity) = fixture(400.0, 300.0);
        press(&mut world, entity, &["a", "d"]);
        world.update(16.0);
        let pos = world.get::<Transform>(entity).unwrap().translation;
        assert_eq!(pos, Vec2::new(400.0, 300.0));
        assert!(!world.get::<Velocity>(entity).unwrap().is_moving());
    }
}
