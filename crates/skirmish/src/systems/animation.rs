//! Animation system: frame advancement and swing completion.

use crate::components::{
    Animation, AnimationSet, Attack, Direction, FrameRef, Health, Sprite, Velocity,
};
use crate::ecs::{ComponentKind, System, World};

/// Advances animation frames on a fixed per-frame clock and ends swings when
/// the attack cycle completes.
///
/// This is the primary end-of-attack signal: when the attack frame index
/// reaches the last frame of the cycle, `attacking` is cleared and the
/// attack system tears the hitbox down next frame. Idle/walking sets loop
/// with a modulo; attack sets play through once.
pub struct AnimationSystem {
    attack_frame_count: usize,
}

impl AnimationSystem {
    pub fn new(attack_frame_count: usize) -> Self {
        Self { attack_frame_count }
    }
}

fn attack_set(direction: Direction) -> AnimationSet {
    match direction {
        Direction::Up => AnimationSet::AttackUp,
        Direction::Down => AnimationSet::AttackDown,
        // Horizontal attacks share one set; the render binding mirrors it.
        Direction::Left | Direction::Right => AnimationSet::AttackHorizontal,
    }
}

impl System for AnimationSystem {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn update(&mut self, world: &mut World, delta_ms: f32) {
        for entity in world.query(&[ComponentKind::Animation, ComponentKind::Sprite]) {
            // Dead entities freeze on their last frame.
            if world.get::<Health>(entity).is_some_and(Health::is_dead) {
                continue;
            }
            let moving = world
                .get::<Velocity>(entity)
                .is_some_and(Velocity::is_moving);
            let swing = world
                .get::<Attack>(entity)
                .filter(|attack| attack.attacking)
                .map(|attack| attack.direction);

            let Some(anim) = world.get_mut::<Animation>(entity) else {
                continue;
            };
            if !anim.playing {
                continue;
            }
            anim.elapsed_ms += delta_ms;
            if anim.elapsed_ms < anim.frame_duration_ms {
                continue;
            }
            anim.elapsed_ms = 0.0;

            if let Some(direction) = swing {
                anim.attack_frame += 1;
                let index = anim.attack_frame;
                let finished = index >= self.attack_frame_count.saturating_sub(1);
                if finished {
                    anim.attack_frame = 0;
                }

                let set = attack_set(direction);
                if let Some(sprite) = world.get_mut::<Sprite>(entity) {
                    let len = sprite.frames.len(set);
                    if len > 0 {
                        sprite.selected = FrameRef {
                            set,
                            index: index.min(len - 1),
                        };
                    }
                }
                if finished
                    && let Some(attack) = world.get_mut::<Attack>(entity)
                {
                    attack.attacking = false;
                }
            } else {
                anim.attack_frame = 0;
                let frame = anim.frame + 1;
                let set = if moving {
                    AnimationSet::Walking
                } else {
                    AnimationSet::Idle
                };
                if let Some(sprite) = world.get_mut::<Sprite>(entity) {
                    let len = sprite.frames.len(set);
                    if len > 0 {
                        let index = frame % len;
                        sprite.selected = FrameRef { set, index };
                        if let Some(anim) = world.get_mut::<Animation>(entity) {
                            anim.frame = index;
                        }
                    }
                }
            }
        }
    }
}
