//! Collision system: attack-hitbox TTL and damage application.

use crate::components::{Attack, Health, Hitbox};
use crate::ecs::{ComponentKind, Entity, System, World};
use crate::math::{Aabb, Transform, Vec2};
use crate::present::PresenterHandle;

/// Two passes over every hitbox carrier, each frame.
///
/// Pass 1 ages attack hitboxes: TTL is decremented by the frame delta and an
/// expired hitbox is fully retired — overlay destroyed, component removed,
/// entity queued for destruction, and the owner's live-hitbox link cleared.
///
/// Pass 2 tests every live attack hitbox against every body hitbox with a
/// strict AABB overlap. An attack hitbox deals its damage **at most once
/// over its whole lifetime**, however many frames it overlaps for; each
/// unordered (striker, target) pair is also processed at most once per
/// frame. The owner's own body is skipped, since the strike box usually
/// overlaps the body that swung it.
pub struct CollisionSystem {
    presenter: PresenterHandle,
    /// Attack hitboxes that have already dealt their damage.
    dealt: Vec<Entity>,
}

impl CollisionSystem {
    pub fn new(presenter: PresenterHandle) -> Self {
        Self {
            presenter,
            dealt: Vec::new(),
        }
    }

    fn retire(&mut self, world: &mut World, hitbox: Entity) {
        let Some(hb) = world.get::<Hitbox>(hitbox) else {
            return;
        };
        let visual = hb.visual;
        let owner = hb.owner;
        self.presenter.borrow_mut().destroy_visual(visual);
        world.remove_component(hitbox, ComponentKind::Hitbox);
        world.destroy_entity(hitbox);
        if let Some(owner) = owner
            && let Some(attack) = world.get_mut::<Attack>(owner)
            && attack.live_hitbox == Some(hitbox)
        {
            attack.live_hitbox = None;
        }
        self.dealt.retain(|&e| e != hitbox);
        log::debug!("attack hitbox {hitbox} expired");
    }
}

fn world_box(world: &World, entity: Entity, hb: &Hitbox) -> Option<Aabb> {
    let transform = world.get::<Transform>(entity)?;
    Some(Aabb::from_center_size(
        transform.translation + hb.offset,
        Vec2::new(hb.width, hb.height),
    ))
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn update(&mut self, world: &mut World, delta_ms: f32) {
        self.dealt.retain(|&e| world.is_alive(e));

        let carriers = world.query(&[ComponentKind::Hitbox, ComponentKind::Transform]);

        // Pass 1: age and retire attack hitboxes.
        let mut expired = Vec::new();
        for &entity in &carriers {
            let Some(hb) = world.get_mut::<Hitbox>(entity) else {
                continue;
            };
            if !hb.attack {
                continue;
            }
            hb.ttl_ms -= delta_ms;
            if hb.ttl_ms <= 0.0 {
                self.retire(world, entity);
                expired.push(entity);
            }
        }

        // Pass 2: overlap tests. Each unordered pair once per frame.
        let mut processed: Vec<(Entity, Entity)> = Vec::new();
        for &striker in &carriers {
            if expired.contains(&striker) || self.dealt.contains(&striker) {
                continue;
            }
            let Some(hb) = world.get::<Hitbox>(striker) else {
                continue;
            };
            if !hb.attack {
                continue;
            }
            let damage = hb.damage;
            let owner = hb.owner;
            let Some(strike_box) = world_box(world, striker, hb) else {
                continue;
            };

            for &target in &carriers {
                if target == striker || expired.contains(&target) || Some(target) == owner {
                    continue;
                }
                let pair = (striker.min(target), striker.max(target));
                if processed.contains(&pair) {
                    continue;
                }
                let Some(target_hb) = world.get::<Hitbox>(target) else {
                    continue;
                };
                if target_hb.attack {
                    continue;
                }
                let Some(body_box) = world_box(world, target, target_hb) else {
                    continue;
                };
                if !strike_box.overlaps(&body_box) {
                    continue;
                }
                processed.push(pair);

                let Some(health) = world.get_mut::<Health>(target) else {
                    continue;
                };
                if health.is_dead() {
                    continue;
                }
                let remaining = health.damage(damage);
                self.dealt.push(striker);
                log::info!("hitbox {striker} hit {target} for {damage}, {remaining} hp left");
                break;
            }
        }
    }
}
