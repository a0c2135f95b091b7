//! Input system: key-event draining, attack triggering, cooldowns.

use crate::components::{Attack, Health, InputState};
use crate::ecs::{ComponentKind, Entity, System, World};
use crate::input::{KEY_ATTACK, KeyEvent, KeyEvents};
use std::collections::HashMap;

/// Translates raw key events into per-entity input state and attack-trigger
/// edges.
///
/// Two timers run per entity, both system-local and keyed by entity id:
///
/// - a cooldown (default 600 ms) enforcing the minimum interval between
///   attack triggers;
/// - a swing timer (default 500 ms) that force-clears `attacking` if the
///   animation system hasn't. This is a safety valve against animation
///   desync, not the primary end-of-attack signal — the animation system
///   ends a swing when the attack frame cycle completes.
pub struct InputSystem {
    events: KeyEvents,
    cooldown_ms: f32,
    swing_timeout_ms: f32,
    cooldowns: HashMap<Entity, f32>,
    swing_timers: HashMap<Entity, f32>,
}

impl InputSystem {
    pub fn new(events: KeyEvents, cooldown_ms: f32, swing_timeout_ms: f32) -> Self {
        Self {
            events,
            cooldown_ms,
            swing_timeout_ms,
            cooldowns: HashMap::new(),
            swing_timers: HashMap::new(),
        }
    }
}

impl System for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn update(&mut self, world: &mut World, delta_ms: f32) {
        // Timer maps must not leak entries for destroyed entities.
        self.cooldowns.retain(|e, _| world.is_alive(*e));
        self.swing_timers.retain(|e, _| world.is_alive(*e));

        // Mirror the raw event stream into every entity's key-state map.
        let events = self.events.drain();
        if !events.is_empty() {
            let carriers = world.query(&[ComponentKind::Input]);
            for event in &events {
                for &entity in &carriers {
                    let Some(input) = world.get_mut::<InputState>(entity) else {
                        continue;
                    };
                    match event {
                        KeyEvent::Down(key) => input.set(key, true),
                        KeyEvent::Up(key) => input.set(key, false),
                    }
                }
            }
        }

        // Safety valve: a swing that outlives its timer is force-ended.
        let mut stalled = Vec::new();
        for (&entity, timer) in self.swing_timers.iter_mut() {
            *timer -= delta_ms;
            if *timer <= 0.0 {
                stalled.push(entity);
            }
        }
        for entity in stalled {
            self.swing_timers.remove(&entity);
            if let Some(attack) = world.get_mut::<Attack>(entity)
                && attack.attacking
            {
                log::debug!("swing timer expired, force-ending attack for {entity}");
                attack.attacking = false;
            }
        }

        // Attack-trigger edges.
        for entity in world.query(&[ComponentKind::Input, ComponentKind::Attack]) {
            let cooldown = self.cooldowns.entry(entity).or_insert(0.0);
            *cooldown = (*cooldown - delta_ms).max(0.0);
            let ready = *cooldown == 0.0;

            if world.get::<Health>(entity).is_some_and(Health::is_dead) {
                continue;
            }
            let held = world
                .get::<InputState>(entity)
                .is_some_and(|input| input.pressed(KEY_ATTACK));
            if !held || !ready {
                continue;
            }
            let Some(attack) = world.get_mut::<Attack>(entity) else {
                continue;
            };
            if attack.attacking {
                continue;
            }
            attack.attacking = true;
            self.cooldowns.insert(entity, self.cooldown_ms);
            self.swing_timers.insert(entity, self.swing_timeout_ms);
        }
    }
}
