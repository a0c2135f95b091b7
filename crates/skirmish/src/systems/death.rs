//! Death system: one-time terminal transition for dead entities.

use crate::components::{ActorKind, Health, Sprite};
use crate::ecs::{ComponentKind, Entity, System, World};
use crate::present::{PresenterHandle, VisualId};
use std::collections::{HashMap, HashSet};

/// Watches health and, exactly once per entity, performs the death
/// transition: swap the sprite's visual for the terminal one registered for
/// its actor kind, then strip the components that would keep it acting
/// (animation, attack, input).
///
/// The dead entity itself stays in the world — a destroyed keep remains a
/// visible ruin. The handled set makes the transition one-shot even though
/// the entity keeps matching the query every frame.
pub struct DeathSystem {
    presenter: PresenterHandle,
    terminal: HashMap<ActorKind, VisualId>,
    handled: HashSet<Entity>,
}

impl DeathSystem {
    pub fn new(presenter: PresenterHandle) -> Self {
        Self {
            presenter,
            terminal: HashMap::new(),
            handled: HashSet::new(),
        }
    }

    /// Register the visual swapped in when an entity of this kind dies.
    pub fn register_terminal(&mut self, kind: ActorKind, visual: VisualId) {
        self.terminal.insert(kind, visual);
    }
}

impl System for DeathSystem {
    fn name(&self) -> &'static str {
        "death"
    }

    fn update(&mut self, world: &mut World, _delta_ms: f32) {
        self.handled.retain(|&e| world.is_alive(e));

        for entity in world.query(&[ComponentKind::Health]) {
            if self.handled.contains(&entity) {
                continue;
            }
            let Some(health) = world.get::<Health>(entity) else {
                continue;
            };
            if !health.is_dead() {
                continue;
            }
            let kind = health.kind;

            if let Some(&terminal) = self.terminal.get(&kind)
                && let Some(sprite) = world.get::<Sprite>(entity)
            {
                self.presenter
                    .borrow_mut()
                    .swap_visual(sprite.visual, terminal);
            }
            world.remove_component(entity, ComponentKind::Animation);
            world.remove_component(entity, ComponentKind::Attack);
            world.remove_component(entity, ComponentKind::Input);

            self.handled.insert(entity);
            log::info!("{kind:?} {entity} destroyed");
        }
    }
}
