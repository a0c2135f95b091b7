//! Health-bar binding: keeps each bar visual anchored above its entity.

use crate::components::Health;
use crate::ecs::{ComponentKind, System, World};
use crate::math::Transform;
use crate::present::PresenterHandle;

pub struct HealthBarSystem {
    presenter: PresenterHandle,
}

impl HealthBarSystem {
    pub fn new(presenter: PresenterHandle) -> Self {
        Self { presenter }
    }
}

impl System for HealthBarSystem {
    fn name(&self) -> &'static str {
        "health_bar"
    }

    fn update(&mut self, world: &mut World, _delta_ms: f32) {
        for entity in world.query(&[ComponentKind::Health, ComponentKind::Transform]) {
            let Some(health) = world.get::<Health>(entity) else {
                continue;
            };
            let Some(transform) = world.get::<Transform>(entity) else {
                continue;
            };
            self.presenter
                .borrow_mut()
                .set_position(health.bar, transform.translation + health.bar_offset);
        }
    }
}
