//! Render binding: pushes world state to the presentation layer.

use crate::components::{Attack, Facing, Sprite};
use crate::ecs::{ComponentKind, System, World};
use crate::math::Transform;
use crate::present::PresenterHandle;

/// Last system in the frame: mirrors each sprite's position, horizontal
/// flip, and selected frame out to the presenter. Pure binding — it mutates
/// nothing in the world except the sprite's cached flip flag.
pub struct RenderBindingSystem {
    presenter: PresenterHandle,
}

impl RenderBindingSystem {
    pub fn new(presenter: PresenterHandle) -> Self {
        Self { presenter }
    }
}

impl System for RenderBindingSystem {
    fn name(&self) -> &'static str {
        "render_binding"
    }

    fn update(&mut self, world: &mut World, _delta_ms: f32) {
        for entity in world.query(&[ComponentKind::Transform, ComponentKind::Sprite]) {
            let flip = world
                .get::<Attack>(entity)
                .map(|attack| attack.facing == Facing::Left);
            let Some(translation) = world
                .get::<Transform>(entity)
                .map(|transform| transform.translation)
            else {
                continue;
            };
            let Some(sprite) = world.get_mut::<Sprite>(entity) else {
                continue;
            };
            if let Some(flip) = flip {
                sprite.flip_x = flip;
            }
            let (visual, flip_x, selected) = (sprite.visual, sprite.flip_x, sprite.selected);

            let mut presenter = self.presenter.borrow_mut();
            presenter.set_position(visual, translation);
            presenter.set_flip_x(visual, flip_x);
            presenter.set_frame(visual, selected.set, selected.index);
        }
    }
}
