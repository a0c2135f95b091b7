//! Presentation collaborator seam.
//!
//! Rendering, compositing, and the scene graph are external to this core.
//! Systems talk to them through the [`Presenter`] trait using opaque
//! [`VisualId`] handles: the render binding pushes position, mirror flag,
//! and the selected animation frame; the health system repositions bars; the
//! death system swaps in a terminal visual. The presentation layer never
//! mutates core state — it is read-only with respect to the world.
//!
//! [`RecordingPresenter`] is the in-tree implementation used by tests and
//! headless drivers: it allocates ids and records every call.

use crate::components::AnimationSet;
use crate::math::Vec2;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Opaque handle to a node owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(pub u64);

impl VisualId {
    /// The null handle: presentation calls against it are ignored.
    pub const NONE: VisualId = VisualId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// The external presentation layer, as seen from the simulation core.
pub trait Presenter {
    /// Allocate a fresh visual node.
    fn create_visual(&mut self) -> VisualId;

    /// Release a visual node (hitbox overlays when their hitbox dies).
    fn destroy_visual(&mut self, id: VisualId);

    /// Move a visual to a world position.
    fn set_position(&mut self, id: VisualId, position: Vec2);

    /// Mirror a visual horizontally (facing left).
    fn set_flip_x(&mut self, id: VisualId, flip: bool);

    /// Select the sprite frame to display.
    fn set_frame(&mut self, id: VisualId, set: AnimationSet, index: usize);

    /// Replace a visual's content with another (terminal "corpse" swap).
    fn swap_visual(&mut self, target: VisualId, replacement: VisualId);
}

/// Shared, single-threaded handle to the presenter.
pub type PresenterHandle = Rc<RefCell<dyn Presenter>>;

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Create(VisualId),
    Destroy(VisualId),
    Position(VisualId, Vec2),
    FlipX(VisualId, bool),
    Frame(VisualId, AnimationSet, usize),
    Swap(VisualId, VisualId),
}

/// Presenter double that records calls and tracks last-known positions.
#[derive(Default)]
pub struct RecordingPresenter {
    next_id: u64,
    pub calls: Vec<PresenterCall>,
    positions: HashMap<VisualId, Vec2>,
    destroyed: Vec<VisualId>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap into the handle type systems take.
    pub fn into_handle(self) -> Rc<RefCell<RecordingPresenter>> {
        Rc::new(RefCell::new(self))
    }

    pub fn position_of(&self, id: VisualId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }

    pub fn was_destroyed(&self, id: VisualId) -> bool {
        self.destroyed.contains(&id)
    }

    pub fn swaps(&self) -> Vec<(VisualId, VisualId)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Swap(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn create_visual(&mut self) -> VisualId {
        self.next_id += 1;
        let id = VisualId(self.next_id);
        self.calls.push(PresenterCall::Create(id));
        id
    }

    fn destroy_visual(&mut self, id: VisualId) {
        if id.is_none() {
            return;
        }
        self.calls.push(PresenterCall::Destroy(id));
        self.destroyed.push(id);
        self.positions.remove(&id);
    }

    fn set_position(&mut self, id: VisualId, position: Vec2) {
        if id.is_none() {
            return;
        }
        self.calls.push(PresenterCall::Position(id, position));
        self.positions.insert(id, position);
    }

    fn set_flip_x(&mut self, id: VisualId, flip: bool) {
        if id.is_none() {
            return;
        }
        self.calls.push(PresenterCall::FlipX(id, flip));
    }

    fn set_frame(&mut self, id: VisualId, set: AnimationSet, index: usize) {
        if id.is_none() {
            return;
        }
        self.calls.push(PresenterCall::Frame(id, set, index));
    }

    fn swap_visual(&mut self, target: VisualId, replacement: VisualId) {
        if target.is_none() {
            return;
        }
        self.calls.push(PresenterCall::Swap(target, replacement));
    }
}
