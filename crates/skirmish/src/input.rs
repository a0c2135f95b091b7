//! Raw key-event stream from the external input collaborator.
//!
//! The driver owns the real event source (window, terminal, test script) and
//! pushes key-down/key-up events into a shared [`KeyEvents`] queue. The input
//! system drains the queue once per frame and mirrors it into every entity's
//! [`InputState`](crate::components::InputState), so movement and attack
//! logic read key state without re-polling anything.
//!
//! Key names are lowercased on entry. Space is the reserved attack trigger;
//! w/a/s/d are the reserved movement keys.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// The attack trigger key.
pub const KEY_ATTACK: &str = " ";
pub const KEY_UP: &str = "w";
pub const KEY_LEFT: &str = "a";
pub const KEY_DOWN: &str = "s";
pub const KEY_RIGHT: &str = "d";

/// A single raw key transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Down(String),
    Up(String),
}

/// Shared handle to the pending key-event queue.
///
/// Cloning is cheap and both clones feed the same queue. The core is
/// single-threaded and frame-stepped, so an `Rc<RefCell<…>>` is the whole
/// synchronization story.
#[derive(Clone, Default)]
pub struct KeyEvents {
    queue: Rc<RefCell<VecDeque<KeyEvent>>>,
}

impl KeyEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Called by the driver on key-down.
    pub fn key_down(&self, key: &str) {
        self.queue
            .borrow_mut()
            .push_back(KeyEvent::Down(key.to_lowercase()));
    }

    /// Record a key release. Called by the driver on key-up.
    pub fn key_up(&self, key: &str) {
        self.queue
            .borrow_mut()
            .push_back(KeyEvent::Up(key.to_lowercase()));
    }

    /// Drain all pending events in arrival order. Called once per frame by
    /// the input system.
    pub fn drain(&self) -> Vec<KeyEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_drain_in_arrival_order() {
        let events = KeyEvents::new();
        events.key_down("W");
        events.key_down(KEY_ATTACK);
        events.key_up("w");

        let drained = events.drain();
        assert_eq!(
            drained,
            vec![
                KeyEvent::Down("w".into()),
                KeyEvent::Down(" ".into()),
                KeyEvent::Up("w".into()),
            ]
        );
        assert!(events.drain().is_empty());
    }

    #[test]
    fn clones_share_one_queue() {
        let events = KeyEvents::new();
        let clone = events.clone();
        clone.key_down("d");
        assert_eq!(events.drain().len(), 1);
    }
}
