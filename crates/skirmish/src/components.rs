//! Gameplay component data.
//!
//! Components are plain data records with no behavior beyond small accessors
//! (health clamping lives here because the clamp is a data invariant, not
//! system logic). Each type is registered with the ECS in
//! [`ecs::component`](crate::ecs::component).

use crate::ecs::Entity;
use crate::math::Vec2;
use crate::present::VisualId;
use std::collections::HashMap;

/// The four attack/movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

/// Horizontal facing, used by the render binding to mirror the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Entity-type tag carried by [`Health`], used to pick a terminal visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// The mobile, player-controlled actor.
    Raider,
    /// The stationary structure.
    Keep,
}

/// Movement state: current linear velocity plus the scalar speed applied
/// while a movement key is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub linear: Vec2,
    pub speed: f32,
}

impl Velocity {
    pub fn with_speed(speed: f32) -> Self {
        Self {
            linear: Vec2::ZERO,
            speed,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.linear != Vec2::ZERO
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::with_speed(3.0)
    }
}

/// Per-entity keyboard state: lowercase key name → currently pressed.
///
/// Fed by the external key-event stream via the input system; other systems
/// read it without re-polling the OS.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_lowercase(), pressed);
    }

    pub fn pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}

/// Attack state machine data: whether a swing is in progress, which way it
/// points, and the link to the live hitbox entity (at most one per attacker).
#[derive(Debug, Clone)]
pub struct Attack {
    pub attacking: bool,
    pub direction: Direction,
    pub facing: Facing,
    /// The independent hitbox entity spawned for the current swing, if any.
    pub live_hitbox: Option<Entity>,
    /// Side length of the (square) attack hitbox.
    pub hitbox_size: f32,
    /// Translucency of the hitbox visual.
    pub hitbox_alpha: f32,
}

impl Attack {
    pub fn new(hitbox_size: f32) -> Self {
        Self {
            attacking: false,
            direction: Direction::Right,
            facing: Facing::Right,
            live_hitbox: None,
            hitbox_size,
            hitbox_alpha: 0.3,
        }
    }
}

/// Hitbox TTL value meaning "never expires" (body hitboxes).
pub const TTL_PERMANENT: f32 = -1.0;

/// An axis-aligned rectangular collision region.
///
/// Permanent hitboxes (TTL −1) belong to damageable bodies; attack hitboxes
/// carry a finite, strictly positive TTL from the moment they spawn.
#[derive(Debug, Clone)]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
    /// Offset of the hitbox center from the owning entity's center.
    pub offset: Vec2,
    /// Whether this hitbox deals damage (attack) or receives it (body).
    pub attack: bool,
    pub damage: i32,
    /// Remaining time to live in milliseconds; [`TTL_PERMANENT`] for bodies.
    pub ttl_ms: f32,
    /// For attack hitboxes, the entity that swung.
    pub owner: Option<Entity>,
    /// Presentation handle for the hitbox overlay.
    pub visual: VisualId,
}

impl Hitbox {
    /// A permanent body hitbox centered on its entity.
    pub fn body(width: f32, height: f32, visual: VisualId) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
            attack: false,
            damage: 0,
            ttl_ms: TTL_PERMANENT,
            owner: None,
            visual,
        }
    }

    /// A square attack hitbox with a finite TTL.
    pub fn strike(size: f32, damage: i32, ttl_ms: f32, owner: Entity, visual: VisualId) -> Self {
        Self {
            width: size,
            height: size,
            offset: Vec2::ZERO,
            attack: true,
            damage,
            ttl_ms,
            owner: Some(owner),
            visual,
        }
    }
}

/// Which frame set of a sprite sheet an animation plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationSet {
    Idle,
    Walking,
    AttackUp,
    AttackDown,
    AttackHorizontal,
}

/// Frame counts per animation set. The textures themselves live with the
/// presentation collaborator; the core only tracks indices.
#[derive(Debug, Clone, Copy)]
pub struct FrameSets {
    pub idle: usize,
    pub walking: usize,
    pub attack_up: usize,
    pub attack_down: usize,
    pub attack_horizontal: usize,
}

impl FrameSets {
    pub fn len(&self, set: AnimationSet) -> usize {
        match set {
            AnimationSet::Idle => self.idle,
            AnimationSet::Walking => self.walking,
            AnimationSet::AttackUp => self.attack_up,
            AnimationSet::AttackDown => self.attack_down,
            AnimationSet::AttackHorizontal => self.attack_horizontal,
        }
    }
}

/// The currently selected animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRef {
    pub set: AnimationSet,
    pub index: usize,
}

/// Visual binding: frame-set lengths, the selected frame, and the mirror
/// flag the presentation layer reads once per frame.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub frames: FrameSets,
    pub selected: FrameRef,
    pub flip_x: bool,
    pub visual: VisualId,
}

impl Sprite {
    pub fn new(frames: FrameSets, visual: VisualId) -> Self {
        Self {
            frames,
            selected: FrameRef {
                set: AnimationSet::Idle,
                index: 0,
            },
            flip_x: false,
            visual,
        }
    }
}

/// Frame-stepped animation state.
#[derive(Debug, Clone)]
pub struct Animation {
    pub playing: bool,
    pub frame: usize,
    pub elapsed_ms: f32,
    pub frame_duration_ms: f32,
    /// Index within the attack frame set while a swing animates.
    pub attack_frame: usize,
}

impl Animation {
    pub fn new(frame_duration_ms: f32) -> Self {
        Self {
            playing: true,
            frame: 0,
            elapsed_ms: 0.0,
            frame_duration_ms,
            attack_frame: 0,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Hit points, clamped to `[0, max]` on every write. Dead ⇔ current == 0.
#[derive(Debug, Clone)]
pub struct Health {
    max: i32,
    current: i32,
    pub kind: ActorKind,
    /// Presentation handle for the health bar.
    pub bar: VisualId,
    /// Offset of the health bar from the entity's center.
    pub bar_offset: Vec2,
}

impl Health {
    pub fn new(max: i32, kind: ActorKind) -> Self {
        Self {
            max,
            current: max,
            kind,
            bar: VisualId::NONE,
            bar_offset: Vec2::ZERO,
        }
    }

    pub fn with_bar(mut self, bar: VisualId, offset: Vec2) -> Self {
        self.bar = bar;
        self.bar_offset = offset;
        self
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    /// Set current health. Values outside `[0, max]` are silently clamped,
    /// never an error.
    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    /// Apply damage; returns the new current health.
    pub fn damage(&mut self, amount: i32) -> i32 {
        self.set(self.current - amount);
        self.current
    }

    /// Restore health; returns the new current health.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.set(self.current + amount);
        self.current
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}
