//! # Component — Tagged Variants Keyed by Kind
//!
//! Components are plain data — a `Transform`, a `Velocity`, a `Health`. The
//! store needs to hold *any* component kind in one slot type, so we use a
//! tagged enum: [`Component`] has exactly one variant per [`ComponentKind`].
//!
//! ## Why an enum instead of `Box<dyn Any>`?
//!
//! Type-erased columns (`Box<dyn Any>` + `TypeId`) make sense for an open
//! framework where downstream crates add component types. This simulation has
//! a closed set of eight kinds, so an enum buys us exhaustive matching, no
//! heap boxing, and no runtime type inspection — the "one component per kind
//! per entity" invariant falls out of how the store is keyed.
//!
//! Systems never match on [`Component`] directly. Each concrete type
//! implements [`ComponentValue`], and the store's typed accessors
//! (`get::<Health>(entity)`) do the unwrapping.

use crate::components::{Animation, Attack, Health, Hitbox, InputState, Sprite, Velocity};
use crate::math::Transform;

/// A typed view into the [`Component`] enum.
///
/// Implemented by every concrete component struct so the store can offer
/// typed `get`/`get_mut` without callers matching on variants.
pub trait ComponentValue: Sized {
    /// The kind tag this type is stored under.
    const KIND: ComponentKind;

    /// Wrap the value into the tagged enum.
    fn wrap(self) -> Component;

    /// Borrow the value out of the tagged enum, if the variant matches.
    fn unwrap_ref(component: &Component) -> Option<&Self>;

    /// Mutably borrow the value out of the tagged enum, if the variant matches.
    fn unwrap_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_kinds {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        /// Enumerated component kinds. One concrete data type per kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ComponentKind {
            $($variant,)+
        }

        /// A component instance: one variant per [`ComponentKind`].
        #[derive(Debug, Clone)]
        pub enum Component {
            $($variant($ty),)+
        }

        impl Component {
            /// The kind tag of this instance.
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(Component::$variant(_) => ComponentKind::$variant,)+
                }
            }
        }

        $(
            impl ComponentValue for $ty {
                const KIND: ComponentKind = ComponentKind::$variant;

                fn wrap(self) -> Component {
                    Component::$variant(self)
                }

                fn unwrap_ref(component: &Component) -> Option<&Self> {
                    match component {
                        Component::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                fn unwrap_mut(component: &mut Component) -> Option<&mut Self> {
                    match component {
                        Component::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )+
    };
}

component_kinds! {
    Transform => Transform,
    Velocity => Velocity,
    Input => InputState,
    Sprite => Sprite,
    Animation => Animation,
    Attack => Attack,
    Hitbox => Hitbox,
    Health => Health,
}
