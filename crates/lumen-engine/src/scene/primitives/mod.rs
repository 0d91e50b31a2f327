//! Primitive instance records.
//!
//! Extending the scene:
//! - add a record type in its own module here, with `order` and `clip` fields
//! - add a variant to `PrimitiveKind` (and its priority slot)
//! - add a sequence to `PrimitiveLists` and register it with `primitive!`
//! - add insert helpers inside that module

pub(crate) mod glyph;
pub(crate) mod path;
pub(crate) mod quad;
pub(crate) mod shadow;
pub(crate) mod tile;

use crate::coords::Rect;

use super::PrimitiveKind;
use super::list::PrimitiveLists;

/// Paint-order token. Strictly increasing across one frame's inserts.
pub type DrawOrder = u32;

/// Common view over the eight primitive record types.
pub trait Primitive: Copy + sealed::Sealed {
    const KIND: PrimitiveKind;

    /// Order token stamped at insertion.
    fn order(&self) -> DrawOrder;

    /// Clip rect baked at insertion ([`Rect::UNBOUNDED`] when unclipped).
    fn clip(&self) -> Rect;
}

/// Crate-side storage hooks, kept off the public trait.
pub(crate) trait Store: Primitive {
    fn stamp(&mut self, order: DrawOrder, clip: Rect);
    fn list_mut(lists: &mut PrimitiveLists) -> &mut Vec<Self>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! primitive {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl crate::scene::primitives::sealed::Sealed for $ty {}

        impl crate::scene::primitives::Primitive for $ty {
            const KIND: crate::scene::PrimitiveKind = crate::scene::PrimitiveKind::$kind;

            #[inline]
            fn order(&self) -> crate::scene::DrawOrder {
                self.order
            }

            #[inline]
            fn clip(&self) -> crate::coords::Rect {
                self.clip
            }
        }

        impl crate::scene::primitives::Store for $ty {
            #[inline]
            fn stamp(&mut self, order: crate::scene::DrawOrder, clip: crate::coords::Rect) {
                self.order = order;
                self.clip = clip;
            }

            #[inline]
            fn list_mut(lists: &mut crate::scene::list::PrimitiveLists) -> &mut Vec<Self> {
                &mut lists.$field
            }
        }
    };
}

pub(crate) use primitive;
