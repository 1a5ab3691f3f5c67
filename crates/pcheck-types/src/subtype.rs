//! Subtyping relation.
//!
//! Rules:
//! - Reflexive for every type.
//! - Everything except `State` is a subtype of `Any`.
//! - `Nil <: Id` and `Nil <: Event` (nil is the default for reference-like slots).
//! - `State` is a subtype only of itself.
//! - Tuples, named tuples and sequences are covariant in their components.
//!   Tuples need equal arity; named tuples need identical sorted field names.
//! - No relation across compound shapes except through `Any`.

use crate::Type;

impl Type {
    /// Whether a value of type `self` can be used where `other` is expected.
    pub fn is_subtype_of(&self, other: &Type) -> bool {
        if self == other {
            return true;
        }

        match (self, other) {
            // Keep states out of general-purpose slots.
            (Type::State, _) => false,
            (_, Type::Any) => true,
            (Type::Nil, Type::Id | Type::Event(_)) => true,
            (Type::Tuple(sub), Type::Tuple(sup)) => {
                sub.len() == sup.len() && sub.iter().zip(sup).all(|(a, b)| a.is_subtype_of(b))
            }
            (Type::NamedTuple(sub), Type::NamedTuple(sup)) => {
                sub.len() == sup.len()
                    && sub
                        .iter()
                        .zip(sup)
                        .all(|(a, b)| a.name == b.name && a.ty.is_subtype_of(&b.ty))
            }
            (Type::Sequence(sub), Type::Sequence(sup)) => sub.is_subtype_of(sup),
            _ => false,
        }
    }

    /// Whether the two types are comparable: equal, or one is a subtype of the other.
    pub fn related(&self, other: &Type) -> bool {
        self == other || self.is_subtype_of(other) || other.is_subtype_of(self)
    }
}
