//! Structural equality and hashing for `Type`.
//!
//! Written by hand instead of derived: the event refinement carried by
//! `Type::Event` must not take part in either. Two independently built
//! values of the same shape compare and hash equal.

use std::hash::{Hash, Hasher};
use std::mem;

use crate::Type;

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Nil, Type::Nil)
            | (Type::Bool, Type::Bool)
            | (Type::Int, Type::Int)
            | (Type::Id, Type::Id)
            | (Type::Event(_), Type::Event(_))
            | (Type::State, Type::State)
            | (Type::Any, Type::Any) => true,
            (Type::Tuple(a), Type::Tuple(b)) => a == b,
            (Type::NamedTuple(a), Type::NamedTuple(b)) => a == b,
            (Type::Sequence(a), Type::Sequence(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Type::Tuple(elements) => elements.hash(state),
            Type::NamedTuple(fields) => fields.hash(state),
            Type::Sequence(element) => element.hash(state),
            // Refinement skipped.
            Type::Event(_) => {}
            Type::Nil | Type::Bool | Type::Int | Type::Id | Type::State | Type::Any => {}
        }
    }
}
