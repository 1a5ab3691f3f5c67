//! Least upper bound of two types, used to type merge points
//! (conditional branches, heterogeneous collection literals).
//!
//! Rules:
//! - `a ⊔ a = a`
//! - `nil ⊔ id = id`, `nil ⊔ event = event` (both orders)
//! - Distinct primitives otherwise join to `any`
//! - Tuples of equal arity and named tuples with identical field names join
//!   pointwise; mismatched shapes join to `any`
//! - `seq[a] ⊔ seq[b] = seq[a ⊔ b]`
//! - `any` absorbs everything
//!
//! `state` is never a valid operand; passing it is a checker bug and panics.

use crate::invariants::ensure_joinable;
use crate::{NamedField, NamedFields, Type};

impl Type {
    /// Least upper bound of `self` and `other`.
    ///
    /// # Panics
    /// Panics if either operand is `Type::State`, including a `state`
    /// nested in a tuple, named tuple or sequence component.
    pub fn join(&self, other: &Type) -> Type {
        ensure_joinable(self, other);

        // Equal compounds still go pointwise so nested `state` is caught.
        if self == other && !self.is_compound() {
            return self.clone();
        }

        match (self, other) {
            (Type::Nil, Type::Id | Type::Event(_)) => other.clone(),
            (Type::Id | Type::Event(_), Type::Nil) => self.clone(),

            (Type::Tuple(a), Type::Tuple(b)) if a.len() == b.len() => {
                Type::Tuple(a.iter().zip(b).map(|(x, y)| x.join(y)).collect())
            }

            (Type::NamedTuple(a), Type::NamedTuple(b)) if a.names().eq(b.names()) => {
                let fields = a
                    .iter()
                    .zip(b)
                    .map(|(x, y)| NamedField::new(x.name.clone(), x.ty.join(&y.ty)))
                    .collect();
                Type::NamedTuple(NamedFields::from_canonical(fields))
            }

            (Type::Sequence(a), Type::Sequence(b)) => Type::sequence(a.join(b)),

            _ => Type::Any,
        }
    }
}

/// Join a sequence of types.
///
/// - Empty input yields `nil`.
/// - A single element is returned unchanged (without a join, so it is not
///   checked for `state`).
/// - Otherwise a left fold in input order. Join is not associative once
///   `any` absorption kicks in, so the order is part of the contract.
pub fn join_all(types: impl IntoIterator<Item = Type>) -> Type {
    let mut iter = types.into_iter();
    let Some(first) = iter.next() else {
        return Type::Nil;
    };

    let mut absorbed = first.is_any();
    iter.enumerate().fold(first, |acc, (idx, ty)| {
        let joined = acc.join(&ty);
        if !absorbed && joined.is_any() {
            absorbed = true;
            tracing::trace!(operand = idx + 1, "join_all absorbed into `any`");
        }
        joined
    })
}
