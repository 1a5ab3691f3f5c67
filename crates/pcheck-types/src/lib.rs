#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Static types for the P state-machine compiler.
//!
//! Three operations do the real work for the checker:
//! - structural equality (and a hash consistent with it),
//! - `is_subtype_of`, the lattice order with `any` on top,
//! - `join`, the least upper bound used at merge points.
//!
//! # Example
//!
//! ```
//! use pcheck_types::{Type, TypeRegistry, join_all};
//!
//! let registry = TypeRegistry::default();
//! let int = registry.lookup_primitive("int").unwrap();
//!
//! let pair = Type::tuple([int.clone(), Type::Bool]);
//! assert!(pair.is_subtype_of(&Type::tuple([Type::Any, Type::Any])));
//! assert_eq!(join_all([int.clone(), Type::Bool, int]), Type::Any);
//! assert_eq!(pair.to_string(), "(int,bool)");
//! ```
//!
//! Nothing here reports user-facing type errors. [`Error`] covers broken
//! name tables and unchecked field lists; a `state` operand reaching
//! [`Type::join`] is a checker bug and panics.

mod eq;
mod invariants;
mod join;
mod registry;
mod subtype;
mod ty;

#[cfg(test)]
mod join_tests;

pub use join::join_all;
pub use registry::{PrimitiveNames, TypeRegistry};
pub use ty::{NamedField, NamedFields, PrimitiveKind, Type, TypeDisplay};

/// Errors from building or querying the type universe.
///
/// All of them point at an inconsistency inside the compiler, not at the
/// program being checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Registry asked for a spelling outside its name table.
    #[error("unknown primitive type `{name}`")]
    UnknownPrimitive { name: String },

    /// Named tuple field list repeats a name.
    #[error("duplicate field `{name}` in named tuple")]
    DuplicateField { name: String },

    /// Name table gives two primitives the same spelling.
    #[error("primitive name `{name}` is used more than once")]
    DuplicatePrimitiveName { name: String },
}

/// Result type for registry and construction operations.
pub type Result<T> = std::result::Result<T, Error>;
