//! Primitive type registry.
//!
//! The surrounding compiler supplies its primitive name table once
//! ([`PrimitiveNames`]); the registry maps each spelling to its canonical
//! `Type` and is read-only afterwards. It is `Send + Sync` and meant to be
//! shared by reference across checking passes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::invariants::unknown_primitive;
use crate::ty::TypeDisplay;
use crate::{Error, PrimitiveKind, Result, Type};

/// Source spellings of the primitive types.
///
/// Defaults to the canonical names (`nil`, `bool`, `int`, `id`, `event`,
/// `state`). Missing keys fall back to the default when deserialized.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimitiveNames {
    pub nil: String,
    pub bool: String,
    pub int: String,
    pub id: String,
    pub event: String,
    pub state: String,
}

impl Default for PrimitiveNames {
    fn default() -> Self {
        Self {
            nil: PrimitiveKind::Nil.name().to_owned(),
            bool: PrimitiveKind::Bool.name().to_owned(),
            int: PrimitiveKind::Int.name().to_owned(),
            id: PrimitiveKind::Id.name().to_owned(),
            event: PrimitiveKind::Event.name().to_owned(),
            state: PrimitiveKind::State.name().to_owned(),
        }
    }
}

impl PrimitiveNames {
    /// Spelling for a primitive kind.
    pub fn name_of(&self, kind: PrimitiveKind) -> &str {
        match kind {
            PrimitiveKind::Nil => &self.nil,
            PrimitiveKind::Bool => &self.bool,
            PrimitiveKind::Int => &self.int,
            PrimitiveKind::Id => &self.id,
            PrimitiveKind::Event => &self.event,
            PrimitiveKind::State => &self.state,
        }
    }

    /// (spelling, kind) pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, PrimitiveKind)> {
        PrimitiveKind::ALL
            .into_iter()
            .map(move |kind| (self.name_of(kind), kind))
    }

    /// Reject tables that give two primitives the same spelling.
    pub fn validate(&self) -> Result<()> {
        for (i, (name, _)) in self.entries().enumerate() {
            if self.entries().skip(i + 1).any(|(other, _)| other == name) {
                return Err(Error::DuplicatePrimitiveName {
                    name: name.to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable map from primitive spelling to canonical `Type`.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    by_name: IndexMap<String, Type>,
    names: PrimitiveNames,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::from_validated(&PrimitiveNames::default())
    }
}

impl TypeRegistry {
    /// Build the registry from the compiler's name table.
    pub fn new(names: &PrimitiveNames) -> Result<Self> {
        names.validate()?;
        Ok(Self::from_validated(names))
    }

    fn from_validated(names: &PrimitiveNames) -> Self {
        let by_name: IndexMap<String, Type> = names
            .entries()
            .map(|(name, kind)| (name.to_owned(), Type::from(kind)))
            .collect();
        tracing::debug!(primitives = by_name.len(), "type registry built");
        Self {
            by_name,
            names: names.clone(),
        }
    }

    /// Resolve a primitive spelling to its canonical type.
    ///
    /// An unknown name means the registry and the rest of the pipeline
    /// disagree about the name table; it is not a user error.
    pub fn lookup_primitive(&self, name: &str) -> Result<Type> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownPrimitive {
                name: name.to_owned(),
            })
    }

    /// Resolve a spelling the caller knows is registered.
    ///
    /// # Panics
    /// Panics on an unknown name.
    pub fn ensure_primitive(&self, name: &str) -> Type {
        self.lookup_primitive(name).unwrap_or_else(unknown_primitive)
    }

    /// Render `ty` with primitives spelled as in this registry's name table.
    ///
    /// `Type`'s own `Display` always uses the canonical spellings.
    pub fn display<'a>(&'a self, ty: &'a Type) -> TypeDisplay<'a> {
        TypeDisplay {
            ty,
            names: &self.names,
        }
    }

    /// The name table this registry was built from.
    pub fn primitive_names(&self) -> &PrimitiveNames {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered spellings in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
