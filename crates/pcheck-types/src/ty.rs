//! The type universe.
//!
//! `Type` is a closed sum: six nameable primitives, the `Any` top type, and
//! three compound shapes. Values are never mutated after construction.
//! Equality and hashing are structural and live in `eq.rs`.
//!
//! # Canonical form
//!
//! Named tuple fields are kept sorted by name in `NamedFields`, so
//! `(b:int,a:bool)` and `(a:bool,b:int)` are the same value. The only way to
//! obtain a `NamedFields` is through a constructor that sorts and rejects
//! duplicate names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, PrimitiveNames};

/// Primitive kinds that have a source spelling and resolve through the registry.
///
/// `Any` is deliberately absent: it has no spelling and is only produced by
/// join or built directly by the checker.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Nil,
    Bool,
    Int,
    Id,
    Event,
    State,
}

impl PrimitiveKind {
    /// Every primitive kind, in registry declaration order.
    pub const ALL: [PrimitiveKind; 6] = [
        Self::Nil,
        Self::Bool,
        Self::Int,
        Self::Id,
        Self::Event,
        Self::State,
    ];

    /// Canonical spelling, used by `Display` and by the default name table.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Id => "id",
            Self::Event => "event",
            Self::State => "state",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A static type.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Type of the null/absent value.
    Nil,
    Bool,
    Int,
    /// Opaque machine identity.
    Id,
    /// Event type, optionally refined with the event's name.
    ///
    /// The refinement is informational only. Equality, hashing, subtyping
    /// and join never read it.
    Event(Option<String>),
    /// State-machine state. Not a subtype of `Any` and never a join operand.
    State,
    /// Top of the lattice.
    Any,
    /// Positional fields.
    Tuple(Vec<Type>),
    /// Uniquely named fields in canonical (sorted) order.
    NamedTuple(NamedFields),
    /// Homogeneous sequence.
    Sequence(Box<Type>),
}

impl Type {
    /// Unrefined event type.
    pub const EVENT: Type = Type::Event(None);

    pub fn tuple(elements: impl IntoIterator<Item = Type>) -> Self {
        Type::Tuple(elements.into_iter().collect())
    }

    /// Build a named tuple, canonicalizing field order.
    ///
    /// # Panics
    /// Panics if two fields share a name. Use [`Type::try_named_tuple`] when
    /// the field list has not been validated upstream.
    pub fn named_tuple<N: Into<String>>(fields: impl IntoIterator<Item = (N, Type)>) -> Self {
        Type::NamedTuple(NamedFields::ensure_unique(collect_fields(fields)))
    }

    /// Fallible variant of [`Type::named_tuple`].
    pub fn try_named_tuple<N: Into<String>>(
        fields: impl IntoIterator<Item = (N, Type)>,
    ) -> Result<Self, Error> {
        NamedFields::try_from(collect_fields(fields)).map(Type::NamedTuple)
    }

    pub fn sequence(element: Type) -> Self {
        Type::Sequence(Box::new(element))
    }

    /// Event type refined with the name of a declared event.
    pub fn event_named(name: impl Into<String>) -> Self {
        Type::Event(Some(name.into()))
    }

    /// The primitive kind, or `None` for `Any` and compound types.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Type::Nil => Some(PrimitiveKind::Nil),
            Type::Bool => Some(PrimitiveKind::Bool),
            Type::Int => Some(PrimitiveKind::Int),
            Type::Id => Some(PrimitiveKind::Id),
            Type::Event(_) => Some(PrimitiveKind::Event),
            Type::State => Some(PrimitiveKind::State),
            Type::Any | Type::Tuple(_) | Type::NamedTuple(_) | Type::Sequence(_) => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive_kind().is_some()
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Type::Tuple(_) | Type::NamedTuple(_) | Type::Sequence(_))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Type::Any)
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Type::State)
    }

    pub fn tuple_elements(&self) -> Option<&[Type]> {
        match self {
            Type::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn named_fields(&self) -> Option<&NamedFields> {
        match self {
            Type::NamedTuple(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn sequence_element(&self) -> Option<&Type> {
        match self {
            Type::Sequence(element) => Some(element),
            _ => None,
        }
    }

    /// Name of the event this type was refined with, if any.
    pub fn event_refinement(&self) -> Option<&str> {
        match self {
            Type::Event(name) => name.as_deref(),
            _ => None,
        }
    }
}

impl From<PrimitiveKind> for Type {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Nil => Type::Nil,
            PrimitiveKind::Bool => Type::Bool,
            PrimitiveKind::Int => Type::Int,
            PrimitiveKind::Id => Type::Id,
            PrimitiveKind::Event => Type::EVENT,
            PrimitiveKind::State => Type::State,
        }
    }
}

fn collect_fields<N: Into<String>>(fields: impl IntoIterator<Item = (N, Type)>) -> Vec<NamedField> {
    fields
        .into_iter()
        .map(|(name, ty)| NamedField::new(name, ty))
        .collect()
}

/// A single `name: type` entry of a named tuple.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NamedField {
    pub name: String,
    pub ty: Type,
}

impl NamedField {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Field list of a named tuple, sorted by name with no duplicates.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<NamedField>", into = "Vec<NamedField>")]
pub struct NamedFields(Vec<NamedField>);

impl NamedFields {
    /// Wrap fields that are already canonical.
    ///
    /// Only for callers that derive the list from an existing `NamedFields`
    /// without touching names (e.g. pointwise join).
    pub(crate) fn from_canonical(fields: Vec<NamedField>) -> Self {
        debug_assert!(fields.windows(2).all(|w| w[0].name < w[1].name));
        Self(fields)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedField> {
        self.0.iter()
    }

    /// Field names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|field| field.name.as_str())
    }

    /// Type of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.0
            .binary_search_by(|field| field.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.0[idx].ty)
    }

    pub fn as_slice(&self) -> &[NamedField] {
        &self.0
    }
}

impl TryFrom<Vec<NamedField>> for NamedFields {
    type Error = Error;

    /// Sort by name (ordinal, stable) and reject duplicate names.
    fn try_from(mut fields: Vec<NamedField>) -> Result<Self, Error> {
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(dup) = fields.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(Error::DuplicateField {
                name: dup[0].name.clone(),
            });
        }
        Ok(Self(fields))
    }
}

impl From<NamedFields> for Vec<NamedField> {
    fn from(fields: NamedFields) -> Self {
        fields.0
    }
}

impl<'a> IntoIterator for &'a NamedFields {
    type Item = &'a NamedField;
    type IntoIter = std::slice::Iter<'a, NamedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Surface grammar shared with the diagnostics renderer:
// `any`, `(t1,t2)`, `(a:t1,b:t2)`, `seq[t]`, primitives by name.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(self, None, f)
    }
}

/// Renders primitives through a registry's name table.
///
/// Returned by [`TypeRegistry::display`](crate::TypeRegistry::display).
#[derive(Clone, Copy, Debug)]
pub struct TypeDisplay<'a> {
    pub(crate) ty: &'a Type,
    pub(crate) names: &'a PrimitiveNames,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(self.ty, Some(self.names), f)
    }
}

/// Without a name table, primitives use the canonical `PrimitiveKind::name`.
fn write_type(
    ty: &Type,
    names: Option<&PrimitiveNames>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let primitive = |kind: PrimitiveKind| names.map_or(kind.name(), |names| names.name_of(kind));

    match ty {
        Type::Nil => f.write_str(primitive(PrimitiveKind::Nil)),
        Type::Bool => f.write_str(primitive(PrimitiveKind::Bool)),
        Type::Int => f.write_str(primitive(PrimitiveKind::Int)),
        Type::Id => f.write_str(primitive(PrimitiveKind::Id)),
        Type::Event(_) => f.write_str(primitive(PrimitiveKind::Event)),
        Type::State => f.write_str(primitive(PrimitiveKind::State)),
        Type::Any => f.write_str("any"),
        Type::Tuple(elements) => {
            f.write_str("(")?;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_type(element, names, f)?;
            }
            f.write_str(")")
        }
        Type::NamedTuple(fields) => {
            f.write_str("(")?;
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}:", field.name)?;
                write_type(&field.ty, names, f)?;
            }
            f.write_str(")")
        }
        Type::Sequence(element) => {
            f.write_str("seq[")?;
            write_type(element, names, f)?;
            f.write_str("]")
        }
    }
}
