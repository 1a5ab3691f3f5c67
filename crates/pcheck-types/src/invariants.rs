//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Error, NamedField, NamedFields, Type};

pub(crate) fn ensure_joinable(lhs: &Type, rhs: &Type) {
    if lhs.is_state() || rhs.is_state() {
        panic!(
            "join: state type reached a join (`{lhs}` with `{rhs}`) \
             (checker must keep state values out of value positions)"
        );
    }
}

impl NamedFields {
    pub(crate) fn ensure_unique(fields: Vec<NamedField>) -> Self {
        Self::try_from(fields).unwrap_or_else(|err| {
            panic!("NamedFields: {err} (checker must reject duplicate field names)")
        })
    }
}

pub(crate) fn unknown_primitive(err: Error) -> Type {
    panic!("TypeRegistry: {err} (name table and registry are out of sync)")
}
