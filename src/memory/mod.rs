//! Memory model queries
//!
//! This module provides the introspection primitives the demonstrations build on:
//! - [`value`]: Tagged [`Value`] used to store and print reported values
//! - [`layout`]: Size, alignment, field offsets and padding of record types
//!
//! # Type Sizes
//!
//! Unlike a fixed-size virtual machine, every size reported here comes from the
//! compiler for the current target:
//! - `isize` / `usize`: one machine word (4 bytes on 32-bit, 8 on 64-bit targets)
//! - references and `Box<T>` for sized `T`: one machine word
//! - structs: field sizes plus padding, rounded up to the struct's alignment
//!
//! # Zero Values
//!
//! Rust has no implicit zero initialisation; reading a declared but unassigned
//! variable does not compile. [`ZeroValues`] spells the defaults out per scalar
//! kind instead, and matches what `Default::default()` produces.

pub mod layout;
pub mod value;

use rustc_hash::FxHashMap;
use std::fmt;
use std::mem::size_of;
use value::Value;

/// Size in bytes of the native signed integer
pub fn word_size() -> usize {
    size_of::<isize>()
}

/// Size in bytes of a thin pointer
pub fn pointer_size() -> usize {
    size_of::<*const u8>()
}

/// Kinds of scalar a zero value is defined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    Text,
    Reference,
}

/// Default value for each [`ScalarKind`]
#[derive(Debug, Clone)]
pub struct ZeroValues {
    table: FxHashMap<ScalarKind, Value>,
}

impl ZeroValues {
    pub fn new() -> Self {
        let mut table = FxHashMap::default();
        table.insert(ScalarKind::Integer, Value::Int(0));
        table.insert(ScalarKind::Text, Value::Text(String::new()));
        table.insert(ScalarKind::Reference, Value::Reference(None));
        ZeroValues { table }
    }

    pub fn get(&self, kind: ScalarKind) -> Option<&Value> {
        self.table.get(&kind)
    }

    /// Check `value` against the zero value for `kind`
    pub fn is_zero(&self, kind: ScalarKind, value: &Value) -> bool {
        self.get(kind) == Some(value)
    }
}

impl Default for ZeroValues {
    fn default() -> Self {
        Self::new()
    }
}

/// Type name of a value with module paths stripped
pub fn type_name_of<T: ?Sized>(_value: &T) -> String {
    short_type_name(std::any::type_name::<T>())
}

/// Strip module paths from every path segment in a type name
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            push_last_segment(&mut out, &mut path);
            out.push(ch);
        }
    }
    push_last_segment(&mut out, &mut path);

    out
}

fn push_last_segment(out: &mut String, path: &mut String) {
    if let Some(last) = path.rsplit("::").next() {
        out.push_str(last);
    }
    path.clear();
}

/// Format `value` followed by its short type name, e.g. `10 (type i64)`
pub fn describe<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{:?} (type {})", value, type_name_of(value))
}
