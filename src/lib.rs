//! # Introduction
//!
//! memlens runs a fixed series of small demonstrations of how Rust represents
//! values: built-in types, zero values, conversion, struct layout and padding,
//! references, copy vs. `&mut` arguments, returning by value vs. by `Box`,
//! constants, and enumerated constant blocks. Each demonstration collects
//! `label: value` facts; the binary prints them.
//!
//! ## Pipeline
//!
//! ```text
//! demos → Sections → Report → ui::render → stdout
//! ```
//!
//! 1. [`demos`] — one function per demonstration, each returning a
//!    [`report::Section`].
//! 2. [`memory`] — the introspection primitives: word size, type names, the
//!    zero-value table, and [`memory::layout`] for sizes, offsets and padding.
//! 3. [`sequence`] — generation of auto-numbered constant blocks.
//! 4. [`report`] — runs every demonstration in order and keeps the sections.
//! 5. [`ui`] — writes a report as plain or coloured text.
//!
//! ## Example
//!
//! ```
//! use memlens::report::Report;
//! use memlens::ui::{render, RenderConfig};
//!
//! let report = Report::collect();
//! let mut out = Vec::new();
//! render(&report, &mut out, &RenderConfig::plain()).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Built-in Types:"));
//! ```

pub mod constants;
pub mod demos;
pub mod errors;
pub mod memory;
pub mod report;
pub mod sequence;
pub mod ui;
