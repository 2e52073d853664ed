//! The demonstrations
//!
//! Each function builds its values, inspects them, and returns a
//! [`Section`] of facts. None of them print or fail.
//!
//! - [`types`]: built-in types and the native word size
//! - [`values`]: zero values, conversion, and ways of declaring a local
//! - [`records`]: struct construction, padding, and returning by value vs. by `Box`
//! - [`pointers`]: mutation through a reference, and copy vs. `&mut` arguments
//! - [`constants`]: typed and literal constants, and enumerated constant blocks

pub mod constants;
pub mod pointers;
pub mod records;
pub mod types;
pub mod values;

use crate::report::Section;

/// Every demonstration, in the order they run
pub const ALL: [fn() -> Section; 12] = [
    types::builtin_types,
    types::word_size,
    values::zero_values,
    values::conversion,
    records::struct_construction,
    records::padding,
    values::assigning,
    pointers::pointers,
    pointers::pass_by_value,
    records::escape_analysis,
    constants::constants,
    constants::enumerated,
];
