// Constants for the reporter and the values it demonstrates

use crate::sequence::{ConstBlock, Step};

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "memlens=warn";

/// Integer literal with no fixed type; each use site infers one
macro_rules! untyped_int {
    () => {
        12345
    };
}

/// Float literal with no fixed type; each use site infers one
macro_rules! untyped_float {
    () => {
        3.141592
    };
}

pub(crate) use untyped_float;
pub(crate) use untyped_int;

/// Typed integer constant
pub const TYPED_INT: isize = 12345;

/// Typed float constant
#[allow(clippy::approx_constant)]
pub const TYPED_FLOAT: f64 = 3.141592;

/// A, B, C count up from zero; D takes the counter shifted left by 2; E continues from D
pub const SHIFTED_BLOCK: ConstBlock = ConstBlock {
    start: 0,
    entries: &[
        ("A", Step::Auto),
        ("B", Step::Auto),
        ("C", Step::Auto),
        ("D", Step::Shift(2)),
        ("E", Step::Auto),
    ],
};

/// Same block with D pinned to 4
pub const EXPLICIT_BLOCK: ConstBlock = ConstBlock {
    start: 0,
    entries: &[
        ("A", Step::Auto),
        ("B", Step::Auto),
        ("C", Step::Auto),
        ("D", Step::Explicit(4)),
        ("E", Step::Auto),
    ],
};
