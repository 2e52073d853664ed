//! Record layout reporting
//!
//! Two ways of arriving at a [`RecordLayout`]:
//!
//! - [`measured_layout!`](crate::measured_layout): asks the compiler, via
//!   `size_of`, `align_of` and `offset_of!`, for the layout of a concrete type.
//! - [`c_layout`]: computes the layout from field sizes and alignments using the
//!   C rules, without a concrete type.
//!
//! # C Layout Rules
//!
//! ```text
//! offset(field) = round_up(end of previous field, align(field))
//! align(record) = max(align(field)), 1 if there are no fields
//! size(record)  = round_up(end of last field, align(record))
//! ```
//!
//! For `#[repr(C)]` types both paths agree.

use std::mem::{align_of, size_of};

/// Size and alignment of a field, before placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl FieldSpec {
    /// Describe a field of type `T`
    pub fn of<T>(name: &'static str) -> Self {
        FieldSpec {
            name,
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }
}

/// A field placed at its byte offset within a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub offset: usize,
}

/// The complete layout of a record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl RecordLayout {
    /// Sum of the field sizes, excluding padding
    pub fn field_bytes(&self) -> usize {
        self.fields.iter().map(|f| f.size).sum()
    }

    /// Bytes of the record not occupied by any field
    pub fn padding(&self) -> usize {
        self.size.saturating_sub(self.field_bytes())
    }

    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Round `offset` up to the next multiple of `align` (zero alignment counts as 1)
#[inline]
pub fn align_up(offset: usize, align: usize) -> usize {
    offset.next_multiple_of(align.max(1))
}

/// Lay out fields in declaration order using C rules
pub fn c_layout(name: &'static str, fields: &[FieldSpec]) -> RecordLayout {
    let mut offset = 0;
    let mut align = 1;
    let mut placed = Vec::with_capacity(fields.len());

    for spec in fields {
        let field_offset = align_up(offset, spec.align);
        placed.push(FieldLayout {
            name: spec.name,
            size: spec.size,
            align: spec.align,
            offset: field_offset,
        });
        offset = field_offset + spec.size;
        align = align.max(spec.align);
    }

    RecordLayout {
        name,
        size: align_up(offset, align),
        align,
        fields: placed,
    }
}

/// Build the compiler-reported [`RecordLayout`] of a struct
///
/// Field types must be restated; `offset_of!` fails to compile if a field name
/// does not exist.
///
/// ```
/// #[repr(C)]
/// struct Pair {
///     tag: u8,
///     value: u32,
/// }
///
/// let layout = memlens::measured_layout!(Pair { tag: u8, value: u32 });
/// assert_eq!(layout.field("value").map(|f| f.offset), Some(4));
/// ```
#[macro_export]
macro_rules! measured_layout {
    ($record:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        $crate::memory::layout::RecordLayout {
            name: stringify!($record),
            size: ::std::mem::size_of::<$record>(),
            align: ::std::mem::align_of::<$record>(),
            fields: vec![$(
                $crate::memory::layout::FieldLayout {
                    name: stringify!($field),
                    size: ::std::mem::size_of::<$ty>(),
                    align: ::std::mem::align_of::<$ty>(),
                    offset: ::std::mem::offset_of!($record, $field),
                }
            ),*],
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    #[repr(C)]
    struct Mixed {
        a: u8,
        b: u32,
        c: u8,
    }

    #[allow(dead_code)]
    #[repr(C)]
    struct Wide {
        flag: bool,
        big: u64,
        small: u16,
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_up(1, 4), 4);
        assert_eq!(align_up(4, 4), 4);
        assert_eq!(align_up(5, 8), 8);
        assert_eq!(align_up(3, 0), 3);
    }

    #[test]
    fn test_c_layout_inserts_padding() {
        let layout = c_layout(
            "Mixed",
            &[
                FieldSpec { name: "a", size: 1, align: 1 },
                FieldSpec { name: "b", size: 4, align: 4 },
                FieldSpec { name: "c", size: 1, align: 1 },
            ],
        );

        assert_eq!(layout.size, 12);
        assert_eq!(layout.align, 4);
        assert_eq!(layout.field_bytes(), 6);
        assert_eq!(layout.padding(), 6);
        let offsets: Vec<usize> = layout.fields.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, vec![0, 4, 8]);
    }

    #[test]
    fn test_c_layout_empty_record() {
        let layout = c_layout("Empty", &[]);
        assert_eq!(layout.size, 0);
        assert_eq!(layout.align, 1);
        assert_eq!(layout.padding(), 0);
    }

    #[test]
    fn test_c_layout_matches_compiler() {
        let computed = c_layout(
            "Mixed",
            &[
                FieldSpec::of::<u8>("a"),
                FieldSpec::of::<u32>("b"),
                FieldSpec::of::<u8>("c"),
            ],
        );
        let measured = crate::measured_layout!(Mixed { a: u8, b: u32, c: u8 });
        assert_eq!(computed, measured);

        let computed = c_layout(
            "Wide",
            &[
                FieldSpec::of::<bool>("flag"),
                FieldSpec::of::<u64>("big"),
                FieldSpec::of::<u16>("small"),
            ],
        );
        let measured = crate::measured_layout!(Wide {
            flag: bool,
            big: u64,
            small: u16,
        });
        assert_eq!(computed, measured);
    }

    #[test]
    fn test_field_lookup() {
        let layout = crate::measured_layout!(Mixed { a: u8, b: u32, c: u8 });
        assert_eq!(layout.field("b").map(|f| f.size), Some(4));
        assert!(layout.field("missing").is_none());
    }
}
