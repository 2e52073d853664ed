use crate::memory::value::Value;
use crate::memory::{type_name_of, ScalarKind, ZeroValues};
use crate::report::Section;

/// Lossless integer to float conversion
///
/// `From` is only implemented where every input is representable; there is no
/// `From<i64> for f64` because `f64` has a 53-bit mantissa.
pub fn to_float(value: i32) -> f64 {
    f64::from(value)
}

/// Zero values: what a declaration without an explicit value holds
pub fn zero_values() -> Section {
    let zeros = ZeroValues::new();

    let a: isize = Default::default();
    let b: String = Default::default();
    let c: Option<&isize> = Default::default();

    let facts = [
        ("a", ScalarKind::Integer, Value::from(a as i64)),
        ("b", ScalarKind::Text, Value::from(b)),
        ("c", ScalarKind::Reference, Value::reference(c)),
    ];

    let mut section = Section::new("Zero Value Concept");
    for (label, _, value) in &facts {
        section.push(*label, value);
    }
    let matches = facts
        .iter()
        .all(|(_, kind, value)| zeros.is_zero(*kind, value));
    section.push("matches zero-value table", matches);
    section
}

/// Conversion: build a new value of another type, never reinterpret bits
pub fn conversion() -> Section {
    let a: i32 = 10;
    let b = to_float(a);

    let mut section = Section::new("Conversion");
    section.push("a", format!("{} (type {})", a, type_name_of(&a)));
    section.push("b", format!("{} (type {})", Value::from(b), type_name_of(&b)));
    section.push("i64 to f64", "no lossless From impl, only an `as` cast");
    section
}

/// Three ways to declare and initialise a local integer
pub fn assigning() -> Section {
    let a = 10; // type inferred from the literal's default
    let b = 20_isize; // type carried by the literal suffix
    let c: isize = 30; // type annotated on the binding

    let mut section = Section::new("Assigning Values");
    section.push("a", format!("{} (type {})", a, type_name_of(&a)));
    section.push("b", format!("{} (type {})", b, type_name_of(&b)));
    section.push("c", format!("{} (type {})", c, type_name_of(&c)));
    section
}
