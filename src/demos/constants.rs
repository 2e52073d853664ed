use crate::constants::{
    untyped_float, untyped_int, EXPLICIT_BLOCK, SHIFTED_BLOCK, TYPED_FLOAT, TYPED_INT,
};
use crate::memory::type_name_of;
use crate::report::Section;

/// Literal constants take their type from each use; typed constants carry one
#[allow(clippy::approx_constant)]
pub fn constants() -> Section {
    let ui = untyped_int!();
    let uf = untyped_float!();
    let ui_narrow: u16 = untyped_int!();
    let uf_narrow: f32 = untyped_float!();

    let mut section = Section::new("Constants");
    section.push("ui", format!("{} (type {})", ui, type_name_of(&ui)));
    section.push("uf", format!("{} (type {})", uf, type_name_of(&uf)));
    section.push("ti", format!("{} (type {})", TYPED_INT, type_name_of(&TYPED_INT)));
    section.push("tf", format!("{} (type {})", TYPED_FLOAT, type_name_of(&TYPED_FLOAT)));
    section.push(
        "ui as u16",
        format!("{} (type {})", ui_narrow, type_name_of(&ui_narrow)),
    );
    section.push(
        "uf as f32",
        format!("{} (type {})", uf_narrow, type_name_of(&uf_narrow)),
    );
    section
}

/// Auto-numbered constants with a shifted override partway through
pub fn enumerated() -> Section {
    let mut section = Section::new("Enumerated Constants");
    for (name, value) in SHIFTED_BLOCK.values() {
        section.push(name, value);
    }

    let explicit = EXPLICIT_BLOCK
        .values()
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ");
    section.push("with D = 4", explicit);
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_types() {
        let section = constants();
        assert_eq!(section.value_of("ui"), Some("12345 (type i32)"));
        assert_eq!(section.value_of("uf"), Some("3.141592 (type f64)"));
        assert_eq!(section.value_of("ti"), Some("12345 (type isize)"));
        assert_eq!(section.value_of("tf"), Some("3.141592 (type f64)"));
        assert_eq!(section.value_of("ui as u16"), Some("12345 (type u16)"));
        assert_eq!(section.value_of("uf as f32"), Some("3.141592 (type f32)"));
    }

    #[test]
    fn test_enumerated_values() {
        let section = enumerated();
        let values: Vec<&str> = ["A", "B", "C", "D", "E"]
            .iter()
            .filter_map(|name| section.value_of(name))
            .collect();
        assert_eq!(values, vec!["0", "1", "2", "8", "9"]);
        assert_eq!(section.value_of("with D = 4"), Some("A=0, B=1, C=2, D=4, E=5"));
    }
}
