use crate::memory::layout::{c_layout, FieldSpec, RecordLayout};
use crate::report::Section;
use std::mem::size_of;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

/// Two employees: one with fields named out of declaration order, one with
/// only some fields given and the rest defaulted
pub fn sample_employees() -> [Employee; 2] {
    let emp1 = Employee {
        name: "Bob".to_string(),
        department: "Sales".to_string(),
        id: 102,
        salary: 58000.00,
    };
    let emp2 = Employee {
        name: "Charlie".to_string(),
        salary: 60000.00,
        ..Default::default()
    };
    [emp1, emp2]
}

pub fn struct_construction() -> Section {
    let [emp1, emp2] = sample_employees();

    let mut section = Section::new("Struct and Construction");
    section.push("emp1", format!("{:?}", emp1));
    section.push("emp2", format!("{:?}", emp2));
    section
}

/// Mixed-width fields in C order, so the compiler must pad around `b`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Example {
    pub a: u8,
    pub b: i32,
    pub c: u8,
}

/// The same fields under the default representation, which may reorder them
#[allow(dead_code)] // only measured, never built
struct ExampleReordered {
    a: u8,
    b: i32,
    c: u8,
}

/// Layout of [`Example`] as reported by the compiler
pub fn example_layout() -> RecordLayout {
    crate::measured_layout!(Example { a: u8, b: i32, c: u8 })
}

/// Layout of [`Example`] computed from its field types alone
pub fn example_c_layout() -> RecordLayout {
    c_layout(
        "Example",
        &[
            FieldSpec::of::<u8>("a"),
            FieldSpec::of::<i32>("b"),
            FieldSpec::of::<u8>("c"),
        ],
    )
}

pub fn padding() -> Section {
    let ex = Example::default();
    let layout = example_layout();

    let mut section = Section::new("Padding and Alignment");
    section.push("Size of Example struct", format!("{} bytes", layout.size));
    section.push("Alignment", format!("{} bytes", layout.align));
    section.push("Field bytes", format!("{} bytes", layout.field_bytes()));
    section.push("Padding bytes", format!("{} bytes", layout.padding()));
    for field in &layout.fields {
        section.push(
            format!("Offset of {}", field.name),
            format!("{} (size {})", field.offset, field.size),
        );
    }
    if let (Some(a), Some(b)) = (layout.field("a"), layout.field("b")) {
        section.push(
            "Padding before b",
            format!("{} bytes", b.offset - (a.offset + a.size)),
        );
    }
    section.push(
        "Computed C layout size",
        format!("{} bytes", example_c_layout().size),
    );
    section.push(
        "Default repr size",
        format!("{} bytes", size_of::<ExampleReordered>()),
    );
    section.push("ex", format!("{{ a: {}, b: {}, c: {} }}", ex.a, ex.b, ex.c));
    section
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Return a user by value; the caller's copy may live in its own frame
pub fn stay_on_stack() -> User {
    User {
        name: "Bill".to_string(),
        email: "bill@email.com".to_string(),
    }
}

/// Return a locally built user through an owning heap reference
pub fn escape_to_heap() -> Box<User> {
    let u = User {
        name: "Bill".to_string(),
        email: "bill@email.com".to_string(),
    };
    Box::new(u)
}

pub fn escape_analysis() -> Section {
    let u1 = stay_on_stack();
    let u2 = escape_to_heap();

    let mut section = Section::new("Escape Analysis");
    section.push("u1", format!("{:?}", u1));
    section.push("u2", format!("{:?}", u2));
    section.push(
        "u1 storage",
        format!("{} bytes held by value in the caller", size_of::<User>()),
    );
    section.push(
        "u2 storage",
        format!(
            "{} byte Box handle owning {} heap bytes",
            size_of::<Box<User>>(),
            size_of::<User>()
        ),
    );
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_employee_uses_zero_values() {
        let [emp1, emp2] = sample_employees();
        assert_eq!(emp1.id, 102);
        assert_eq!(emp1.department, "Sales");

        assert_eq!(emp2.name, "Charlie");
        assert_eq!(emp2.salary, 60000.0);
        assert_eq!(emp2.id, 0);
        assert_eq!(emp2.department, "");
    }

    #[test]
    fn test_struct_construction_section() {
        let section = struct_construction();
        assert_eq!(
            section.value_of("emp2"),
            Some("Employee { id: 0, name: \"Charlie\", department: \"\", salary: 60000.0 }")
        );
    }

    #[test]
    fn test_example_is_padded() {
        let layout = example_layout();
        assert!(layout.size >= layout.field_bytes());
        assert_eq!(layout.size % layout.align, 0);
        assert_eq!(layout.align, std::mem::align_of::<i32>());
        assert!(layout.padding() > 0);
        assert_eq!(layout, example_c_layout());
    }

    #[test]
    fn test_padding_section_reports_size() {
        let section = padding();
        let expected = format!("{} bytes", size_of::<Example>());
        assert_eq!(section.value_of("Size of Example struct"), Some(expected.as_str()));
        assert_eq!(section.value_of("Offset of a"), Some("0 (size 1)"));
        let gap = format!("{} bytes", std::mem::align_of::<i32>() - 1);
        assert_eq!(section.value_of("Padding before b"), Some(gap.as_str()));
        assert_eq!(section.value_of("ex"), Some("{ a: 0, b: 0, c: 0 }"));
    }

    #[test]
    fn test_by_value_and_boxed_users_agree() {
        let u1 = stay_on_stack();
        let u2 = escape_to_heap();
        assert_eq!(u1, *u2);
        assert_eq!(size_of::<Box<User>>(), size_of::<usize>());
    }
}
