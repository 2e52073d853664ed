use crate::memory::{self, describe, type_name_of};
use crate::report::Section;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::mem::{size_of, size_of_val};

/// Built-in types: an integer, text, ordered collections and a keyed collection
pub fn builtin_types() -> Section {
    let a: isize = 10;
    let b: &str = "hello";
    let c: Vec<i64> = vec![1, 2, 3];
    let d: [i64; 3] = [1, 2, 3];
    let e: FxHashMap<String, i64> = [("one".to_string(), 1), ("two".to_string(), 2)]
        .into_iter()
        .collect();

    let mut section = Section::new("Built-in Types");
    section.push("a", describe(&a));
    section.push("b", describe(&b));
    section.push("c", describe(&c));
    section.push("d", describe(&d));

    // hash order is unspecified; print sorted
    let sorted: BTreeMap<&String, &i64> = e.iter().collect();
    section.push("e", format!("{:?} (type {})", sorted, type_name_of(&e)));

    section.push("b length", format!("{} bytes", b.len()));
    section.push("size of b", format!("{} bytes (pointer + length)", size_of_val(&b)));
    section.push(
        "size of c",
        format!("{} bytes (pointer + capacity + length)", size_of_val(&c)),
    );
    section.push("size of d", format!("{} bytes (inline elements)", size_of_val(&d)));
    section.push("size of e", format!("{} bytes", size_of_val(&e)));
    section
}

/// Size of the native integer type
pub fn word_size() -> Section {
    let mut section = Section::new("Word Size");
    section.push("Size of isize", format!("{} bytes", memory::word_size()));
    section.push("Size of usize", format!("{} bytes", size_of::<usize>()));
    section.push("Pointer width", format!("{} bits", memory::pointer_size() * 8));
    section
}
