use crate::report::Section;
use std::ptr;

/// Store `value` through a mutable reference
pub fn write_through(target: &mut isize, value: isize) {
    *target = value;
}

/// Receives its own copy; the caller's variable is untouched
pub fn increment_copy(mut inc: isize) -> isize {
    inc += 1;
    inc
}

/// Receives a reference; the caller sees the increment
pub fn increment_shared(inc: &mut isize) {
    *inc += 1;
}

pub fn pointers() -> Section {
    let mut a: isize = 10;

    let p = &mut a;
    write_through(p, 20);
    let through_p = *p;

    // C allows p++ on any pointer; here it stays a raw address and is never read
    let base = ptr::addr_of!(a);
    let next = base.wrapping_add(1);
    let stride = next as usize - base as usize;

    let mut section = Section::new("Pointers");
    section.push("*p", through_p);
    section.push("a", a);
    section.push("p + 1", format!("{} bytes past &a (address only)", stride));
    section
}

pub fn pass_by_value() -> Section {
    let mut count: isize = 10;

    let mut section = Section::new("Pass by Value");
    section.push("Before", format!("count = {}", count));

    let copy = increment_copy(count);
    section.push("increment_copy returned", copy);
    section.push("After increment_copy", format!("count = {}", count));

    increment_shared(&mut count);
    section.push("After increment_shared", format!("count = {}", count));
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_through_reference_is_visible() {
        let mut a: isize = 10;
        write_through(&mut a, 20);
        assert_eq!(a, 20);

        let section = pointers();
        assert_eq!(section.value_of("a"), Some("20"));
        assert_eq!(section.value_of("*p"), Some("20"));
    }

    #[test]
    fn test_pointer_step_is_one_element() {
        let section = pointers();
        let expected = format!("{} bytes past &a (address only)", std::mem::size_of::<isize>());
        assert_eq!(section.value_of("p + 1"), Some(expected.as_str()));
    }

    #[test]
    fn test_copy_vs_reference() {
        let mut count: isize = 10;
        assert_eq!(increment_copy(count), 11);
        assert_eq!(count, 10);
        increment_shared(&mut count);
        assert_eq!(count, 11);

        let section = pass_by_value();
        assert_eq!(section.value_of("Before"), Some("count = 10"));
        assert_eq!(section.value_of("After increment_copy"), Some("count = 10"));
        assert_eq!(section.value_of("After increment_shared"), Some("count = 11"));
    }
}
