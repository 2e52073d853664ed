//! Enumerated-constant generation
//!
//! A [`ConstBlock`] is a list of named entries, each produced by a [`Step`].
//! The counter always holds the last value produced:
//!
//! ```text
//! Auto         first entry: start, afterwards: counter + 1 (wraps at i64::MAX)
//! Explicit(v)  v
//! Shift(k)     counter << k   (start << k when it is the first entry)
//! ```
//!
//! Every step moves the counter to the value it produced, so entries after an
//! override keep counting from the overridden value.

/// How an entry in a [`ConstBlock`] gets its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Auto,
    Explicit(i64),
    Shift(u32),
}

/// Generate the values for a sequence of steps
pub fn generate(start: i64, steps: &[Step]) -> Vec<i64> {
    let mut counter: Option<i64> = None;

    steps
        .iter()
        .map(|step| {
            let value = match (*step, counter) {
                (Step::Auto, None) => start,
                (Step::Auto, Some(current)) => current.wrapping_add(1),
                (Step::Explicit(v), _) => v,
                // shifts of 64 or more bits yield 0
                (Step::Shift(k), current) => current.unwrap_or(start).checked_shl(k).unwrap_or(0),
            };
            counter = Some(value);
            value
        })
        .collect()
}

/// A named block of auto-numbered constants
#[derive(Debug, Clone, Copy)]
pub struct ConstBlock {
    pub start: i64,
    pub entries: &'static [(&'static str, Step)],
}

impl ConstBlock {
    /// Each entry's name paired with its generated value
    pub fn values(&self) -> Vec<(&'static str, i64)> {
        let steps: Vec<Step> = self.entries.iter().map(|(_, step)| *step).collect();
        self.entries
            .iter()
            .map(|(name, _)| *name)
            .zip(generate(self.start, &steps))
            .collect()
    }
}
