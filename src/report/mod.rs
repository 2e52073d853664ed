//! Report data model
//!
//! A [`Report`] is the ordered list of [`Section`]s produced by running every
//! demonstration. Sections hold plain `label: value` lines; turning them into
//! terminal output is left to [`crate::ui`].

use crate::demos;
use std::fmt;
use tracing::{debug, trace};

/// One `label: value` fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: String,
    pub value: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Output of a single demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Section {
            title,
            lines: Vec::new(),
        }
    }

    /// Append a fact
    pub fn push(&mut self, label: impl Into<String>, value: impl fmt::Display) {
        self.lines.push(Line {
            label: label.into(),
            value: value.to_string(),
        });
    }

    /// Value of the first line with this label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// All sections, in the order the demonstrations ran
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Run every demonstration once, in fixed order
    pub fn collect() -> Self {
        let sections = demos::ALL
            .iter()
            .map(|demo| {
                let section = demo();
                debug!(title = section.title, lines = section.lines.len(), "collected section");
                for line in &section.lines {
                    trace!(title = section.title, %line);
                }
                section
            })
            .collect();

        Report { sections }
    }

    /// Total number of fact lines
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup() {
        let mut section = Section::new("Pointers");
        section.push("a", 20);
        section.push("*p", 20);
        section.push("a", 99);

        assert_eq!(section.value_of("a"), Some("20"));
        assert_eq!(section.value_of("*p"), Some("20"));
        assert_eq!(section.value_of("b"), None);
        assert_eq!(section.lines[1].to_string(), "*p: 20");
    }

    #[test]
    fn test_collect_runs_every_demo() {
        let report = Report::collect();
        assert_eq!(report.sections.len(), demos::ALL.len());
        assert!(report.sections.iter().all(|s| !s.lines.is_empty()));
        assert!(report.sections.iter().any(|s| s.title == "Pointers"));
        assert!(report.line_count() >= report.sections.len());
    }
}
