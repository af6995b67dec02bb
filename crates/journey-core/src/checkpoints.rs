//! Section positions and the labels reported as the current checkpoint.

use std::collections::HashMap;

/// Resolved checkpoint; `id` is `None` before the first section qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint<'a> {
    pub id: Option<&'a str>,
    pub label: &'a str,
}

/// Static id -> label table with the label used before any section.
#[derive(Debug, Clone)]
pub struct CheckpointTable {
    labels: HashMap<String, String>,
    start_label: String,
}

impl CheckpointTable {
    pub fn new(start_label: impl Into<String>) -> Self {
        Self {
            labels: HashMap::new(),
            start_label: start_label.into(),
        }
    }

    pub fn with_label(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(id.into(), label.into());
        self
    }

    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    /// Label for a section id; ids without an entry display themselves.
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.get(id).map(String::as_str).unwrap_or(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TrackedSection {
    id: String,
    top: f32,
}

/// Sections ordered by their top position in the document.
#[derive(Debug, Clone, Default)]
pub struct TrackedSections {
    sections: Vec<TrackedSection>,
}

impl TrackedSections {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut sections: Vec<TrackedSection> = sections
            .into_iter()
            .map(|(id, top)| TrackedSection {
                id: id.into(),
                top: if top.is_finite() { top } else { 0.0 },
            })
            .collect();
        sections.sort_by(|a, b| a.top.total_cmp(&b.top));
        Self { sections }
    }

    pub fn top_of(&self, id: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top)
    }

    pub fn tops(&self) -> impl Iterator<Item = (&str, f32)> {
        self.sections
            .iter()
            .map(|section| (section.id.as_str(), section.top))
    }

    /// Id of the last section whose `top - lookahead` is at or below
    /// `offset`.
    ///
    /// Sections are scanned top to bottom and later matches replace earlier
    /// ones, so overlapping lookaheads still resolve to the lowest section
    /// already reached.
    pub fn current(&self, offset: f32, lookahead: f32) -> Option<&str> {
        let mut current = None;
        for section in &self.sections {
            if offset >= section.top - lookahead {
                current = Some(section.id.as_str());
            }
        }
        current
    }

    pub fn resolve<'a>(
        &'a self,
        table: &'a CheckpointTable,
        offset: f32,
        lookahead: f32,
    ) -> Checkpoint<'a> {
        match self.current(offset, lookahead) {
            Some(id) => Checkpoint {
                id: Some(id),
                label: table.label_for(id),
            },
            None => Checkpoint {
                id: None,
                label: table.start_label(),
            },
        }
    }
}
