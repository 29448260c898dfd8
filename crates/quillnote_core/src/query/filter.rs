//! Title/tag filtering of resolved notes.
//!
//! # Responsibility
//! - Apply the list surface's filter criteria to a resolved projection.
//!
//! # Invariants
//! - Empty criteria are vacuously true; `filter_notes` with an empty
//!   filter is the identity.
//! - Required tags are conjunctive: every one must be covered by the
//!   note's resolved tags.
//! - Input order is preserved; there is no ranking or pagination.

use crate::model::note::{ResolvedNote, Tag};

/// Filter criteria for the note list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive title substring. Empty matches everything.
    pub title: String,
    /// Tags that must all be present on a note. Empty matches everything.
    pub required_tags: Vec<Tag>,
}

impl NoteFilter {
    pub fn new(title: impl Into<String>, required_tags: Vec<Tag>) -> Self {
        Self {
            title: title.into(),
            required_tags,
        }
    }

    /// Filter by title substring only.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Filter by required tags only.
    pub fn by_tags(required_tags: Vec<Tag>) -> Self {
        Self::new("", required_tags)
    }

    fn matches(&self, note: &ResolvedNote) -> bool {
        self.matches_title(note) && self.matches_tags(note)
    }

    fn matches_title(&self, note: &ResolvedNote) -> bool {
        self.title.is_empty()
            || note
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    fn matches_tags(&self, note: &ResolvedNote) -> bool {
        self.required_tags
            .iter()
            .all(|required| note.tags.iter().any(|tag| tag.id == required.id))
    }
}

/// Returns the notes matching both filter clauses, in input order.
pub fn filter_notes(resolved: &[ResolvedNote], filter: &NoteFilter) -> Vec<ResolvedNote> {
    resolved
        .iter()
        .filter(|note| filter.matches(note))
        .cloned()
        .collect()
}
