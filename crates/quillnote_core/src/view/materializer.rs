//! Resolved-note projection.
//!
//! # Responsibility
//! - Derive `ResolvedNote` records from the raw note and tag collections.
//! - Memoize the projection against a caller-owned revision counter.
//!
//! # Invariants
//! - Resolution preserves each note's `tag_ids` order.
//! - Ids with no matching tag are dropped silently; a resolved note never
//!   carries a tag absent from the source tag collection.
//! - Recomputation is always full; collection sizes in scope do not
//!   justify incremental maintenance.

use crate::model::note::{RawNote, ResolvedNote, Tag};
use std::collections::HashMap;

/// Projects every raw note into its resolved shape.
///
/// Pure function over the two source collections. Dangling tag references
/// resolve to nothing.
pub fn materialize(notes: &[RawNote], tags: &[Tag]) -> Vec<ResolvedNote> {
    let by_id: HashMap<&str, &Tag> = tags.iter().map(|tag| (tag.id.as_str(), tag)).collect();
    notes
        .iter()
        .map(|note| ResolvedNote {
            id: note.id.clone(),
            title: note.title.clone(),
            markdown: note.markdown.clone(),
            tags: note
                .tag_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|tag| (*tag).clone()))
                .collect(),
        })
        .collect()
}

/// Memoized holder for the resolved projection.
///
/// The owner bumps a revision counter on every successful mutation;
/// `refresh` recomputes only when the seen revision differs from the
/// cached one.
#[derive(Debug, Default)]
pub struct MaterializedView {
    cached_revision: Option<u64>,
    resolved: Vec<ResolvedNote>,
}

impl MaterializedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the projection for `revision`, recomputing when stale.
    pub fn refresh(
        &mut self,
        revision: u64,
        notes: &[RawNote],
        tags: &[Tag],
    ) -> &[ResolvedNote] {
        if self.cached_revision != Some(revision) {
            self.resolved = materialize(notes, tags);
            self.cached_revision = Some(revision);
        }
        &self.resolved
    }
}
