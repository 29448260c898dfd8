//! Note collection repository.
//!
//! # Responsibility
//! - Own the `RawNote` collection: create, partial-merge update, delete.
//! - Translate boundary `Tag` entities into stored `tag_ids` references.
//! - Persist the whole collection under the `NOTES` entry after each
//!   mutation.
//!
//! # Invariants
//! - Created ids are fresh UUID v4 text and never reused.
//! - `update` replaces only the fields present in the patch.
//! - Tag deletion elsewhere never rewrites `tag_ids` here; dangling
//!   references are a tolerated state, not corruption.

use super::{MutationOutcome, RepoResult};
use crate::model::note::{tag_ids_of, NoteDraft, NoteId, NotePatch, RawNote};
use crate::store::Store;

/// Store entry holding the serialized note collection.
pub const NOTES_KEY: &str = "NOTES";

/// Repository owning the raw note collection.
#[derive(Debug, Default)]
pub struct NoteRepository {
    notes: Vec<RawNote>,
}

impl NoteRepository {
    /// Loads the collection from the `NOTES` entry, defaulting to empty.
    pub fn load<S: Store>(store: &S) -> RepoResult<Self> {
        let notes = store.load(NOTES_KEY, Vec::new())?;
        Ok(Self { notes })
    }

    /// Current note collection in insertion order.
    pub fn notes(&self) -> &[RawNote] {
        &self.notes
    }

    /// Looks up one raw note by id.
    pub fn get(&self, id: &str) -> Option<&RawNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Creates a note with a fresh id, appends it and persists.
    ///
    /// The store write happens first; the in-memory collection only takes
    /// the new note once the write succeeded.
    pub fn create<S: Store>(&mut self, store: &mut S, draft: NoteDraft) -> RepoResult<NoteId> {
        let note = RawNote::new(draft);
        let id = note.id.clone();
        let mut candidate = self.notes.clone();
        candidate.push(note);
        store.save(NOTES_KEY, &candidate)?;
        self.notes = candidate;
        Ok(id)
    }

    /// Applies a partial-merge patch to the note carrying `id` and persists.
    ///
    /// Absent patch fields leave the stored value unchanged; a present
    /// `tags` field replaces the full reference list via `tag_ids_of`.
    pub fn update<S: Store>(
        &mut self,
        store: &mut S,
        id: &NoteId,
        patch: NotePatch,
    ) -> RepoResult<MutationOutcome> {
        let Some(position) = self.notes.iter().position(|note| &note.id == id) else {
            return Ok(MutationOutcome::NotFound);
        };
        let mut candidate = self.notes.clone();
        let note = &mut candidate[position];
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(markdown) = patch.markdown {
            note.markdown = markdown;
        }
        if let Some(tags) = patch.tags {
            note.tag_ids = tag_ids_of(&tags);
        }
        store.save(NOTES_KEY, &candidate)?;
        self.notes = candidate;
        Ok(MutationOutcome::Applied)
    }

    /// Removes the note carrying `id` and persists.
    pub fn delete<S: Store>(
        &mut self,
        store: &mut S,
        id: &NoteId,
    ) -> RepoResult<MutationOutcome> {
        let mut candidate = self.notes.clone();
        candidate.retain(|note| &note.id != id);
        if candidate.len() == self.notes.len() {
            return Ok(MutationOutcome::NotFound);
        }
        store.save(NOTES_KEY, &candidate)?;
        self.notes = candidate;
        Ok(MutationOutcome::Applied)
    }
}
