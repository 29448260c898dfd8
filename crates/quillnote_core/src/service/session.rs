//! Note session: the single mutator context.
//!
//! # Responsibility
//! - Own the store, both repositories, and the memoized resolved view.
//! - Expose the operation contract used by UI layers: note/tag mutations,
//!   the resolved projection, and filtering.
//!
//! # Invariants
//! - Every mutation runs read-modify-persist to completion before the next
//!   operation; there is exactly one mutator context per data set.
//! - Mutations targeting a missing id are logged no-ops; the UI only acts
//!   on ids rendered from current state.
//! - `resolved_notes` always reflects the latest repository state.

use crate::model::note::{NoteDraft, NoteId, NotePatch, ResolvedNote, Tag, TagId};
use crate::query::filter::{filter_notes, NoteFilter};
use crate::repo::note_repo::NoteRepository;
use crate::repo::tag_repo::TagRepository;
use crate::repo::{MutationOutcome, RepoResult};
use crate::store::Store;
use crate::view::materializer::MaterializedView;
use log::{debug, info};

/// Session owning all mutable note/tag state for one data set.
pub struct NoteSession<S: Store> {
    store: S,
    notes: NoteRepository,
    tags: TagRepository,
    view: MaterializedView,
    /// Bumped on every successful mutation; keys the memoized view.
    revision: u64,
}

impl<S: Store> NoteSession<S> {
    /// Opens a session, loading both collections from the store.
    ///
    /// Absent or unparsable entries load as empty collections; genuine
    /// storage failures propagate.
    pub fn open(store: S) -> RepoResult<Self> {
        let notes = NoteRepository::load(&store)?;
        let tags = TagRepository::load(&store)?;
        info!(
            "event=session_open module=core status=ok notes={} tags={}",
            notes.notes().len(),
            tags.tags().len()
        );
        Ok(Self {
            store,
            notes,
            tags,
            view: MaterializedView::new(),
            revision: 0,
        })
    }

    /// Creates a note and returns its fresh id.
    pub fn create_note(&mut self, draft: NoteDraft) -> RepoResult<NoteId> {
        let id = self.notes.create(&mut self.store, draft)?;
        self.revision += 1;
        info!("event=note_created module=core status=ok note_id={id}");
        Ok(id)
    }

    /// Applies a partial-merge patch to one note. Missing id is a no-op.
    pub fn update_note(&mut self, id: &NoteId, patch: NotePatch) -> RepoResult<()> {
        let outcome = self.notes.update(&mut self.store, id, patch)?;
        self.note_mutation("note_updated", id, outcome);
        Ok(())
    }

    /// Deletes one note. Missing id is a no-op.
    pub fn delete_note(&mut self, id: &NoteId) -> RepoResult<()> {
        let outcome = self.notes.delete(&mut self.store, id)?;
        self.note_mutation("note_deleted", id, outcome);
        Ok(())
    }

    /// Registers a caller-minted tag.
    pub fn add_tag(&mut self, tag: Tag) -> RepoResult<()> {
        let id = tag.id.clone();
        self.tags.add(&mut self.store, tag)?;
        self.revision += 1;
        info!("event=tag_added module=core status=ok tag_id={id}");
        Ok(())
    }

    /// Renames one tag. Missing id is a no-op.
    pub fn update_tag(&mut self, id: &TagId, label: &str) -> RepoResult<()> {
        let outcome = self.tags.rename(&mut self.store, id, label)?;
        self.tag_mutation("tag_renamed", id, outcome);
        Ok(())
    }

    /// Deletes one tag. Missing id is a no-op. Notes referencing the tag
    /// keep their dangling reference; resolution drops it at read time.
    pub fn delete_tag(&mut self, id: &TagId) -> RepoResult<()> {
        let outcome = self.tags.delete(&mut self.store, id)?;
        self.tag_mutation("tag_deleted", id, outcome);
        Ok(())
    }

    /// Current resolved projection, refreshed when stale.
    pub fn resolved_notes(&mut self) -> &[ResolvedNote] {
        self.view
            .refresh(self.revision, self.notes.notes(), self.tags.tags())
    }

    /// Resolved notes matching the given criteria, in collection order.
    pub fn filter_notes(&mut self, filter: &NoteFilter) -> Vec<ResolvedNote> {
        filter_notes(self.resolved_notes(), filter)
    }

    /// All known tags in insertion order, for editing surfaces.
    pub fn tags(&self) -> &[Tag] {
        self.tags.tags()
    }

    fn note_mutation(&mut self, event: &str, id: &NoteId, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Applied => {
                self.revision += 1;
                info!("event={event} module=core status=ok note_id={id}");
            }
            MutationOutcome::NotFound => {
                debug!("event={event} module=core status=noop note_id={id} reason=not_found");
            }
        }
    }

    fn tag_mutation(&mut self, event: &str, id: &TagId, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Applied => {
                self.revision += 1;
                info!("event={event} module=core status=ok tag_id={id}");
            }
            MutationOutcome::NotFound => {
                debug!("event={event} module=core status=noop tag_id={id} reason=not_found");
            }
        }
    }
}
