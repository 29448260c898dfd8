//! Core domain logic for QuillNote.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{init_logging, LoggingError};
pub use model::note::{
    NoteDraft, NoteId, NotePatch, RawNote, ResolvedNote, Tag, TagId,
};
pub use query::filter::{filter_notes, NoteFilter};
pub use repo::note_repo::{NoteRepository, NOTES_KEY};
pub use repo::tag_repo::{TagRepository, TAGS_KEY};
pub use repo::{MutationOutcome, RepoError, RepoResult};
pub use service::session::NoteSession;
pub use store::{JsonFileStore, MemoryStore, Store, StoreError, StoreResult};
pub use view::materializer::materialize;
