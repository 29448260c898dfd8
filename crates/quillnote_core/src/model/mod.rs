//! Domain model for notes and tags.
//!
//! # Responsibility
//! - Define the canonical persisted shapes (`RawNote`, `Tag`) and the
//!   derived read shape (`ResolvedNote`).
//! - Define the boundary input shapes used by mutations (`NoteDraft`,
//!   `NotePatch`).
//!
//! # Invariants
//! - Notes persist tag *ids* only; `Tag` entities are the single owner of
//!   `label`.
//! - A `RawNote` may reference tag ids that no longer exist; resolution
//!   drops them silently instead of erroring.

pub mod note;
