//! Note/tag domain records.
//!
//! # Responsibility
//! - Define the two persisted collections (`RawNote`, `Tag`) and their
//!   serialized field names.
//! - Provide constructors and the boundary translation `tags -> tag_ids`.
//!
//! # Invariants
//! - `id` fields are stable and never reused for another entity.
//! - `RawNote.tag_ids` is an ordered reference list; it is never rewritten
//!   when a referenced tag is deleted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Core-allocated ids are UUID v4 text.
pub type NoteId = String;

/// Stable identifier for a tag.
///
/// Tag ids are caller-supplied (the editing surface mints them) and are
/// accepted verbatim; only uniqueness of `id` matters, not its shape.
pub type TagId = String;

/// A tag entity. The single owner of its mutable `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique, immutable identity.
    pub id: TagId,
    /// Display label; renameable any number of times. Duplicate labels
    /// across different ids are permitted.
    pub label: String,
}

impl Tag {
    /// Creates a tag from caller-supplied identity and label.
    pub fn new(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Canonical persisted note record.
///
/// Tags are stored as an ordered id list; this is the only on-disk
/// representation of the note/tag relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNote {
    /// Stable global ID.
    pub id: NoteId,
    pub title: String,
    /// Markdown body. Rendering is the consumer's concern.
    pub markdown: String,
    /// Ordered tag references. May contain ids with no matching `Tag`.
    #[serde(rename = "tagIds")]
    pub tag_ids: Vec<TagId>,
}

impl RawNote {
    /// Creates a note record with a generated stable ID.
    pub fn new(draft: NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Creates a note record with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            markdown: draft.markdown,
            tag_ids: tag_ids_of(&draft.tags),
        }
    }
}

/// Input shape for note creation. Carries full `Tag` entities; the id
/// projection happens at the repository boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        markdown: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            title: title.into(),
            markdown: markdown.into(),
            tags,
        }
    }
}

/// Partial-merge input shape for note updates.
///
/// `None` fields leave the stored value unchanged; `Some` fields replace it
/// wholesale (`tags` replaces the full reference list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub markdown: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

impl NotePatch {
    /// Convenience constructor for the common full-replacement update.
    pub fn replace(
        title: impl Into<String>,
        markdown: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            markdown: Some(markdown.into()),
            tags: Some(tags),
        }
    }
}

/// Derived read model: a note with its tag references resolved to entities.
///
/// Never persisted and never mutated directly; recomputed from the two
/// source collections after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNote {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    /// Resolved tags in `tag_ids` order, dangling ids dropped.
    pub tags: Vec<Tag>,
}

/// Projects full tag entities down to their id list.
pub fn tag_ids_of(tags: &[Tag]) -> Vec<TagId> {
    tags.iter().map(|tag| tag.id.clone()).collect()
}
