//! Tag collection repository.
//!
//! # Responsibility
//! - Own the `Tag` collection: add, rename, delete.
//! - Persist the whole collection under the `TAGS` entry after each
//!   mutation.
//!
//! # Invariants
//! - Only `id` is unique; duplicate labels are permitted.
//! - Deleting a tag never touches any note's reference list. Notes keep
//!   dangling ids; the view layer filters them out at read time.

use super::{MutationOutcome, RepoResult};
use crate::model::note::{Tag, TagId};
use crate::store::Store;

/// Store entry holding the serialized tag collection.
pub const TAGS_KEY: &str = "TAGS";

/// Repository owning the tag collection.
#[derive(Debug, Default)]
pub struct TagRepository {
    tags: Vec<Tag>,
}

impl TagRepository {
    /// Loads the collection from the `TAGS` entry, defaulting to empty.
    pub fn load<S: Store>(store: &S) -> RepoResult<Self> {
        let tags = store.load(TAGS_KEY, Vec::new())?;
        Ok(Self { tags })
    }

    /// Current tag collection in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Looks up one tag by id.
    pub fn get(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    /// Appends a tag and persists. No label uniqueness check.
    ///
    /// As with all mutations here, the store write happens first and the
    /// in-memory collection commits only on success.
    pub fn add<S: Store>(&mut self, store: &mut S, tag: Tag) -> RepoResult<()> {
        let mut candidate = self.tags.clone();
        candidate.push(tag);
        store.save(TAGS_KEY, &candidate)?;
        self.tags = candidate;
        Ok(())
    }

    /// Replaces the label of the tag carrying `id` and persists.
    pub fn rename<S: Store>(
        &mut self,
        store: &mut S,
        id: &TagId,
        label: &str,
    ) -> RepoResult<MutationOutcome> {
        let Some(position) = self.tags.iter().position(|tag| &tag.id == id) else {
            return Ok(MutationOutcome::NotFound);
        };
        let mut candidate = self.tags.clone();
        candidate[position].label = label.to_string();
        store.save(TAGS_KEY, &candidate)?;
        self.tags = candidate;
        Ok(MutationOutcome::Applied)
    }

    /// Removes the tag carrying `id` and persists.
    ///
    /// Cascade-by-omission: note reference lists are left as they are.
    pub fn delete<S: Store>(
        &mut self,
        store: &mut S,
        id: &TagId,
    ) -> RepoResult<MutationOutcome> {
        let mut candidate = self.tags.clone();
        candidate.retain(|tag| &tag.id != id);
        if candidate.len() == self.tags.len() {
            return Ok(MutationOutcome::NotFound);
        }
        store.save(TAGS_KEY, &candidate)?;
        self.tags = candidate;
        Ok(MutationOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::{TagRepository, TAGS_KEY};
    use crate::model::note::Tag;
    use crate::repo::MutationOutcome;
    use crate::store::{MemoryStore, Store};

    #[test]
    fn add_persists_whole_collection() {
        let mut store = MemoryStore::new();
        let mut repo = TagRepository::load(&store).unwrap();
        repo.add(&mut store, Tag::new("t1", "home")).unwrap();
        repo.add(&mut store, Tag::new("t2", "work")).unwrap();

        let persisted: Vec<Tag> = store.load(TAGS_KEY, Vec::new()).unwrap();
        assert_eq!(persisted, repo.tags());
        assert_eq!(persisted.len(), 2);
    }

    #[test]
    fn duplicate_labels_are_permitted() {
        let mut store = MemoryStore::new();
        let mut repo = TagRepository::load(&store).unwrap();
        repo.add(&mut store, Tag::new("t1", "home")).unwrap();
        repo.add(&mut store, Tag::new("t2", "home")).unwrap();
        assert_eq!(repo.tags().len(), 2);
    }

    #[test]
    fn rename_missing_id_is_not_found_and_does_not_persist() {
        let mut store = MemoryStore::new();
        let mut repo = TagRepository::load(&store).unwrap();

        let outcome = repo.rename(&mut store, &"ghost".to_string(), "x").unwrap();
        assert_eq!(outcome, MutationOutcome::NotFound);
        assert_eq!(store.load_raw(TAGS_KEY).unwrap(), None);
    }

    #[test]
    fn delete_removes_only_the_matching_tag() {
        let mut store = MemoryStore::new();
        let mut repo = TagRepository::load(&store).unwrap();
        repo.add(&mut store, Tag::new("t1", "home")).unwrap();
        repo.add(&mut store, Tag::new("t2", "work")).unwrap();

        let outcome = repo.delete(&mut store, &"t1".to_string()).unwrap();
        assert!(outcome.is_applied());
        assert_eq!(repo.tags(), &[Tag::new("t2", "work")]);
    }
}
