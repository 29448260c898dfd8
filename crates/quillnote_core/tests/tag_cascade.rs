use quillnote_core::{
    MemoryStore, NoteDraft, NoteSession, RawNote, Store, Tag, NOTES_KEY, TAGS_KEY,
};

#[test]
fn deleting_a_tag_leaves_the_note_collection_untouched() {
    let mut store = MemoryStore::new();
    let mut session = NoteSession::open(&mut store).unwrap();
    let home = Tag::new("t1", "home");
    session.add_tag(home.clone()).unwrap();
    let id = session
        .create_note(NoteDraft::new("Groceries", "milk", vec![home]))
        .unwrap();

    session.delete_tag(&"t1".to_string()).unwrap();

    // The projection drops the dangling reference...
    let resolved = session.resolved_notes();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, id);
    assert!(resolved[0].tags.is_empty());

    // ...while the persisted note still carries it, and TAGS no longer
    // lists the tag.
    drop(session);
    let notes: Vec<RawNote> = store.load(NOTES_KEY, Vec::new()).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].tag_ids, vec!["t1".to_string()]);
    let tags: Vec<Tag> = store.load(TAGS_KEY, Vec::new()).unwrap();
    assert!(tags.is_empty());
}

#[test]
fn renaming_a_tag_updates_every_note_that_references_it() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();
    let tag = Tag::new("t1", "home");
    session.add_tag(tag.clone()).unwrap();
    session
        .create_note(NoteDraft::new("a", "", vec![tag.clone()]))
        .unwrap();
    session
        .create_note(NoteDraft::new("b", "", vec![tag]))
        .unwrap();

    session.update_tag(&"t1".to_string(), "errands").unwrap();

    for note in session.resolved_notes() {
        assert_eq!(note.tags[0].label, "errands");
    }
}

#[test]
fn reattaching_a_recreated_tag_id_resolves_again() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();
    session.add_tag(Tag::new("t1", "home")).unwrap();
    session
        .create_note(NoteDraft::new("n", "", vec![Tag::new("t1", "home")]))
        .unwrap();

    session.delete_tag(&"t1".to_string()).unwrap();
    assert!(session.resolved_notes()[0].tags.is_empty());

    // A new tag under the same id makes the dangling reference live again;
    // notes were never rewritten.
    session.add_tag(Tag::new("t1", "revived")).unwrap();
    assert_eq!(session.resolved_notes()[0].tags[0].label, "revived");
}
