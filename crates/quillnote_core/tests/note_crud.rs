use quillnote_core::{MemoryStore, NoteDraft, NotePatch, NoteSession, Tag};

#[test]
fn create_then_resolve_returns_the_note_with_its_tags() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();
    let home = Tag::new("t1", "home");
    session.add_tag(home.clone()).unwrap();

    let id = session
        .create_note(NoteDraft::new("Groceries", "milk", vec![home.clone()]))
        .unwrap();

    let resolved = session.resolved_notes();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, id);
    assert_eq!(resolved[0].title, "Groceries");
    assert_eq!(resolved[0].markdown, "milk");
    assert_eq!(resolved[0].tags, vec![home]);
}

#[test]
fn end_to_end_create_tag_then_attach_via_update() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();

    let id = session
        .create_note(NoteDraft::new("Groceries", "milk", Vec::new()))
        .unwrap();
    session.add_tag(Tag::new("t1", "home")).unwrap();
    session
        .update_note(
            &id,
            NotePatch::replace("Groceries", "milk", vec![Tag::new("t1", "home")]),
        )
        .unwrap();

    let resolved = session.resolved_notes();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].tags, vec![Tag::new("t1", "home")]);
}

#[test]
fn partial_patch_leaves_absent_fields_untouched() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();
    let work = Tag::new("w", "work");
    session.add_tag(work.clone()).unwrap();
    let id = session
        .create_note(NoteDraft::new("Standup", "notes", vec![work.clone()]))
        .unwrap();

    session
        .update_note(
            &id,
            NotePatch {
                title: Some("Standup (moved)".to_string()),
                ..NotePatch::default()
            },
        )
        .unwrap();

    let resolved = session.resolved_notes();
    assert_eq!(resolved[0].title, "Standup (moved)");
    assert_eq!(resolved[0].markdown, "notes");
    assert_eq!(resolved[0].tags, vec![work]);
}

#[test]
fn delete_note_removes_it_from_the_projection() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();
    let first = session
        .create_note(NoteDraft::new("keep", "", Vec::new()))
        .unwrap();
    let second = session
        .create_note(NoteDraft::new("drop", "", Vec::new()))
        .unwrap();

    session.delete_note(&second).unwrap();

    let resolved = session.resolved_notes();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, first);
}

#[test]
fn update_and_delete_on_stale_ids_leave_state_unchanged() {
    let mut session = NoteSession::open(MemoryStore::new()).unwrap();
    let id = session
        .create_note(NoteDraft::new("only", "note", Vec::new()))
        .unwrap();

    session
        .update_note(
            &"stale".to_string(),
            NotePatch::replace("x", "y", Vec::new()),
        )
        .unwrap();
    session.delete_note(&"stale".to_string()).unwrap();

    let resolved = session.resolved_notes();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, id);
    assert_eq!(resolved[0].title, "only");
}
