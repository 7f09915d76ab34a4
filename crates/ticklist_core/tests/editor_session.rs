use ticklist_core::{
    EditorMode, MemoryBlobStorage, StoreError, SubmitOutcome, TaskSession, TaskValidationError,
};
use uuid::Uuid;

fn open_session() -> TaskSession<MemoryBlobStorage> {
    TaskSession::open(MemoryBlobStorage::new()).unwrap()
}

#[test]
fn submit_adds_when_idle() {
    let mut session = open_session();

    let outcome = session.submit("Buy milk").unwrap();
    assert!(matches!(outcome, SubmitOutcome::Added(_)));
    assert_eq!(session.mode(), EditorMode::Idle);
    assert_eq!(session.tasks().len(), 1);
    assert_eq!(session.tasks()[0].text, "Buy milk");
}

#[test]
fn start_edit_requires_an_existing_task() {
    let mut session = open_session();
    session.submit("Y").unwrap();

    assert!(!session.start_edit(Uuid::new_v4()));
    assert_eq!(session.mode(), EditorMode::Idle);

    let id = session.tasks()[0].id;
    assert!(session.start_edit(id));
    assert_eq!(session.mode(), EditorMode::Editing(id));
    assert_eq!(session.editing_task().unwrap().text, "Y");
}

#[test]
fn submit_updates_the_edited_task_and_returns_to_idle() {
    let mut session = open_session();
    session.submit("draft").unwrap();
    let id = session.tasks()[0].id;

    session.start_edit(id);
    let outcome = session.submit("final").unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated(id));
    assert_eq!(session.mode(), EditorMode::Idle);
    assert_eq!(session.tasks()[0].text, "final");
    assert_eq!(session.tasks().len(), 1);
}

#[test]
fn validation_failure_keeps_edit_mode() {
    let mut session = open_session();
    session.submit("keep").unwrap();
    let id = session.tasks()[0].id;
    session.start_edit(id);

    let err = session.submit("   ").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::EmptyText)
    ));
    // Failed submit does not change mode; the form stays open.
    assert_eq!(session.mode(), EditorMode::Editing(id));
    assert_eq!(session.tasks()[0].text, "keep");
}

#[test]
fn cancel_discards_the_edit() {
    let mut session = open_session();
    session.submit("original").unwrap();
    let id = session.tasks()[0].id;

    session.start_edit(id);
    session.cancel_edit();

    assert_eq!(session.mode(), EditorMode::Idle);
    assert_eq!(session.tasks()[0].text, "original");
}

#[test]
fn deleting_the_task_under_edit_leaves_the_editor_dangling() {
    let mut session = open_session();
    session.submit("Y").unwrap();
    let id = session.tasks()[0].id;
    session.start_edit(id);

    let removed = session.delete(id).unwrap();
    assert!(removed);

    // The editor intentionally keeps its dangling target so the open
    // form does not vanish mid-keystroke.
    assert_eq!(session.mode(), EditorMode::Editing(id));
    assert!(session.editing_task().is_none());
}

#[test]
fn submit_after_delete_under_edit_discards_input_and_resets() {
    let mut session = open_session();
    session.submit("Y").unwrap();
    let id = session.tasks()[0].id;
    session.start_edit(id);
    session.delete(id).unwrap();

    let outcome = session.submit("Z").unwrap();

    assert_eq!(outcome, SubmitOutcome::Discarded);
    assert_eq!(session.mode(), EditorMode::Idle);
    assert!(session.is_empty());
    // The discarded text was written nowhere; a following submit adds.
    let outcome = session.submit("Z").unwrap();
    assert!(matches!(outcome, SubmitOutcome::Added(_)));
    assert_eq!(session.tasks()[0].text, "Z");
}

#[test]
fn toggle_and_counts_flow_through_the_session() {
    let mut session = open_session();
    session.submit("X").unwrap();
    let id = session.tasks()[0].id;

    session.toggle(id).unwrap();
    let counts = session.counts();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.active, 0);

    session.toggle(id).unwrap();
    assert!(!session.tasks()[0].completed);
    assert!(!session.is_empty());
}

#[test]
fn session_restart_reloads_tasks_and_resets_the_editor() {
    let storage = {
        let mut session = open_session();
        session.submit("survives").unwrap();
        let id = session.tasks()[0].id;
        session.start_edit(id);
        let blob = serde_json::to_string(session.tasks()).unwrap();
        MemoryBlobStorage::with_blob(blob)
    };

    let session = TaskSession::open(storage).unwrap();
    assert_eq!(session.tasks().len(), 1);
    assert_eq!(session.tasks()[0].text, "survives");
    // Editor state is process-local, never persisted.
    assert_eq!(session.mode(), EditorMode::Idle);
}
