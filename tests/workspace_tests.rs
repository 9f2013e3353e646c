use screen_designer::codegen::flutter::EMPTY_PLACEHOLDER;
use screen_designer::design::component::Component;
use screen_designer::design::element_model::{ComponentKind, ElementId, ElementPatch, ScreenId};
use screen_designer::workspace::error::WorkspaceError;
use screen_designer::workspace::pending::RecordPolicy;
use screen_designer::workspace::workspace::Workspace;

mod common;
use crate::common::builders::two_screen_document;

fn immediate() -> Workspace {
    Workspace::new(RecordPolicy::Immediate)
}

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn starts_with_one_home_screen() {
    let ws = immediate();
    assert_eq!(ws.document().screens.len(), 1);
    assert_eq!(ws.current_screen_id(), &ScreenId::from("screen-1"));
    assert_eq!(ws.current_screen().name, "Home");
    assert!(ws.current_elements().is_empty());
    assert!(ws.history().contains(&ScreenId::from("screen-1")));
    assert!(!ws.dark_mode());
}

#[test]
fn opened_document_starts_history_at_its_content() {
    let mut ws = Workspace::from_document(two_screen_document(), RecordPolicy::Immediate);
    assert_eq!(ws.current_elements().len(), 1);
    assert!(!ws.history_status().can_undo);
    assert!(!ws.undo());
    assert_eq!(ws.current_elements().len(), 1);
}

// ============================================================================
// Element mutations
// ============================================================================

#[test]
fn add_element_selects_and_records() {
    let mut ws = immediate();
    let id = ws.add_element(&ComponentKind::Button, 10.0, 20.0);

    assert_eq!(ws.selected_element().map(|el| el.id), Some(id));
    let status = ws.history_status();
    assert_eq!((status.cursor, status.len), (1, 2));
}

#[test]
fn each_mutation_records_once() {
    let mut ws = immediate();
    let id = ws.add_element(&ComponentKind::Card, 0.0, 0.0);
    assert!(ws.update_element(&id, &ElementPatch::position(5.0, 5.0)));
    assert!(ws.remove_element(&id));
    ws.clear_canvas();

    assert_eq!(ws.history_status().len, 5);
}

#[test]
fn update_merges_properties() {
    let mut ws = immediate();
    let id = ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    ws.update_element(&id, &ElementPatch::default().property("text", "Buy"));

    let el = ws.selected_element().unwrap();
    match el.component {
        Component::Button(p) => {
            assert_eq!(p.text, "Buy");
            assert_eq!(p.variant, "primary");
        }
        other => panic!("expected button, got {:?}", other),
    }
}

#[test]
fn missing_element_changes_nothing() {
    let mut ws = immediate();
    let ghost = ElementId::from("ghost");
    assert!(!ws.update_element(&ghost, &ElementPatch::position(1.0, 1.0)));
    assert!(!ws.remove_element(&ghost));
    assert_eq!(ws.history_status().len, 1);
}

#[test]
fn remove_clears_selection() {
    let mut ws = immediate();
    let id = ws.add_element(&ComponentKind::Icon, 0.0, 0.0);
    ws.remove_element(&id);
    assert!(ws.selected_element().is_none());
    assert!(ws.current_elements().is_empty());
}

#[test]
fn current_elements_is_a_copy() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Icon, 0.0, 0.0);
    let mut copy = ws.current_elements();
    copy.clear();
    assert_eq!(ws.current_elements().len(), 1);
}

// ============================================================================
// Undo / redo
// ============================================================================

#[test]
fn undo_and_redo_restore_elements() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    ws.add_element(&ComponentKind::Switch, 0.0, 0.0);

    assert!(ws.undo());
    assert_eq!(ws.current_elements().len(), 1);
    assert!(ws.selected_element().is_none());

    assert!(ws.redo());
    assert_eq!(ws.current_elements().len(), 2);
    assert!(!ws.redo());
}

#[test]
fn undo_after_clear_brings_elements_back() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    ws.add_element(&ComponentKind::Card, 0.0, 0.0);
    ws.clear_canvas();
    assert!(ws.current_elements().is_empty());

    ws.undo();
    assert_eq!(ws.current_elements().len(), 2);
}

#[test]
fn undo_is_per_screen() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    let second = ws.add_screen("Second");
    ws.add_element(&ComponentKind::Card, 0.0, 0.0);

    ws.select_screen(&ScreenId::from("screen-1")).unwrap();
    ws.undo();
    assert!(ws.current_elements().is_empty());

    ws.select_screen(&second).unwrap();
    assert_eq!(ws.current_elements().len(), 1);
    assert!(ws.history_status().can_undo);
}

// ============================================================================
// Screens
// ============================================================================

#[test]
fn add_screen_becomes_current_with_fresh_history() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    let id = ws.add_screen("Settings");

    assert_eq!(ws.current_screen_id(), &id);
    assert_eq!(ws.current_screen().name, "Settings");
    assert!(ws.current_elements().is_empty());
    let status = ws.history_status();
    assert_eq!((status.cursor, status.len), (0, 1));
}

#[test]
fn switching_screens_leaves_timelines_alone() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    let before = ws.history_status();
    let other = ws.add_screen("Other");

    ws.select_screen(&ScreenId::from("screen-1")).unwrap();
    ws.select_screen(&other).unwrap();
    ws.select_screen(&ScreenId::from("screen-1")).unwrap();
    assert_eq!(ws.history_status(), before);
}

#[test]
fn selecting_unknown_screen_is_rejected() {
    let mut ws = immediate();
    let err = ws.select_screen(&ScreenId::from("nope")).unwrap_err();
    assert_eq!(err, WorkspaceError::ScreenNotFound(ScreenId::from("nope")));
    assert!(!ws.navigate_to_screen(&ScreenId::from("nope")));
    assert_eq!(ws.current_screen_id(), &ScreenId::from("screen-1"));
}

#[test]
fn rename_screen() {
    let mut ws = immediate();
    ws.rename_screen(&ScreenId::from("screen-1"), "Start").unwrap();
    assert_eq!(ws.current_screen().name, "Start");
    assert!(ws.rename_screen(&ScreenId::from("x"), "Y").is_err());
}

#[test]
fn deleting_only_screen_is_rejected() {
    let mut ws = immediate();
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    let err = ws.delete_screen(&ScreenId::from("screen-1")).unwrap_err();

    assert_eq!(err, WorkspaceError::LastScreen(ScreenId::from("screen-1")));
    assert_eq!(ws.document().screens.len(), 1);
    assert_eq!(ws.current_elements().len(), 1);
    assert!(ws.history().contains(&ScreenId::from("screen-1")));
}

#[test]
fn deleting_other_screen_keeps_current() {
    let mut ws = immediate();
    let second = ws.add_screen("Second");
    let third = ws.add_screen("Third");
    ws.select_screen(&second).unwrap();

    ws.delete_screen(&third).unwrap();
    assert_eq!(ws.current_screen_id(), &second);
    assert!(!ws.history().contains(&third));
    assert_eq!(ws.document().screens.len(), 2);
}

#[test]
fn deleting_current_screen_promotes_first() {
    let mut ws = immediate();
    let second = ws.add_screen("Second");
    ws.delete_screen(&second).unwrap();

    assert_eq!(ws.current_screen_id(), &ScreenId::from("screen-1"));
    assert!(!ws.history().contains(&second));
}

#[test]
fn deleting_unknown_screen_is_rejected() {
    let mut ws = immediate();
    ws.add_screen("Second");
    let err = ws.delete_screen(&ScreenId::from("ghost")).unwrap_err();
    assert_eq!(err, WorkspaceError::ScreenNotFound(ScreenId::from("ghost")));
    assert_eq!(ws.document().screens.len(), 2);
}

// ============================================================================
// Deferred recording
// ============================================================================

#[test]
fn deferred_record_targets_screen_it_was_decided_on() {
    let mut ws = Workspace::new(RecordPolicy::Deferred);
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    assert_eq!(ws.pending_records(), 1);

    let second = ws.add_screen("Second");
    assert_eq!(ws.flush_pending(), 1);

    let home = ws.history().status(&ScreenId::from("screen-1"));
    assert_eq!((home.cursor, home.len), (1, 2));
    let fresh = ws.history().status(&second);
    assert_eq!((fresh.cursor, fresh.len), (0, 1));
}

#[test]
fn undo_flushes_pending_first() {
    let mut ws = Workspace::new(RecordPolicy::Deferred);
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    ws.add_element(&ComponentKind::Card, 0.0, 0.0);

    assert!(ws.undo());
    assert_eq!(ws.pending_records(), 0);
    assert_eq!(ws.current_elements().len(), 1);
}

#[test]
fn deleting_screen_drops_its_pending_records() {
    let mut ws = Workspace::new(RecordPolicy::Deferred);
    let second = ws.add_screen("Second");
    ws.add_element(&ComponentKind::Button, 0.0, 0.0);
    ws.select_screen(&ScreenId::from("screen-1")).unwrap();
    ws.add_element(&ComponentKind::Card, 0.0, 0.0);
    assert_eq!(ws.pending_records(), 2);

    ws.delete_screen(&second).unwrap();
    assert_eq!(ws.pending_records(), 1);
    ws.flush_pending();
    assert!(!ws.history().contains(&second));
    assert_eq!(ws.history_status().len, 2);
}

// ============================================================================
// Code generation
// ============================================================================

#[test]
fn generate_code_follows_dark_mode() {
    let mut ws = immediate();
    assert!(ws.generate_code().contains(EMPTY_PLACEHOLDER));
    assert!(ws.toggle_dark_mode());
    assert!(ws.generate_code().contains("Brightness.dark"));
    assert!(!ws.toggle_dark_mode());
    assert!(ws.generate_code().contains("Brightness.light"));
}

#[test]
fn generate_document_code_covers_all_screens() {
    let mut ws = immediate();
    ws.add_screen("Profile");
    let code = ws.generate_document_code();
    assert!(code.contains("class Screen1Page"));
    assert!(code.contains("class Screen2Page"));
    assert!(code.contains("title: const Text('Profile'),"));
}
