use screen_designer::design::element_model::ScreenId;
use screen_designer::script::runner::ScriptRunner;
use screen_designer::script::script_model::{EditScript, EditStep, Expectation, ReplayReport};
use screen_designer::workspace::pending::RecordPolicy;
use screen_designer::workspace::workspace::Workspace;

const LOGIN_SCRIPT: &str = r##"
name: login screen
steps:
  - action: add_element
    kind: textField
    x: 20
    y: 40
    alias: email
  - action: add_element
    kind: button
    x: 20
    y: 120
    alias: submit
  - action: update_element
    target: submit
    width: 200
    properties:
      text: Sign in
      color: "#4CAF50"
  - action: add_screen
    name: Dashboard
    alias: dash
  - action: select_screen
    target: screen-1
  - action: update_element
    target: email
    properties:
      label: Email
  - action: expect
    checks:
      - type: element_count
        expected: 2
      - type: screen_count
        expected: 2
      - type: current_screen
        expected: screen-1
      - type: code_contains
        expected: "Sign in"
"##;

fn run(yaml: &str, policy: RecordPolicy) -> (Workspace, ReplayReport) {
    let script = ScriptRunner::parse(yaml).unwrap();
    let mut ws = Workspace::new(policy);
    let report = ScriptRunner::run(&script, &mut ws);
    (ws, report)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_login_script() {
    let script: EditScript = serde_yaml::from_str(LOGIN_SCRIPT).unwrap();
    assert_eq!(script.name, "login screen");
    assert_eq!(script.steps.len(), 7);

    match &script.steps[2] {
        EditStep::UpdateElement { target, patch } => {
            assert_eq!(target, "submit");
            assert_eq!(patch.width, Some(200.0));
            assert_eq!(patch.x, None);
            assert_eq!(patch.properties["text"], "Sign in");
        }
        other => panic!("expected update_element, got {:?}", other),
    }
    match &script.steps[6] {
        EditStep::Expect { checks } => {
            assert_eq!(checks[0], Expectation::ElementCount { expected: 2 });
        }
        other => panic!("expected expect, got {:?}", other),
    }
}

#[test]
fn unit_steps_parse() {
    let script: EditScript = serde_yaml::from_str(
        "name: s\nsteps:\n  - action: undo\n  - action: redo\n  - action: clear_canvas\n  - action: toggle_dark_mode\n  - action: flush\n",
    )
    .unwrap();
    assert_eq!(
        script.steps,
        vec![
            EditStep::Undo,
            EditStep::Redo,
            EditStep::ClearCanvas,
            EditStep::ToggleDarkMode,
            EditStep::Flush
        ]
    );
}

#[test]
fn malformed_script_is_an_error() {
    assert!(ScriptRunner::parse("name: x\nsteps:\n  - action: explode\n").is_err());
}

// ============================================================================
// Replay
// ============================================================================

#[test]
fn login_script_replays_cleanly() {
    let (ws, report) = run(LOGIN_SCRIPT, RecordPolicy::Immediate);

    assert!(report.passed, "report: {:?}", report);
    assert_eq!(report.steps_run, 7);
    assert!(report.rejected.is_empty());
    assert_eq!(report.expectations.len(), 4);

    let code = ws.generate_code();
    assert!(code.contains("Text('Sign in')"));
    assert!(code.contains("Color(0xFF4caf50)"));
    assert!(code.contains("width: 200.0,"));
    assert!(code.contains("labelText: 'Email',"));
}

#[test]
fn rejected_steps_are_reported_and_skipped() {
    let yaml = r#"
name: bad steps
steps:
  - action: remove_element
    target: nothing
  - action: delete_screen
    target: screen-1
  - action: add_element
    kind: icon
  - action: expect
    checks:
      - type: element_count
        expected: 1
      - type: can_redo
        expected: true
"#;
    let (ws, report) = run(yaml, RecordPolicy::Immediate);

    assert!(!report.passed);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].step_index, 0);
    assert_eq!(report.rejected[1].step_index, 1);
    assert!(report.rejected[1].message.contains("only screen"));

    assert_eq!(report.expectations.len(), 2);
    assert!(report.expectations[0].passed);
    assert!(!report.expectations[1].passed);
    assert_eq!(report.expectations[1].actual.as_deref(), Some("false"));
    assert_eq!(ws.document().screens.len(), 1);
}

#[test]
fn duplicate_alias_is_rejected() {
    let yaml = r#"
name: dup
steps:
  - action: add_element
    kind: icon
    alias: a
  - action: add_element
    kind: icon
    alias: a
"#;
    let (ws, report) = run(yaml, RecordPolicy::Immediate);
    assert_eq!(report.rejected.len(), 1);
    assert!(report.rejected[0].message.contains("'a'"));
    assert_eq!(ws.current_elements().len(), 2);
}

#[test]
fn undo_redo_through_script() {
    let yaml = r#"
name: history
steps:
  - action: add_element
    kind: card
  - action: add_element
    kind: card
  - action: undo
  - action: expect
    checks:
      - type: element_count
        expected: 1
      - type: can_redo
        expected: true
  - action: redo
  - action: expect
    checks:
      - type: element_count
        expected: 2
"#;
    let (_, report) = run(yaml, RecordPolicy::Deferred);
    assert!(report.passed, "report: {:?}", report);
}

#[test]
fn screen_aliases_resolve() {
    let yaml = r#"
name: screens
steps:
  - action: add_screen
    name: Cart
    alias: cart
  - action: rename_screen
    target: cart
    name: Basket
  - action: select_screen
    target: screen-1
  - action: delete_screen
    target: cart
  - action: expect
    checks:
      - type: screen_count
        expected: 1
      - type: current_screen
        expected: screen-1
"#;
    let (ws, report) = run(yaml, RecordPolicy::Immediate);
    assert!(report.passed, "report: {:?}", report);
    assert_eq!(ws.current_screen_id(), &ScreenId::from("screen-1"));
}
