use serde::{Deserialize, Serialize};

use crate::design::element_model::ElementPatch;

/// A recorded sequence of designer edits, replayed against a workspace.
/// Deserialized from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditScript {
    /// Human-readable name for this script
    pub name: String,

    /// Ordered list of edits to apply
    pub steps: Vec<EditStep>,
}

/// A single edit. Element and screen targets are either an alias bound by an
/// earlier `add_*` step or a literal id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditStep {
    /// Drop a component on the current screen
    AddElement {
        kind: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        alias: Option<String>,
    },

    /// Shallow-merge geometry and properties into an element
    UpdateElement {
        target: String,
        #[serde(flatten)]
        patch: ElementPatch,
    },

    RemoveElement {
        target: String,
    },

    ClearCanvas,

    Undo,

    Redo,

    /// Append a screen and make it current
    AddScreen {
        name: String,
        #[serde(default)]
        alias: Option<String>,
    },

    RenameScreen {
        target: String,
        name: String,
    },

    DeleteScreen {
        target: String,
    },

    SelectScreen {
        target: String,
    },

    ToggleDarkMode,

    /// Apply deferred history records
    Flush,

    /// Check the workspace state
    Expect {
        checks: Vec<Expectation>,
    },
}

/// A check evaluated against the workspace between edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    /// Number of elements on the current screen
    ElementCount { expected: usize },

    /// Number of screens in the document
    ScreenCount { expected: usize },

    /// Current screen, by alias or id
    CurrentScreen { expected: String },

    CanUndo { expected: bool },

    CanRedo { expected: bool },

    /// Generated code for the current screen contains the text
    CodeContains { expected: String },
}

/// Outcome of one expectation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectationResult {
    /// Which step this check belongs to (0-indexed)
    pub step_index: usize,

    pub check: Expectation,

    pub passed: bool,

    /// Observed value, for failed checks
    pub actual: Option<String>,
}

/// A step the workspace refused. Replay continues past it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectedStep {
    pub step_index: usize,
    pub message: String,
}

/// Result of replaying a complete script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub script_name: String,

    /// No rejected steps and every expectation held
    pub passed: bool,

    pub steps_run: usize,

    pub rejected: Vec<RejectedStep>,

    pub expectations: Vec<ExpectationResult>,
}
