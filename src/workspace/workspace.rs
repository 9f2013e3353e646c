use tracing::{debug, warn};

use crate::codegen::flutter::{generate_document_code, generate_flutter_code};
use crate::codegen::options::GenerateOptions;
use crate::design::element_model::{
    ComponentKind, Document, Element, ElementId, ElementPatch, Screen, ScreenId,
};
use crate::history::store::HistoryStore;
use crate::history::timeline::HistoryStatus;
use crate::workspace::error::WorkspaceError;
use crate::workspace::pending::{PendingRecord, RecordPolicy, RecordQueue};

/// Single owner of the document, the current-screen pointer and the history
/// table. All edits go through here so that each element mutation is paired
/// with exactly one history record for the screen it was decided on.
#[derive(Debug)]
pub struct Workspace {
    document: Document,
    current: ScreenId,
    history: HistoryStore,
    pending: RecordQueue,
    policy: RecordPolicy,
    selected: Option<ElementId>,
    dark_mode: bool,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(RecordPolicy::Immediate)
    }
}

impl Workspace {
    /// One empty "Home" screen (`screen-1`), current.
    pub fn new(policy: RecordPolicy) -> Self {
        Self::from_document(Document::default(), policy)
    }

    /// Open an existing document. The first screen becomes current; each
    /// screen's timeline starts from its loaded elements. A document without
    /// screens is replaced by the default one.
    pub fn from_document(document: Document, policy: RecordPolicy) -> Self {
        let document = if document.screens.is_empty() {
            Document::default()
        } else {
            document
        };
        let current = document.screens[0].id.clone();

        let mut workspace = Self {
            document,
            current,
            history: HistoryStore::new(),
            pending: RecordQueue::default(),
            policy,
            selected: None,
            dark_mode: false,
        };
        workspace.ensure_current_timeline();
        workspace
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current_screen_id(&self) -> &ScreenId {
        &self.current
    }

    pub fn current_screen(&self) -> &Screen {
        self.document
            .screen(&self.current)
            .unwrap_or(&self.document.screens[0])
    }

    /// Copy of the current screen's elements.
    pub fn current_elements(&self) -> Vec<Element> {
        self.current_screen().elements.clone()
    }

    pub fn selected_element(&self) -> Option<Element> {
        let id = self.selected.as_ref()?;
        self.current_screen()
            .elements
            .iter()
            .find(|el| &el.id == id)
            .cloned()
    }

    pub fn history_status(&self) -> HistoryStatus {
        self.history.status(&self.current)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn policy(&self) -> RecordPolicy {
        self.policy
    }

    pub fn pending_records(&self) -> usize {
        self.pending.len()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    // ========================================================================
    // Element mutations
    // ========================================================================

    /// Place a new `kind` at `(x, y)` with default size and properties, and
    /// select it.
    pub fn add_element(&mut self, kind: &ComponentKind, x: f64, y: f64) -> ElementId {
        let element = Element::new(kind, x, y);
        let id = element.id.clone();
        debug!(screen = %self.current, element = %id, kind = %kind, "workspace: add element");

        self.mutate_current(|elements| {
            elements.push(element);
            true
        });
        self.selected = Some(id.clone());
        id
    }

    /// Shallow-merge `patch` into the element. Returns `false` (and records
    /// nothing) when no element on the current screen has that id.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let updated = self.mutate_current(|elements| match elements.iter_mut().find(|el| &el.id == id) {
            Some(el) => {
                el.apply(patch);
                true
            }
            None => false,
        });
        if !updated {
            warn!(screen = %self.current, element = %id, "workspace: update of unknown element ignored");
        }
        updated
    }

    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        let removed = self.mutate_current(|elements| {
            let before = elements.len();
            elements.retain(|el| &el.id != id);
            elements.len() != before
        });
        if removed {
            if self.selected.as_ref() == Some(id) {
                self.selected = None;
            }
        } else {
            warn!(screen = %self.current, element = %id, "workspace: remove of unknown element ignored");
        }
        removed
    }

    /// Remove every element of the current screen. Always recorded.
    pub fn clear_canvas(&mut self) {
        debug!(screen = %self.current, "workspace: clear canvas");
        self.mutate_current(|elements| {
            elements.clear();
            true
        });
        self.selected = None;
    }

    /// Select an element of the current screen, or clear the selection.
    pub fn select_element(&mut self, id: Option<&ElementId>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) if self.current_screen().elements.iter().any(|el| &el.id == id) => {
                self.selected = Some(id.clone());
                true
            }
            Some(_) => false,
        }
    }

    /// Run `mutation` on the current screen's elements; when it reports a
    /// change, capture the result for history under the current screen id.
    fn mutate_current(&mut self, mutation: impl FnOnce(&mut Vec<Element>) -> bool) -> bool {
        let screen_id = self.current.clone();
        let Some(screen) = self.document.screen_mut(&screen_id) else {
            warn!(screen = %screen_id, "workspace: current screen missing");
            return false;
        };
        if !mutation(&mut screen.elements) {
            return false;
        }

        let record = PendingRecord {
            screen_id,
            elements: screen.elements.clone(),
        };
        match self.policy {
            RecordPolicy::Immediate => self.history.record(&record.screen_id, &record.elements),
            RecordPolicy::Deferred => self.pending.push(record),
        }
        true
    }

    /// Apply deferred history records in the order they were decided.
    pub fn flush_pending(&mut self) -> usize {
        let applied = self.pending.flush(&mut self.history);
        if applied > 0 {
            debug!(applied, "workspace: flushed deferred history records");
        }
        applied
    }

    // ========================================================================
    // Undo / redo
    // ========================================================================

    /// Step the current screen back one snapshot. Returns `false` at the
    /// start of the timeline.
    pub fn undo(&mut self) -> bool {
        self.flush_pending();
        match self.history.undo(&self.current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.flush_pending();
        match self.history.redo(&self.current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Vec<Element>) {
        if let Some(screen) = self.document.screen_mut(&self.current) {
            screen.elements = snapshot;
        }
        self.selected = None;
    }

    // ========================================================================
    // Screens
    // ========================================================================

    /// Append an empty screen and make it current.
    pub fn add_screen(&mut self, name: &str) -> ScreenId {
        let id = ScreenId::generate();
        debug!(screen = %id, name, "workspace: add screen");
        self.document.screens.push(Screen::new(id.clone(), name));
        self.current = id.clone();
        self.selected = None;
        self.ensure_current_timeline();
        id
    }

    pub fn rename_screen(&mut self, id: &ScreenId, name: &str) -> Result<(), WorkspaceError> {
        let screen = self
            .document
            .screen_mut(id)
            .ok_or_else(|| WorkspaceError::ScreenNotFound(id.clone()))?;
        screen.name = name.to_string();
        Ok(())
    }

    /// Delete a screen and its timeline. The last remaining screen cannot be
    /// deleted. Deleting the current screen makes the first remaining screen
    /// current; deleting any other screen leaves the current one alone.
    pub fn delete_screen(&mut self, id: &ScreenId) -> Result<(), WorkspaceError> {
        if !self.document.contains(id) {
            warn!(screen = %id, "workspace: delete of unknown screen rejected");
            return Err(WorkspaceError::ScreenNotFound(id.clone()));
        }
        if self.document.screens.len() <= 1 {
            warn!(screen = %id, "workspace: delete of last screen rejected");
            return Err(WorkspaceError::LastScreen(id.clone()));
        }

        self.document.screens.retain(|s| &s.id != id);
        self.history.discard(id);
        self.pending.drop_screen(id);
        debug!(screen = %id, "workspace: deleted screen");

        if &self.current == id {
            self.current = self.document.screens[0].id.clone();
            self.selected = None;
            self.ensure_current_timeline();
        }
        Ok(())
    }

    /// Make `id` current. Never touches any timeline's contents.
    pub fn select_screen(&mut self, id: &ScreenId) -> Result<(), WorkspaceError> {
        if !self.document.contains(id) {
            return Err(WorkspaceError::ScreenNotFound(id.clone()));
        }
        if &self.current != id {
            debug!(from = %self.current, to = %id, "workspace: switch screen");
            self.current = id.clone();
            self.selected = None;
        }
        self.ensure_current_timeline();
        Ok(())
    }

    /// Navigation from generated UI: an unknown target is ignored.
    pub fn navigate_to_screen(&mut self, id: &ScreenId) -> bool {
        self.select_screen(id).is_ok()
    }

    fn ensure_current_timeline(&mut self) {
        let base = self.current_elements();
        self.history.ensure_from(&self.current, &base);
    }

    // ========================================================================
    // Code generation
    // ========================================================================

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            dark_mode: self.dark_mode,
        }
    }

    /// Flutter source for the current screen.
    pub fn generate_code(&self) -> String {
        generate_flutter_code(&self.current_screen().elements, &self.generate_options())
    }

    /// Flutter source for every screen, with named-route navigation.
    pub fn generate_document_code(&self) -> String {
        generate_document_code(&self.document, &self.generate_options())
    }
}
