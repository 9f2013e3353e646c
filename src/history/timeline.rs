use serde::Serialize;

use crate::design::element_model::Element;

/// Maximum snapshots kept per screen. Recording past this drops the oldest.
pub const MAX_SNAPSHOTS: usize = 50;

pub type Snapshot = Vec<Element>;

/// Edit timeline of one screen: snapshots plus a cursor addressing the visible
/// one. Invariant: `cursor < snapshots.len()`, and there is always at least
/// one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

/// Cursor position and enablement flags, for greying out undo/redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryStatus {
    pub cursor: usize,
    pub len: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// A single empty snapshot at cursor 0.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            cursor: 0,
        }
    }

    /// A single snapshot holding `base`, for screens opened with content.
    pub fn with_base(base: &[Element]) -> Self {
        Self {
            snapshots: vec![base.to_vec()],
            cursor: 0,
        }
    }

    /// Append a copy of `elements`, discarding the redo branch.
    pub fn record(&mut self, elements: &[Element]) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(elements.to_vec());
        self.cursor = self.snapshots.len() - 1;

        if self.snapshots.len() > MAX_SNAPSHOTS {
            self.snapshots.remove(0);
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Copy of the snapshot under the cursor.
    pub fn current(&self) -> Snapshot {
        self.snapshots[self.cursor].clone()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            cursor: self.cursor,
            len: self.snapshots.len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
