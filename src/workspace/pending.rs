use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::design::element_model::{Element, ScreenId};
use crate::history::store::HistoryStore;

/// When a mutation's history snapshot is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Inside the mutation itself.
    #[default]
    Immediate,
    /// Queued and applied on the next `flush`.
    Deferred,
}

/// A history write decided by a mutation. Target screen and elements are
/// captured when the mutation happens, never looked up when it is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRecord {
    pub screen_id: ScreenId,
    pub elements: Vec<Element>,
}

/// FIFO of decided-but-unapplied history writes.
#[derive(Debug, Default)]
pub struct RecordQueue {
    queue: VecDeque<PendingRecord>,
}

impl RecordQueue {
    pub fn push(&mut self, record: PendingRecord) {
        self.queue.push_back(record);
    }

    /// Apply every queued record in decision order. Returns how many ran.
    pub fn flush(&mut self, history: &mut HistoryStore) -> usize {
        let count = self.queue.len();
        while let Some(record) = self.queue.pop_front() {
            history.record(&record.screen_id, &record.elements);
        }
        count
    }

    /// Forget queued records for a screen that no longer exists.
    pub fn drop_screen(&mut self, screen: &ScreenId) {
        self.queue.retain(|r| &r.screen_id != screen);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
