use std::collections::HashMap;

use tracing::debug;

use crate::design::element_model::{Element, ScreenId};
use crate::history::timeline::{HistoryStatus, Snapshot, Timeline};

/// Per-screen timelines. Every operation addressing a screen without a
/// timeline creates one first, so no call here can fail.
#[derive(Debug, Default)]
pub struct HistoryStore {
    timelines: HashMap<ScreenId, Timeline>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: an existing timeline is left untouched.
    pub fn ensure(&mut self, screen: &ScreenId) -> &mut Timeline {
        self.ensure_from(screen, &[])
    }

    /// Like [`ensure`](Self::ensure), but a newly created timeline starts at
    /// `base` instead of an empty snapshot.
    pub fn ensure_from(&mut self, screen: &ScreenId, base: &[Element]) -> &mut Timeline {
        self.timelines.entry(screen.clone()).or_insert_with(|| {
            debug!(screen = %screen, base = base.len(), "history: new timeline");
            Timeline::with_base(base)
        })
    }

    pub fn record(&mut self, screen: &ScreenId, elements: &[Element]) {
        let timeline = self.ensure(screen);
        timeline.record(elements);
        debug!(
            screen = %screen,
            cursor = timeline.cursor(),
            len = timeline.len(),
            "history: recorded snapshot"
        );
    }

    pub fn undo(&mut self, screen: &ScreenId) -> Option<Snapshot> {
        let timeline = self.ensure(screen);
        let restored = timeline.undo();
        debug!(screen = %screen, cursor = timeline.cursor(), applied = restored.is_some(), "history: undo");
        restored
    }

    pub fn redo(&mut self, screen: &ScreenId) -> Option<Snapshot> {
        let timeline = self.ensure(screen);
        let restored = timeline.redo();
        debug!(screen = %screen, cursor = timeline.cursor(), applied = restored.is_some(), "history: redo");
        restored
    }

    /// Status of `screen`'s timeline; a screen never recorded reports the
    /// fresh single-snapshot state.
    pub fn status(&self, screen: &ScreenId) -> HistoryStatus {
        self.timelines
            .get(screen)
            .map(Timeline::status)
            .unwrap_or_else(|| Timeline::new().status())
    }

    pub fn timeline(&self, screen: &ScreenId) -> Option<&Timeline> {
        self.timelines.get(screen)
    }

    pub fn discard(&mut self, screen: &ScreenId) {
        if self.timelines.remove(screen).is_some() {
            debug!(screen = %screen, "history: discarded timeline");
        }
    }

    pub fn contains(&self, screen: &ScreenId) -> bool {
        self.timelines.contains_key(screen)
    }
}
