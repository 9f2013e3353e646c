use std::collections::HashMap;

use crate::design::element_model::{ElementId, ScreenId};
use crate::script::error::ScriptError;
use crate::script::script_model::{ExpectationResult, RejectedStep};

/// Alias bindings and results accumulated while a script replays.
#[derive(Debug, Clone, Default)]
pub struct ReplayContext {
    /// Current step index (0-based)
    pub current_step: usize,

    element_aliases: HashMap<String, ElementId>,
    screen_aliases: HashMap<String, ScreenId>,

    pub expectations: Vec<ExpectationResult>,
    pub rejected: Vec<RejectedStep>,
}

impl ReplayContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_element(&mut self, alias: &str, id: ElementId) -> Result<(), ScriptError> {
        if self.element_aliases.contains_key(alias) {
            return Err(ScriptError::DuplicateAlias(alias.to_string()));
        }
        self.element_aliases.insert(alias.to_string(), id);
        Ok(())
    }

    pub fn bind_screen(&mut self, alias: &str, id: ScreenId) -> Result<(), ScriptError> {
        if self.screen_aliases.contains_key(alias) {
            return Err(ScriptError::DuplicateAlias(alias.to_string()));
        }
        self.screen_aliases.insert(alias.to_string(), id);
        Ok(())
    }

    /// Alias lookup, falling back to the target as a literal id.
    pub fn element(&self, target: &str) -> ElementId {
        self.element_aliases
            .get(target)
            .cloned()
            .unwrap_or_else(|| ElementId::from(target))
    }

    pub fn screen(&self, target: &str) -> ScreenId {
        self.screen_aliases
            .get(target)
            .cloned()
            .unwrap_or_else(|| ScreenId::from(target))
    }

    pub fn reject(&mut self, error: &ScriptError) {
        self.rejected.push(RejectedStep {
            step_index: self.current_step,
            message: error.to_string(),
        });
    }

    pub fn all_passed(&self) -> bool {
        self.rejected.is_empty() && self.expectations.iter().all(|r| r.passed)
    }

    pub fn fail_count(&self) -> usize {
        self.expectations.iter().filter(|r| !r.passed).count()
    }
}
