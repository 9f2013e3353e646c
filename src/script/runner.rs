use tracing::{debug, warn};

use crate::design::element_model::ComponentKind;
use crate::script::context::ReplayContext;
use crate::script::error::ScriptError;
use crate::script::script_model::{EditScript, EditStep, Expectation, ExpectationResult, ReplayReport};
use crate::workspace::workspace::Workspace;

/// Replays an `EditScript` step by step through a `Workspace`.
pub struct ScriptRunner;

impl ScriptRunner {
    pub fn parse(yaml: &str) -> Result<EditScript, ScriptError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Run every step. A rejected step is reported and skipped; the
    /// workspace is left as the step found it.
    pub fn run(script: &EditScript, workspace: &mut Workspace) -> ReplayReport {
        let mut ctx = ReplayContext::new();

        for (i, step) in script.steps.iter().enumerate() {
            ctx.current_step = i;
            if let Err(e) = Self::execute_step(step, workspace, &mut ctx) {
                warn!(step = i, error = %e, "replay: step rejected");
                ctx.reject(&e);
            }
        }

        debug!(
            script = %script.name,
            steps = script.steps.len(),
            rejected = ctx.rejected.len(),
            failed_checks = ctx.fail_count(),
            "replay: finished"
        );
        ReplayReport {
            script_name: script.name.clone(),
            passed: ctx.all_passed(),
            steps_run: script.steps.len(),
            rejected: ctx.rejected,
            expectations: ctx.expectations,
        }
    }

    fn execute_step(
        step: &EditStep,
        workspace: &mut Workspace,
        ctx: &mut ReplayContext,
    ) -> Result<(), ScriptError> {
        match step {
            EditStep::AddElement { kind, x, y, alias } => {
                let id = workspace.add_element(&ComponentKind::parse(kind), *x, *y);
                if let Some(alias) = alias {
                    ctx.bind_element(alias, id)?;
                }
                Ok(())
            }

            EditStep::UpdateElement { target, patch } => {
                if workspace.update_element(&ctx.element(target), patch) {
                    Ok(())
                } else {
                    Err(ScriptError::UnknownElement(target.clone()))
                }
            }

            EditStep::RemoveElement { target } => {
                if workspace.remove_element(&ctx.element(target)) {
                    Ok(())
                } else {
                    Err(ScriptError::UnknownElement(target.clone()))
                }
            }

            EditStep::ClearCanvas => {
                workspace.clear_canvas();
                Ok(())
            }

            EditStep::Undo => {
                workspace.undo();
                Ok(())
            }

            EditStep::Redo => {
                workspace.redo();
                Ok(())
            }

            EditStep::AddScreen { name, alias } => {
                let id = workspace.add_screen(name);
                if let Some(alias) = alias {
                    ctx.bind_screen(alias, id)?;
                }
                Ok(())
            }

            EditStep::RenameScreen { target, name } => {
                Ok(workspace.rename_screen(&ctx.screen(target), name)?)
            }

            EditStep::DeleteScreen { target } => Ok(workspace.delete_screen(&ctx.screen(target))?),

            EditStep::SelectScreen { target } => Ok(workspace.select_screen(&ctx.screen(target))?),

            EditStep::ToggleDarkMode => {
                workspace.toggle_dark_mode();
                Ok(())
            }

            EditStep::Flush => {
                workspace.flush_pending();
                Ok(())
            }

            EditStep::Expect { checks } => {
                let view: &Workspace = workspace;
                let bindings: &ReplayContext = ctx;
                let results: Vec<ExpectationResult> = checks
                    .iter()
                    .map(|check| Self::evaluate(check, bindings.current_step, view, bindings))
                    .collect();
                ctx.expectations.extend(results);
                Ok(())
            }
        }
    }

    fn evaluate(
        check: &Expectation,
        step_index: usize,
        workspace: &Workspace,
        ctx: &ReplayContext,
    ) -> ExpectationResult {
        let (passed, actual) = match check {
            Expectation::ElementCount { expected } => {
                let n = workspace.current_screen().elements.len();
                (n == *expected, n.to_string())
            }
            Expectation::ScreenCount { expected } => {
                let n = workspace.document().screens.len();
                (n == *expected, n.to_string())
            }
            Expectation::CurrentScreen { expected } => {
                let current = workspace.current_screen_id();
                (*current == ctx.screen(expected), current.to_string())
            }
            Expectation::CanUndo { expected } => {
                let can = workspace.history_status().can_undo;
                (can == *expected, can.to_string())
            }
            Expectation::CanRedo { expected } => {
                let can = workspace.history_status().can_redo;
                (can == *expected, can.to_string())
            }
            Expectation::CodeContains { expected } => {
                let code = workspace.generate_code();
                let passed = code.contains(expected.as_str());
                (passed, format!("{} chars of generated code", code.len()))
            }
        };

        ExpectationResult {
            step_index,
            check: check.clone(),
            passed,
            actual: if passed { None } else { Some(actual) },
        }
    }
}
