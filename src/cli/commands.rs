use tracing::info;

use crate::cli::error::DesignerError;
use crate::codegen::flutter::{generate_document_code, generate_flutter_code};
use crate::codegen::options::GenerateOptions;
use crate::design::defaults::{all_defaults, resolve_defaults_by_name};
use crate::design::element_model::{Document, ScreenId};
use crate::script::runner::ScriptRunner;
use crate::script::script_model::{EditScript, ReplayReport};
use crate::workspace::pending::RecordPolicy;
use crate::workspace::workspace::Workspace;

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    document_path: &str,
    screen: Option<&str>,
    all_screens: bool,
    dark_mode: bool,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(document_path)?;
    info!(
        path = document_path,
        screens = document.screens.len(),
        all_screens,
        dark_mode,
        "generate: loaded document"
    );

    let code = render_code(&document, screen, all_screens, &GenerateOptions { dark_mode })?;
    write_output(output, &code)?;
    Ok(())
}

/// Generated code for one screen (by id, default first) or the whole document.
pub fn render_code(
    document: &Document,
    screen: Option<&str>,
    all_screens: bool,
    options: &GenerateOptions,
) -> Result<String, DesignerError> {
    if all_screens {
        return Ok(generate_document_code(document, options));
    }

    let elements = match screen {
        Some(id) => {
            &document
                .screen(&ScreenId::from(id))
                .ok_or_else(|| DesignerError::UnknownScreen(id.to_string()))?
                .elements
        }
        None => match document.screens.first() {
            Some(first) => &first.elements,
            None => return Ok(generate_flutter_code(&[], options)),
        },
    };
    Ok(generate_flutter_code(elements, options))
}

/// Load a document from JSON. Also accepts a bare element array, read as a
/// single "Home" screen.
pub fn load_document(path: &str) -> Result<Document, DesignerError> {
    let content = std::fs::read_to_string(path).map_err(|e| DesignerError::io(path, e))?;
    parse_document(&content)
}

pub fn parse_document(content: &str) -> Result<Document, DesignerError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        let mut document = Document::default();
        document.screens[0].elements = serde_json::from_value(value)?;
        return Ok(document);
    }
    Ok(serde_json::from_value(value)?)
}

// ============================================================================
// defaults subcommand
// ============================================================================

pub fn cmd_defaults(kind: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", defaults_json(kind)?);
    Ok(())
}

pub fn defaults_json(kind: Option<&str>) -> Result<String, serde_json::Error> {
    match kind {
        Some(name) => serde_json::to_string_pretty(&resolve_defaults_by_name(name)),
        None => serde_json::to_string_pretty(&all_defaults()),
    }
}

// ============================================================================
// replay subcommand
// ============================================================================

/// Replay a script and return whether it ran without rejections or failed
/// expectations.
pub fn cmd_replay(
    script_path: &str,
    dark_mode: bool,
    policy: RecordPolicy,
    output: Option<&str>,
    save_document: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let script = load_script(script_path)?;
    info!(script = %script.name, steps = script.steps.len(), ?policy, "replay: starting");

    let mut workspace = Workspace::new(policy);
    workspace.set_dark_mode(dark_mode);
    let report = ScriptRunner::run(&script, &mut workspace);
    workspace.flush_pending();

    if verbose > 0 || !report.passed {
        eprint!("{}", format_replay_summary(&report));
    }

    write_output(output, &workspace.generate_code())?;

    if let Some(path) = save_document {
        let json = serde_json::to_string_pretty(workspace.document())?;
        std::fs::write(path, json).map_err(|e| DesignerError::io(path, e))?;
        info!(path, "replay: saved document");
    }

    Ok(report.passed)
}

pub fn load_script(path: &str) -> Result<EditScript, DesignerError> {
    let content = std::fs::read_to_string(path).map_err(|e| DesignerError::io(path, e))?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Plain-text summary: one header line, then one line per rejected step and
/// per failed expectation.
pub fn format_replay_summary(report: &ReplayReport) -> String {
    let mut out = String::new();
    let status = if report.passed { "PASS" } else { "FAIL" };
    out.push_str(&format!(
        "[{}] {} ({} steps, {} rejected, {}/{} checks passed)\n",
        status,
        report.script_name,
        report.steps_run,
        report.rejected.len(),
        report.expectations.iter().filter(|r| r.passed).count(),
        report.expectations.len()
    ));

    for rejected in &report.rejected {
        out.push_str(&format!(
            "  step {}: rejected: {}\n",
            rejected.step_index, rejected.message
        ));
    }
    for result in report.expectations.iter().filter(|r| !r.passed) {
        out.push_str(&format!(
            "  step {}: expectation {:?} failed (actual: {})\n",
            result.step_index,
            result.check,
            result.actual.as_deref().unwrap_or("-")
        ));
    }
    out
}

// ============================================================================
// Helpers
// ============================================================================

fn write_output(output: Option<&str>, content: &str) -> Result<(), DesignerError> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| DesignerError::io(path, e))?;
            info!(path, bytes = content.len(), "wrote output");
        }
        None => print!("{}", content),
    }
    Ok(())
}
