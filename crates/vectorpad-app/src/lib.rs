//! VectorPad headless driver.
//!
//! Loads an optional editor configuration, replays a recorded event script
//! through the engine, and writes the final editor state as JSON.

mod args;
mod error;
pub mod script;
pub mod shortcuts;

pub use args::Args;
pub use error::AppError;
pub use script::{Script, ScriptEvent, ScriptKey};
pub use shortcuts::ShortcutRegistry;

use std::fs;

use serde::Serialize;
use vectorpad_core::{Editor, EditorConfig, RenderState, StatusReadout};

/// Final state written after a replay.
#[derive(Debug, Serialize)]
pub struct Report {
    pub state: RenderState,
    pub status: StatusReadout,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl Report {
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            state: editor.render_state(),
            status: editor.status(),
            can_undo: editor.history().can_undo(),
            can_redo: editor.history().can_redo(),
        }
    }
}

/// Load the configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<EditorConfig, AppError> {
    match path {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            Ok(EditorConfig::load(path)?)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Replay `script` on a fresh editor and return the resulting report.
pub fn replay(script: &Script, config: EditorConfig) -> Report {
    let mut editor = Editor::new(config);
    script.replay(&mut editor);
    Report::from_editor(&editor)
}

/// Run the VectorPad driver.
///
/// # Errors
///
/// Returns `AppError` for file I/O, configuration, and script parse errors.
pub fn run(args: &Args) -> Result<(), AppError> {
    if args.shortcuts {
        print!("{}", ShortcutRegistry::render());
        return Ok(());
    }
    let Some(script_path) = args.script.as_ref() else {
        return Ok(());
    };

    let config = load_config(args.config.as_deref())?;
    let script = Script::from_json(&fs::read_to_string(script_path)?)?;
    log::info!("Replaying {} events from {script_path}", script.events.len());

    let report = replay(&script, config);
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("State written to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(script: &str, output: &str, config: Option<String>) -> Args {
        Args {
            script: Some(script.to_string()),
            output: Some(output.to_string()),
            config,
            log_level: "warn".to_string(),
            shortcuts: false,
        }
    }

    #[test]
    fn test_run_writes_report() {
        let mut script = NamedTempFile::new().unwrap();
        write!(
            script,
            r#"{{ "events": [
                {{ "event": "tool", "tool": "line" }},
                {{ "event": "pointer_down", "x": 0, "y": 0 }},
                {{ "event": "pointer_move", "x": 33, "y": 47 }},
                {{ "event": "pointer_up" }}
            ] }}"#
        )
        .unwrap();
        let out = NamedTempFile::new().unwrap();
        let out_path = out.path().to_str().unwrap();

        run(&args(script.path().to_str().unwrap(), out_path, None)).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_path).unwrap()).unwrap();
        let line = &report["state"]["elements"][0];
        assert_eq!(line["type"], "line");
        assert_eq!(line["end"]["x"], 30.0);
        assert_eq!(line["end"]["y"], 50.0);
        assert_eq!(report["can_undo"], true);
        assert_eq!(report["status"]["zoom_percent"], 100);
    }

    #[test]
    fn test_run_uses_config() {
        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{ "grid_step": 25 }}"#).unwrap();
        let mut script = NamedTempFile::new().unwrap();
        write!(
            script,
            r#"{{ "events": [
                {{ "event": "tool", "tool": "rectangle" }},
                {{ "event": "pointer_down", "x": 0, "y": 0 }},
                {{ "event": "pointer_move", "x": 40, "y": 40 }},
                {{ "event": "pointer_up" }}
            ] }}"#
        )
        .unwrap();
        let out = NamedTempFile::new().unwrap();
        let out_path = out.path().to_str().unwrap();
        let config_path = config.path().to_str().unwrap().to_string();

        run(&args(script.path().to_str().unwrap(), out_path, Some(config_path))).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_path).unwrap()).unwrap();
        assert_eq!(report["state"]["elements"][0]["width"], 50.0);
    }

    #[test]
    fn test_run_missing_script() {
        let err = run(&args("/nonexistent/script.json", "/tmp/unused.json", None)).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{ "grid_step": 0 }}"#).unwrap();
        let path = config.path().to_str().unwrap().to_string();
        assert!(matches!(load_config(Some(path.as_str())), Err(AppError::Config(_))));
    }
}
