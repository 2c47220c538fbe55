//! End-to-End Test Suite: editor workflows against a scripted RuboCop
//!
//! Each test installs a shell script as the RuboCop executable. The script
//! appends its working directory and arguments to a log file and answers
//! `--show-cops` with a small cop catalogue, so the whole path from editor
//! request to spawned process to cached registry is exercised.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use copcomplete_completion::{CompletionList, Position, SourceScope};
use copcomplete_ide::{
    CompletionParams, EditorEvent, EditorEventHandler, EventAction, HostFlavor,
    IdeIntegrationManager, ResponseFormatter, Settings, CLOSE_WINDOW,
};
use tempfile::TempDir;

const SHOW_COPS_YAML: &str = r##"# Available cops (2) + config for /project:
Layout/LineLength:
  Description: Checks that line lengths do not exceed the configured limit.
  Enabled: true
  Max: 120
  AllowedPatterns: !ruby/regexp /\A#/
Style/StringLiterals:
  Description: Checks if uses of quotes match the configured preference.
  Enabled: true
  EnforcedStyle: single_quotes
  SupportedStyles:
  - single_quotes
  - double_quotes
"##;

/// A project folder plus the scripted RuboCop that serves it
struct Workspace {
    _dir: TempDir,
    project: PathBuf,
    log: PathBuf,
    settings: Settings,
}

impl Workspace {
    fn new() -> Self {
        Self::with_script_body(&format!(
            "case \"$*\" in\n  *--show-cops*) cat <<'YAML'\n{}YAML\n  ;;\nesac\n",
            SHOW_COPS_YAML
        ))
    }

    fn failing() -> Self {
        Self::with_script_body("echo 'rubocop: broken install' >&2\n")
    }

    fn with_script_body(body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let project = dir.path().join("project");
        fs::create_dir(&project).expect("Failed to create project");
        let project = fs::canonicalize(&project).expect("Failed to resolve project");
        fs::write(project.join(".rubocop.yml"), "AllCops:\n  NewCops: enable\n")
            .expect("Failed to write .rubocop.yml");

        let log = dir.path().join("invocations.log");
        let script = dir.path().join("rubocop");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$(pwd -P) $*\" >> '{}'\n{}",
                log.display(),
                body
            ),
        )
        .expect("Failed to write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");

        let settings = Settings {
            rubocop_command: script.display().to_string(),
            bundler: false,
            cache_dir: Some(dir.path().join("cache")),
            timeout_secs: Some(30),
            ..Settings::default()
        };

        Self {
            _dir: dir,
            project,
            log,
            settings,
        }
    }

    fn manager(&self) -> IdeIntegrationManager {
        IdeIntegrationManager::from_settings(self.settings.clone())
            .expect("Settings should be valid")
    }

    fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn config_params(&self, document: &str, line: usize, character: usize) -> CompletionParams {
        self.params(".rubocop.yml", document, line, character)
    }

    fn params(&self, file: &str, document: &str, line: usize, character: usize) -> CompletionParams {
        CompletionParams {
            file_path: self.project.join(file),
            document: document.to_string(),
            position: Position::new(line, character),
            scope: None,
            folders: vec![self.project.clone()],
        }
    }
}

fn triggers(list: &CompletionList) -> Vec<&str> {
    list.items.iter().map(|item| item.trigger.as_str()).collect()
}

/// Whether a log line records `args` run inside `dir`
fn invoked_in(line: &str, dir: &Path, args: &str) -> bool {
    line == format!("{} {}", dir.display(), args)
}

/// Complete workflow: cop names, attributes and styles in `.rubocop.yml`,
/// all served by a single RuboCop run.
#[tokio::test]
async fn test_config_editing_workflow_runs_rubocop_once() {
    let ws = Workspace::new();
    let manager = ws.manager();

    let document = "AllCops:\n  NewCops: enable\n\nStyle/StringLiterals:\n  \n  EnforcedStyle: \n";

    let cop_params = ws.config_params(document, 2, 0);
    let cops = manager.handle_completion_request(&cop_params).await.unwrap();
    assert_eq!(
        triggers(&cops),
        vec!["Layout/LineLength", "Style/StringLiterals"]
    );
    assert!(cops.inhibit_word_completions);
    assert!(cops.inhibit_explicit_completions);

    let attr_params = ws.config_params(document, 4, 2);
    let attributes = manager.handle_completion_request(&attr_params).await.unwrap();
    assert_eq!(
        triggers(&attributes),
        vec!["Description", "Enabled", "EnforcedStyle", "SupportedStyles"]
    );

    let value_params = ws.config_params(document, 5, 17);
    let values = manager.handle_completion_request(&value_params).await.unwrap();
    assert_eq!(
        triggers(&values),
        vec!["double_quotes", "single_quotes"]
    );

    let invocations = ws.invocations();
    assert_eq!(invocations.len(), 1, "registry should be cached: {:?}", invocations);
    assert!(invoked_in(&invocations[0], &ws.project, "--show-cops"));
}

/// Cop names after a disable directive in a Ruby comment
#[tokio::test]
async fn test_ruby_comment_workflow() {
    let ws = Workspace::new();
    let manager = ws.manager();

    let line = "name = 'x' # rubocop:disable ";
    let params = ws.params("app.rb", line, 0, line.chars().count());
    let list = manager.handle_completion_request(&params).await.unwrap();

    assert_eq!(
        triggers(&list),
        vec!["Layout/LineLength", "Style/StringLiterals"]
    );

    let legacy = ResponseFormatter::format_completions(&list, HostFlavor::Legacy);
    assert_eq!(legacy["completions"].as_array().map(Vec::len), Some(2));
    assert_eq!(legacy["completions"][0][0], "Layout/LineLength");
}

/// Code outside comments and config files never reaches RuboCop
#[tokio::test]
async fn test_plain_ruby_code_is_not_completed() {
    let ws = Workspace::new();
    let manager = ws.manager();

    let params = ws.params("app.rb", "puts 'hi'", 0, 4);
    let list = manager.handle_completion_request(&params).await.unwrap();

    assert!(list.items.is_empty());
    assert!(ws.invocations().is_empty());
}

/// A second session reuses the on-disk registry
#[tokio::test]
async fn test_registry_survives_across_sessions() {
    let ws = Workspace::new();
    let params = ws.config_params("\n", 0, 0);

    let first = ws.manager().handle_completion_request(&params).await.unwrap();
    let second = ws.manager().handle_completion_request(&params).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(ws.invocations().len(), 1);
}

/// Saving `.rubocop.yml` restarts the server and invalidates the registry
/// by changing the governing file's content.
#[tokio::test]
async fn test_editing_config_produces_fresh_registry() {
    let ws = Workspace::new();
    let manager = ws.manager();
    let params = ws.config_params("\n", 0, 0);

    manager.handle_completion_request(&params).await.unwrap();

    fs::write(ws.project.join(".rubocop.yml"), "AllCops:\n  NewCops: disable\n").unwrap();
    let action = manager
        .handle_event(&EditorEvent::PostSave {
            file_path: ws.project.join(".rubocop.yml"),
            folders: vec![ws.project.clone()],
        })
        .await
        .unwrap();
    assert_eq!(action, EventAction::StartedServer);

    manager.handle_completion_request(&params).await.unwrap();

    let invocations = ws.invocations();
    assert_eq!(invocations.len(), 3, "{:?}", invocations);
    assert!(invoked_in(&invocations[1], &ws.project, "--restart-server"));
    assert!(invoked_in(&invocations[2], &ws.project, "--show-cops"));
}

/// Window lifecycle drives the server commands
#[tokio::test]
async fn test_window_lifecycle_controls_server() {
    let ws = Workspace::new();
    let manager = ws.manager();
    let folders = vec![ws.project.clone()];

    let opened = manager
        .handle_event(&EditorEvent::NewWindow {
            folders: folders.clone(),
        })
        .await
        .unwrap();
    let closed = manager
        .handle_event(&EditorEvent::WindowCommand {
            command: CLOSE_WINDOW.to_string(),
            folders,
        })
        .await
        .unwrap();

    assert_eq!(opened, EventAction::StartedServer);
    assert_eq!(closed, EventAction::StoppedServer);

    let invocations = ws.invocations();
    assert_eq!(invocations.len(), 2);
    assert!(invoked_in(&invocations[0], &ws.project, "--restart-server"));
    assert!(invoked_in(&invocations[1], &ws.project, "--stop-server"));
}

/// Server mode routes catalogue requests through the running server
#[tokio::test]
async fn test_server_mode_adds_server_flag() {
    let mut ws = Workspace::new();
    ws.settings.server = true;
    let manager = ws.manager();

    let list = manager
        .handle_completion_request(&ws.config_params("\n", 0, 0))
        .await
        .unwrap();
    assert_eq!(list.len(), 2);

    let invocations = ws.invocations();
    assert!(invoked_in(&invocations[0], &ws.project, "--show-cops --server"));
}

/// Loading the plugin clears every cached registry
#[tokio::test]
async fn test_plugin_loaded_clears_cache() {
    let ws = Workspace::new();
    let manager = ws.manager();
    let params = ws.config_params("\n", 0, 0);

    manager.handle_completion_request(&params).await.unwrap();
    let action = manager.handle_event(&EditorEvent::PluginLoaded).await.unwrap();
    manager.handle_completion_request(&params).await.unwrap();

    assert_eq!(action, EventAction::ClearedCache);
    assert_eq!(ws.invocations().len(), 2);
}

/// A RuboCop that complains on stderr yields no completions and no cache entry
#[tokio::test]
async fn test_broken_rubocop_degrades_to_empty() {
    let ws = Workspace::failing();
    let manager = ws.manager();
    let params = ws.config_params("\n", 0, 0);

    let first = manager.handle_completion_request(&params).await.unwrap();
    let second = manager.handle_completion_request(&params).await.unwrap();

    assert!(first.items.is_empty());
    assert!(second.items.is_empty());
    assert_eq!(ws.invocations().len(), 2);
}

/// Folders without `.rubocop.yml` are left alone
#[tokio::test]
async fn test_unconfigured_folder_is_skipped() {
    let ws = Workspace::new();
    fs::remove_file(ws.project.join(".rubocop.yml")).unwrap();
    let manager = ws.manager();

    let params = CompletionParams {
        scope: Some(SourceScope::config()),
        ..ws.config_params("\n", 0, 0)
    };
    let list = manager.handle_completion_request(&params).await.unwrap();

    assert!(list.items.is_empty());
    assert!(ws.invocations().is_empty());
}
