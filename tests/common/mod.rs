#![allow(dead_code)]

pub mod mock_model;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::{env, fs};
use tempfile::TempDir;

/// Isolated workspace for driving the binary: a document, a config and a
/// fake `ollama` script.
pub struct TestContext {
    pub temp_dir: TempDir,
    pub doc_path: PathBuf,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new(document: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let doc_path = temp_dir.path().join("document.txt");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&doc_path, document).expect("Failed to write document");

        Self {
            temp_dir,
            doc_path,
            config_path,
        }
    }

    /// Install a shell script as the model executable and return its path
    #[cfg(unix)]
    pub fn fake_ollama(&self, body: &str) -> PathBuf {
        self.fake_ollama_named("ollama", body)
    }

    #[cfg(unix)]
    pub fn fake_ollama_named(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.temp_dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    pub fn write_config(&self, ollama_path: &Path, model: &str) {
        write_config_to(&self.config_path, ollama_path, model);
    }

    pub fn document(&self) -> String {
        fs::read_to_string(&self.doc_path).expect("Failed to read document")
    }

    /// Run the binary against the document with extra arguments
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command(args);
        cmd.arg("--config").arg(&self.config_path);
        cmd.output().expect("Failed to run summarize-selection")
    }

    /// Run without `--config` so the binary looks the config up itself.
    /// The platform config directory points inside the temp dir.
    pub fn run_with_lookup(&self, args: &[&str], env: &[(&str, &Path)]) -> Output {
        let mut cmd = self.command(args);
        cmd.env("XDG_CONFIG_HOME", self.temp_dir.path().join("xdg"));
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run summarize-selection")
    }

    fn command(&self, args: &[&str]) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_summarize-selection");
        let mut cmd = Command::new(bin_path);
        cmd.arg(&self.doc_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("SUMMARIZE_SELECTION_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn write_config_to(path: &Path, ollama_path: &Path, model: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create config dir");
    }
    let config = serde_json::json!({
        "OLLAMA_PATH": ollama_path,
        "MODEL": model,
    });
    fs::write(path, config.to_string()).expect("Failed to write config");
}
