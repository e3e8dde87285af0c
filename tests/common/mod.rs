//! Shared testing utilities for nsgen CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::fs;
use std::path::Path;

/// Minimal onboarding request used across flows.
pub const BASE_REQUEST: &[(&str, &str)] = &[
    ("OPENVIRONMENT", "test"),
    ("REGION", "eu"),
    ("CLUSTERNAME", "c1"),
    ("SWCI", "s1"),
    ("SUFFIX", "default"),
];

/// Testing harness providing an isolated repository for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated repository.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create a repository with the starter templates installed.
    pub fn initialized() -> Self {
        let ctx = Self::new();
        ctx.cli().arg("init").assert().success();
        ctx
    }

    /// Repository root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn child(&self, path: &str) -> ChildPath {
        self.root.child(path)
    }

    /// Build a command for the compiled `nsgen` binary with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nsgen").expect("Failed to locate nsgen binary");
        cmd.env_clear().current_dir(self.root()).env("HOME", self.root());
        cmd
    }

    /// Build a command carrying an onboarding request.
    pub fn request(&self, action: &str, extra: &[(&str, &str)]) -> Command {
        let mut cmd = self.cli();
        cmd.env("ACTION", action);
        cmd.envs(BASE_REQUEST.iter().copied());
        cmd.envs(extra.iter().copied());
        cmd
    }

    /// Overwrite a template in `kustomize/overlay/`.
    pub fn write_template(&self, name: &str, content: &str) {
        self.child("kustomize/overlay").create_dir_all().expect("Failed to create overlay dir");
        self.child(&format!("kustomize/overlay/{}", name))
            .write_str(content)
            .expect("Failed to write template");
    }

    /// Sorted file names directly inside `dir`.
    pub fn file_names(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root().join(dir))
            .expect("Failed to read directory")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root().join(path)).expect("Failed to read file")
    }
}
