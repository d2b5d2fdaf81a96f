//! Shared testing utilities for configargs integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for config files.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write a file under the test root and return its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Build a command for invoking the compiled `configargs` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("configargs").expect("Failed to locate configargs binary");
        cmd.current_dir(self.root.path()).env_remove("RUST_LOG");
        cmd
    }
}

/// The declarations used across tests, in INI syntax.
#[allow(dead_code)]
pub const SAMPLE_INI: &str = r#"[paths]
cache = /tmp/cache

[ARGPARSE]
__input=type=str\help=input file
verbose=action=store_true\help=print more
sizes=type=int\nargs=+\default=[1,2,3]
ratio=type=float\default=0.5
"#;
