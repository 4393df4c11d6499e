//! Common test utilities for jtfiles integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A JTFRAME-style directory tree in a temporary directory
///
/// Layout:
/// - `cores/`   core sources (`CORES`)
/// - `modules/` shared modules (`MODULES`)
/// - `modules/jtframe/` framework (`JTFRAME`)
/// - `work/`    working directory the binary runs in
pub struct TestTree {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to tree root (`JTROOT`)
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestTree {
    /// Create a new tree with an empty framework manifest
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let tree = Self { temp, path };
        std::fs::create_dir_all(tree.workdir()).expect("Failed to create work directory");
        tree.write_file("modules/jtframe/hdl/jtframe.yaml", "");
        tree
    }

    pub fn cores(&self) -> PathBuf {
        self.path.join("cores")
    }

    pub fn modules(&self) -> PathBuf {
        self.path.join("modules")
    }

    pub fn jtframe(&self) -> PathBuf {
        self.path.join("modules").join("jtframe")
    }

    pub fn workdir(&self) -> PathBuf {
        self.path.join("work")
    }

    /// Write a file in the tree
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write the game.yaml of a core
    pub fn write_core(&self, core: &str, content: &str) {
        self.write_file(&format!("cores/{core}/hdl/game.yaml"), content);
    }

    /// Read a file from the work directory
    pub fn read_output(&self, name: &str) -> String {
        std::fs::read_to_string(self.workdir().join(name)).expect("Failed to read output")
    }

    /// Check if a file exists in the work directory
    pub fn output_exists(&self, name: &str) -> bool {
        self.workdir().join(name).exists()
    }

    /// The jtfiles binary with a clean environment pointing at this tree
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("jtfiles").expect("Failed to find jtfiles binary");
        cmd.env_clear()
            .env("CORES", self.cores())
            .env("MODULES", self.modules())
            .env("JTFRAME", self.jtframe())
            .env("JTROOT", &self.path)
            .current_dir(self.workdir());
        cmd
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
