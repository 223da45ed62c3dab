#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the papertrail binary.
#[macro_export]
macro_rules! papertrail {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("papertrail"))
    };
}

/// A temporary profile repository plus a config file pointing at it.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture with a config whose `profile_repo_path` is `<tmp>/profile`.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        let repo = fixture.repo().display().to_string().replace('\\', "/");
        fixture.write_config(&format!("profile_repo_path = \"{repo}\"\n"));
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn repo(&self) -> PathBuf {
        self.path().join("profile")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    pub fn papers_path(&self) -> PathBuf {
        self.repo().join("data").join("papers.json")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.repo().join("images")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Writes the paper log verbatim.
    pub fn write_papers(&self, json: &str) {
        let path = self.papers_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create data dir");
        fs::write(path, json).expect("Failed to write papers");
    }

    pub fn read_papers(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.papers_path()).expect("Failed to read papers");
        serde_json::from_str(&content).expect("papers.json should be valid JSON")
    }

    pub fn read_image(&self, name: &str) -> String {
        fs::read_to_string(self.images_dir().join(name)).expect("Failed to read image")
    }

    /// Command with `--config` already pointing at the fixture config.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = papertrail!();
        cmd.arg("--config").arg(self.config_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Three papers across January and February 2025.
pub const SAMPLE_PAPERS: &str = r#"[
  {
    "id": "aaaaaaaaaaaa",
    "title": "Paper A",
    "authors": ["Alice", "Bob"],
    "date_read": "2025-01-10",
    "tags": ["ml", "nlp"],
    "rating": 5
  },
  {
    "id": "bbbbbbbbbbbb",
    "title": "Paper B",
    "authors": ["Alice"],
    "date_read": "2025-02-15",
    "tags": ["ml"]
  },
  {
    "id": "cccccccccccc",
    "title": "Paper C",
    "authors": ["Charlie"],
    "date_read": "2025-02-16",
    "tags": ["cv"],
    "notes": "segmentation baseline"
  }
]
"#;
