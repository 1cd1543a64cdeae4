use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    source: PathBuf,
}

impl TestEnv {
    /// Standard fixture: a core package plus two plugins, one of them with
    /// fields missing.
    pub fn new() -> Self {
        Self::with_document(serde_json::json!({
            "core": {
                "name": "jenkins",
                "version": "2.400",
                "size": 123456,
                "url": "http://x/jenkins.war"
            },
            "plugins": {
                "git": {"name": "git", "version": "4.11"},
                "ant": {"name": "ant", "version": "1.13", "size": 87}
            }
        }))
    }

    pub fn with_document(document: serde_json::Value) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let source = tmp.path().join("update-center.json");
        fs::write(
            &source,
            serde_json::to_string_pretty(&document).expect("serialize document"),
        )
        .expect("write fixture document");
        Self { _tmp: tmp, source }
    }

    pub fn with_raw_document(raw: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let source = tmp.path().join("update-center.json");
        fs::write(&source, raw).expect("write fixture document");
        Self { _tmp: tmp, source }
    }

    /// Command wired to the fixture file instead of the live update center.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("juc").expect("juc binary");
        cmd.arg("--source")
            .arg(self.source.to_str().expect("source path utf8"));
        cmd
    }
}
