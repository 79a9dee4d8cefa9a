use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn run_lectio(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    scratch: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            scratch: tempfile::tempdir().expect("create temporary scratch dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_lectio"))
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("LECTIO_OPENAI_API_KEY")
            .env_remove("OPENAI_API_KEY")
            .env_remove("OPENAI_MODEL")
            .output()
            .expect("failed to execute lectio binary")
    }

    /// Write a scratch file (e.g. a transcript fixture) and return its path.
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.scratch.path().join(name);
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }
}
