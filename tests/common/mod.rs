use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Shell stand-in for `gcloud`: records each invocation's arguments, one line per call.
const FAKE_PROVIDER: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_PROVIDER_RECORD"
if [ "$1" = "--version" ]; then
  echo "Google Cloud SDK 470.0.0"
  exit 0
fi
if [ "$3" = "list" ]; then
  printf 'Listed 0 items.\n'
fi
exit 0
"#;

pub struct FakeProvider {
    _dir: TempDir,
    pub binary: PathBuf,
    pub record: PathBuf,
}

impl FakeProvider {
    pub fn install() -> Self {
        let dir = TempDir::new().unwrap();
        let binary = dir.path().join("gcloud");
        let record = dir.path().join("calls.log");

        fs::write(&binary, FAKE_PROVIDER).unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            _dir: dir,
            binary,
            record,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.record)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Polls until at least `count` calls match `predicate`; detached calls land asynchronously.
    pub fn wait_for_calls(&self, count: usize, predicate: impl Fn(&str) -> bool) -> Vec<String> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let matching: Vec<String> = self
                .calls()
                .into_iter()
                .filter(|c| predicate(c))
                .collect();
            if matching.len() >= count || Instant::now() > deadline {
                return matching;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        run_loadgen(&self.binary, &self.record, args)
    }
}

pub fn run_loadgen(provider: &Path, record: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loadgen"))
        .arg("--provider-bin")
        .arg(provider)
        .args(args)
        .env("FAKE_PROVIDER_RECORD", record)
        .env_remove("LOADGEN_LOG")
        .output()
        .unwrap()
}
