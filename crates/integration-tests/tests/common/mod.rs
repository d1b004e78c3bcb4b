//! Shared fixtures: a stand-in `aspire` executable

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

/// errno for "Text file busy"
const ETXTBSY: i32 = 26;

static INSTALLED: OnceLock<FakeAspire> = OnceLock::new();

const FAKE_ASPIRE: &str = r#"#!/bin/sh
case "$1" in
  --version)
    echo "9.1.0+fake"
    ;;
  pwd)
    pwd
    ;;
  fail)
    echo "simulated failure" 1>&2
    exit 3
    ;;
  sleep)
    sleep "$2"
    ;;
  *)
    for arg in "$@"; do
      printf '%s\n' "$arg"
    done
    ;;
esac
"#;

/// Executable script that prints each argument on its own line
pub struct FakeAspire {
    _dir: TempDir,
    path: PathBuf,
}

impl FakeAspire {
    /// Write the script once per test binary
    ///
    /// Exec fails with ETXTBSY while any concurrently forked child still
    /// holds the write descriptor, so the script is run until it starts.
    pub fn install() -> &'static Self {
        INSTALLED.get_or_init(|| {
            let dir = tempfile::tempdir_in(env!("CARGO_TARGET_TMPDIR")).unwrap();
            let path = dir.path().join("aspire");

            fs::write(&path, FAKE_ASPIRE).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            wait_until_runnable(&path);

            Self { _dir: dir, path }
        })
    }

    pub fn program(&self) -> String {
        self.path.display().to_string()
    }
}

fn wait_until_runnable(path: &Path) {
    for _ in 0..100 {
        match Command::new(path).arg("--version").output() {
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(Duration::from_millis(10))
            }
            Err(e) => panic!("fake aspire cannot run: {}", e),
            Ok(_) => return,
        }
    }
    panic!("fake aspire stayed busy");
}

/// Canonical form, so `/tmp` symlinks compare equal
pub fn canonical(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().canonicalize().unwrap()
}
