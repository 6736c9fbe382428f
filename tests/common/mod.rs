use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub migrator: PathBuf,
    pub argv_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let argv_log = tmp.path().join("argv.log");
        let migrator = write_stub_migrator(tmp.path(), &argv_log);

        Self {
            _tmp: tmp,
            home,
            migrator,
            argv_log,
        }
    }

    /// Launcher command with an isolated HOME, all W2J_* env scrubbed, and
    /// the stub migrator selected.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("w2j-launch");
        cmd.env("HOME", &self.home)
            .env_remove("W2J_MIGRATOR")
            .env_remove("W2J_WIZ_DIR")
            .env_remove("W2J_WIZ_USER")
            .env_remove("W2J_JOPLIN_TOKEN")
            .env_remove("W2J_OUTPUT")
            .arg("--migrator")
            .arg(&self.migrator);
        cmd
    }

    /// Argv the stub migrator received, one argument per line.
    pub fn logged_argv(&self) -> Vec<String> {
        let raw = fs::read_to_string(&self.argv_log).expect("stub argv log");
        raw.lines().map(|l| l.to_string()).collect()
    }
}

// Stub external migration program: records its argv and exits with
// STUB_EXIT (default 0). It never creates anything else on disk.
fn write_stub_migrator(base: &Path, argv_log: &Path) -> PathBuf {
    let stub = base.join("w2j-stub");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\nexit \"${{STUB_EXIT:-0}}\"\n",
        argv_log.display()
    );
    fs::write(&stub, script).expect("write stub migrator");
    let mut perms = fs::metadata(&stub).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub, perms).expect("make stub executable");
    stub
}
