use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use assert_cmd::Command;
use tempfile::TempDir;

const LOG_ENV: &str = "FAKE_TOOL_LOG";
const PROGRAMS: [&str; 5] = ["git", "npm", "yarn", "pnpm", "npx"];

/// Stand-ins for git, the package managers and npx that record every call
pub struct ToolchainBuilder {
    failing: Vec<String>,
}

pub struct Toolchain {
    root: TempDir,
}

pub fn toolchain() -> ToolchainBuilder {
    ToolchainBuilder {
        failing: Vec::new(),
    }
}

impl ToolchainBuilder {
    /// `program` logs its call and then exits with status 1
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_owned());
        self
    }

    pub fn build(self) -> Toolchain {
        let root = super::tempdir();
        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).unwrap();

        for program in PROGRAMS {
            let exit = if self.failing.iter().any(|p| p == program) {
                "exit 1"
            } else {
                ""
            };
            // creating commands leave a project directory behind like the real tools
            let script = format!(
                r#"#!/bin/sh
echo "$(basename "$PWD"): {program} $*" >> "${LOG_ENV}"
{exit}
case "$1" in
  clone) mkdir -p "$3/.git" && echo '{{}}' > "$3/package.json" ;;
  create) mkdir -p "$3" ;;
  create-next-app@latest) mkdir -p "$2" ;;
esac
"#
            );
            let path = bin.join(program);
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        Toolchain { root }
    }
}

impl Toolchain {
    fn log_path(&self) -> PathBuf {
        self.root.path().join("calls.log")
    }

    /// Put the fake tools first on `PATH` for `cmd`
    pub fn install(&self, cmd: &mut Command) {
        let mut path = OsString::from(self.root.path().join("bin"));
        if let Some(system) = std::env::var_os("PATH") {
            path.push(":");
            path.push(system);
        }
        cmd.env("PATH", path).env(LOG_ENV, self.log_path());
    }

    /// Every recorded call as `<cwd name>: <program> <args>`
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(self.log_path()) {
            Ok(log) => log.lines().map(str::to_owned).collect(),
            Err(_) => Vec::new(),
        }
    }
}
