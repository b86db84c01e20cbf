//! Running external tools (git, package managers, generators)

use log::debug;
use std::fmt::{self, Display};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// A program, its arguments and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("`{program}` was not found in PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },
    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

pub trait CommandRunner {
    /// Run to completion. Output goes wherever the runner sends it;
    /// nothing is captured.
    fn run(&mut self, command: &ShellCommand) -> Result<(), RunError>;
}

/// Spawns real processes sharing our stdin/stdout/stderr
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ShellCommand) -> Result<(), RunError> {
        let program = which::which(&command.program).map_err(|source| RunError::NotFound {
            program: command.program.clone(),
            source,
        })?;
        debug!(
            "running `{}` in {} ({})",
            command,
            command.cwd.display(),
            program.display()
        );

        let status = Command::new(&program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RunError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(RunError::Failed {
                command: command.to_string(),
                status,
            });
        }
        Ok(())
    }
}
