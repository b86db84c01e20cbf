//! Generators: turn a [`ProjectConfig`] into the steps that create the project
//!
//! Planning is pure; [`execute`] is the only place that touches processes
//! or the filesystem.

use anyhow::{Context, Result};
use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use crate::project_config::{PackageManager, ProjectConfig, Template};
use crate::runner::{CommandRunner, ShellCommand};
use crate::utils::remove_history;

const VITE_PACKAGE: &str = "vite@latest";
const VITE_TEMPLATE: &str = "react-ts";
const NEXT_APP_PACKAGE: &str = "create-next-app@latest";
const NEXT_APP_FLAGS: [&str; 9] = [
    "--ts",
    "--tailwind",
    "--eslint",
    "--app",
    "--src-dir",
    "--skip-install",
    "--no-turbopack",
    "--import-alias",
    "@/*",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Run {
        command: ShellCommand,
        failure: &'static str,
    },
    /// The project directory must exist before anything runs inside it
    EnterDir(PathBuf),
    RemoveHistory(PathBuf),
}

impl Step {
    fn run(command: ShellCommand, failure: &'static str) -> Self {
        Self::Run { command, failure }
    }

    pub fn failure(&self) -> &'static str {
        match self {
            Self::Run { failure, .. } => *failure,
            Self::EnterDir(_) => "error changing directory",
            Self::RemoveHistory(_) => "error removing .git directory",
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run { command, .. } => {
                write!(f, "{command}  (in {})", command.cwd.display())
            }
            Self::EnterDir(dir) => write!(f, "cd {}", dir.display()),
            Self::RemoveHistory(dir) => write!(f, "rm -rf {}", dir.join(".git").display()),
        }
    }
}

/// What to do, and where the project ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub project_dir: PathBuf,
    pub steps: Vec<Step>,
}

/// Sources the generators pull from
#[derive(Debug, Clone)]
pub struct Sources {
    pub react_ts_repository: String,
}

/// Steps for the selected template, run inside `base`.
pub fn plan(config: &ProjectConfig, base: &Path, sources: &Sources) -> Plan {
    let project_dir = config.project_dir(base);
    let steps = match config.template {
        Template::ReactTs => react_ts(config, base, &project_dir, &sources.react_ts_repository),
        Template::ViteReact => vite_react(config, base, &project_dir),
        Template::NextjsRouter => nextjs_router(config, base, &project_dir),
    };
    Plan { project_dir, steps }
}

fn install(package_manager: PackageManager, project_dir: &Path) -> Step {
    Step::run(
        ShellCommand::new(package_manager.program(), project_dir).arg("install"),
        "error installing dependencies",
    )
}

fn react_ts(config: &ProjectConfig, base: &Path, project_dir: &Path, repository: &str) -> Vec<Step> {
    let mut steps = vec![
        Step::run(
            ShellCommand::new("git", base).args(["clone", repository, config.name.as_str()]),
            "error cloning repository",
        ),
        Step::EnterDir(project_dir.to_path_buf()),
        Step::RemoveHistory(project_dir.to_path_buf()),
        Step::run(
            ShellCommand::new("git", project_dir).arg("init"),
            "error initializing new git repository",
        ),
    ];
    if config.should_install_deps {
        steps.push(install(config.package_manager, project_dir));
    }
    steps
}

fn vite_react(config: &ProjectConfig, base: &Path, project_dir: &Path) -> Vec<Step> {
    let mut create = ShellCommand::new(config.package_manager.program(), base)
        .args(["create", VITE_PACKAGE, config.name.as_str()]);
    // npm 7+ swallows flags meant for the initializer unless separated
    if config.package_manager == PackageManager::Npm {
        create = create.arg("--");
    }
    let create = create.args(["--template", VITE_TEMPLATE]);

    let mut steps = vec![Step::run(create, "error creating vite project")];
    if config.should_install_deps {
        steps.push(Step::EnterDir(project_dir.to_path_buf()));
        steps.push(install(config.package_manager, project_dir));
    }
    steps
}

fn nextjs_router(config: &ProjectConfig, base: &Path, project_dir: &Path) -> Vec<Step> {
    let create = ShellCommand::new("npx", base)
        .args([NEXT_APP_PACKAGE, config.name.as_str()])
        .args(NEXT_APP_FLAGS)
        .arg(config.package_manager.next_app_flag());

    let mut steps = vec![Step::run(create, "error creating next.js project")];
    if config.should_install_deps {
        steps.push(Step::EnterDir(project_dir.to_path_buf()));
        steps.push(install(config.package_manager, project_dir));
    }
    steps
}

/// Run the steps in order, stopping at the first failure.
pub fn execute(steps: &[Step], runner: &mut dyn CommandRunner) -> Result<()> {
    for step in steps {
        let outcome = match step {
            Step::Run { command, .. } => runner.run(command).map_err(anyhow::Error::from),
            Step::EnterDir(dir) => enter_dir(dir),
            Step::RemoveHistory(dir) => remove_history(dir),
        };
        outcome.context(step.failure())?;
    }
    Ok(())
}

fn enter_dir(dir: &Path) -> Result<()> {
    let metadata = fs::metadata(dir).with_context(|| format!("cannot access {}", dir.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }
    Ok(())
}
