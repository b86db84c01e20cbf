/// Main file
mod app_config;
mod app_log;
mod args;
mod interactive;
mod project_config;
mod runner;
mod scaffold;
mod utils;

use app_log::log_env_init;
use args::*;
use interactive::{Answer, Presets};
use project_config::ProjectConfig;
use runner::SystemRunner;
use scaffold::{Plan, Sources};

use anyhow::{Context, Result};
use console::style;
use heck::ToKebabCase;
use log::{debug, info, warn};
use std::{
    env, io,
    path::{Path, PathBuf},
};

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);

    let app_config = app_config::load(args.config.as_deref())?;
    let destination = resolve_destination(&args)?;

    let mut lines = interactive::console_lines();
    let answer =
        interactive::ask_project_config(lines.as_mut(), &mut io::stdout(), &Presets::from(&args))?;
    let config = match answer {
        Answer::Confirmed(config) => config,
        Answer::Declined => return Ok(()),
    };

    let sources = Sources {
        react_ts_repository: app_config.react_ts_repository(),
    };
    generate(&config, &destination, &sources, args.dry_run)?;
    Ok(())
}

fn resolve_destination(args: &AppArgs) -> Result<PathBuf> {
    match &args.destination {
        Some(path) => utils::canonicalize_path(path),
        None => env::current_dir().context("cannot read the current directory"),
    }
}

/// Materialize the project described by `config` below `base`
fn generate(
    config: &ProjectConfig,
    base: &Path,
    sources: &Sources,
    dry_run: bool,
) -> Result<PathBuf> {
    check_project_name(&config.name);

    let Plan { project_dir, steps } = scaffold::plan(config, base, sources);
    debug!("{} steps planned for {}", steps.len(), config.template);

    if dry_run {
        info!("🔧 {}", style("Dry run, nothing will be executed:").bold().yellow());
        for step in &steps {
            info!("   {step}");
        }
        return Ok(project_dir);
    }

    info!(
        "🔧 {}",
        style(format!("Destination: {} ...", project_dir.display()))
            .bold()
            .yellow()
    );
    scaffold::execute(&steps, &mut SystemRunner)?;

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(project_dir.display()).underlined()
    );
    if !config.should_install_deps {
        info!(
            "👉 run `{} install` inside {} before starting the dev server",
            config.package_manager,
            config.name
        );
    }
    Ok(project_dir)
}

/// npm only accepts lowercase, url-safe package names
fn check_project_name(name: &str) {
    if name.is_empty() {
        warn!(
            "{}",
            style("Project name is empty").bold()
        );
        return;
    }

    let suggested = name.to_kebab_case();
    if suggested != name {
        warn!(
            "{} `{}` {} `{}`",
            style("Project name").bold(),
            style(name).bold().yellow(),
            style("is not a valid npm package name, consider").bold(),
            style(&suggested).bold().green(),
        );
    }
}
