use std::path::PathBuf;

use clap::Parser;

use crate::interactive::Presets;
use crate::project_config::{PackageManager, Template};

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const PROJECT: &str = "Project";
    pub const DEPENDENCIES: &str = "Dependencies";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

/// Anything not given here is asked for interactively.
#[derive(Parser, Debug, Default)]
#[command(
    name = "frontinit",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Project name, also the directory to create
    #[arg(long, short, value_parser, help_heading = heading::PROJECT)]
    pub name: Option<String>,

    /// Starter template to use
    #[arg(long, short, value_enum, help_heading = heading::PROJECT)]
    pub template: Option<Template>,

    /// Package manager for `create` and `install`
    #[arg(long, short, value_enum, help_heading = heading::DEPENDENCIES)]
    pub package_manager: Option<PackageManager>,

    /// Do not install dependencies after scaffolding
    #[arg(long, action, help_heading = heading::DEPENDENCIES)]
    pub no_install: bool,

    /// Skip the final confirmation
    #[arg(long, short, action)]
    pub yes: bool,

    /// Create the project below this directory instead of the current one
    #[arg(long, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Read defaults from this file instead of `$HOME/.frontinit.toml`
    #[arg(long, value_parser, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the commands that would run, without running them
    #[arg(long, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub dry_run: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

impl From<&AppArgs> for Presets {
    fn from(args: &AppArgs) -> Self {
        Self {
            name: args.name.clone(),
            template: args.template,
            install: args.no_install.then_some(false),
            package_manager: args.package_manager,
            assume_yes: args.yes,
        }
    }
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
