use crate::project_config::{PackageManager, ProjectConfig, Template};
use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

const RULE: &str = "=======================================";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("standard input was closed before an answer was given")]
    Closed,
    #[error("error reading input: {0}")]
    Io(#[from] io::Error),
    #[error("error reading input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Something that can answer a question with one line of text.
///
/// Implementations show `prompt` to the user and return the answer with
/// surrounding whitespace trimmed.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;
}

/// Plain line reader, used when stdin is piped
pub struct ReaderLines<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderLines<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.prompt_out, "\n{prompt}: ")?;
        self.prompt_out.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(answer.trim().to_owned())
    }
}

/// Line editor on the terminal
pub struct TermLines {
    term: Term,
    theme: ColorfulTheme,
}

impl TermLines {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl LineSource for TermLines {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(answer.trim().to_owned())
    }
}

/// Pick the line source matching how we were started
pub fn console_lines() -> Box<dyn LineSource> {
    if io::stdin().is_terminal() && Term::stdout().is_term() {
        Box::new(TermLines::new())
    } else {
        Box::new(ReaderLines::new(io::stdin().lock(), io::stdout()))
    }
}

/// Answers given on the command line; each one skips its prompt
#[derive(Debug, Default, Clone)]
pub struct Presets {
    pub name: Option<String>,
    pub template: Option<Template>,
    pub install: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub assume_yes: bool,
}

#[derive(Debug, PartialEq)]
pub enum Answer {
    Confirmed(ProjectConfig),
    Declined,
}

/// Empty or `y` means yes
pub fn wants_install(answer: &str) -> bool {
    answer.is_empty() || answer.eq_ignore_ascii_case("y")
}

/// Only an explicit `n` declines
pub fn is_declined(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("n")
}

/// Run the question sequence and build the project configuration.
pub fn ask_project_config(
    lines: &mut dyn LineSource,
    out: &mut dyn Write,
    presets: &Presets,
) -> Result<Answer> {
    let name = match &presets.name {
        Some(name) => name.clone(),
        None => lines.read_line("📘 Enter project name")?,
    };

    let template = match presets.template {
        Some(template) => template,
        None => choose_template(lines, out)?,
    };

    let should_install_deps = match presets.install {
        Some(install) => install,
        None => wants_install(&lines.read_line("📦 Do you want to install dependencies (y/n)")?),
    };

    let package_manager = match presets.package_manager {
        Some(package_manager) => package_manager,
        None if should_install_deps => choose_package_manager(lines, out)?,
        None => PackageManager::default(),
    };

    let config = ProjectConfig {
        name,
        template,
        should_install_deps,
        package_manager,
    };
    print_summary(out, &config)?;

    if !presets.assume_yes && is_declined(&lines.read_line("Is this correct? (Y/n)")?) {
        writeln!(out, "\n\nExiting... 👋")?;
        return Ok(Answer::Declined);
    }

    writeln!(out, "\n✨ {}", style("Creating project...").bold())?;
    Ok(Answer::Confirmed(config))
}

fn choose_template(lines: &mut dyn LineSource, out: &mut dyn Write) -> Result<Template> {
    writeln!(out, "\n📋 Select template:")?;
    writeln!(out, "{RULE}")?;
    for (idx, template) in Template::ALL.iter().enumerate() {
        writeln!(out, "\n{}\t{}", menu_number(idx), template.label())?;
    }

    let choice = lines.read_line("💻 Choose your template (1-3)")?;
    match Template::from_choice(&choice) {
        Some(template) => Ok(template),
        None => {
            let template = Template::ReactTs;
            writeln!(
                out,
                "\n{}",
                style(format!("Using default template: {template}")).yellow()
            )?;
            Ok(template)
        }
    }
}

fn choose_package_manager(
    lines: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<PackageManager> {
    writeln!(out, "\n📦 Choose your package manager: ")?;
    writeln!(out, "{RULE}")?;
    for (idx, package_manager) in PackageManager::ALL.iter().enumerate() {
        writeln!(out, "\n{}\t{}", menu_number(idx), package_manager)?;
    }

    let choice = lines.read_line("🤔 Choose between 1-3")?;
    match PackageManager::from_choice(&choice) {
        Some(package_manager) => Ok(package_manager),
        None => {
            let package_manager = PackageManager::default();
            writeln!(
                out,
                "{}",
                style(format!("Using default package manager: {package_manager}")).yellow()
            )?;
            Ok(package_manager)
        }
    }
}

fn menu_number(idx: usize) -> &'static str {
    ["1️⃣ ", "2️⃣ ", "3️⃣ "].get(idx).copied().unwrap_or("  ")
}

fn print_summary(out: &mut dyn Write, config: &ProjectConfig) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "\n✅ {}", style("Project Confirmation:").bold())?;
    writeln!(out, "\nProject name: {}", config.name)?;
    writeln!(out, "\nTemplate: {}", config.template)?;
    writeln!(out, "\nInstall dependencies: {}", config.should_install_deps)?;
    if config.should_install_deps {
        writeln!(out, "\nPackage manager: {}", config.package_manager)?;
    }
    Ok(())
}
