//! The answers collected from the user, one per run

use clap::ValueEnum;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// Starter project kinds this tool knows how to materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Template {
    ReactTs,
    ViteReact,
    NextjsRouter,
}

impl Template {
    pub const ALL: [Template; 3] = [Self::ReactTs, Self::ViteReact, Self::NextjsRouter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReactTs => "react-ts",
            Self::ViteReact => "vite-react",
            Self::NextjsRouter => "nextjs-router",
        }
    }

    /// Menu label shown next to the option number
    pub const fn label(self) -> &'static str {
        match self {
            Self::ReactTs => "My React-ts with Rsbuild",
            Self::ViteReact => "Vite + React",
            Self::NextjsRouter => "Next.js app router",
        }
    }

    /// Map a menu answer (`1`-`3`) to a template
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::ReactTs),
            "2" => Some(Self::ViteReact),
            "3" => Some(Self::NextjsRouter),
            _ => None,
        }
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// Executable name, also used for display
    pub const fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Npm),
            "2" => Some(Self::Yarn),
            "3" => Some(Self::Pnpm),
            _ => None,
        }
    }

    /// Flag understood by `create-next-app` to pick this package manager
    pub const fn next_app_flag(self) -> &'static str {
        match self {
            Self::Npm => "--use-npm",
            Self::Yarn => "--use-yarn",
            Self::Pnpm => "--use-pnpm",
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub template: Template,
    pub should_install_deps: bool,
    /// Only drives `install` when `should_install_deps` is set, but the
    /// vite generator always uses it for `create`.
    pub package_manager: PackageManager,
}

impl ProjectConfig {
    /// Directory the generators create below `base`
    pub fn project_dir(&self, base: impl AsRef<Path>) -> PathBuf {
        base.as_ref().join(&self.name)
    }
}
