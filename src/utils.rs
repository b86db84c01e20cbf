use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use log::warn;
use remove_dir_all::remove_dir_all;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;

const HISTORY_CLEANUP_ATTEMPTS: u8 = 5;

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}

/// deals with `~/` and `$HOME/` prefixes
pub fn canonicalize_path(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if p.starts_with("~/") {
        home()?.join(p.strip_prefix("~/")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };

    p.canonicalize()
        .with_context(|| format!("path does not exist: {}", p.display()))
}

/// Expand `gh:`, `gl:`, `bb:` and `sr:` shorthands into full remote urls
pub fn abbreviated_git_url_to_full_remote(git: impl AsRef<str>) -> Option<String> {
    let git = git.as_ref();
    let (prefix, rest) = (git.get(..3)?, &git[3..]);
    match prefix {
        "gl:" => Some(format!("https://gitlab.com/{rest}.git")),
        "bb:" => Some(format!("https://bitbucket.org/{rest}.git")),
        "gh:" => Some(format!("https://github.com/{rest}.git")),
        "sr:" => Some(format!("https://git.sr.ht/~{rest}")),
        _ => None,
    }
}

/// Drop the template's history by removing `<project_dir>/.git`.
/// A missing `.git` is not an error.
pub fn remove_history(project_dir: &Path) -> Result<()> {
    let git_dir = project_dir.join(".git");
    if !git_dir.is_dir() {
        return Ok(());
    }

    let mut attempt = 0_u8;
    loop {
        attempt += 1;
        match remove_dir_all(&git_dir) {
            Ok(()) => return Ok(()),
            Err(e) if attempt < HISTORY_CLEANUP_ATTEMPTS && is_windows_lock(&e) => {
                let wait_for = Duration::from_secs(5);
                warn!(
                    "Git history cleanup failed with a windows process blocking error. [Retry in {:?}]",
                    wait_for
                );
                sleep(wait_for);
            }
            Err(e) => bail!(e),
        }
    }
}

fn is_windows_lock(e: &std::io::Error) -> bool {
    // ERROR_SHARING_VIOLATION
    e.raw_os_error() == Some(32)
        || e.to_string()
            .contains("The process cannot access the file because it is being used by another process.")
}
