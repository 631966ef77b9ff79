//! Path helpers for config values and CLI arguments

use std::path::{Path, PathBuf};

/// Expand `~` and make relative paths absolute against the working directory.
///
/// Blank input resolves to the working directory. The result is not
/// canonicalized, so the file does not need to exist.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();
    let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if path.is_empty() {
        return cwd();
    }

    let expanded = match (path, dirs::home_dir()) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    };

    if expanded.is_relative() {
        cwd().join(expanded)
    } else {
        expanded
    }
}

/// Human-friendly rendering of a path, with the home directory shown as `~`
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
