//! File-type classification for display coloring.
//!
//! `categorize` is pure and total: every (name, is_directory) pair maps to
//! exactly one category, and directories win over every name-based rule.

use owo_colors::{OwoColorize, Style};
use std::path::Path;

/// Exact names that get the lockfile color regardless of extension.
const LOCKFILE_NAMES: [&str; 4] = [
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Directory,
    Lockfile,
    Yaml,
    JavaScript,
    Json,
    Markdown,
    Html,
    Css,
    TypeScript,
    Plain,
}

/// Classify an entry for coloring. Extension matching is case-sensitive and
/// uses the standard path split, so dotfiles like `.gitignore` have no
/// extension and fall through to `Plain`.
pub fn categorize(name: &str, is_directory: bool) -> Category {
    if is_directory {
        return Category::Directory;
    }

    if LOCKFILE_NAMES.contains(&name) {
        return Category::Lockfile;
    }

    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Category::Yaml,
        Some("js") => Category::JavaScript,
        Some("json") => Category::Json,
        Some("md") => Category::Markdown,
        Some("html") => Category::Html,
        Some("css") => Category::Css,
        Some("ts") => Category::TypeScript,
        _ => Category::Plain,
    }
}

impl Category {
    pub fn style(self) -> Style {
        match self {
            Category::Directory => Style::new().blue().bold(),
            Category::Lockfile => Style::new().red(),
            // Orange, which plain ANSI lacks.
            Category::Yaml => Style::new().truecolor(255, 165, 0),
            Category::JavaScript => Style::new().yellow(),
            Category::Json => Style::new().green(),
            Category::Markdown => Style::new().magenta(),
            Category::Html => Style::new().cyan(),
            Category::Css => Style::new().blue(),
            Category::TypeScript => Style::new().bright_green(),
            Category::Plain => Style::new().white(),
        }
    }

    pub fn paint(self, name: &str) -> String {
        name.style(self.style()).to_string()
    }
}
