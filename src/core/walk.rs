use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::fs::FileSystem;
use crate::models::{EntryKind, TreeNode};

/// Traversal settings, built once from the CLI and read-only for the whole
/// run. No traversal state lives outside this struct and the call stack.
#[derive(Clone, Debug)]
pub struct TraversalConfig {
    pub root: PathBuf,
    pub show_all: bool,
    pub exclude_dotfiles: bool,
    pub exclude_dirs: HashSet<String>,
}

/// Build the visible tree under `dir`, depth-first.
///
/// Children keep the OS-reported listing order; insertion order is the
/// display order, never lexicographic. The first unreadable directory aborts
/// the whole walk with an error carrying its path.
pub fn walk_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    config: &TraversalConfig,
) -> Result<Vec<TreeNode>> {
    // An excluded basename suppresses the subtree without reading it. The
    // directory's own line comes from the parent level, so exclusion hides
    // children only; at the traversal root it suppresses all output.
    if !config.show_all
        && let Some(name) = dir.file_name()
        && config.exclude_dirs.contains(name.to_string_lossy().as_ref())
    {
        return Ok(Vec::new());
    }

    let entries = fs
        .read_dir(dir)
        .with_context(|| dir.display().to_string())?;

    let mut children = Vec::new();
    for entry in entries {
        if !keep(&entry.name, config) {
            continue;
        }

        let nested = if entry.kind == EntryKind::Directory {
            walk_dir(fs, &entry.path, config)?
        } else {
            Vec::new()
        };

        children.push(TreeNode {
            name: entry.name,
            kind: entry.kind,
            children: nested,
        });
    }

    Ok(children)
}

fn keep(name: &str, config: &TraversalConfig) -> bool {
    if config.show_all {
        return true;
    }
    if name == ".git" || name == "node_modules" {
        return false;
    }
    if config.exclude_dotfiles && name.starts_with('.') {
        return false;
    }
    true
}
