use anyhow::Result;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)?.filter_map(|e| e.ok()) {
            let path = entry.path();
            // Follows symlinks, so a link to a directory counts as one.
            // A broken link has no metadata and is listed as a plain file.
            let kind = match std::fs::metadata(&path) {
                Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            };

            entries.push(FsEntry {
                path,
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }
}
