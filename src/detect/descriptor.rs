//! Project descriptor discovery in the application root.

use super::project::ProjectType;
use super::{DetectFailure, Verdict};
use crate::fs::FileSystem;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A project file found in the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub path: PathBuf,
    pub project_type: ProjectType,
}

/// Scans the immediate entries of `app_root` and selects the descriptor to
/// read. All descriptors must share one project type; among several of that
/// type the first one the filesystem yields wins.
///
/// The outer `Result` carries I/O failures; the inner one the detection
/// verdict.
pub fn discover(fs: &dyn FileSystem, app_root: &Path) -> Result<Verdict<Descriptor>> {
    let entries = fs.read_dir(app_root)?;

    let mut groups: Vec<(ProjectType, Vec<PathBuf>)> = Vec::new();
    for entry in entries.iter().filter(|e| e.is_file()) {
        let Some(project_type) = ProjectType::from_path(entry.path()) else {
            continue;
        };

        debug!(file = entry.file_name(), %project_type, "Found project file");
        match groups.iter_mut().find(|(t, _)| *t == project_type) {
            Some((_, paths)) => paths.push(entry.path.clone()),
            None => groups.push((project_type, vec![entry.path.clone()])),
        }
    }

    if groups.len() > 1 {
        let found = groups.iter().map(|(t, _)| *t).collect();
        return Ok(Err(DetectFailure::ConflictingProjectTypes(found)));
    }

    let Some((project_type, mut paths)) = groups.into_iter().next() else {
        return Ok(Err(DetectFailure::NoProjectFile));
    };

    // A group always holds at least one path.
    let path = paths.remove(0);
    let ignored = paths;
    if !ignored.is_empty() {
        warn!(
            selected = %path.display(),
            ignored = ?ignored,
            "Multiple {} files found, using the first",
            project_type
        );
    }

    Ok(Ok(Descriptor { path, project_type }))
}
