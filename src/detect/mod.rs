//! .NET Core application detection.
//!
//! Detection runs in three steps, each of which can end the run with a
//! [`DetectFailure`]:
//!
//! 1. [`descriptor::discover`] picks the project file from the application root
//! 2. [`ProjectMetadata::parse`] reads the target framework and ASP.NET usage
//! 3. [`DependencyPlan::for_framework`] builds the plan
//!
//! I/O problems are not failures of the application and surface as `Err`.

pub mod descriptor;
pub mod metadata;
pub mod project;

pub use descriptor::Descriptor;
pub use metadata::ProjectMetadata;
pub use project::ProjectType;

use crate::fs::FileSystem;
use crate::plan::DependencyPlan;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Reasons an application is not buildable by this detector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectFailure {
    #[error("no proj file found")]
    NoProjectFile,

    #[error("multiple project file types found: {}", join_types(.0))]
    ConflictingProjectTypes(Vec<ProjectType>),

    #[error("no target framework found in proj file")]
    FrameworkNotFound,

    #[error("unsupported target framework: {0}")]
    UnsupportedFramework(String),
}

fn join_types(types: &[ProjectType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of a single detection step.
pub type Verdict<T> = std::result::Result<T, DetectFailure>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectOutcome {
    Pass(DependencyPlan),
    Fail(DetectFailure),
}

impl DetectOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, DetectOutcome::Pass(_))
    }

    pub fn plan(&self) -> Option<&DependencyPlan> {
        match self {
            DetectOutcome::Pass(plan) => Some(plan),
            DetectOutcome::Fail(_) => None,
        }
    }
}

pub struct Detector<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> Detector<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn detect(&self, app_root: &Path) -> Result<DetectOutcome> {
        if !self.fs.is_dir(app_root) {
            anyhow::bail!("Application root {:?} is not a directory", app_root);
        }

        let descriptor = match descriptor::discover(self.fs, app_root)? {
            Ok(descriptor) => descriptor,
            Err(failure) => return Ok(self.fail(failure)),
        };
        debug!(
            path = %descriptor.path.display(),
            project_type = %descriptor.project_type,
            "Selected project file"
        );

        let content = self
            .fs
            .read_bytes(&descriptor.path)
            .with_context(|| format!("Failed to read project file {:?}", descriptor.path))?;

        let metadata = match ProjectMetadata::from_bytes(&content) {
            Ok(metadata) => metadata,
            Err(failure) => return Ok(self.fail(failure)),
        };

        info!(
            target_framework = %metadata.target_framework,
            version = %metadata.framework_version,
            aspnet = metadata.uses_aspnet,
            "Detected .NET Core application"
        );

        Ok(DetectOutcome::Pass(DependencyPlan::for_framework(
            &metadata.framework_version,
            metadata.uses_aspnet,
        )))
    }

    fn fail(&self, failure: DetectFailure) -> DetectOutcome {
        debug!(reason = %failure, "Detection failed");
        DetectOutcome::Fail(failure)
    }
}
