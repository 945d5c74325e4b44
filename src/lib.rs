//! dotnet-detect - buildpack detector for .NET Core applications
//!
//! Looks at an application root for a single kind of .NET project file,
//! reads its target framework and decides whether the app can be built. A
//! passing run yields a [`DependencyPlan`] listing the SDK, runtime and,
//! for ASP.NET Core apps, the ASP.NET framework at the targeted version.
//!
//! ```no_run
//! use dotnet_detect::{DetectOutcome, Detector, RealFileSystem};
//! use std::path::Path;
//!
//! let fs = RealFileSystem::new();
//! match Detector::new(&fs).detect(Path::new("/workspace"))? {
//!     DetectOutcome::Pass(plan) => println!("{}", plan),
//!     DetectOutcome::Fail(reason) => eprintln!("{}", reason),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod fs;
pub mod plan;
pub mod util;

pub use config::{ConfigError, DetectConfig, PlanFormat};
pub use detect::{DetectFailure, DetectOutcome, Detector, ProjectType};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use plan::{DependencyPlan, PhaseMetadata, Provided, Required};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
