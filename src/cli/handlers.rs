use super::commands::CliArgs;
use super::output::write_plan;
use crate::config::{DetectConfig, PlanFormat};
use crate::detect::{DetectOutcome, Detector};
use crate::fs::RealFileSystem;
use std::env;
use std::io;
use tracing::{debug, error, info};

/// Buildpack detect exit status for a buildable application.
pub const PASS_STATUS_CODE: i32 = 0;
/// Buildpack detect exit status for an application this detector does not build.
pub const FAIL_STATUS_CODE: i32 = 100;
pub const ERROR_STATUS_CODE: i32 = 1;

pub fn handle_detect(args: &CliArgs, config: &DetectConfig) -> i32 {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ERROR_STATUS_CODE;
    }

    let format: PlanFormat = match args.format {
        Some(format) => format.into(),
        None => match config.plan_format() {
            Ok(format) => format,
            Err(e) => {
                error!("Configuration error: {}", e);
                return ERROR_STATUS_CODE;
            }
        },
    };

    let app_dir = match args.app_dir.clone() {
        Some(dir) => dir,
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("Failed to get current directory: {}", e);
                return ERROR_STATUS_CODE;
            }
        },
    };
    debug!("Application root: {}", app_dir.display());

    let fs = RealFileSystem::new();
    let outcome = match Detector::new(&fs).detect(&app_dir) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Detection error: {:#}", e);
            return ERROR_STATUS_CODE;
        }
    };

    match outcome {
        DetectOutcome::Pass(plan) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = write_plan(&plan, format, args.plan.as_deref(), &mut stdout) {
                error!("{:#}", e);
                return ERROR_STATUS_CODE;
            }
            info!(requires = plan.requires.len(), "Detection passed");
            PASS_STATUS_CODE
        }
        DetectOutcome::Fail(failure) => {
            debug!(?failure, "Detection failed");
            eprintln!("{}", failure);
            FAIL_STATUS_CODE
        }
    }
}
