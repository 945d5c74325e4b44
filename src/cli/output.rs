//! Plan rendering and delivery.

use crate::config::PlanFormat;
use crate::plan::DependencyPlan;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn render(plan: &DependencyPlan, format: PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Toml => plan.to_toml(),
        PlanFormat::Json => plan.to_json(),
    }
}

/// Writes the rendered plan to `path`, or to `out` when no path is given.
pub fn write_plan(
    plan: &DependencyPlan,
    format: PlanFormat,
    path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let rendered = render(plan, format)?;

    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write plan to {:?}", path)),
        None => {
            out.write_all(rendered.as_bytes())
                .context("Failed to write plan to stdout")?;
            if !rendered.ends_with('\n') {
                writeln!(out).context("Failed to write plan to stdout")?;
            }
            Ok(())
        }
    }
}
