use crate::config::PlanFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Buildpack detector for .NET Core applications
#[derive(Parser, Debug)]
#[command(
    name = "dotnet-detect",
    about = "Buildpack detector for .NET Core applications",
    version,
    long_about = "Inspects an application root for a .NET project file (.csproj, .fsproj, \
                  .vbproj or .proj) and, when one is found, writes the dependency plan \
                  the build phase needs.\n\n\
                  Exit codes: 0 pass, 100 fail, 1 error.\n\n\
                  Examples:\n  \
                  dotnet-detect\n  \
                  dotnet-detect /workspace --plan /layers/plan.toml\n  \
                  dotnet-detect /workspace --format json"
)]
pub struct CliArgs {
    #[arg(
        value_name = "APP_DIR",
        help = "Application root (defaults to current directory)"
    )]
    pub app_dir: Option<PathBuf>,

    #[arg(
        short = 'p',
        long,
        value_name = "FILE",
        help = "Write the plan to FILE instead of stdout"
    )]
    pub plan: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        help = "Plan encoding [default: toml, or DOTNET_DETECT_PLAN_FORMAT]"
    )]
    pub format: Option<PlanFormatArg>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only errors are logged"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormatArg {
    Toml,
    Json,
}

impl From<PlanFormatArg> for PlanFormat {
    fn from(arg: PlanFormatArg) -> Self {
        match arg {
            PlanFormatArg::Toml => PlanFormat::Toml,
            PlanFormatArg::Json => PlanFormat::Json,
        }
    }
}
