use dotnet_detect::cli::{handle_detect, CliArgs};
use dotnet_detect::util::{init_logging, parse_level, LoggingConfig};
use dotnet_detect::{DetectConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    let mut config = DetectConfig::default();
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }

    init_logging(LoggingConfig::with_level(log_level(&args, &config)));

    debug!("dotnet-detect v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_detect(&args, &config));
}

fn log_level(args: &CliArgs, config: &DetectConfig) -> Level {
    if args.log_level.is_none() {
        if args.verbose {
            return Level::DEBUG;
        }
        if args.quiet {
            return Level::ERROR;
        }
    }
    // An invalid level is reported by config validation once logging is up.
    parse_level(&config.log_level).unwrap_or(Level::INFO)
}
