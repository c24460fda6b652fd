//! Command implementation for the sounding downloader CLI

use std::io::{self, Write};

use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::pipeline::{Sounding, SoundingClient};
use crate::cli::args::{Args, OutputFormat};
use crate::config::SoundingConfig;
use crate::{Error, Result};

/// Main command runner
///
/// Sets up logging, resolves the configuration, downloads the requested
/// sounding and prints it in the chosen format.
pub fn run(args: Args) -> Result<Sounding> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = build_config(&args)?;
    debug!("Resolved configuration: {:?}", config);

    let client = SoundingClient::new(config)?;
    let request = args.to_request();
    let mut sounding = client.download(&request)?;

    print_sounding(&mut sounding, &args)?;
    Ok(sounding)
}

/// Environment configuration overlaid with the command-line arguments
pub fn build_config(args: &Args) -> Result<SoundingConfig> {
    let config = args.apply_to(SoundingConfig::from_env());
    config.validate()?;
    Ok(config)
}

/// Set up logging based on verbosity settings
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sounding_downloader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

fn print_sounding(sounding: &mut Sounding, args: &Args) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                println!(
                    "{}\n{}",
                    "On this homepage you can find the data:".bold(),
                    sounding.url
                );
            }
            println!("{}", sounding.table);
            if sounding.rows_dropped > 0 && !args.quiet {
                println!(
                    "{}",
                    format!("{} incomplete levels dropped", sounding.rows_dropped).dimmed()
                );
            }
        }
        OutputFormat::Csv => {
            info!("Source: {}", sounding.url);
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            sounding.table.write_csv(&mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_config_applies_overrides() {
        let args = Args::try_parse_from([
            "sounding-downloader",
            "--base-url",
            "http://localhost:8080/cgi-bin/sounding",
            "--artifact",
            "out.csv",
        ])
        .unwrap();

        let config = build_config(&args).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/cgi-bin/sounding");
        assert_eq!(
            config.artifact_path.as_deref(),
            Some(std::path::Path::new("out.csv"))
        );
    }

    #[test]
    fn test_build_config_rejects_bad_base_url() {
        let args =
            Args::try_parse_from(["sounding-downloader", "--base-url", "ftp://example.org"])
                .unwrap();
        assert!(build_config(&args).is_err());
    }
}
