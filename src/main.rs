use anyhow::Context;
use clap::Parser;
use sounding_downloader::Error;
use sounding_downloader::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    let result = commands::run(args).context("Sounding download failed");

    match result {
        Ok(_sounding) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            // Distinct exit code when the service has no sounding for the request
            let unavailable = error
                .downcast_ref::<Error>()
                .is_some_and(Error::is_unavailable);
            process::exit(if unavailable { 2 } else { 1 });
        }
    }
}
