//! # wps-client
//! Submits an artifact to the configured WPS endpoint and prints the result.
//!

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use shared::{Failure, init_logger};
use tracing::info;
use wps_client::{Config, PayloadSubmitter};

#[derive(Parser, Debug)]
#[command(name = "wps-client")]
#[command(about = "Upload an artifact to a WPS process", long_about = None)]
struct Cli {
    /// Path to the config file.
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Directory to write log files to.
    #[arg(long, default_value = "./logs")]
    log_directory: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default config file.
    Init,

    /// Submit an artifact and print the response.
    Submit {
        /// Path to the artifact to upload.
        artifact: PathBuf,

        /// Write the response to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let _logger = init_logger(&cli.log_directory).or_log_and_panic("Could not initialize logger");

    match cli.command {
        Commands::Init => {
            let config = Config::default();
            let contents =
                toml::to_string_pretty(&config).or_log_and_panic("Could not serialize config file");
            fs::write(&cli.config, contents).or_log_and_panic("Could not create config file");
            info!("Wrote {}", cli.config.display());
        }

        Commands::Submit { artifact, output } => {
            let config = Config::load_toml(&cli.config).or_log_and_panic("Could not load config");

            let mut submitter = PayloadSubmitter::from_config(&config)
                .or_log_and_panic("Could not create HTTP client");

            let response = submitter
                .submit(&artifact)
                .or_log_and_panic("Could not submit artifact");

            match output {
                Some(path) => fs::write(path, &response).or_log_and_panic("Could not write response"),
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout
                        .write_all(&response)
                        .and_then(|()| stdout.flush())
                        .or_log_and_panic("Could not write response");
                }
            }
        }
    }
}
