use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Gemini hyperparameter playground
#[derive(Debug, Parser)]
#[command(name = "playground", about = "Experiment with Gemini generation settings from the browser")]
pub struct Args {
    /// Path to configuration file, defaults apply when it does not exist
    #[arg(short, long, default_value = "playground.toml", env = "PLAYGROUND_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PLAYGROUND_LISTEN")]
    pub listen: Option<SocketAddr>,
}
