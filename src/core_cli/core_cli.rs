use crate::config::Config;
use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "rouilleftp", about = "An interactive FTP client written in Rust.")]
pub struct Cli {
    /// Host name or address of the FTP server
    pub server: String,

    /// Control port of the server
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Start in passive mode
    #[arg(short = 'P', long)]
    pub passive: bool,

    /// Start with debugging on
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Command-line flags take precedence over the configuration file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.client.port = port;
        }
        if self.passive {
            config.client.passive = true;
        }
        if self.debug {
            config.client.debug = true;
        }
    }
}
