use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::info;
use rouilleftp::config::{load_config, Config};
use rouilleftp::console::StdoutConsole;
use rouilleftp::core_cli::{self, Cli, Terminal};
use rouilleftp::core_ftpcommand::Dispatcher;
use rouilleftp::helpers::log_config;
use rouilleftp::session::Session;
use std::io::Write;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Initialize the logger with a custom format
    let default_filter = if args.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    // Load configuration from the TOML file, if any
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);
    log_config(&config);

    let session = match Session::connect(&args.server, &config.client).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e.to_display_message());
            process::exit(1);
        }
    };

    let mut dispatcher = Dispatcher::new(session, Arc::new(config), Box::new(StdoutConsole));
    let mut terminal = Terminal::stdin();
    if core_cli::run(&args.server, &mut dispatcher, &mut terminal)
        .await
        .is_err()
    {
        process::exit(1);
    }

    info!("Goodbye.");
    Ok(())
}
