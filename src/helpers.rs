use crate::config::Config;
use crate::core_error::{ClientError, ClientResult};
use log::info;
use std::env;
use std::path::PathBuf;

/// Local file name for a download: the final `/`-separated component of the
/// remote path.
pub fn local_file_name(remote: &str) -> ClientResult<PathBuf> {
    match remote.rsplit('/').find(|part| !part.is_empty()) {
        Some(".") | Some("..") | None => Err(ClientError::Usage(format!(
            "{}: not a file name",
            remote
        ))),
        Some(name) => Ok(PathBuf::from(name)),
    }
}

/// Login name of the local user, offered as the default at the Name prompt.
pub fn local_user_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_default()
}

// Helper function to log configuration options
pub fn log_config(config: &Config) {
    let client = &config.client;
    info!("  Control Port: {}", client.port);
    info!("  Passive Mode: {}", client.passive);
    info!("  Debug: {}", client.debug);
    match client.read_timeout() {
        Some(timeout) => info!("  Read Timeout: {}s", timeout.as_secs()),
        None => info!("  Read Timeout: none"),
    }
    info!(
        "  Download Buffer Size: {} KB",
        client.download_buffer_size() / 1024
    );
    info!(
        "  Upload Buffer Size: {} KB",
        client.upload_buffer_size() / 1024
    );
    info!(
        "  Active Data Port: {}",
        client.active_data_port(client.port)
    );
    info!("  Upload Command: {}", client.upload_command.verb());
    match &client.download_dir {
        Some(dir) => info!("  Download Directory: {}", dir.display()),
        None => info!("  Download Directory: working directory"),
    }
}
