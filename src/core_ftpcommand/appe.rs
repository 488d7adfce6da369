use crate::config::ClientConfig;
use crate::console::Console;
use crate::core_error::{ClientResult, LocalIoError};
use crate::core_ftpcommand::handlers::Flow;
use crate::core_ftpcommand::utils::{finish_data_command, start_data_command};
use crate::core_transfer::TransferEngine;
use crate::session::Session;
use log::info;
use std::io;
use std::path::Path;

/// Handles `put <path>`: negotiates a data connection, sends the configured
/// upload verb (APPE unless configured otherwise) and streams the local file.
///
/// The local file is checked before anything is sent to the server.
pub async fn handle_put_command(
    session: &mut Session,
    config: &ClientConfig,
    console: &mut dyn Console,
    path: &str,
) -> ClientResult<Flow> {
    let source = Path::new(path);
    let metadata = tokio::fs::metadata(source)
        .await
        .map_err(|e| LocalIoError::LocalReadFailure {
            path: source.to_path_buf(),
            source: e,
        })?;
    if !metadata.is_file() {
        return Err(LocalIoError::LocalReadFailure {
            path: source.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        }
        .into());
    }

    let verb = config.upload_command.verb();
    let Some(mut command) = start_data_command(session, config, console, verb, Some(path)).await?
    else {
        return Ok(Flow::Continue);
    };

    let outcome = TransferEngine::new(config)
        .upload(&mut command.stream, source)
        .await;
    let sent = finish_data_command(session, console, command, outcome).await?;

    info!("{} {} done ({} bytes)", verb, path, sent);
    console.print(&format!("{} bytes sent.", sent));
    Ok(Flow::Continue)
}
