use crate::config::ClientConfig;
use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::core_ftpcommand::utils::{finish_data_command, start_data_command};
use crate::core_transfer::{parse_announced_size, TransferEngine};
use crate::helpers::local_file_name;
use crate::session::Session;
use log::{debug, info};

/// Handles `get <path>`.
///
/// The file lands in the download directory (the working directory unless
/// configured) under the remote path's final component.
/// A size announced in the RETR reply bounds the download.
pub async fn handle_retr_command(
    session: &mut Session,
    config: &ClientConfig,
    console: &mut dyn Console,
    remote: &str,
) -> ClientResult<Flow> {
    let destination = config.download_path(&local_file_name(remote)?);

    let started = start_data_command(session, config, console, "RETR", Some(remote)).await?;
    let Some(mut command) = started else {
        return Ok(Flow::Continue);
    };

    let expected_size = parse_announced_size(&command.reply);
    debug!("RETR {} announced size {:?}", remote, expected_size);

    let outcome = TransferEngine::new(config)
        .download(&mut command.stream, expected_size, &destination)
        .await;
    let received = finish_data_command(session, console, command, outcome).await?;

    info!("Retrieved {} into {:?} ({} bytes)", remote, destination, received);
    console.print(&format!("{} bytes received.", received));
    Ok(Flow::Continue)
}
