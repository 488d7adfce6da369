use crate::config::ClientConfig;
use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::core_ftpcommand::utils::{finish_data_command, start_data_command};
use crate::core_transfer::TransferEngine;
use crate::session::Session;
use log::info;

/// Handles `dir`: LIST over a fresh data connection, shown as text before
/// the completion reply.
pub async fn handle_list_command(
    session: &mut Session,
    config: &ClientConfig,
    console: &mut dyn Console,
) -> ClientResult<Flow> {
    let Some(mut command) = start_data_command(session, config, console, "LIST", None).await?
    else {
        return Ok(Flow::Continue);
    };

    let outcome = TransferEngine::new(config).receive(&mut command.stream).await;
    if let Ok(listing) = &outcome {
        for line in String::from_utf8_lossy(listing).lines() {
            console.print(line);
        }
        info!("Listing received ({} bytes)", listing.len());
    }

    finish_data_command(session, console, command, outcome).await?;
    Ok(Flow::Continue)
}
