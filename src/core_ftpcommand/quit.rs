use crate::console::Console;
use crate::core_error::{ClientResult, ProtocolError};
use crate::core_ftpcommand::handlers::Flow;
use crate::session::Session;
use log::info;

/// Handles `quit`: sends QUIT and ends the session.
///
/// A server that already dropped the connection still ends the session
/// cleanly.
pub async fn handle_quit_command(
    session: &mut Session,
    console: &mut dyn Console,
) -> ClientResult<Flow> {
    match session.exchange("QUIT", None, console).await {
        Ok(_) => info!("Sent QUIT. Connection closed."),
        Err(ProtocolError::ConnectionLost(reason)) => {
            info!("Connection already closed before QUIT: {}", reason)
        }
        Err(e) => return Err(e.into()),
    }
    Ok(Flow::Quit)
}
