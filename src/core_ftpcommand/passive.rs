use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::{Session, TransferMode};
use log::info;

/// Toggles passive mode. PASV itself is only sent when a transfer starts.
pub fn handle_passive_command(
    session: &mut Session,
    console: &mut dyn Console,
) -> ClientResult<Flow> {
    session.state.mode = match session.state.mode {
        TransferMode::Active => {
            console.print("Passive mode on.");
            TransferMode::Passive
        }
        TransferMode::Passive => {
            console.print("Passive mode off.");
            TransferMode::Active
        }
    };
    info!("Transfer mode is now {:?}", session.state.mode);
    Ok(Flow::Continue)
}
