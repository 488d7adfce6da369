use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::Session;

/// Toggles the echo of outgoing commands. Purely local.
pub fn handle_debug_command(
    session: &mut Session,
    console: &mut dyn Console,
) -> ClientResult<Flow> {
    session.state.debug = !session.state.debug;
    if session.state.debug {
        console.print("Debugging on (debug=1).");
    } else {
        console.print("Debugging off (debug=0).");
    }
    Ok(Flow::Continue)
}
