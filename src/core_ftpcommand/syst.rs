use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::Session;
use log::info;

/// Sends SYST and prints `Remote system type is <word>.` instead of the raw
/// reply.
pub async fn handle_syst_command(
    session: &mut Session,
    console: &mut dyn Console,
) -> ClientResult<Flow> {
    let reply = session.exchange_quietly("SYST", None, console).await?;

    if reply.is_positive() {
        let system = reply.message().split_whitespace().next().unwrap_or("unknown");
        info!("Remote system type: {}", system);
        console.print(&format!("Remote system type is {}.", system));
    } else {
        for line in reply.lines() {
            console.print(line);
        }
    }
    Ok(Flow::Continue)
}
