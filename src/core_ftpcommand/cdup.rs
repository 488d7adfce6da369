use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::Session;

pub async fn handle_cdup_command(
    session: &mut Session,
    console: &mut dyn Console,
) -> ClientResult<Flow> {
    session.exchange("CDUP", None, console).await?;
    Ok(Flow::Continue)
}
