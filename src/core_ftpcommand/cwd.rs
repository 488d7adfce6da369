use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::Session;

pub async fn handle_cwd_command(
    session: &mut Session,
    console: &mut dyn Console,
    path: &str,
) -> ClientResult<Flow> {
    session.exchange("CWD", Some(path), console).await?;
    Ok(Flow::Continue)
}
