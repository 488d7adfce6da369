use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::{Session, TransferType};
use log::{info, warn};

/// Handles `ascii` and `binary`: sends TYPE A / TYPE I.
///
/// The session keeps its previous type if the server refuses the change.
pub async fn handle_type_command(
    session: &mut Session,
    console: &mut dyn Console,
    transfer_type: TransferType,
) -> ClientResult<Flow> {
    let reply = session
        .exchange("TYPE", Some(transfer_type.type_code()), console)
        .await?;

    if reply.is_positive() {
        session.state.transfer_type = transfer_type;
        info!("Transfer type set to {}", transfer_type);
    } else {
        warn!("Server refused TYPE {}: {}", transfer_type.type_code(), reply.code());
    }
    Ok(Flow::Continue)
}
