use crate::config::ClientConfig;
use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_reply::Reply;
use crate::session::Session;
use log::{error, warn};
use tokio::net::TcpStream;

/// A data command the server accepted, with its data connection.
pub struct DataCommand {
    pub stream: TcpStream,
    pub reply: Reply,
    awaits_completion: bool,
}

/// Negotiates a data connection, then sends `verb`.
///
/// Returns `None` when the server refuses the command; the refusal has
/// already been shown and the data connection is dropped.
pub async fn start_data_command(
    session: &mut Session,
    config: &ClientConfig,
    console: &mut dyn Console,
    verb: &str,
    arg: Option<&str>,
) -> ClientResult<Option<DataCommand>> {
    let stream = session.open_data_connection(config, console).await?;
    let reply = session.exchange(verb, arg, console).await?;

    // 1xx announces a completion reply after the data; a bare 2xx does not.
    let awaits_completion = if reply.is_preliminary() {
        true
    } else if reply.is_positive() {
        false
    } else {
        warn!("{} refused with {}", verb, reply.code());
        return Ok(None);
    };

    Ok(Some(DataCommand {
        stream,
        reply,
        awaits_completion,
    }))
}

/// Closes the data connection and drains the completion reply, so the control
/// channel is ready for the next command whatever happened to the transfer.
pub async fn finish_data_command<T>(
    session: &mut Session,
    console: &mut dyn Console,
    command: DataCommand,
    outcome: ClientResult<T>,
) -> ClientResult<T> {
    let DataCommand {
        stream,
        awaits_completion,
        ..
    } = command;
    drop(stream);

    if awaits_completion {
        match session.read_reply(console).await {
            Ok(reply) if !reply.is_positive() => {
                warn!("Transfer ended with {}", reply.code());
            }
            Ok(_) => {}
            Err(e) => {
                if let Err(transfer_error) = &outcome {
                    error!("Transfer failed before the control channel: {}", transfer_error);
                }
                return Err(e.into());
            }
        }
    }
    outcome
}
