use crate::config::ClientConfig;
use crate::console::Console;
use crate::core_error::{ClientError, ProtocolError};
use crate::core_network::control::ControlChannel;
use crate::core_network::{pasv, port};
use crate::session::{SessionState, TransferMode};
use log::debug;
use tokio::net::TcpStream;

/// Establishes the data connection for the next LIST/RETR/upload.
///
/// In active mode the port recorded in `state.current_data_port` must already
/// have been allocated for this transfer; the session is never mutated here.
pub async fn open_data_connection(
    control: &mut ControlChannel,
    state: &SessionState,
    config: &ClientConfig,
    console: &mut dyn Console,
) -> Result<TcpStream, ClientError> {
    let connect_timeout = config.read_timeout();
    match state.mode {
        TransferMode::Passive => {
            debug!("Negotiating passive data connection");
            pasv::open_passive_connection(control, state, connect_timeout, console).await
        }
        TransferMode::Active => {
            let port = state.current_data_port.ok_or_else(|| {
                ProtocolError::DataConnectFailure("no active data port allocated".to_string())
            })?;
            let server_data_port = config.active_data_port(control.peer_addr().port());
            debug!(
                "Negotiating active data connection on local port {}, server port {}",
                port, server_data_port
            );
            port::open_active_connection(
                control,
                state,
                port,
                server_data_port,
                connect_timeout,
                console,
            )
            .await
        }
    }
}
