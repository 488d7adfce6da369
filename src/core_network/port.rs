use crate::console::Console;
use crate::constants::{MAX_ACTIVE_PORT, MIN_ACTIVE_PORT};
use crate::core_error::{ClientError, ProtocolError};
use crate::core_network::control::ControlChannel;
use crate::core_network::dial;
use crate::session::{exchange, SessionState};
use log::info;
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;

/// Picks the local port for the next active-mode transfer.
///
/// The first allocation of a session is random in
/// `[MIN_ACTIVE_PORT, MAX_ACTIVE_PORT)`; each later one is the previous port
/// plus one, wrapping back to `MIN_ACTIVE_PORT`.
pub fn next_active_port(current: Option<u16>) -> u16 {
    match current {
        None => rand::thread_rng().gen_range(MIN_ACTIVE_PORT..MAX_ACTIVE_PORT),
        Some(port) if port.saturating_add(1) >= MAX_ACTIVE_PORT => MIN_ACTIVE_PORT,
        Some(port) => port + 1,
    }
}

/// Formats the PORT argument `h1,h2,h3,h4,p1,p2`.
pub fn format_port_argument(host: Ipv4Addr, port: u16) -> String {
    let [h1, h2, h3, h4] = host.octets();
    format!("{},{},{},{},{},{}", h1, h2, h3, h4, port / 256, port % 256)
}

/// Announces `port` with PORT, then dials the server's data port from it.
///
/// The server data address is the control peer with `server_data_port`.
pub async fn open_active_connection(
    control: &mut ControlChannel,
    state: &SessionState,
    port: u16,
    server_data_port: u16,
    connect_timeout: Option<Duration>,
    console: &mut dyn Console,
) -> Result<TcpStream, ClientError> {
    let local_ip = match control.local_addr().ip() {
        IpAddr::V4(ip) => ip,
        IpAddr::V6(ip) => ip.to_ipv4_mapped().ok_or_else(|| {
            ProtocolError::DataConnectFailure(
                "active mode needs an IPv4 control connection".to_string(),
            )
        })?,
    };

    let argument = format_port_argument(local_ip, port);
    let reply = exchange(control, state, "PORT", Some(&argument), console).await?;
    if !reply.is_positive() {
        return Err(ProtocolError::UnexpectedReply {
            code: reply.code(),
            text: reply.message().to_string(),
        }
        .into());
    }

    let local = SocketAddr::new(IpAddr::V4(local_ip), port);
    let remote = SocketAddr::new(control.peer_addr().ip(), server_data_port);
    info!("Opening active data connection {} -> {}", local, remote);
    let stream = dial(remote, Some(local), connect_timeout).await?;
    Ok(stream)
}
