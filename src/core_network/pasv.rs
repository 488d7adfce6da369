use crate::console::Console;
use crate::constants::REPLY_ENTERING_PASSIVE;
use crate::core_error::{ClientError, ProtocolError};
use crate::core_network::control::ControlChannel;
use crate::core_network::{dial, Endpoint};
use crate::core_reply::Reply;
use crate::session::{exchange, SessionState};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tokio::net::TcpStream;

lazy_static! {
    // The six numbers that end the line, before an optional `)` and text.
    static ref PASV_TUPLE: Regex =
        Regex::new(r"(\d+),(\d+),(\d+),(\d+),(\d+),(\d+)\)?[^\d,]*$").unwrap();
}

/// Extracts the data endpoint from the last line of a PASV reply.
///
/// Descriptive text before the tuple and a trailing `)` (or `).`) are
/// tolerated. A longer number sequence yields its last six entries. Every
/// number must fit in a byte.
pub fn parse_pasv_reply(reply: &Reply) -> Result<Endpoint, ProtocolError> {
    let line = reply.last_line();
    let failure = || ProtocolError::PasvParseFailure(line.to_string());

    let captures = PASV_TUPLE.captures(line).ok_or_else(failure)?;
    let mut numbers = [0u8; 6];
    for (i, number) in numbers.iter_mut().enumerate() {
        *number = captures[i + 1].parse::<u8>().map_err(|_| failure())?;
    }

    let host = Ipv4Addr::new(numbers[0], numbers[1], numbers[2], numbers[3]);
    let port = numbers[4] as u16 * 256 + numbers[5] as u16;
    Ok(Endpoint::new(host, port))
}

/// Issues PASV and dials the announced endpoint.
pub async fn open_passive_connection(
    control: &mut ControlChannel,
    state: &SessionState,
    connect_timeout: Option<Duration>,
    console: &mut dyn Console,
) -> Result<TcpStream, ClientError> {
    let reply = exchange(control, state, "PASV", None, console).await?;
    if reply.code() != REPLY_ENTERING_PASSIVE {
        return Err(ProtocolError::UnexpectedReply {
            code: reply.code(),
            text: reply.message().to_string(),
        }
        .into());
    }

    let mut endpoint = parse_pasv_reply(&reply)?;
    if endpoint.ip().is_unspecified() {
        if let IpAddr::V4(peer) = control.peer_addr().ip() {
            debug!("PASV announced {}, using control peer {}", endpoint.ip(), peer);
            endpoint.set_ip(peer);
        }
    }

    info!("Opening passive data connection to {}", endpoint);
    let stream = dial(endpoint.into(), None, connect_timeout).await?;
    Ok(stream)
}
