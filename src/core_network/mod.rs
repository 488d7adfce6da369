pub mod control;
pub mod negotiator;
pub mod pasv;
pub mod port;

use crate::core_error::ProtocolError;
use std::io;
use std::net::{SocketAddr, SocketAddrV4};
use std::time::Duration;
use tokio::net::{TcpSocket, TcpStream};

pub use control::ControlChannel;
pub use negotiator::open_data_connection;

/// Address of one data connection, used once then discarded.
pub type Endpoint = SocketAddrV4;

/// Opens a data connection to `remote`, optionally from a fixed local address.
pub async fn dial(
    remote: SocketAddr,
    local: Option<SocketAddr>,
    connect_timeout: Option<Duration>,
) -> Result<TcpStream, ProtocolError> {
    let connect = async {
        match local {
            Some(local) => {
                let socket = if local.is_ipv4() {
                    TcpSocket::new_v4()?
                } else {
                    TcpSocket::new_v6()?
                };
                socket.set_reuseaddr(true)?;
                socket.bind(local)?;
                socket.connect(remote).await
            }
            None => TcpStream::connect(remote).await,
        }
    };

    let result = match connect_timeout {
        Some(limit) => tokio::time::timeout(limit, connect)
            .await
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::TimedOut, "connect timed out"))),
        None => connect.await,
    };

    result.map_err(|e| ProtocolError::DataConnectFailure(format!("{}: {}", remote, e)))
}
