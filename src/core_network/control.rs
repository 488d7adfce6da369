use crate::console::Console;
use crate::core_error::{ClientError, ProtocolError};
use crate::core_reply::{Reply, ReplyReader};
use log::{debug, info};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{lookup_host, TcpStream};

/// Builds the wire form of a command. The argument is omitted entirely,
/// without a trailing space, when absent.
pub fn format_command(verb: &str, arg: Option<&str>) -> String {
    match arg {
        Some(arg) => format!("{} {}\r\n", verb, arg),
        None => format!("{}\r\n", verb),
    }
}

/// Printable form of a command, with passwords hidden.
pub fn masked_command(verb: &str, arg: Option<&str>) -> String {
    match arg {
        Some(_) if verb.eq_ignore_ascii_case("PASS") => format!("{} XXXX", verb),
        Some(arg) => format!("{} {}", verb, arg),
        None => verb.to_string(),
    }
}

/// The command connection. One request is in flight at a time; `&mut self`
/// on every exchange keeps a second command from being written before the
/// previous reply has been drained.
pub struct ControlChannel {
    reader: ReplyReader<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
    local_addr: SocketAddr,
    peer_addr: SocketAddr,
}

impl ControlChannel {
    /// Resolves `host` and opens the control connection.
    pub async fn connect(
        host: &str,
        port: u16,
        read_timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let addrs: Vec<SocketAddr> = lookup_host((host, port))
            .await
            .map_err(|_| ClientError::Connection(format!("{}: Name or service not known", host)))?
            .collect();

        let mut last_error = None;
        for addr in addrs {
            debug!("Connecting to {}", addr);
            match TcpStream::connect(addr).await {
                Ok(stream) => {
                    info!("Connected to {} ({})", host, addr);
                    return Self::new(stream, read_timeout)
                        .map_err(|e| ClientError::Connection(format!("{}: {}", host, e)));
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(ClientError::Connection(match last_error {
            Some(e) => format!("{}: {}", host, e),
            None => format!("{}: Name or service not known", host),
        }))
    }

    pub fn new(stream: TcpStream, read_timeout: Option<Duration>) -> std::io::Result<Self> {
        let local_addr = stream.local_addr()?;
        let peer_addr = stream.peer_addr()?;
        let (rd, wr) = stream.into_split();
        Ok(Self {
            reader: ReplyReader::new(BufReader::new(rd), read_timeout),
            writer: wr,
            local_addr,
            peer_addr,
        })
    }

    /// Address of our end of the control connection.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Writes one command line and flushes it.
    pub async fn write_command(
        &mut self,
        verb: &str,
        arg: Option<&str>,
    ) -> Result<(), ProtocolError> {
        let line = format_command(verb, arg);
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        debug!(">>> {}", masked_command(verb, arg));
        Ok(())
    }

    /// Reads the next reply, echoing its lines to `console`.
    pub async fn read_reply(&mut self, console: &mut dyn Console) -> Result<Reply, ProtocolError> {
        let reply = self.reader.read_reply(console).await?;
        debug!("<<< reply {} ({} line(s))", reply.code(), reply.lines().len());
        Ok(reply)
    }

    /// Sends a command and returns its reply.
    pub async fn send(
        &mut self,
        verb: &str,
        arg: Option<&str>,
        console: &mut dyn Console,
    ) -> Result<Reply, ProtocolError> {
        self.write_command(verb, arg).await?;
        self.read_reply(console).await
    }
}
