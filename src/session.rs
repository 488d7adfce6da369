use crate::config::ClientConfig;
use crate::console::{Console, QuietConsole};
use crate::core_error::{ClientError, ProtocolError};
use crate::core_network::control::masked_command;
use crate::core_network::port::next_active_port;
use crate::core_network::{self, ControlChannel};
use crate::core_reply::Reply;
use log::info;
use std::fmt;
use tokio::net::TcpStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    Ascii,
    Binary,
}

impl TransferType {
    /// Argument of the TYPE command.
    pub fn type_code(&self) -> &'static str {
        match self {
            TransferType::Ascii => "A",
            TransferType::Binary => "I",
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferType::Ascii => write!(f, "ascii"),
            TransferType::Binary => write!(f, "binary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Active,
    Passive,
}

/// Client-local session flags. Only the dispatcher mutates them.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub transfer_type: TransferType,
    pub mode: TransferMode,
    pub debug: bool,
    pub current_data_port: Option<u16>,
}

impl SessionState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            transfer_type: TransferType::Ascii, // Servers start in ASCII
            mode: if config.passive {
                TransferMode::Passive
            } else {
                TransferMode::Active
            },
            debug: config.debug,
            current_data_port: None,
        }
    }
}

/// One connection to a server, from connect until QUIT or connection loss.
pub struct Session {
    pub control: ControlChannel,
    pub state: SessionState,
}

impl Session {
    pub fn new(control: ControlChannel, config: &ClientConfig) -> Self {
        Self {
            control,
            state: SessionState::new(config),
        }
    }

    pub async fn connect(host: &str, config: &ClientConfig) -> Result<Self, ClientError> {
        let control = ControlChannel::connect(host, config.port, config.read_timeout()).await?;
        Ok(Self::new(control, config))
    }

    /// Sends a command, echoing it first when debugging is on.
    pub async fn exchange(
        &mut self,
        verb: &str,
        arg: Option<&str>,
        console: &mut dyn Console,
    ) -> Result<Reply, ProtocolError> {
        exchange(&mut self.control, &self.state, verb, arg, console).await
    }

    /// Like [`Session::exchange`], but the reply lines are not shown; the
    /// caller summarises them.
    pub async fn exchange_quietly(
        &mut self,
        verb: &str,
        arg: Option<&str>,
        console: &mut dyn Console,
    ) -> Result<Reply, ProtocolError> {
        if self.state.debug {
            console.print(&format!("---> {}", masked_command(verb, arg)));
        }
        self.control.send(verb, arg, &mut QuietConsole).await
    }

    pub async fn read_reply(&mut self, console: &mut dyn Console) -> Result<Reply, ProtocolError> {
        self.control.read_reply(console).await
    }

    /// Reserves a fresh local port for the next active-mode transfer.
    pub fn allocate_data_port(&mut self) -> u16 {
        let port = next_active_port(self.state.current_data_port);
        self.state.current_data_port = Some(port);
        port
    }

    /// Negotiates a data connection according to the current mode.
    pub async fn open_data_connection(
        &mut self,
        config: &ClientConfig,
        console: &mut dyn Console,
    ) -> Result<TcpStream, ClientError> {
        if self.state.mode == TransferMode::Active {
            let port = self.allocate_data_port();
            info!("Allocated active data port {}", port);
        }
        core_network::open_data_connection(&mut self.control, &self.state, config, console).await
    }
}

/// Sends one command over `control`, echoing `---> VERB ARG` when `state.debug`.
pub async fn exchange(
    control: &mut ControlChannel,
    state: &SessionState,
    verb: &str,
    arg: Option<&str>,
    console: &mut dyn Console,
) -> Result<Reply, ProtocolError> {
    if state.debug {
        console.print(&format!("---> {}", masked_command(verb, arg)));
    }
    control.send(verb, arg, console).await
}
