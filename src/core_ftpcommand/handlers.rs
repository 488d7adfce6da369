use crate::config::Config;
use crate::console::Console;
use crate::core_error::{ClientError, ClientResult};
use crate::core_ftpcommand::ftpcommand::ClientCommand;
use crate::core_ftpcommand::{
    appe, cdup, cwd, debug as debug_cmd, help, list, passive, pwd, quit, retr, syst, type_, user,
};
use crate::core_reply::Reply;
use crate::session::{Session, TransferType};
use log::{debug, info, warn};
use std::sync::Arc;

/// What the caller should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// USER was answered with 331; prompt for a password and call
    /// [`Dispatcher::send_password`].
    PasswordRequired,
    Quit,
}

/// Turns operator input into control/data exchanges over one session.
pub struct Dispatcher {
    session: Session,
    config: Arc<Config>,
    console: Box<dyn Console>,
}

impl Dispatcher {
    pub fn new(session: Session, config: Arc<Config>, console: Box<dyn Console>) -> Self {
        Self {
            session,
            config,
            console,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&mut self) -> &mut dyn Console {
        self.console.as_mut()
    }

    /// Reads the greeting the server sends on connect.
    pub async fn read_welcome(&mut self) -> ClientResult<Reply> {
        Ok(self.session.read_reply(self.console.as_mut()).await?)
    }

    /// Runs one line of operator input to completion.
    pub async fn execute(&mut self, input: &str) -> ClientResult<Flow> {
        let mut tokens = input.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match verb.parse::<ClientCommand>() {
            Ok(command) => command,
            Err(()) => {
                warn!("Unknown command: {}", verb);
                self.console.print("Invalid command");
                return Ok(Flow::Continue);
            }
        };

        // Commands without operands ignore extra words.
        if command.arity() > 0 && args.len() != command.arity() {
            return Err(ClientError::Usage(command.usage().to_string()));
        }
        debug!("Dispatching {:?} {:?}", command, args);

        let session = &mut self.session;
        let config = &self.config.client;
        let console = self.console.as_mut();

        match command {
            ClientCommand::Ascii => {
                type_::handle_type_command(session, console, TransferType::Ascii).await
            }
            ClientCommand::Binary => {
                type_::handle_type_command(session, console, TransferType::Binary).await
            }
            ClientCommand::Cd => cwd::handle_cwd_command(session, console, args[0]).await,
            ClientCommand::Cdup => cdup::handle_cdup_command(session, console).await,
            ClientCommand::Debug => debug_cmd::handle_debug_command(session, console),
            ClientCommand::Dir => list::handle_list_command(session, config, console).await,
            ClientCommand::Get => {
                retr::handle_retr_command(session, config, console, args[0]).await
            }
            ClientCommand::Help => help::handle_help_command(console),
            ClientCommand::Passive => passive::handle_passive_command(session, console),
            ClientCommand::Put => {
                appe::handle_put_command(session, config, console, args[0]).await
            }
            ClientCommand::Pwd => pwd::handle_pwd_command(session, console).await,
            ClientCommand::Quit => quit::handle_quit_command(session, console).await,
            ClientCommand::User => user::handle_user_command(session, console, args[0]).await,
        }
    }

    /// First half of a login: sends USER.
    pub async fn send_user(&mut self, username: &str) -> ClientResult<Flow> {
        user::handle_user_command(&mut self.session, self.console.as_mut(), username).await
    }

    /// Second half of a login started by `user`.
    pub async fn send_password(&mut self, password: &str) -> ClientResult<Flow> {
        user::handle_pass_command(&mut self.session, self.console.as_mut(), password).await
    }

    /// Shows the remote system type and switches to binary transfers.
    pub async fn describe_system(&mut self) -> ClientResult<()> {
        syst::handle_syst_command(&mut self.session, self.console.as_mut()).await?;

        let binary = TransferType::Binary;
        let reply = self
            .session
            .exchange_quietly("TYPE", Some(binary.type_code()), self.console.as_mut())
            .await?;
        if reply.is_positive() {
            self.session.state.transfer_type = binary;
            info!("Transfer type set to {}", binary);
            self.console.print("Using binary mode to transfer files.");
        } else {
            for line in reply.lines() {
                self.console.print(line);
            }
        }
        Ok(())
    }

    /// Shows an error to the operator.
    pub fn report(&mut self, err: &ClientError) {
        self.console.print_error(&err.to_display_message());
    }
}
