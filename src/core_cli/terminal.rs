use crate::constants::PROMPT;
use crate::core_error::{ClientError, ClientResult};
use crate::core_ftpcommand::{Dispatcher, Flow};
use crate::helpers::local_user_name;
use log::{error, info, warn};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Operator input, one line at a time.
pub struct Terminal<R> {
    lines: Lines<R>,
    show_prompts: bool,
}

impl Terminal<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            show_prompts: true,
        }
    }
}

impl<R: AsyncBufRead + Unpin> Terminal<R> {
    /// Scripted input; prompts are not written anywhere.
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            show_prompts: false,
        }
    }

    /// Shows `prompt` and reads the answer. `None` at end of input.
    pub async fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.show_prompts {
            print!("{}", prompt);
            let _ = std::io::stdout().flush();
        }
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!("Cannot read operator input: {}", e);
                None
            }
        }
    }
}

/// Logs in, then runs the `ftp>` loop until `quit`, end of input or loss of
/// the control connection.
///
/// Returns the error that ended the session, after it has been reported.
pub async fn run<R>(
    server: &str,
    dispatcher: &mut Dispatcher,
    terminal: &mut Terminal<R>,
) -> ClientResult<()>
where
    R: AsyncBufRead + Unpin,
{
    if let Err(e) = login(server, dispatcher, terminal).await {
        settle(dispatcher, e)?;
    }

    loop {
        let line = match terminal.read_line(PROMPT).await {
            Some(line) => line,
            None => {
                info!("End of input, closing the session");
                "quit".to_string()
            }
        };

        match dispatcher.execute(&line).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::PasswordRequired) => {
                let password = terminal.read_line("Password: ").await.unwrap_or_default();
                if let Err(e) = dispatcher.send_password(password.trim()).await {
                    settle(dispatcher, e)?;
                }
            }
            Ok(Flow::Quit) => return Ok(()),
            Err(e) => settle(dispatcher, e)?,
        }
    }
}

async fn login<R>(
    server: &str,
    dispatcher: &mut Dispatcher,
    terminal: &mut Terminal<R>,
) -> ClientResult<()>
where
    R: AsyncBufRead + Unpin,
{
    dispatcher.read_welcome().await?;

    let default_user = local_user_name();
    let Some(answer) = terminal
        .read_line(&format!("Name ({}:{}): ", server, default_user))
        .await
    else {
        return Ok(());
    };
    let name = match answer.trim() {
        "" => default_user,
        name => name.to_string(),
    };

    if dispatcher.send_user(&name).await? == Flow::PasswordRequired {
        let Some(password) = terminal.read_line("Password: ").await else {
            return Ok(());
        };
        dispatcher.send_password(password.trim()).await?;
    }

    dispatcher.describe_system().await
}

/// Reports `err`; hands it back when the session cannot go on.
fn settle(dispatcher: &mut Dispatcher, err: ClientError) -> ClientResult<()> {
    dispatcher.report(&err);
    if err.ends_session() {
        error!("Session ended: {}", err);
        Err(err)
    } else {
        Ok(())
    }
}
