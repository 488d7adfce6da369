use crate::console::Console;
use crate::constants::REPLY_NEED_PASSWORD;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::handlers::Flow;
use crate::session::Session;
use log::{info, warn};

/// Handles `user <login>`: sends USER and asks for a password on 331.
pub async fn handle_user_command(
    session: &mut Session,
    console: &mut dyn Console,
    username: &str,
) -> ClientResult<Flow> {
    info!("Logging in as {}", username);
    let reply = session.exchange("USER", Some(username), console).await?;

    if reply.code() == REPLY_NEED_PASSWORD {
        Ok(Flow::PasswordRequired)
    } else {
        if !reply.is_positive() {
            warn!("USER {} refused with {}", username, reply.code());
        }
        Ok(Flow::Continue)
    }
}

pub async fn handle_pass_command(
    session: &mut Session,
    console: &mut dyn Console,
    password: &str,
) -> ClientResult<Flow> {
    let reply = session.exchange("PASS", Some(password), console).await?;
    if reply.is_positive() {
        info!("Login successful");
    } else {
        warn!("Login failed with {}", reply.code());
    }
    Ok(Flow::Continue)
}
