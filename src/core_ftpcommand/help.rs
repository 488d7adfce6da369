use crate::console::Console;
use crate::core_error::ClientResult;
use crate::core_ftpcommand::ftpcommand::ClientCommand;
use crate::core_ftpcommand::handlers::Flow;

pub fn handle_help_command(console: &mut dyn Console) -> ClientResult<Flow> {
    for command in ClientCommand::ALL {
        console.print(command.help());
    }
    Ok(Flow::Continue)
}
