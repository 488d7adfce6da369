use std::str::FromStr;

/// Commands accepted at the `ftp>` prompt.
#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum ClientCommand {
    Ascii,
    Binary,
    Cd,
    Cdup,
    Debug,
    Dir,
    Get,
    Help,
    Passive,
    Put,
    Pwd,
    Quit,
    User,
}

impl ClientCommand {
    pub const ALL: [ClientCommand; 13] = [
        ClientCommand::Ascii,
        ClientCommand::Binary,
        ClientCommand::Cd,
        ClientCommand::Cdup,
        ClientCommand::Debug,
        ClientCommand::Dir,
        ClientCommand::Get,
        ClientCommand::Help,
        ClientCommand::Passive,
        ClientCommand::Put,
        ClientCommand::Pwd,
        ClientCommand::Quit,
        ClientCommand::User,
    ];

    /// Number of operands the command takes.
    pub fn arity(&self) -> usize {
        match self {
            ClientCommand::Cd | ClientCommand::Get | ClientCommand::Put | ClientCommand::User => 1,
            _ => 0,
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            ClientCommand::Cd => "Usage: cd <path>",
            ClientCommand::Get => "Usage: get <path>",
            ClientCommand::Put => "Usage: put <path>",
            ClientCommand::User => "Usage: user <login>",
            ClientCommand::Ascii => "Usage: ascii",
            ClientCommand::Binary => "Usage: binary",
            ClientCommand::Cdup => "Usage: cdup",
            ClientCommand::Debug => "Usage: debug",
            ClientCommand::Dir => "Usage: dir",
            ClientCommand::Help => "Usage: help",
            ClientCommand::Passive => "Usage: passive",
            ClientCommand::Pwd => "Usage: pwd",
            ClientCommand::Quit => "Usage: quit",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            ClientCommand::Ascii => "ascii      --> Set ASCII transfer type",
            ClientCommand::Binary => "binary     --> Set binary transfer type",
            ClientCommand::Cd => "cd <path>  --> Change the remote working directory",
            ClientCommand::Cdup => "cdup       --> Change the remote working directory to the parent directory",
            ClientCommand::Debug => "debug      --> Toggle debug mode",
            ClientCommand::Dir => "dir        --> List the contents of the remote directory",
            ClientCommand::Get => "get path   --> Get a remote file",
            ClientCommand::Help => "help       --> Displays this text",
            ClientCommand::Passive => "passive    --> Toggle passive/active mode",
            ClientCommand::Put => "put path   --> Transfer the specified file to the server",
            ClientCommand::Pwd => "pwd        --> Print the working directory on the server",
            ClientCommand::Quit => "quit       --> Close the connection to the server and terminate",
            ClientCommand::User => "user login --> Specify the user name (will prompt for password)",
        }
    }
}

impl FromStr for ClientCommand {
    type Err = ();

    fn from_str(cmd: &str) -> Result<Self, Self::Err> {
        match cmd.to_ascii_lowercase().as_str() {
            "ascii" => Ok(ClientCommand::Ascii),
            "binary" => Ok(ClientCommand::Binary),
            "cd" => Ok(ClientCommand::Cd),
            "cdup" => Ok(ClientCommand::Cdup),
            "debug" => Ok(ClientCommand::Debug),
            "dir" => Ok(ClientCommand::Dir),
            "get" => Ok(ClientCommand::Get),
            "help" => Ok(ClientCommand::Help),
            "passive" => Ok(ClientCommand::Passive),
            "put" => Ok(ClientCommand::Put),
            "pwd" => Ok(ClientCommand::Pwd),
            "quit" => Ok(ClientCommand::Quit),
            "user" => Ok(ClientCommand::User),
            _ => Err(()),
        }
    }
}
