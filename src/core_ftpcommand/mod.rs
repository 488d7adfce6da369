// Here's the list of the client commands implemented
pub mod appe;
pub mod cdup;
pub mod cwd;
pub mod debug;
pub mod help;
pub mod list;
pub mod passive;
pub mod pwd;
pub mod quit;
pub mod retr;
pub mod syst;
pub mod type_;
pub mod user;

// Command table and dispatcher
pub mod ftpcommand;
pub mod handlers;

// The utils and common functions are here
pub mod utils;

#[cfg(test)]
mod test_dispatch;

pub use ftpcommand::ClientCommand;
pub use handlers::{Dispatcher, Flow};
