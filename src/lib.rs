pub mod config;
pub mod console;
pub mod constants;
pub mod core_cli;
pub mod core_error;
pub mod core_ftpcommand;
pub mod core_network;
pub mod core_reply;
pub mod core_transfer;
pub mod helpers;
pub mod session;

pub use config::{load_config, Config};
pub use core_ftpcommand::{Dispatcher, Flow};
pub use session::Session;
