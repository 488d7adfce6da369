pub mod core_cli;
pub mod terminal;

pub use self::core_cli::Cli;
pub use terminal::{run, Terminal};
