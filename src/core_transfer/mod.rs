pub mod engine;
pub mod size;
pub mod transfer;


pub use engine::TransferEngine;
pub use size::parse_announced_size;
pub use transfer::Transfer;
