pub mod reader;
pub mod reply;

#[cfg(test)]
mod test_reply;

pub use reader::ReplyReader;
pub use reply::{parse_line, Reply, ReplyBuilder};
