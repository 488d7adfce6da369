pub mod error;

pub use error::{ClientError, ClientResult, LocalIoError, ProtocolError};
