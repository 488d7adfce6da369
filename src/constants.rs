// src/constants.rs

pub const DEFAULT_PORT: u16 = 21;
pub const PROMPT: &str = "ftp> ";

pub const DEFAULT_DOWNLOAD_BUFFER_SIZE: usize = 128 * 1024;
pub const DEFAULT_UPLOAD_BUFFER_SIZE: usize = 64 * 1024;

// Active-mode data ports are drawn from [MIN_ACTIVE_PORT, MAX_ACTIVE_PORT)
pub const MIN_ACTIVE_PORT: u16 = 1025;
pub const MAX_ACTIVE_PORT: u16 = 65535;

pub const REPLY_ENTERING_PASSIVE: u16 = 227;
pub const REPLY_NEED_PASSWORD: u16 = 331;
