use crate::core_error::ProtocolError;
use std::fmt;

/// One logical control-channel reply, possibly spanning several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    code: u16,
    lines: Vec<String>,
}

impl Reply {
    pub fn new(code: u16, lines: Vec<String>) -> Self {
        Self { code, lines }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last_line(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or_default()
    }

    /// Text of the final line with the code and separator removed.
    pub fn message(&self) -> &str {
        let line = self.last_line();
        line.get(4..).unwrap_or_default().trim()
    }

    /// 1xx: the command was accepted and another reply will follow.
    pub fn is_preliminary(&self) -> bool {
        (100..200).contains(&self.code)
    }

    pub fn is_positive(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Splits a raw line into its reply code and whether it continues the reply.
///
/// The line must start with three digits followed by `-` (continuation),
/// a space, or nothing at all (final line).
pub fn parse_line(line: &str) -> Result<(u16, bool), ProtocolError> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return Err(ProtocolError::MalformedReply(line.to_string()));
    }
    let code = bytes[..3]
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + (digit - b'0') as u16);

    match bytes.get(3) {
        Some(b'-') => Ok((code, true)),
        Some(b' ') | None => Ok((code, false)),
        Some(_) => Err(ProtocolError::MalformedReply(line.to_string())),
    }
}

/// Accumulates lines until the final one of a reply is seen.
#[derive(Debug, Default)]
pub struct ReplyBuilder {
    first_code: Option<u16>,
    code: Option<u16>,
    lines: Vec<String>,
    is_final: bool,
}

impl ReplyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one line. Returns `Ok(true)` once the reply is complete.
    pub fn feed_line(&mut self, line: &str) -> Result<bool, ProtocolError> {
        let (code, continuation) = parse_line(line)?;
        self.lines.push(line.to_string());
        self.first_code.get_or_insert(code);
        self.code = Some(code);
        self.is_final = !continuation;
        Ok(self.is_final)
    }

    /// Code of a multi-line reply whose final line has not arrived yet.
    pub fn open_code(&self) -> Option<u16> {
        if self.is_final {
            None
        } else {
            self.first_code
        }
    }

    /// Builds the reply. Returns `None` if the final line has not been fed yet.
    pub fn finish(self) -> Option<Reply> {
        match (self.is_final, self.code) {
            (true, Some(code)) => Some(Reply::new(code, self.lines)),
            _ => None,
        }
    }
}
