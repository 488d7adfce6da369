use crate::console::Console;
use crate::core_error::ProtocolError;
use crate::core_reply::reply::{parse_line, Reply, ReplyBuilder};
use log::{debug, trace};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads complete replies off the control connection.
pub struct ReplyReader<R> {
    inner: R,
    read_timeout: Option<Duration>,
}

impl<R> ReplyReader<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(inner: R, read_timeout: Option<Duration>) -> Self {
        Self {
            inner,
            read_timeout,
        }
    }

    /// Blocks until a whole reply has been read.
    ///
    /// Every line is forwarded to `console` as soon as it arrives, before it
    /// is parsed. A malformed line aborts the reply with
    /// `ProtocolError::MalformedReply`; end of stream yields
    /// `ProtocolError::ConnectionLost`.
    ///
    /// When the malformed line sits inside a multi-line reply, the rest of
    /// that reply is still consumed (and shown) up to its final line, so the
    /// next read starts at the next reply.
    pub async fn read_reply(&mut self, console: &mut dyn Console) -> Result<Reply, ProtocolError> {
        let mut builder = ReplyBuilder::new();

        loop {
            let line = self.next_line(console).await?;
            match builder.feed_line(&line) {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => {
                    if let Some(code) = builder.open_code() {
                        self.skip_to_final_line(code, console).await?;
                    }
                    return Err(err);
                }
            }
        }

        builder
            .finish()
            .ok_or_else(|| ProtocolError::MalformedReply("incomplete reply".to_string()))
    }

    /// Discards lines until `NNN ` with the given code closes the reply.
    async fn skip_to_final_line(
        &mut self,
        code: u16,
        console: &mut dyn Console,
    ) -> Result<(), ProtocolError> {
        loop {
            let line = self.next_line(console).await?;
            if let Ok((line_code, false)) = parse_line(&line) {
                if line_code == code {
                    debug!("Resynchronised on {}", line);
                    return Ok(());
                }
            }
        }
    }

    /// Reads one line, echoes it and strips the line ending.
    async fn next_line(&mut self, console: &mut dyn Console) -> Result<String, ProtocolError> {
        let mut buf = Vec::with_capacity(256);
        let n = self.read_raw_line(&mut buf).await?;
        if n == 0 {
            return Err(ProtocolError::ConnectionLost(
                "server closed the control connection".to_string(),
            ));
        }

        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\r', '\n']).to_string();
        console.print(&line);
        trace!("<<< {}", line);
        Ok(line)
    }

    async fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, ProtocolError> {
        let read = self.inner.read_until(b'\n', buf);
        let n = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| ProtocolError::Timeout)??,
            None => read.await?,
        };
        Ok(n)
    }
}
