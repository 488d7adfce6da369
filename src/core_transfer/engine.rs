use crate::config::ClientConfig;
use crate::core_error::{ClientResult, LocalIoError, ProtocolError};
use crate::core_transfer::transfer::Transfer;
use log::{debug, error, info};
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Moves bytes between a data connection and local storage.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    download_buffer_size: usize,
    upload_buffer_size: usize,
    read_timeout: Option<Duration>,
}

impl TransferEngine {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            download_buffer_size: config.download_buffer_size(),
            upload_buffer_size: config.upload_buffer_size(),
            read_timeout: config.read_timeout(),
        }
    }

    /// Copies the data connection into a newly created (or truncated)
    /// `destination`.
    ///
    /// Stops after `expected_size` bytes when it is known, otherwise at end of
    /// stream. Returns the number of bytes written.
    pub async fn download<R>(
        &self,
        data: &mut R,
        expected_size: Option<u64>,
        destination: &Path,
    ) -> ClientResult<u64>
    where
        R: AsyncRead + Unpin,
    {
        let mut file = File::create(destination)
            .await
            .map_err(|source| LocalIoError::LocalCreateFailure {
                path: destination.to_path_buf(),
                source,
            })?;
        let write_failure = |source| LocalIoError::LocalWriteFailure {
            path: destination.to_path_buf(),
            source,
        };

        let mut transfer = Transfer::new(expected_size);
        let mut buffer = vec![0; self.download_buffer_size];
        while !transfer.is_complete() {
            let want = transfer.next_chunk(buffer.len());
            let n = self.read_data(data, &mut buffer[..want]).await?;
            if n == 0 {
                break;
            }
            if let Err(e) = file.write_all(&buffer[..n]).await {
                error!("Error writing to {:?}: {}", destination, e);
                return Err(write_failure(e).into());
            }
            transfer.record(n);
        }
        file.flush().await.map_err(write_failure)?;

        if let Some(expected) = transfer.expected_size() {
            if transfer.bytes_moved() < expected {
                debug!(
                    "Data connection closed after {} of {} announced bytes",
                    transfer.bytes_moved(),
                    expected
                );
            }
        }
        info!("Downloaded {} bytes to {:?}", transfer.bytes_moved(), destination);
        Ok(transfer.bytes_moved())
    }

    /// Sends the whole of `source`, then shuts down the write side so the
    /// server sees end of file.
    pub async fn upload<W>(&self, data: &mut W, source: &Path) -> ClientResult<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let read_failure = |e| LocalIoError::LocalReadFailure {
            path: source.to_path_buf(),
            source: e,
        };
        let mut file = File::open(source).await.map_err(read_failure)?;

        let mut transfer = Transfer::new(None);
        let mut buffer = vec![0; self.upload_buffer_size];
        loop {
            let n = file.read(&mut buffer).await.map_err(read_failure)?;
            if n == 0 {
                break;
            }
            data.write_all(&buffer[..n])
                .await
                .map_err(|e| ProtocolError::DataTransferFailure(e.to_string()))?;
            transfer.record(n);
        }
        data.shutdown()
            .await
            .map_err(|e| ProtocolError::DataTransferFailure(e.to_string()))?;

        info!("Uploaded {} bytes from {:?}", transfer.bytes_moved(), source);
        Ok(transfer.bytes_moved())
    }

    /// Reads a data connection to end of stream, for listings.
    pub async fn receive<R>(&self, data: &mut R) -> ClientResult<Vec<u8>>
    where
        R: AsyncRead + Unpin,
    {
        let mut received = Vec::new();
        let mut buffer = vec![0; self.download_buffer_size];
        loop {
            let n = self.read_data(data, &mut buffer).await?;
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buffer[..n]);
        }
        debug!("Received {} bytes of listing", received.len());
        Ok(received)
    }

    async fn read_data<R>(&self, data: &mut R, buffer: &mut [u8]) -> Result<usize, ProtocolError>
    where
        R: AsyncRead + Unpin,
    {
        let read = data.read(buffer);
        let result = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| ProtocolError::DataTransferFailure("timed out".to_string()))?,
            None => read.await,
        };
        result.map_err(|e| ProtocolError::DataTransferFailure(e.to_string()))
    }
}
