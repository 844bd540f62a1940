use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::constants::BUFSIZE;

/// Fixed-capacity coalescing writer. Small writes accumulate in the buffer
/// and reach the socket in BUFSIZE chunks, keeping the syscall count low
/// during bulk transfers.
pub struct StreamWriter {
    buf: Vec<u8>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(BUFSIZE),
        }
    }

    /// Appends `chunk`, flushing every time the buffer fills up and carrying
    /// on with the remainder.
    pub async fn write<W: AsyncWrite + Unpin>(
        &mut self,
        sock: &mut W,
        mut chunk: &[u8],
    ) -> std::io::Result<()> {
        loop {
            let free = BUFSIZE - self.buf.len();
            if chunk.len() <= free {
                self.buf.extend_from_slice(chunk);
                return Ok(());
            }
            self.buf.extend_from_slice(&chunk[..free]);
            self.flush(sock).await?;
            chunk = &chunk[free..];
        }
    }

    /// Writes out everything buffered. A failed or short write is fatal for
    /// the transfer.
    pub async fn flush<W: AsyncWrite + Unpin>(&mut self, sock: &mut W) -> std::io::Result<()> {
        sock.write_all(&self.buf).await?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for StreamWriter {
    fn default() -> Self {
        Self::new()
    }
}
