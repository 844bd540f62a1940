use tokio::io::{AsyncRead, AsyncReadExt};

use crate::constants::BUFSIZE;

/// Outcome of one `readline` call.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// The bytes of one command line, CRLF stripped.
    Complete(Vec<u8>),
    /// The buffer filled up without a CRLF; the buffer was cleared.
    TooLong,
    /// The peer closed the connection or the read failed. The session must
    /// be torn down.
    Closed,
}

/// Fixed-capacity buffer framing CRLF-terminated lines on top of a byte
/// stream. Reads are chunked, so bytes following a CRLF that arrived in the
/// same read are kept for the next call instead of being lost.
pub struct LineBuffer {
    buf: Box<[u8]>,
    len: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            buf: vec![0; BUFSIZE].into_boxed_slice(),
            len: 0,
        }
    }

    /// Position of the first CRLF pair in the filled part of the buffer.
    fn find_crlf(&self) -> Option<usize> {
        self.buf[..self.len].windows(2).position(|pair| pair == b"\r\n")
    }

    /// Reads one CRLF-terminated line. The line bytes are returned exactly
    /// as received; the remainder after the CRLF is compacted to the start
    /// of the buffer.
    pub async fn readline<R: AsyncRead + Unpin>(&mut self, sock: &mut R) -> Line {
        loop {
            if let Some(pos) = self.find_crlf() {
                let line = self.buf[..pos].to_vec();
                let rest = pos + 2;
                self.buf.copy_within(rest..self.len, 0);
                self.len -= rest;
                return Line::Complete(line);
            }
            if self.len == self.buf.len() {
                self.len = 0;
                return Line::TooLong;
            }
            match sock.read(&mut self.buf[self.len..]).await {
                Ok(0) | Err(_) => return Line::Closed,
                Ok(n) => self.len += n,
            }
        }
    }

    /// Bulk read for incoming file data: fills the buffer until the stream
    /// ends or the buffer saturates, then returns everything accumulated.
    /// An empty return signals end of stream.
    pub async fn read_bulk<R: AsyncRead + Unpin>(&mut self, sock: &mut R) -> Vec<u8> {
        while self.len < self.buf.len() {
            match sock.read(&mut self.buf[self.len..]).await {
                Ok(0) | Err(_) => break,
                Ok(n) => self.len += n,
            }
        }
        let chunk = self.buf[..self.len].to_vec();
        self.len = 0;
        chunk
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn reads_a_single_line() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        client.write_all(b"USER alice\r\n").await.unwrap();
        let mut buf = LineBuffer::new();
        assert_eq!(
            buf.readline(&mut server).await,
            Line::Complete(b"USER alice".to_vec())
        );
    }

    #[tokio::test]
    async fn preserves_bytes_after_the_crlf() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        client.write_all(b"USER alice\r\nPASS secret\r\n").await.unwrap();
        let mut buf = LineBuffer::new();
        assert_eq!(
            buf.readline(&mut server).await,
            Line::Complete(b"USER alice".to_vec())
        );
        // The second line was buffered by the first read and must survive.
        assert_eq!(
            buf.readline(&mut server).await,
            Line::Complete(b"PASS secret".to_vec())
        );
    }

    #[tokio::test]
    async fn reassembles_a_line_split_across_reads() {
        let (mut client, mut server) = tokio::io::duplex(16);
        let writer = tokio::spawn(async move {
            client.write_all(b"STOR a-rather-long-file-name.bin").await.unwrap();
            client.write_all(b"\r\n").await.unwrap();
        });
        let mut buf = LineBuffer::new();
        assert_eq!(
            buf.readline(&mut server).await,
            Line::Complete(b"STOR a-rather-long-file-name.bin".to_vec())
        );
        writer.await.unwrap();
    }

    #[tokio::test]
    async fn empty_line_yields_empty_bytes() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_all(b"\r\n").await.unwrap();
        let mut buf = LineBuffer::new();
        assert_eq!(buf.readline(&mut server).await, Line::Complete(Vec::new()));
    }

    #[tokio::test]
    async fn overlong_line_clears_the_buffer() {
        let (mut client, mut server) = tokio::io::duplex(2 * BUFSIZE);
        let writer = tokio::spawn(async move {
            client.write_all(&vec![b'A'; BUFSIZE]).await.unwrap();
            client.write_all(b"SYST\r\n").await.unwrap();
            client
        });
        let mut buf = LineBuffer::new();
        assert_eq!(buf.readline(&mut server).await, Line::TooLong);
        // The framer stays usable for the next command.
        assert_eq!(
            buf.readline(&mut server).await,
            Line::Complete(b"SYST".to_vec())
        );
        drop(writer.await.unwrap());
    }

    #[tokio::test]
    async fn closed_stream_is_reported() {
        let (client, mut server) = tokio::io::duplex(64);
        drop(client);
        let mut buf = LineBuffer::new();
        assert_eq!(buf.readline(&mut server).await, Line::Closed);
    }

    #[tokio::test]
    async fn close_after_partial_line_is_reported() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_all(b"QUI").await.unwrap();
        drop(client);
        let mut buf = LineBuffer::new();
        assert_eq!(buf.readline(&mut server).await, Line::Closed);
    }

    #[tokio::test]
    async fn bulk_read_accumulates_until_eof() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        let payload: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();
        let expected = payload.clone();
        let writer = tokio::spawn(async move {
            client.write_all(&payload).await.unwrap();
        });
        let mut buf = LineBuffer::new();
        let mut received = Vec::new();
        loop {
            let chunk = buf.read_bulk(&mut server).await;
            if chunk.is_empty() {
                break;
            }
            received.extend_from_slice(&chunk);
        }
        writer.await.unwrap();
        assert_eq!(received, expected);
    }
}
