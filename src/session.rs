use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::core_auth::UserDirectory;
use crate::core_network::datachan::DataEndpoint;
use crate::core_network::linebuf::{Line, LineBuffer};

/// Data representation negotiated with TYPE. Only the two non-obsolete
/// representations are supported; neither changes the bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    AsciiNonPrint,
    Image,
}

/// Transfer mode negotiated with MODE. Stream is the only one left in
/// practice; block and compressed are obsolete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Stream,
}

/// File structure negotiated with STRU. Only the record-less file structure
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStructure {
    File,
}

/// The user a session is authenticating as. Authenticated means both halves
/// are non-empty.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Per-connection state. One session is owned by exactly one task; the only
/// cross-session reference is the read-only user directory.
pub struct Session {
    /// Control connection to the client.
    pub control: TcpStream,
    /// Peer address, used only for logging.
    pub peer: SocketAddr,
    /// Shared name to password mapping.
    pub users: Arc<UserDirectory>,
    /// The sandbox boundary; never changes after accept.
    pub root: PathBuf,
    /// Current directory, always equal to or below `root`.
    pub cwd: PathBuf,
    pub user: Credentials,
    /// Uppercase verb of the last processed command. PASS checks it for the
    /// USER-then-PASS ordering, so it is updated even after error replies.
    pub prev_command: String,
    pub transfer_type: TransferType,
    pub transfer_mode: TransferMode,
    pub transfer_stru: TransferStructure,
    /// Endpoint for the next data connection, set by PORT or PASV.
    pub data: Option<DataEndpoint>,
    /// Cleared by QUIT and fatal errors; the driver loop exits on false.
    pub active: bool,
    line_buf: LineBuffer,
}

impl Session {
    pub fn new(
        control: TcpStream,
        peer: SocketAddr,
        users: Arc<UserDirectory>,
        root: PathBuf,
    ) -> Self {
        let cwd = root.clone();
        Self {
            control,
            peer,
            users,
            root,
            cwd,
            user: Credentials::default(),
            prev_command: String::new(),
            transfer_type: TransferType::AsciiNonPrint,
            transfer_mode: TransferMode::Stream,
            transfer_stru: TransferStructure::File,
            data: None,
            active: true,
            line_buf: LineBuffer::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.user.name.is_empty() && !self.user.password.is_empty()
    }

    pub fn clear_user(&mut self) {
        self.user = Credentials::default();
    }

    /// Peer address in the `[ip:port]` form used by every session log line.
    pub fn peer_tag(&self) -> String {
        format!("[{}]", self.peer)
    }

    /// Reads the next command line from the control connection.
    pub async fn read_command(&mut self) -> Line {
        self.line_buf.readline(&mut self.control).await
    }

    /// Sends one `NNN text` reply line on the control connection.
    pub async fn send_reply(&mut self, code: u16, text: &str) -> std::io::Result<()> {
        let line = format!("{} {}\r\n", code, text);
        self.control.write_all(line.as_bytes()).await
    }

    /// Sends a raw CRLF-terminated line on the control connection; used for
    /// the preamble lines of multi-line replies.
    pub async fn send_line(&mut self, line: &str) -> std::io::Result<()> {
        let line = format!("{}\r\n", line);
        self.control.write_all(line.as_bytes()).await
    }
}
