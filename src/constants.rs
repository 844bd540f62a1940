// src/constants.rs

/// Server version, printed in the startup banner.
pub const SERVER_VERSION: &str = "v0.1";

/// Default listen port for the control connection.
pub const DEFAULT_PORT: u16 = 2020;

/// File with the list of valid users, one `username:password` per line.
pub const DEFAULT_USER_FILE: &str = "users.txt";

/// Default server root directory for logged in users.
pub const DEFAULT_ROOT: &str = "myftpserver";

/// Size of the network buffers. Large so that reads are fast.
pub const BUFSIZE: usize = 1 << 16;
