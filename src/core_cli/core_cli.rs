use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_PORT, DEFAULT_ROOT};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ferroftpd", about = "A multi-user FTP server written in Rust.")]
pub struct Cli {
    /// Listen port, overrides the positional port
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Append log lines to this file in addition to stdout
    #[arg(short, long, value_name = "LOGFILE")]
    pub log: Option<PathBuf>,

    /// Server root directory, created if absent
    #[arg(short, long, value_name = "DIRPATH", default_value = DEFAULT_ROOT)]
    pub directory: PathBuf,

    /// Listen port
    #[arg(value_name = "PORT")]
    pub positional_port: Option<u16>,
}

impl Cli {
    /// The effective listen port: `-p/--port` wins over the positional port,
    /// which wins over the default.
    pub fn listen_port(&self) -> u16 {
        self.port.or(self.positional_port).unwrap_or(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_when_unspecified() {
        let cli = Cli::parse_from(["ferroftpd"]);
        assert_eq!(cli.listen_port(), DEFAULT_PORT);
        assert_eq!(cli.directory, PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn positional_port_is_accepted() {
        let cli = Cli::parse_from(["ferroftpd", "2121"]);
        assert_eq!(cli.listen_port(), 2121);
    }

    #[test]
    fn port_flag_overrides_positional() {
        let cli = Cli::parse_from(["ferroftpd", "-p", "2020", "2121"]);
        assert_eq!(cli.listen_port(), 2020);
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(Cli::try_parse_from(["ferroftpd", "-p", "65536"]).is_err());
        assert!(Cli::try_parse_from(["ferroftpd", "-p", "-1"]).is_err());
    }

    #[test]
    fn log_and_directory_flags() {
        let cli = Cli::parse_from(["ferroftpd", "-l", "server.log", "-d", "/srv/ftp"]);
        assert_eq!(cli.log, Some(PathBuf::from("server.log")));
        assert_eq!(cli.directory, PathBuf::from("/srv/ftp"));
    }
}
