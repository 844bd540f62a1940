use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::net::TcpListener;

use ferroftpd::constants::{DEFAULT_USER_FILE, SERVER_VERSION};
use ferroftpd::core_auth::UserDirectory;
use ferroftpd::core_cli::Cli;
use ferroftpd::core_log;
use ferroftpd::core_network::network;

#[tokio::main]
async fn main() -> Result<()> {
    println!("ferroftpd FTP server {}", SERVER_VERSION);

    let args = Cli::parse();

    core_log::init(args.log.as_deref()).context("Failed to initialize the logger")?;

    // An absent users file leaves the directory empty: nobody can log in,
    // but the server still runs.
    let users = Arc::new(UserDirectory::load(Path::new(DEFAULT_USER_FILE)));

    let root = prepare_server_root(&args.directory)
        .with_context(|| format!("Failed to prepare the server root: {}", args.directory.display()))?;
    info!("Server root is at {}", root.display());

    let port = args.listen_port();
    info!("Listening on port {}", port);
    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("ERROR! creating the listener: {}", err);
            process::exit(1);
        }
    };

    network::start_server(listener, root, users).await
}

/// Creates the server root if it does not exist yet and pins it to an
/// absolute, symlink-free path so the sandbox containment check is purely
/// lexical afterwards.
fn prepare_server_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    let root = std::fs::canonicalize(path)
        .with_context(|| format!("Failed to canonicalize: {}", path.display()))?;
    Ok(root)
}
