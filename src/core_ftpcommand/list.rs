use std::path::Path;

use log::{error, info};
use tokio::fs;
use tokio::net::TcpStream;

use crate::core_fs::listing;
use crate::core_fs::sandbox;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::core_network::datachan::{close_data_connection, open_data_connection};
use crate::core_network::writer::StreamWriter;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the LIST command: sends one `<perms> <size>b <name>` line per
/// directory entry over the data connection. The `-a`/`-al`/`-la` flags list
/// the working directory and prepend synthetic `.` and `..` entries.
pub async fn handle_list_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "LIST") {
        return Ok(reply);
    }
    let (param, leftover) = next_param(arg);
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "LIST command can't have extra params"));
    }

    let verbose = matches!(param, "-a" | "-al" | "-la");
    let request_path = if param.is_empty() || verbose {
        session.cwd.clone()
    } else {
        match sandbox::resolve(&session.root, &session.cwd, param) {
            Some(path) => path,
            None => return Ok(Reply::new(550, "Invalid path or no access")),
        }
    };

    let mut data_sock = match open_data_connection(session).await {
        Ok(sock) => sock,
        Err(reply) => return Ok(reply),
    };
    info!(
        "{} - data connection opened for directory listing of {}",
        session.peer_tag(),
        request_path.display()
    );
    // The data socket must be torn down even when the control channel dies.
    if let Err(err) = session
        .send_reply(125, "Opened data connection, transfer starting")
        .await
    {
        close_data_connection(data_sock).await;
        return Err(err);
    }

    let result = send_listing(&request_path, &mut data_sock, verbose).await;
    close_data_connection(data_sock).await;

    match result {
        Ok(()) => {
            info!(
                "{} - directory listing was successful, sent all data",
                session.peer_tag()
            );
            Ok(Reply::new(226, "Successfully transferred directory listing"))
        }
        Err(err) => {
            error!("{} - error during sending data: {}", session.peer_tag(), err);
            Ok(Reply::new(426, "Error during dir listing transmission"))
        }
    }
}

async fn send_listing(
    path: &Path,
    data_sock: &mut TcpStream,
    verbose: bool,
) -> std::io::Result<()> {
    let mut writer = StreamWriter::new();
    if verbose {
        writer.write(data_sock, listing::LIST_VERBOSE.as_bytes()).await?;
    }
    let mut entries = fs::read_dir(path).await?;
    while let Some(entry) = entries.next_entry().await? {
        let metadata = entry.metadata().await?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let line = listing::entry_line(&name, &metadata);
        writer.write(data_sock, line.as_bytes()).await?;
    }
    writer.flush(data_sock).await
}
