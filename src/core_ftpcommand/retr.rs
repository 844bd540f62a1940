use std::path::Path;

use log::{error, info};
use tokio::fs::{self, File};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::constants::BUFSIZE;
use crate::core_fs::sandbox;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::core_network::datachan::{close_data_connection, open_data_connection};
use crate::core_network::writer::StreamWriter;
use crate::session::Session;

/// Handles the RETR command: streams the resolved file out over the data
/// connection through the coalescing writer.
pub async fn handle_retr_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "RETR") {
        return Ok(reply);
    }
    if arg.is_empty() {
        return Ok(Reply::new(501, "Filename not specified"));
    }
    let Some(resolved) = sandbox::resolve(&session.root, &session.cwd, arg) else {
        return Ok(Reply::new(550, "Invalid path or no access"));
    };
    match fs::metadata(&resolved).await {
        Ok(metadata) if !metadata.is_dir() => {}
        _ => return Ok(Reply::new(550, "Invalid path or no access")),
    }

    let mut data_sock = match open_data_connection(session).await {
        Ok(sock) => sock,
        Err(reply) => return Ok(reply),
    };
    // The data socket must be torn down even when the control channel dies.
    if let Err(err) = session
        .send_reply(125, "Opened data connection, transfer starting")
        .await
    {
        close_data_connection(data_sock).await;
        return Err(err);
    }

    let peer_tag = session.peer_tag();
    let reply = send_file(&resolved, &mut data_sock, &peer_tag).await;
    close_data_connection(data_sock).await;
    Ok(reply)
}

/// Reads the file in buffer-sized chunks and coalesces them onto the data
/// connection. All failures map to 426 so the session survives the error.
async fn send_file(path: &Path, data_sock: &mut TcpStream, peer_tag: &str) -> Reply {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(err) => {
            error!("{} - cannot open file {}: {}", peer_tag, path.display(), err);
            return Reply::new(426, "Error during file transmission");
        }
    };

    let mut writer = StreamWriter::new();
    let mut chunk = vec![0u8; BUFSIZE];
    loop {
        let read = match file.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) => {
                error!(
                    "{} - error reading file {}: {}",
                    peer_tag,
                    path.display(),
                    err
                );
                return Reply::new(426, "Error during file transmission");
            }
        };
        if let Err(err) = writer.write(data_sock, &chunk[..read]).await {
            error!("{} - error during sending data: {}", peer_tag, err);
            return Reply::new(426, "Error during file transmission");
        }
    }
    if let Err(err) = writer.flush(data_sock).await {
        error!(
            "{} - error during flushing leftover data: {}",
            peer_tag, err
        );
        return Reply::new(426, "Error during file transmission");
    }

    info!("{} - user retrieved file {}", peer_tag, path.display());
    Reply::new(226, "Successfully transferred file")
}
