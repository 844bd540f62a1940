use std::path::Path;

use log::{error, info};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::core_fs::sandbox;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::core_network::datachan::{close_data_connection, open_data_connection};
use crate::core_network::linebuf::LineBuffer;
use crate::session::Session;

/// Handles the STOR command: receives the file contents on the data
/// connection and stores them at the resolved path. The parent directory
/// must already exist and the target may not be a directory.
pub async fn handle_stor_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "STOR") {
        return Ok(reply);
    }
    if arg.is_empty() {
        return Ok(Reply::new(501, "Filename not specified"));
    }
    let Some(resolved) = sandbox::resolve(&session.root, &session.cwd, arg) else {
        return Ok(Reply::new(550, "Invalid path or no access"));
    };
    let parent_exists = match resolved.parent() {
        Some(parent) => fs::metadata(parent).await.is_ok(),
        None => false,
    };
    if !parent_exists {
        return Ok(Reply::new(550, "Invalid path or no access"));
    }
    if let Ok(metadata) = fs::metadata(&resolved).await {
        if metadata.is_dir() {
            return Ok(Reply::new(550, "Invalid path or no access"));
        }
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
    let reply = receive_file(&resolved, &mut data_sock, &peer_tag).await;
    close_data_connection(data_sock).await;
    Ok(reply)
}

/// Drains the data connection into the file in buffer-sized chunks. All
/// file-side failures map to 426 so the session survives the error.
async fn receive_file(path: &Path, data_sock: &mut TcpStream, peer_tag: &str) -> Reply {
    let mut file = match File::create(path).await {
        Ok(file) => file,
        Err(err) => {
            error!("{} - cannot create file {}: {}", peer_tag, path.display(), err);
            return Reply::new(426, "Error during file transmission");
        }
    };

    let mut netbuf = LineBuffer::new();
    loop {
        let chunk = netbuf.read_bulk(data_sock).await;
        if chunk.is_empty() {
            break;
        }
        if let Err(err) = file.write_all(&chunk).await {
            error!(
                "{} - error writing to file {}: {}",
                peer_tag,
                path.display(),
                err
            );
            return Reply::new(426, "Error during file transmission");
        }
    }
    if let Err(err) = file.flush().await {
        error!(
            "{} - error flushing file {}: {}",
            peer_tag,
            path.display(),
            err
        );
        return Reply::new(426, "Error during file transmission");
    }

    info!("{} - user stored file {}", peer_tag, path.display());
    Reply::new(226, "Successfully stored file")
}
