use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use tokio::net::TcpListener;

use crate::core_auth::UserDirectory;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::handlers::dispatch;
use crate::core_network::linebuf::Line;
use crate::helpers::next_param;
use crate::session::Session;

/// Accept loop: one detached session task per control connection. Sessions
/// share nothing mutable; the user directory is read-only.
pub async fn start_server(
    listener: TcpListener,
    root: PathBuf,
    users: Arc<UserDirectory>,
) -> Result<()> {
    loop {
        match listener.accept().await {
            Ok((socket, peer)) => {
                info!("Received a connection request from {}", peer);
                let session = Session::new(socket, peer, Arc::clone(&users), root.clone());
                tokio::spawn(async move {
                    let peer = session.peer;
                    if let Err(err) = handle_connection(session).await {
                        error!("[{}] - connection error: {}", peer, err);
                    }
                    info!("Connection closed for {}", peer);
                });
            }
            Err(err) => {
                error!("Error accepting incoming connection: {}", err);
            }
        }
    }
}

/// Runs one session to completion. A failed control-channel write surfaces
/// here and triggers the best-effort 421 teardown.
pub async fn handle_connection(mut session: Session) -> std::io::Result<()> {
    let result = drive(&mut session).await;
    if let Err(ref err) = result {
        shutdown_error(&mut session, &err.to_string()).await;
    }
    result
}

/// The protocol interpreter loop: read a line, dispatch, reply, remember the
/// verb. The previous verb is recorded even for error replies because the
/// USER-then-PASS ordering check depends on it.
async fn drive(session: &mut Session) -> std::io::Result<()> {
    session
        .send_reply(220, "Ready for service, waiting for authorization")
        .await?;

    while session.active {
        let bytes = match session.read_command().await {
            Line::Complete(bytes) => bytes,
            Line::TooLong => {
                session
                    .send_reply(500, "Invalid command (too long or can't read command)")
                    .await?;
                continue;
            }
            Line::Closed => {
                shutdown_error(session, "Bad error during trying to receive command").await;
                break;
            }
        };

        if bytes.is_empty() {
            session
                .send_reply(500, "Invalid command (too long or can't read command)")
                .await?;
            continue;
        }
        if bytes.iter().any(|&b| !(0x20..=0x7f).contains(&b)) {
            session.send_reply(500, "Invalid chars in command").await?;
            continue;
        }

        // Only printable ASCII left, so this conversion is lossless.
        let line = String::from_utf8_lossy(&bytes).into_owned();
        let (verb, params) = next_param(&line);
        let verb = verb.to_ascii_uppercase();

        let Some(command) = FtpCommand::from_str(&verb) else {
            session
                .send_reply(502, "Command unknown or not implemented")
                .await?;
            session.prev_command = verb;
            continue;
        };

        let result = dispatch(session, command, params).await;
        session.prev_command = verb;
        let reply = result?;
        session.send_reply(reply.code, &reply.text).await?;
    }

    Ok(())
}

/// Best-effort `421` before tearing the session down; the socket may already
/// be gone, so the write result is ignored.
async fn shutdown_error(session: &mut Session, reason: &str) {
    error!(
        "{} - have to shutdown the connection because of error - {}",
        session.peer_tag(),
        reason
    );
    let _ = session
        .send_reply(421, &format!("Error - {}", reason))
        .await;
}
