use std::net::{Shutdown, SocketAddr};

use log::{debug, error};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use crate::core_ftpcommand::Reply;
use crate::session::Session;

/// The negotiated data-transfer endpoint. PORT and PASV replace it, which
/// drops (and thereby closes) any previous passive listener. Keeping this a
/// single tagged value makes "at most one pending endpoint" hold by
/// construction.
#[derive(Debug)]
pub enum DataEndpoint {
    /// Active mode: the server dials the address the client announced.
    Active { remote: SocketAddr },
    /// Passive mode: the client dials the listener the server opened.
    Passive { listener: TcpListener },
}

/// Establishes the data connection for one transfer according to the current
/// endpoint. The endpoint itself stays in place, so a passive listener can
/// serve a follow-up transfer without a new PASV. On failure the ready
/// 425 reply for the control channel is returned instead.
pub async fn open_data_connection(session: &mut Session) -> Result<TcpStream, Reply> {
    let peer_tag = session.peer_tag();
    match session.data.as_mut() {
        Some(DataEndpoint::Passive { listener }) => match listener.accept().await {
            Ok((stream, addr)) => {
                debug!("{} - accepted data connection from {}", peer_tag, addr);
                Ok(stream)
            }
            Err(err) => {
                error!("{} - error accepting passive connection: {}", peer_tag, err);
                Err(Reply::new(425, "Error accepting connection"))
            }
        },
        Some(DataEndpoint::Active { remote }) => {
            let remote = *remote;
            match TcpStream::connect(remote).await {
                Ok(stream) => {
                    debug!("{} - opened data connection to {}", peer_tag, remote);
                    Ok(stream)
                }
                Err(err) => {
                    error!(
                        "{} - error making data connection to {}: {}",
                        peer_tag, remote, err
                    );
                    Err(Reply::new(425, "Error making connection"))
                }
            }
        }
        None => {
            error!(
                "{} - transfer requested without a negotiated data endpoint",
                peer_tag
            );
            Err(Reply::new(425, "Error making connection"))
        }
    }
}

/// Shuts down both halves of the data socket, then closes it. Every transfer
/// handler calls this before returning, success or not.
pub async fn close_data_connection(mut stream: TcpStream) {
    let _ = stream.shutdown().await;
    if let Ok(sock) = stream.into_std() {
        let _ = sock.shutdown(Shutdown::Both);
    }
}
