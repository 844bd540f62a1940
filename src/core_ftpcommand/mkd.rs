use log::{info, warn};
use tokio::fs;

use crate::core_fs::sandbox;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the MKD command. All missing intermediate directories are created
/// as well.
pub async fn handle_mkd_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "MKD") {
        return Ok(reply);
    }
    let (path, leftover) = next_param(arg);
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "MKD command can't have extra params"));
    }
    let Some(resolved) = sandbox::resolve(&session.root, &session.cwd, path) else {
        return Ok(Reply::new(550, "Invalid path or no access"));
    };
    match fs::create_dir_all(&resolved).await {
        Ok(()) => {
            info!(
                "{} - user created dir {}",
                session.peer_tag(),
                resolved.display()
            );
            Ok(Reply::new(200, "Directory created"))
        }
        Err(err) => {
            warn!(
                "{} - failed to create dir {}: {}",
                session.peer_tag(),
                resolved.display(),
                err
            );
            Ok(Reply::new(550, "Invalid path or no access"))
        }
    }
}
