use tokio::fs;

use crate::core_fs::sandbox;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the CWD command.
pub async fn handle_cwd_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "CWD") {
        return Ok(reply);
    }
    let (path, leftover) = next_param(arg);
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "CWD command can't have extra params"));
    }
    change_directory(session, path).await
}

/// Shared by CWD and CDUP: resolves the target inside the sandbox, requires
/// it to exist and moves the session there.
pub(crate) async fn change_directory(session: &mut Session, path: &str) -> std::io::Result<Reply> {
    let Some(resolved) = sandbox::resolve(&session.root, &session.cwd, path) else {
        return Ok(Reply::new(550, "Invalid path or no access"));
    };
    if fs::metadata(&resolved).await.is_err() {
        return Ok(Reply::new(550, "Invalid path or no access"));
    }
    session.cwd = resolved;
    Ok(Reply::new(200, "Successfully changed directory"))
}
