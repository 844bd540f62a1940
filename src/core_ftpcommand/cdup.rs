use crate::core_ftpcommand::cwd::change_directory;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the CDUP command, which is CWD to the parent directory.
pub async fn handle_cdup_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "CDUP") {
        return Ok(reply);
    }
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "CDUP can't have any parameters"));
    }
    change_directory(session, "..").await
}
