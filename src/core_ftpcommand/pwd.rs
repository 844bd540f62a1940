use crate::core_fs::sandbox;
use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the PWD command. Clients see a virtual filesystem where the
/// server root is `/`, so the root prefix is stripped from the reply.
pub async fn handle_pwd_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "PWD") {
        return Ok(reply);
    }
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "PWD can't have any parameters"));
    }
    Ok(Reply::new(
        257,
        sandbox::virtual_path(&session.root, &session.cwd),
    ))
}
