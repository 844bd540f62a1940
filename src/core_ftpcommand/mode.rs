use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the MODE command. Stream is the only supported transfer mode.
pub async fn handle_mode_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "MODE") {
        return Ok(reply);
    }
    let (mode, leftover) = next_param(arg);
    if mode != "S" {
        return Ok(Reply::new(504, "Server supports only Stream mode"));
    }
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "MODE command can't have extra params"));
    }
    session.transfer_mode = crate::session::TransferMode::Stream;
    Ok(Reply::new(200, "Set mode to stream"))
}
