use crate::core_ftpcommand::Reply;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the USER command. Any USER restarts authentication, so the
/// current user is invalidated first.
pub async fn handle_user_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    session.clear_user();
    let (username, leftover) = next_param(arg);
    if username.is_empty() {
        return Ok(Reply::new(501, "Username not specified"));
    }
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "Excess parameters in command"));
    }
    if !session.users.contains(username) {
        return Ok(Reply::new(430, "Invalid username"));
    }
    session.user.name = username.to_string();
    Ok(Reply::new(331, "Need user password"))
}
