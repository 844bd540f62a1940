use log::info;

use crate::core_ftpcommand::Reply;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the PASS command. PASS is only valid directly after USER; any
/// failure drops the half-authenticated user so the client has to relogin.
pub async fn handle_pass_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if session.prev_command != "USER" {
        session.clear_user();
        return Ok(Reply::new(503, "PASS command must be preceded by USER"));
    }
    if session.user.name.is_empty() {
        return Ok(Reply::new(530, "You should supply a valid username"));
    }
    let (password, leftover) = next_param(arg);
    if password.is_empty() {
        session.clear_user();
        return Ok(Reply::new(501, "Password not supplied"));
    }
    if !leftover.is_empty() {
        session.clear_user();
        return Ok(Reply::new(501, "Excess parameters in command"));
    }
    if session.users.lookup(&session.user.name) != Some(password) {
        session.clear_user();
        return Ok(Reply::new(430, "Invalid password supplied, relogin"));
    }
    session.user.password = password.to_string();
    info!(
        "{} - user logged in as {}",
        session.peer_tag(),
        session.user.name
    );
    Ok(Reply::new(230, "Successfully authorized"))
}
