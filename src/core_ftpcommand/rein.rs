use crate::core_ftpcommand::Reply;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the REIN command: logs the user out so a different one can log in
/// on the same control connection.
pub async fn handle_rein_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "REIN can't have params"));
    }
    session.clear_user();
    Ok(Reply::new(220, "Server ready for new user"))
}
