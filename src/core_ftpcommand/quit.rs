use log::info;

use crate::core_ftpcommand::Reply;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the QUIT command. Clearing the active flag makes the driver loop
/// exit after this reply is sent.
pub async fn handle_quit_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "QUIT can't have any parameters"));
    }
    session.active = false;
    info!(
        "{} - user \"{}\" quit the session",
        session.peer_tag(),
        session.user.name
    );
    Ok(Reply::new(221, "Successfully quit"))
}
