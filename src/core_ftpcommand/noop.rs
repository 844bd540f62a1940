use crate::core_ftpcommand::Reply;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the NOOP command, useful only to test the connection.
pub async fn handle_noop_command(_session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "NOOP can't have any parameters"));
    }
    Ok(Reply::new(200, "OK"))
}
