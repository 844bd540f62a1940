use crate::core_ftpcommand::Reply;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the SYST command with the fixed system identification.
pub async fn handle_syst_command(_session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "SYST can't have any parameters"));
    }
    Ok(Reply::new(200, "UNIX Type: L8"))
}
