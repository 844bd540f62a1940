use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the STRU command. Only the record-less file structure is
/// supported; the command exists because the standard requires it.
pub async fn handle_stru_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "STRU") {
        return Ok(reply);
    }
    let (structure, leftover) = next_param(arg);
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "STRU command can't have extra params"));
    }
    if structure != "F" {
        return Ok(Reply::new(504, "This server supports only File structure"));
    }
    session.transfer_stru = crate::session::TransferStructure::File;
    Ok(Reply::new(200, "Set file structure to File (no record)"))
}
