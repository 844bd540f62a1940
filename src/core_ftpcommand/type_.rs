use crate::core_ftpcommand::{require_auth, Reply};
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the TYPE command. Only ASCII non-printable (`A`, optionally
/// `A N`) and Image (`I`) are supported; everything else is obsolete.
/// Neither representation changes the transferred bytes.
pub async fn handle_type_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "TYPE") {
        return Ok(reply);
    }
    let (type_code, leftover) = next_param(arg);
    if type_code != "A" && type_code != "I" {
        return Ok(Reply::new(
            504,
            "Server supports only ASCII non-printable and Image types",
        ));
    }
    if type_code == "I" {
        if !leftover.is_empty() {
            return Ok(Reply::new(501, "Image type may not have any extra params"));
        }
        session.transfer_type = crate::session::TransferType::Image;
        return Ok(Reply::new(200, "Set type to Image"));
    }
    if !leftover.is_empty() {
        let (ascii_kind, _) = next_param(leftover);
        if ascii_kind != "N" {
            return Ok(Reply::new(504, "Server only supports non-printable Ascii"));
        }
    }
    session.transfer_type = crate::session::TransferType::AsciiNonPrint;
    Ok(Reply::new(200, "Set type to Ascii non-printable"))
}
