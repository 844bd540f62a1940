use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::Reply;
use crate::core_network::{pasv, port};
use crate::session::Session;

/// Routes one parsed verb to its handler. Handlers only fail on
/// control-channel I/O errors; everything else comes back as a reply.
pub async fn dispatch(
    session: &mut Session,
    command: FtpCommand,
    arg: &str,
) -> std::io::Result<Reply> {
    match command {
        FtpCommand::USER => crate::core_ftpcommand::user::handle_user_command(session, arg).await,
        FtpCommand::PASS => crate::core_ftpcommand::pass::handle_pass_command(session, arg).await,
        FtpCommand::REIN => crate::core_ftpcommand::rein::handle_rein_command(session, arg).await,
        FtpCommand::QUIT => crate::core_ftpcommand::quit::handle_quit_command(session, arg).await,
        FtpCommand::PWD => crate::core_ftpcommand::pwd::handle_pwd_command(session, arg).await,
        FtpCommand::TYPE => crate::core_ftpcommand::type_::handle_type_command(session, arg).await,
        FtpCommand::MODE => crate::core_ftpcommand::mode::handle_mode_command(session, arg).await,
        FtpCommand::STRU => crate::core_ftpcommand::stru::handle_stru_command(session, arg).await,
        FtpCommand::PASV => pasv::handle_pasv_command(session, arg).await,
        FtpCommand::PORT => port::handle_port_command(session, arg).await,
        FtpCommand::CWD => crate::core_ftpcommand::cwd::handle_cwd_command(session, arg).await,
        FtpCommand::CDUP => crate::core_ftpcommand::cdup::handle_cdup_command(session, arg).await,
        FtpCommand::MKD => crate::core_ftpcommand::mkd::handle_mkd_command(session, arg).await,
        FtpCommand::SYST => crate::core_ftpcommand::syst::handle_syst_command(session, arg).await,
        FtpCommand::NOOP => crate::core_ftpcommand::noop::handle_noop_command(session, arg).await,
        FtpCommand::HELP => crate::core_ftpcommand::help::handle_help_command(session, arg).await,
        FtpCommand::LIST => crate::core_ftpcommand::list::handle_list_command(session, arg).await,
        FtpCommand::STOR => crate::core_ftpcommand::stor::handle_stor_command(session, arg).await,
        FtpCommand::RETR => crate::core_ftpcommand::retr::handle_retr_command(session, arg).await,
    }
}
