/// Every FTP verb this server implements.
#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    REIN,
    QUIT,
    PWD,
    TYPE,
    MODE,
    STRU,
    PASV,
    PORT,
    CWD,
    CDUP,
    MKD,
    SYST,
    NOOP,
    HELP,
    LIST,
    STOR,
    RETR,
}

impl FtpCommand {
    /// Looks up a verb, case-insensitively. `None` means reply 502.
    pub fn from_str(cmd: &str) -> Option<FtpCommand> {
        match cmd.to_ascii_uppercase().as_str() {
            "USER" => Some(FtpCommand::USER),
            "PASS" => Some(FtpCommand::PASS),
            "REIN" => Some(FtpCommand::REIN),
            "QUIT" => Some(FtpCommand::QUIT),
            "PWD" => Some(FtpCommand::PWD),
            "TYPE" => Some(FtpCommand::TYPE),
            "MODE" => Some(FtpCommand::MODE),
            "STRU" => Some(FtpCommand::STRU),
            "PASV" => Some(FtpCommand::PASV),
            "PORT" => Some(FtpCommand::PORT),
            "CWD" => Some(FtpCommand::CWD),
            "CDUP" => Some(FtpCommand::CDUP),
            "MKD" => Some(FtpCommand::MKD),
            "SYST" => Some(FtpCommand::SYST),
            "NOOP" => Some(FtpCommand::NOOP),
            "HELP" => Some(FtpCommand::HELP),
            "LIST" => Some(FtpCommand::LIST),
            "STOR" => Some(FtpCommand::STOR),
            "RETR" => Some(FtpCommand::RETR),
            _ => None,
        }
    }
}
