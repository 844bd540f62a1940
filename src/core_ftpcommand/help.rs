use crate::core_ftpcommand::Reply;
use crate::session::Session;

/// Syntax and description of every implemented command, in the order they
/// are listed by HELP.
const COMMAND_HELP: &[(&str, &str)] = &[
    ("HELP", "Prints the help message in a multiline response"),
    (
        "USER [username]",
        "Begins authentication with the specified username, must be followed by PASS",
    ),
    (
        "PASS [password]",
        "Authenticates using the password, must be preceded by USER",
    ),
    ("REIN", "Logs out the user, you can login with a different user"),
    ("QUIT", "Stops the control connection, disconnecting you from the server"),
    (
        "TYPE [TYPE]",
        "Specifies the type of data for transfer. Available: A - Ascii, I - Image (binary)",
    ),
    (
        "MODE [MODE]",
        "Specifies the mode of data transfer. Available: S - stream",
    ),
    (
        "STRU [STRUCTURE]",
        "Specifies the structure of data transfer. Available: F - file (no structure)",
    ),
    ("SYST", "Returns the system on which the FTP server is running"),
    (
        "PASV",
        "Initializes a passive connection and returns the ip and port to dial",
    ),
    (
        "PORT [h1,h2,h3,h4,p1,p2]",
        "Specifies the address and port for an active data connection",
    ),
    ("PWD", "Prints the current directory"),
    ("CWD [PATH]", "Changes the current directory to the specified one"),
    ("CDUP", "Changes the current directory to the parent directory"),
    (
        "MKD [PATH]",
        "Makes a directory, including all intermediate missing directories",
    ),
    (
        "LIST [PATH/-a/-al]",
        "Lists the directory contents to the data connection; -a/-al also lists . and ..",
    ),
    (
        "STOR [FILENAME]",
        "Receives data from the data connection and stores it to the specified file",
    ),
    ("RETR [FILENAME]", "Sends the requested file to the data connection"),
    ("NOOP", "No operation, just to test the connection"),
];

/// Handles the HELP command with a multi-line 214 reply. Preamble lines use
/// the `214-` continuation form; the final line closes the reply.
pub async fn handle_help_command(session: &mut Session, _arg: &str) -> std::io::Result<Reply> {
    session
        .send_line("214-The following commands are recognized")
        .await?;
    for (syntax, description) in COMMAND_HELP {
        session
            .send_line(&format!("214-{} -- {}", syntax, description))
            .await?;
    }
    Ok(Reply::new(214, "Help OK"))
}
