use std::net::IpAddr;

use log::{error, info};
use tokio::net::TcpListener;

use crate::core_ftpcommand::{require_auth, Reply};
use crate::core_network::datachan::DataEndpoint;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the PASV command: opens a fresh listener on an ephemeral port and
/// reports the endpoint to the client as `h1,h2,h3,h4,p1,p2`. The advertised
/// address is the one the client reached the control connection on; the
/// listener itself binds the wildcard address.
pub async fn handle_pasv_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "PASV") {
        return Ok(reply);
    }
    let (param, _) = next_param(arg);
    if !param.is_empty() {
        return Ok(Reply::new(501, "PASV command can't have any parameters"));
    }

    // Replacing the endpoint first closes any listener from an earlier PASV.
    session.data = None;

    let listener = match TcpListener::bind(("0.0.0.0", 0)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(
                "{} - cannot open a passive connection: {}",
                session.peer_tag(),
                err
            );
            return Ok(Reply::new(425, "Error opening passive connection"));
        }
    };

    let port = listener.local_addr()?.port();
    let ip = session.control.local_addr()?.ip();
    info!(
        "{} - started passive listening on {}:{}",
        session.peer_tag(),
        ip,
        port
    );

    session.data = Some(DataEndpoint::Passive { listener });
    Ok(Reply::new(227, encode_endpoint(ip, port)))
}

/// `h1,h2,h3,h4,p1,p2` with `port = p1 * 256 + p2`.
fn encode_endpoint(ip: IpAddr, port: u16) -> String {
    let host = ip.to_string().replace('.', ",");
    format!("{},{},{}", host, port / 256, port % 256)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn encodes_the_port_in_two_octets() {
        let ip = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
        assert_eq!(encode_endpoint(ip, 0x1234), "127,0,0,1,18,52");
    }

    #[test]
    fn low_ports_have_a_zero_high_octet() {
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(encode_endpoint(ip, 21), "10,0,0,2,0,21");
    }
}
