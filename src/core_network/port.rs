use std::net::{Ipv4Addr, SocketAddr};

use log::info;

use crate::core_ftpcommand::{require_auth, Reply};
use crate::core_network::datachan::DataEndpoint;
use crate::helpers::next_param;
use crate::session::Session;

/// Handles the PORT command: parses the `h1,h2,h3,h4,p1,p2` tuple announced
/// by the client and stores it as the active-mode endpoint, dropping any
/// passive listener.
pub async fn handle_port_command(session: &mut Session, arg: &str) -> std::io::Result<Reply> {
    if let Some(reply) = require_auth(session, "PORT") {
        return Ok(reply);
    }
    let (address, leftover) = next_param(arg);
    if !leftover.is_empty() {
        return Ok(Reply::new(501, "PORT command accepts only one argument"));
    }

    let parts: Vec<&str> = address.split(',').collect();
    if parts.len() != 6 {
        return Ok(Reply::new(501, "Syntax error in parameters or arguments"));
    }

    let host_octets: Result<Vec<u8>, _> = parts[0..4].iter().map(|x| x.parse::<u8>()).collect();
    let Ok(host_octets) = host_octets else {
        return Ok(Reply::new(501, "Invalid IP address"));
    };
    let ip = Ipv4Addr::new(host_octets[0], host_octets[1], host_octets[2], host_octets[3]);

    let port_octets: Result<Vec<u8>, _> = parts[4..6].iter().map(|x| x.parse::<u8>()).collect();
    let Ok(port_octets) = port_octets else {
        return Ok(Reply::new(501, "Invalid port number"));
    };
    let port = (port_octets[0] as u16) << 8 | port_octets[1] as u16;

    let remote = SocketAddr::from((ip, port));
    info!("{} - user initialized port - {}", session.peer_tag(), remote);

    // Replaces (and closes) a passive listener if one was pending.
    session.data = Some(DataEndpoint::Active { remote });
    Ok(Reply::new(
        200,
        format!("Data connection port set successfully to {}", remote),
    ))
}
