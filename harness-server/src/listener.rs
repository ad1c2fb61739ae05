use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};

/// Bind a listener that shares its port with sibling workers.
///
/// Every worker binds the same address with SO_REUSEPORT set, and the
/// kernel spreads incoming connections across them. That is what lets
/// the pool scale without a front proxy.
pub fn bind_shared(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };

    socket.set_reuseaddr(true)?;
    #[cfg(unix)]
    socket.set_reuseport(true)?;
    socket.bind(addr)?;

    socket.listen(1024)
}
