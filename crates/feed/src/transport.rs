use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::EmitError;

/// Fire-and-forget delivery of one payload to a fixed peer.
pub trait Transport {
    fn destination(&self) -> SocketAddr;

    /// Hand `payload` to the network. Success only means the local stack
    /// accepted it.
    fn send(&mut self, payload: &[u8]) -> io::Result<usize>;
}

/// Unconnected UDP socket sending every datagram to the same address.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    destination: SocketAddr,
}

impl UdpTransport {
    /// Bind an ephemeral local port in the destination's address family.
    pub fn bind(destination: SocketAddr) -> io::Result<Self> {
        let local: SocketAddr = match destination {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local)?;
        Ok(Self {
            socket,
            destination,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Transport for UdpTransport {
    fn destination(&self) -> SocketAddr {
        self.destination
    }

    fn send(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.socket.send_to(payload, self.destination)
    }
}

/// Resolve `host:port` once, preferring an IPv4 address when the name has
/// both.
pub fn resolve_destination(host: &str, port: u16) -> Result<SocketAddr, EmitError> {
    let target = format!("{host}:{port}");
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|source| EmitError::Destination {
            target: target.clone(),
            source,
        })?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| EmitError::Destination {
            target,
            source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
        })
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
