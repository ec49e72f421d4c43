//! Receiving end of the feed.
//!
//! Binds a UDP socket and hands every datagram to a callback until a shared
//! shutdown flag is raised or an optional count is reached. Reads time out
//! every [`POLL_INTERVAL`] so the flag is observed even when nothing
//! arrives.

use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info};

pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Large enough for any UDP payload.
const MAX_DATAGRAM: usize = 65_536;

pub struct Listener {
    socket: UdpSocket,
}

impl Listener {
    pub fn bind(addr: SocketAddr) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_read_timeout(Some(POLL_INTERVAL))?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Receive datagrams until `shutdown` is set or `limit` datagrams have
    /// arrived. Payloads are decoded lossily as UTF-8.
    ///
    /// Returns the number of datagrams received.
    pub fn run<F>(
        &self,
        shutdown: &AtomicBool,
        limit: Option<usize>,
        mut on_datagram: F,
    ) -> io::Result<usize>
    where
        F: FnMut(SocketAddr, &str),
    {
        let mut buf = vec![0u8; MAX_DATAGRAM];
        let mut received = 0usize;

        info!("Listening for datagrams on {}", self.local_addr()?);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                info!("Shutdown signal observed; stopping listener.");
                break;
            }
            if limit.is_some_and(|limit| received >= limit) {
                break;
            }

            match self.socket.recv_from(&mut buf) {
                Ok((len, peer)) => {
                    let text = String::from_utf8_lossy(&buf[..len]);
                    debug!("Received {len} bytes from {peer}");
                    on_datagram(peer, &text);
                    received += 1;
                }
                Err(ref err)
                    if matches!(
                        err.kind(),
                        io::ErrorKind::WouldBlock
                            | io::ErrorKind::TimedOut
                            | io::ErrorKind::Interrupted
                    ) =>
                {
                    continue;
                }
                // Loopback peers that went away surface as refused reads on
                // some platforms; the listener keeps going.
                Err(ref err) if err.kind() == io::ErrorKind::ConnectionReset => continue,
                Err(err) => return Err(err),
            }
        }

        info!("Listener stopped after {received} datagrams.");
        Ok(received)
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
