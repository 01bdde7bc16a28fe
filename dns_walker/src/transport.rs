use std::{
    io,
    net::{Ipv4Addr, SocketAddr, UdpSocket},
    time::{Duration, Instant},
};

use tracing::{debug, warn};

use crate::{
    config::ResolverConfig,
    error::Result,
    query::{build_query_with_id, query_id},
    record_type::RecordType,
};

/// Sends one query to one server and hands back the raw response bytes.
pub trait Transport {
    fn query(&self, server: Ipv4Addr, domain_name: &str, record_type: RecordType)
        -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn query(
        &self,
        server: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>> {
        (**self).query(server, domain_name, record_type)
    }
}

/// Plain UDP, one ephemeral socket per query.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    port: u16,
    timeout: Duration,
    response_buffer_size: usize,
}

impl UdpTransport {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            port: config.port,
            timeout: config.query_timeout(),
            response_buffer_size: config.response_buffer_size,
        }
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl Transport for UdpTransport {
    /// Datagrams from any other address, or carrying another id, are dropped
    /// and the wait continues until the query timeout runs out.
    fn query(
        &self,
        server: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>> {
        let id = query_id();
        let query = build_query_with_id(id, domain_name, record_type)?;
        let expected_from = SocketAddr::from((server, self.port));

        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.set_write_timeout(Some(self.timeout))?;
        socket.send_to(&query, expected_from)?;

        let deadline = Instant::now() + self.timeout;
        let mut response_buffer = vec![0; self.response_buffer_size];
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("no answer to query {} from {}", id, server),
                )
                .into());
            }
            socket.set_read_timeout(Some(remaining))?;

            let (len, from) = socket.recv_from(&mut response_buffer)?;
            if from != expected_from {
                warn!(%from, %server, "ignoring datagram from unexpected address");
                continue;
            }
            match response_buffer.get(0..2) {
                Some(&[high, low]) if len >= 2 && u16::from_be_bytes([high, low]) == id => {
                    debug!(%from, len, "received response");
                    response_buffer.truncate(len);
                    return Ok(response_buffer);
                }
                _ => warn!(%server, id, "ignoring response that does not match query"),
            }
        }
    }
}
