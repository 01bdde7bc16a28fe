use std::net::Ipv4Addr;

pub mod class;
pub mod config;
pub mod constants;
pub mod dns_header;
pub mod dns_packet;
pub mod dns_question;
pub mod dns_record;
pub mod error;
pub mod extract;
pub mod name;
pub mod query;
pub mod record_data;
pub mod record_type;
pub mod resolver;
pub mod transport;

pub use config::{ConfigError, ResolverConfig};
pub use dns_packet::DNSPacket;
pub use error::{DnsError, NameFault, Result};
pub use record_type::RecordType;
pub use resolver::Resolver;
pub use transport::{Transport, UdpTransport};

pub(crate) fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    data.get(at..at + 2)?.try_into().ok().map(u16::from_be_bytes)
}

pub(crate) fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    data.get(at..at + 4)?.try_into().ok().map(u32::from_be_bytes)
}

/// Resolves `domain_name` over UDP starting from the default root server.
pub fn resolve(domain_name: &str, record_type: RecordType) -> Result<Ipv4Addr> {
    let config = ResolverConfig::default();
    Resolver::new(UdpTransport::new(&config), config).resolve(domain_name, record_type)
}
