use rand::Rng;
use tracing::trace;

use crate::{
    class::Class, constants, dns_header::DNSHeader, dns_question::DNSQuestion, error::DnsError,
    name::encode_dns_name, record_type::RecordType,
};

/// A fresh, unpredictable transaction id.
pub(crate) fn query_id() -> u16 {
    rand::thread_rng().gen_range(0..=u16::MAX)
}

/// Builds a single-question query with a fresh random transaction id.
pub fn build_query(domain_name: &str, record_type: RecordType) -> Result<Vec<u8>, DnsError> {
    build_query_with_id(query_id(), domain_name, record_type)
}

pub fn build_query_with_id(
    id: u16,
    domain_name: &str,
    record_type: RecordType,
) -> Result<Vec<u8>, DnsError> {
    let header = DNSHeader::new(id, constants::AUTHORITATIVE_NAMESERVER);
    let question = DNSQuestion::new(encode_dns_name(domain_name)?, record_type, Class::In);

    let mut bytes = header.to_bytes();
    bytes.extend(question.to_bytes());
    trace!(id, domain_name, %record_type, len = bytes.len(), "built query");

    Ok(bytes)
}
