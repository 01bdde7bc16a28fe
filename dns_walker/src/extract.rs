use std::net::Ipv4Addr;

use crate::{dns_packet::DNSPacket, dns_record::DNSRecord};

fn first_a(records: &[DNSRecord]) -> Option<Ipv4Addr> {
    records.iter().find_map(|record| record.data().as_a())
}

/// The first A record in the answer section.
pub fn first_a_answer(packet: &DNSPacket) -> Option<Ipv4Addr> {
    first_a(packet.answers())
}

/// The first A record in the additional section, i.e. glue for a delegation.
pub fn first_a_glue(packet: &DNSPacket) -> Option<Ipv4Addr> {
    first_a(packet.additionals())
}

/// The first NS record in the authority section.
pub fn first_ns_authority(packet: &DNSPacket) -> Option<&str> {
    packet
        .authorities()
        .iter()
        .find_map(|record| record.data().as_ns())
}
