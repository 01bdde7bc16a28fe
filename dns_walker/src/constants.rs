use std::net::Ipv4Addr;

pub const UDP_DNS_RESPONSE_SIZE: usize = 1024;
pub const DNS_HEADER_SIZE: usize = 12;
pub const DNS_QUESTION_SIZE: usize = 4;
pub const DNS_RECORD_SIZE: usize = 10;
pub const DNS_PORT: u16 = 53;
// a.root-servers.net
pub const ROOT_SERVER: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);
// https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_POINTER_JUMPS: usize = 20;
// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4
pub const POINTER_FLAG: u8 = 0b1100_0000;
pub const POINTER_MASK: u8 = 0b0011_1111;
// Iterative queries go out without RD set.
pub const AUTHORITATIVE_NAMESERVER: u16 = 0;
