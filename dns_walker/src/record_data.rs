use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    NS(String),
    Other(Vec<u8>),
}

impl RecordData {
    pub fn as_a(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::A(ip) => Some(*ip),
            _ => None,
        }
    }
    pub fn as_ns(&self) -> Option<&str> {
        match self {
            RecordData::NS(name) => Some(name),
            _ => None,
        }
    }
    pub fn as_other(&self) -> Option<&[u8]> {
        match self {
            RecordData::Other(data) => Some(data),
            _ => None,
        }
    }
}
