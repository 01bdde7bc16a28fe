use std::net::Ipv4Addr;

use crate::{
    constants,
    error::{DnsError, NameFault},
    name::decode_name,
    read_u16, read_u32,
    record_data::RecordData,
    record_type::RecordType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSRecord {
    name: Vec<u8>,
    type_: RecordType,
    class: u16,
    ttl: u32,
    data: RecordData,
}

impl DNSRecord {
    pub fn name(&self) -> &[u8] {
        &self.name
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> u16 {
        self.class
    }
    pub fn ttl(&self) -> u32 {
        self.ttl
    }
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Parses the record at `cursor`, returning it with the number of bytes consumed.
    pub fn parse((data, cursor): (&[u8], usize)) -> Result<(Self, usize), DnsError> {
        let truncated = || DnsError::TruncatedRecord { offset: cursor };
        let mut current_pos = cursor;

        let (name, current) =
            decode_name(data, current_pos).map_err(|e| e.name_truncated_as(truncated()))?;
        current_pos += current;

        let type_ = read_u16(data, current_pos).ok_or_else(truncated)?;
        let class = read_u16(data, current_pos + 2).ok_or_else(truncated)?;
        let ttl = read_u32(data, current_pos + 4).ok_or_else(truncated)?;
        let data_length = read_u16(data, current_pos + 8).ok_or_else(truncated)? as usize;
        current_pos += constants::DNS_RECORD_SIZE;

        let type_ = RecordType::from(type_);
        let record_data = match type_ {
            RecordType::NS => {
                // The target's own terminator or pointer decides its length, not rdlength.
                let (name, current) = decode_name(data, current_pos)
                    .map_err(|e| e.name_truncated_as(truncated()))?;
                let name = String::from_utf8(name).map_err(|_| DnsError::MalformedName {
                    offset: current_pos,
                    fault: NameFault::NotUtf8,
                })?;
                current_pos += current;
                RecordData::NS(name)
            }
            _ => {
                let (start, end) = (current_pos, current_pos + data_length);
                let read_data = data.get(start..end).ok_or_else(truncated)?;
                current_pos = end;
                match (type_, read_data) {
                    (RecordType::A, &[a, b, c, d]) => RecordData::A(Ipv4Addr::new(a, b, c, d)),
                    _ => RecordData::Other(read_data.to_vec()),
                }
            }
        };

        Ok((
            DNSRecord {
                name,
                type_,
                class,
                ttl,
                data: record_data,
            },
            current_pos - cursor,
        ))
    }
}
