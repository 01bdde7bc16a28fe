use crate::{
    class::Class, constants, error::DnsError, name::decode_name, read_u16,
    record_type::RecordType,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSQuestion {
    name: Vec<u8>,
    type_: RecordType,
    class: Class,
}

impl DNSQuestion {
    /// `name` is expected in wire form, as produced by `encode_dns_name`.
    pub fn new(name: Vec<u8>, type_: RecordType, class: Class) -> Self {
        Self { name, type_, class }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> Class {
        self.class
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.name.clone(),
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
        ]
        .concat()
    }

    /// Parses a question at `cursor`, returning it with the number of bytes consumed.
    /// The parsed name is kept dot-joined.
    pub fn parse((data, cursor): (&[u8], usize)) -> Result<(Self, usize), DnsError> {
        let (name, consumed) = decode_name(data, cursor)
            .map_err(|e| e.name_truncated_as(DnsError::TruncatedQuestion { offset: cursor }))?;
        let current_pos = cursor + consumed;

        let field = |at: usize| {
            read_u16(data, at).ok_or(DnsError::TruncatedQuestion { offset: current_pos })
        };
        let type_ = field(current_pos)?;
        let class = field(current_pos + 2)?;

        Ok((
            DNSQuestion {
                name,
                type_: type_.into(),
                class: class.into(),
            },
            consumed + constants::DNS_QUESTION_SIZE,
        ))
    }
}
