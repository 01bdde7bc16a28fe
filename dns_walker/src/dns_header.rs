use crate::{constants, error::DnsError, read_u16};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSHeader {
    id: u16,
    flags: u16,
    num_questions: u16,
    num_answers: u16,
    num_authorities: u16,
    num_additionals: u16,
}

impl DNSHeader {
    /// Header for an outbound query carrying a single question.
    pub fn new(id: u16, flags: u16) -> Self {
        Self {
            id,
            flags,
            num_questions: 1,
            ..Default::default()
        }
    }

    pub fn with_counts(
        mut self,
        num_questions: u16,
        num_answers: u16,
        num_authorities: u16,
        num_additionals: u16,
    ) -> Self {
        self.num_questions = num_questions;
        self.num_answers = num_answers;
        self.num_authorities = num_authorities;
        self.num_additionals = num_additionals;
        self
    }

    pub fn id(&self) -> u16 {
        self.id
    }
    pub fn flags(&self) -> u16 {
        self.flags
    }
    pub fn num_questions(&self) -> u16 {
        self.num_questions
    }
    pub fn num_answers(&self) -> u16 {
        self.num_answers
    }
    pub fn num_authorities(&self) -> u16 {
        self.num_authorities
    }
    pub fn num_additionals(&self) -> u16 {
        self.num_additionals
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.id.to_be_bytes(),
            self.flags.to_be_bytes(),
            self.num_questions.to_be_bytes(),
            self.num_answers.to_be_bytes(),
            self.num_authorities.to_be_bytes(),
            self.num_additionals.to_be_bytes(),
        ]
        .concat()
    }

    pub fn parse(data: &[u8]) -> Result<Self, DnsError> {
        DNSHeader::try_from(data)
    }
}

impl TryFrom<&[u8]> for DNSHeader {
    type Error = DnsError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() < constants::DNS_HEADER_SIZE {
            return Err(DnsError::TruncatedHeader {
                expected: constants::DNS_HEADER_SIZE,
                actual: value.len(),
            });
        }

        // Each of the 6 fields is a 2-byte integer, so there are 12 bytes in all to read.
        let field = |at: usize| {
            read_u16(value, at).ok_or(DnsError::TruncatedHeader {
                expected: constants::DNS_HEADER_SIZE,
                actual: value.len(),
            })
        };

        Ok(DNSHeader {
            id: field(0)?,
            flags: field(2)?,
            num_questions: field(4)?,
            num_answers: field(6)?,
            num_authorities: field(8)?,
            num_additionals: field(10)?,
        })
    }
}
