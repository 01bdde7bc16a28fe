use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameFault {
    #[error("name runs past end of buffer")]
    EndOfBuffer,
    #[error("compression pointer does not point backwards")]
    ForwardPointer,
    #[error("too many compression pointers")]
    PointerLimit,
    #[error("reserved label type")]
    ReservedLabel,
    #[error("label is not valid UTF-8")]
    NotUtf8,
}

pub type Result<T> = std::result::Result<T, DnsError>;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("Truncated header: need {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("Truncated question at offset {offset}")]
    TruncatedQuestion { offset: usize },

    #[error("Truncated record at offset {offset}")]
    TruncatedRecord { offset: usize },

    #[error("Malformed name at offset {offset}: {fault}")]
    MalformedName { offset: usize, fault: NameFault },

    #[error("Label of {0} bytes exceeds the 63 byte limit")]
    LabelTooLong(usize),

    #[error("Transport failure: {0}")]
    TransportFailure(#[from] std::io::Error),

    #[error("No answer, glue or delegation for {domain} from {nameserver}")]
    NoDelegationFound {
        domain: String,
        nameserver: Ipv4Addr,
    },

    #[error("Gave up on {domain} after {hops} queries")]
    TooManyHops { domain: String, hops: usize },

    #[error("Nameserver lookup for {domain} nested {depth} levels deep")]
    DelegationTooDeep { domain: String, depth: usize },
}

impl DnsError {
    pub(crate) fn malformed_name(offset: usize, fault: NameFault) -> Self {
        DnsError::MalformedName { offset, fault }
    }

    /// A name inside a question or record that runs off the buffer means the
    /// buffer ended mid-item, so it is reported with the item's own truncation error.
    pub(crate) fn name_truncated_as(self, truncated: DnsError) -> Self {
        match self {
            DnsError::MalformedName {
                fault: NameFault::EndOfBuffer,
                ..
            } => truncated,
            other => other,
        }
    }

    /// True for the errors raised while decoding a response buffer.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DnsError::TruncatedHeader { .. }
                | DnsError::TruncatedQuestion { .. }
                | DnsError::TruncatedRecord { .. }
                | DnsError::MalformedName { .. }
        )
    }
}
