use crate::{
    constants, dns_header::DNSHeader, dns_question::DNSQuestion, dns_record::DNSRecord,
    error::DnsError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSPacket {
    header: DNSHeader,
    questions: Vec<DNSQuestion>,
    answers: Vec<DNSRecord>,
    authorities: Vec<DNSRecord>,
    additionals: Vec<DNSRecord>,
}

impl DNSPacket {
    pub fn header(&self) -> &DNSHeader {
        &self.header
    }
    pub fn questions(&self) -> &[DNSQuestion] {
        &self.questions
    }
    pub fn answers(&self) -> &[DNSRecord] {
        &self.answers
    }
    pub fn authorities(&self) -> &[DNSRecord] {
        &self.authorities
    }
    pub fn additionals(&self) -> &[DNSRecord] {
        &self.additionals
    }

    pub fn parse(data: &[u8]) -> Result<Self, DnsError> {
        DNSPacket::try_from(data)
    }
}

fn parse_records(
    packet: &[u8],
    current_pos: &mut usize,
    count: u16,
) -> Result<Vec<DNSRecord>, DnsError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (record, consumed) = DNSRecord::parse((packet, *current_pos))?;
        *current_pos += consumed;
        records.push(record);
    }
    Ok(records)
}

impl TryFrom<&[u8]> for DNSPacket {
    type Error = DnsError;

    /// Bytes left over after the last counted record are ignored.
    fn try_from(packet: &[u8]) -> Result<Self, Self::Error> {
        let header = DNSHeader::try_from(packet)?;
        let mut current_pos = constants::DNS_HEADER_SIZE;

        let mut questions = Vec::with_capacity(header.num_questions() as usize);
        for _ in 0..header.num_questions() {
            let (question, consumed) = DNSQuestion::parse((packet, current_pos))?;
            current_pos += consumed;
            questions.push(question);
        }

        let answers = parse_records(packet, &mut current_pos, header.num_answers())?;
        let authorities = parse_records(packet, &mut current_pos, header.num_authorities())?;
        let additionals = parse_records(packet, &mut current_pos, header.num_additionals())?;

        Ok(DNSPacket {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}
