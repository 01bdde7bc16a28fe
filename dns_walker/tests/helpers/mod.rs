#![allow(dead_code)]

use dns_walker::{
    dns_header::DNSHeader, name::encode_dns_name, DnsError, RecordType, Result, Transport,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::net::Ipv4Addr;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const ROOT: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);

/// Answers queries from a fixed table keyed on (server, name) and records
/// every query it is asked. Unknown keys fail like an unreachable server.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<(Ipv4Addr, String), Vec<u8>>,
    calls: RefCell<Vec<(Ipv4Addr, String, RecordType)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, server: Ipv4Addr, domain_name: &str, response: Vec<u8>) -> Self {
        self.responses
            .insert((server, domain_name.to_string()), response);
        self
    }

    pub fn calls(&self) -> Vec<(Ipv4Addr, String, RecordType)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn query(
        &self,
        server: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>> {
        self.calls
            .borrow_mut()
            .push((server, domain_name.to_string(), record_type));
        self.responses
            .get(&(server, domain_name.to_string()))
            .cloned()
            .ok_or_else(|| {
                DnsError::from(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    format!("no script for {} at {}", domain_name, server),
                ))
            })
    }
}

/// Never gives glue: every name shorter than `answer_labels` labels is
/// delegated to a fresh child name, so each nameserver lookup spawns another.
pub struct FanOutTransport {
    answer_labels: usize,
    next_child: Cell<usize>,
    calls: Cell<usize>,
}

impl FanOutTransport {
    pub fn new(answer_labels: usize) -> Self {
        Self {
            answer_labels,
            next_child: Cell::new(0),
            calls: Cell::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for FanOutTransport {
    fn query(
        &self,
        _server: Ipv4Addr,
        domain_name: &str,
        _record_type: RecordType,
    ) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        if domain_name.split('.').count() >= self.answer_labels {
            return Ok(ResponseBuilder::new(domain_name)
                .answer_a(domain_name, Ipv4Addr::new(10, 9, 9, 9))
                .build());
        }
        let child = self.next_child.get();
        self.next_child.set(child + 1);
        Ok(ResponseBuilder::new(domain_name)
            .authority_ns(domain_name, &format!("ns{}.{}", child, domain_name))
            .build())
    }
}

/// Builds raw response bytes that echo the question and carry the given sections.
pub struct ResponseBuilder {
    question: String,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

fn record(name: &str, record_type: RecordType, rdata: &[u8]) -> Vec<u8> {
    let mut bytes = encode_dns_name(name).unwrap();
    bytes.extend(u16::from(record_type).to_be_bytes());
    bytes.extend(1u16.to_be_bytes());
    bytes.extend(172800u32.to_be_bytes());
    bytes.extend((rdata.len() as u16).to_be_bytes());
    bytes.extend(rdata);
    bytes
}

impl ResponseBuilder {
    pub fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }

    pub fn answer_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.answers.push(record(name, RecordType::A, &ip.octets()));
        self
    }

    pub fn answer_txt(mut self, name: &str, text: &str) -> Self {
        let mut rdata = vec![text.len() as u8];
        rdata.extend(text.as_bytes());
        self.answers.push(record(name, RecordType::TXT, &rdata));
        self
    }

    pub fn authority_ns(mut self, zone: &str, target: &str) -> Self {
        let rdata = encode_dns_name(target).unwrap();
        self.authorities.push(record(zone, RecordType::NS, &rdata));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.additionals.push(record(name, RecordType::A, &ip.octets()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = DNSHeader::new(0x4242, 0x8000)
            .with_counts(
                1,
                self.answers.len() as u16,
                self.authorities.len() as u16,
                self.additionals.len() as u16,
            )
            .to_bytes();
        bytes.extend(encode_dns_name(&self.question).unwrap());
        bytes.extend([0, 1, 0, 1]);
        for section in [self.answers, self.authorities, self.additionals] {
            for record in section {
                bytes.extend(record);
            }
        }
        bytes
    }
}
