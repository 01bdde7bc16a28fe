//! Iterative resolution from a root server down to an authoritative answer.
//!
//! Each hop queries the current nameserver and takes the first usable item in
//! this order: an A answer ends the walk, A glue in the additional section
//! becomes the next nameserver, and an NS name without glue is itself resolved
//! from the root before the walk continues. The total number of queries sent
//! for one call, nameserver lookups included, and the nesting of those lookups
//! are both bounded by [`ResolverConfig`].

use std::{cell::Cell, net::Ipv4Addr};

use tracing::{debug, info, instrument, warn};

use crate::{
    config::ResolverConfig,
    dns_packet::DNSPacket,
    error::{DnsError, Result},
    extract::{first_a_answer, first_a_glue, first_ns_authority},
    record_type::RecordType,
    transport::Transport,
};

/// What a single response lets the walk do next.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step<'a> {
    Answer(Ipv4Addr),
    Glue(Ipv4Addr),
    Delegate(&'a str),
}

fn next_step(packet: &DNSPacket) -> Option<Step<'_>> {
    if let Some(ip) = first_a_answer(packet) {
        return Some(Step::Answer(ip));
    }
    if let Some(ip) = first_a_glue(packet) {
        return Some(Step::Glue(ip));
    }
    first_ns_authority(packet).map(Step::Delegate)
}

#[derive(Debug, Clone)]
pub struct Resolver<T> {
    transport: T,
    config: ResolverConfig,
}

impl<T: Transport> Resolver<T> {
    pub fn new(transport: T, config: ResolverConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Walks from the configured root server until some server returns an A
    /// answer for `domain_name`.
    #[instrument(skip(self), fields(root = %self.config.root_server))]
    pub fn resolve(&self, domain_name: &str, record_type: RecordType) -> Result<Ipv4Addr> {
        self.resolve_nested(domain_name, record_type, 0, &Cell::new(0))
    }

    #[instrument(skip(self))]
    pub fn send_query(
        &self,
        name_server_ip: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
    ) -> Result<DNSPacket> {
        let response = self
            .transport
            .query(name_server_ip, domain_name, record_type)?;
        DNSPacket::parse(&response).inspect_err(|e| {
            warn!(%name_server_ip, domain_name, error = %e, "discarding unparseable response");
        })
    }

    fn resolve_nested(
        &self,
        domain_name: &str,
        record_type: RecordType,
        depth: usize,
        queries: &Cell<usize>,
    ) -> Result<Ipv4Addr> {
        if depth > self.config.max_depth {
            return Err(DnsError::DelegationTooDeep {
                domain: domain_name.to_string(),
                depth,
            });
        }

        let mut name_server_ip = self.config.root_server;

        loop {
            let hop = queries.get();
            if hop >= self.config.max_hops {
                return Err(DnsError::TooManyHops {
                    domain: domain_name.to_string(),
                    hops: hop,
                });
            }
            queries.set(hop + 1);

            info!(%name_server_ip, domain_name, hop, depth, "querying nameserver");
            let packet = self.send_query(name_server_ip, domain_name, record_type)?;

            match next_step(&packet) {
                Some(Step::Answer(ip)) => {
                    info!(domain_name, %ip, "resolved");
                    return Ok(ip);
                }
                Some(Step::Glue(ip)) => {
                    debug!(domain_name, next = %ip, "following glue");
                    name_server_ip = ip;
                }
                Some(Step::Delegate(ns_domain)) => {
                    debug!(domain_name, ns_domain, "delegation without glue, resolving nameserver");
                    name_server_ip =
                        self.resolve_nested(ns_domain, RecordType::A, depth + 1, queries)?;
                }
                None => {
                    return Err(DnsError::NoDelegationFound {
                        domain: domain_name.to_string(),
                        nameserver: name_server_ip,
                    });
                }
            }
        }
    }
}
