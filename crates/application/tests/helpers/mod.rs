#![allow(dead_code)]

use deleg_dns_application::services::DelegationTable;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, NS, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub fn ns(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 3600, RData::NS(NS(name(target))))
}

pub fn a(owner: &str, ip: &str) -> Record {
    let ip: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(name(owner), 3600, RData::A(A(ip)))
}

pub fn txt(owner: &str, text: &str) -> Record {
    Record::from_rdata(
        name(owner),
        3600,
        RData::TXT(TXT::new(vec![text.to_string()])),
    )
}

pub fn response_with_authority(authority: Vec<Record>) -> Message {
    let mut message = Message::new(4242, MessageType::Response, OpCode::Query);
    message.add_name_servers(authority);
    message
}

/// Builds a table from `(zone, records)` pairs in the given order.
pub fn table(entries: Vec<(&str, Vec<Record>)>) -> Arc<DelegationTable> {
    let mut builder = DelegationTable::builder();
    for (zone, records) in entries {
        builder.append(&name(zone), records);
    }
    Arc::new(builder.build())
}
