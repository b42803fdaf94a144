#![allow(dead_code)]
use deleg_dns_domain::DelegBlock;
use deleg_dns_infrastructure::dns::RecordParser;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, Record, RecordType};
use std::str::FromStr;

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

/// Parses one presentation-format record.
pub fn rr(text: &str) -> Record {
    RecordParser::new().parse(text).unwrap()
}

pub fn block(zones: &[&str], responses: &[&str]) -> DelegBlock {
    DelegBlock::new(
        zones.iter().map(|z| z.to_string()).collect(),
        responses.iter().map(|r| r.to_string()).collect(),
    )
}

pub fn request(id: u16, qname: &str) -> Message {
    let mut query = Query::new();
    query.set_name(name(qname));
    query.set_query_type(RecordType::A);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.add_query(query);
    message
}

/// A referral response whose authority section holds `authority`.
pub fn referral(authority: &[&str]) -> Message {
    let mut message = Message::new(0, MessageType::Response, OpCode::Query);
    message.add_name_servers(authority.iter().map(|text| rr(text)));
    message
}

pub fn authority_types(message: &Message) -> Vec<RecordType> {
    message
        .name_servers()
        .iter()
        .map(|record| record.record_type())
        .collect()
}
