//! Presentation-format parsing of single resource records.
//!
//! Records are read with the zone-file parser of `hickory-proto`, so every
//! type it knows is accepted. RFC 3597 generic rdata (`TYPE65432 \# 3 abcdef`)
//! is decoded here when the zone parser does not take it; that is how draft
//! types such as DELEG are configured. Only class IN is accepted.

use deleg_dns_domain::ConfigError;
use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::txt::Parser;
use std::str::FromStr;

pub const DEFAULT_TTL: u32 = 3600;
const GENERIC_RDATA: &str = "\\#";

pub struct RecordParser {
    origin: Name,
    default_ttl: u32,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self {
            origin: Name::root(),
            default_ttl: DEFAULT_TTL,
        }
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Origin for `@` and relative names (root by default).
    pub fn with_origin(mut self, origin: Name) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_default_ttl(mut self, ttl: u32) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Parses exactly one record; TTL defaults to the configured default and
    /// class to IN.
    pub fn parse(&self, text: &str) -> Result<Record, ConfigError> {
        let text = text.trim();
        let record = match self.parse_zone_text(text) {
            Ok(record) => record,
            Err(_) if is_generic(text) => self
                .parse_generic(text)
                .map_err(|reason| ConfigError::record_syntax(text, reason))?,
            Err(reason) => return Err(ConfigError::record_syntax(text, reason)),
        };

        if record.dns_class() != DNSClass::IN {
            return Err(ConfigError::record_syntax(
                text,
                format!("unsupported class {}", record.dns_class()),
            ));
        }
        Ok(record)
    }

    fn parse_zone_text(&self, text: &str) -> Result<Record, String> {
        let zone = format!("$TTL {}\n{}\n", self.default_ttl, text);
        let (_, rrsets) = Parser::new(zone.as_str(), None, Some(self.origin.clone()))
            .parse()
            .map_err(|e| e.to_string())?;

        let mut records = rrsets
            .values()
            .flat_map(|rrset| rrset.records_without_rrsigs());
        match (records.next(), records.next()) {
            (Some(record), None) => Ok(record.clone()),
            (None, _) => Err("no record found".to_string()),
            (Some(_), Some(_)) => Err("expected exactly one record".to_string()),
        }
    }

    /// `owner [ttl] [IN] type \# <length> <hex>...`
    fn parse_generic(&self, text: &str) -> Result<Record, String> {
        let content = text.split(';').next().unwrap_or("");
        let tokens: Vec<&str> = content
            .split_whitespace()
            .filter(|token| !matches!(*token, "(" | ")"))
            .collect();

        let marker = tokens
            .iter()
            .position(|token| *token == GENERIC_RDATA)
            .ok_or("missing generic rdata marker")?;
        let (owner, rest) = tokens[..marker].split_first().ok_or("empty record")?;
        let (rr_type, ttl_class) = rest.split_last().ok_or("missing record type")?;

        let mut ttl = None;
        let mut class_seen = false;
        for token in ttl_class {
            if !class_seen && token.eq_ignore_ascii_case("IN") {
                class_seen = true;
            } else if ttl.is_none() {
                ttl = Some(
                    token
                        .parse::<u32>()
                        .map_err(|_| format!("invalid TTL or class '{}'", token))?,
                );
            } else {
                return Err(format!("unexpected field '{}'", token));
            }
        }

        let rdata = decode_generic(parse_type(rr_type)?, &tokens[marker + 1..])?;
        Ok(Record::from_rdata(
            self.parse_name(owner)?,
            ttl.unwrap_or(self.default_ttl),
            rdata,
        ))
    }

    fn parse_name(&self, text: &str) -> Result<Name, String> {
        if text == "@" {
            return Ok(self.origin.clone());
        }

        let absolute = if text.ends_with('.') {
            text.to_string()
        } else if self.origin.is_root() {
            format!("{}.", text)
        } else {
            format!("{}.{}", text, self.origin)
        };

        Name::from_str(&absolute).map_err(|e| format!("invalid name '{}': {}", text, e))
    }
}

fn is_generic(text: &str) -> bool {
    text.split_whitespace().any(|token| token == GENERIC_RDATA)
}

fn parse_type(text: &str) -> Result<RecordType, String> {
    let upper = text.to_ascii_uppercase();
    if let Some(code) = upper.strip_prefix("TYPE") {
        if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
            let code: u16 = code
                .parse()
                .map_err(|_| format!("type code out of range: {}", text))?;
            return Ok(RecordType::from(code));
        }
    }
    RecordType::from_str(&upper).map_err(|_| format!("unknown record type '{}'", text))
}

fn decode_generic(rr_type: RecordType, fields: &[&str]) -> Result<RData, String> {
    let (length, hex) = fields
        .split_first()
        .ok_or("generic rdata requires a length")?;
    let length: usize = length
        .parse()
        .map_err(|_| format!("invalid rdata length '{}'", length))?;

    let mut bytes = Vec::with_capacity(length);
    for field in hex {
        decode_hex(field, &mut bytes)?;
    }
    if bytes.len() != length {
        return Err(format!(
            "generic rdata length {} does not match {} octet(s) of data",
            length,
            bytes.len()
        ));
    }

    let rdata = if bytes.is_empty() {
        NULL::new()
    } else {
        NULL::with(bytes)
    };
    Ok(RData::Unknown {
        code: rr_type,
        rdata,
    })
}

fn decode_hex(text: &str, out: &mut Vec<u8>) -> Result<(), String> {
    if text.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{}'", text));
    }
    for pair in text.as_bytes().chunks(2) {
        let digits = std::str::from_utf8(pair).map_err(|_| format!("invalid hex '{}'", text))?;
        out.push(u8::from_str_radix(digits, 16).map_err(|_| format!("invalid hex '{}'", text))?);
    }
    Ok(())
}
