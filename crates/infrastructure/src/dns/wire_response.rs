//! Wire-format encoding of DNS messages.

use deleg_dns_application::ports::ResponseWriter;
use deleg_dns_domain::DomainError;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub fn encode_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}

pub fn decode_message(bytes: &[u8]) -> Result<Message, DomainError> {
    Message::from_vec(bytes).map_err(|e| {
        DomainError::InvalidDnsMessage(format!("Failed to parse DNS message: {}", e))
    })
}

/// Collects every written response as wire-format bytes.
#[derive(Debug, Default)]
pub struct WireResponseWriter {
    responses: Vec<Vec<u8>>,
}

impl WireResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responses(&self) -> &[Vec<u8>] {
        &self.responses
    }

    pub fn into_responses(self) -> Vec<Vec<u8>> {
        self.responses
    }
}

impl ResponseWriter for WireResponseWriter {
    fn write_message(&mut self, response: Message) -> Result<(), DomainError> {
        let bytes = encode_message(&response)
            .map_err(|e| DomainError::WriteFailed(e.to_string()))?;
        self.responses.push(bytes);
        Ok(())
    }
}
