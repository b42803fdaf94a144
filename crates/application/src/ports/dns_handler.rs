use async_trait::async_trait;
use deleg_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};

/// Outbound side of a request: receives the final response message.
pub trait ResponseWriter: Send {
    fn write_message(&mut self, response: Message) -> Result<(), DomainError>;
}

/// One link of the query-handling chain.
///
/// Handlers that sit in front of others receive their downstream handler at
/// construction time and may wrap the writer they pass along.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    fn name(&self) -> &'static str;

    /// Serve `request`, writing the response to `writer`.
    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError>;
}
