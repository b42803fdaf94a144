use async_trait::async_trait;
use deleg_dns_application::ports::{DnsHandler, ResponseWriter};
use deleg_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::trace;

/// Terminal handler that answers every request with a canned upstream
/// response, re-stamped with the request's id.
pub struct ReplayHandler {
    response: Message,
}

impl ReplayHandler {
    pub fn new(response: Message) -> Self {
        Self { response }
    }
}

/// Returns `response` carrying `id` in its header.
pub fn with_id(response: Message, id: u16) -> Message {
    let mut parts = response.into_parts();
    parts.header.set_id(id);
    Message::from(parts)
}

#[async_trait]
impl DnsHandler for ReplayHandler {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        let response = with_id(self.response.clone(), request.id());
        let rcode = response.response_code();

        trace!(id = request.id(), rcode = ?rcode, "Replaying upstream response");
        writer.write_message(response)?;
        Ok(rcode)
    }
}
