use async_trait::async_trait;
use deleg_dns_application::ports::{DnsHandler, ResponseWriter};
use deleg_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use std::sync::Arc;

use super::table_store::DelegationTableStore;
use super::writer::AugmentingWriter;

/// Handler-chain link that injects configured records into referrals
/// produced further down the chain.
pub struct DelegHandler {
    next: Arc<dyn DnsHandler>,
    tables: Arc<DelegationTableStore>,
}

impl DelegHandler {
    pub fn new(next: Arc<dyn DnsHandler>, tables: Arc<DelegationTableStore>) -> Self {
        Self { next, tables }
    }
}

#[async_trait]
impl DnsHandler for DelegHandler {
    fn name(&self) -> &'static str {
        "deleg"
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        let mut writer = AugmentingWriter::new(writer, self.tables.load());
        self.next.serve_dns(request, &mut writer).await
    }
}
