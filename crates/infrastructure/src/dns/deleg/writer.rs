use deleg_dns_application::ports::ResponseWriter;
use deleg_dns_application::services::{DelegationTable, ResponseAugmentor};
use deleg_dns_domain::DomainError;
use hickory_proto::op::Message;
use std::sync::Arc;

/// Wraps the client-facing writer and augments each response on its way
/// out.
pub struct AugmentingWriter<'a> {
    inner: &'a mut dyn ResponseWriter,
    augmentor: ResponseAugmentor,
}

impl<'a> AugmentingWriter<'a> {
    pub fn new(inner: &'a mut dyn ResponseWriter, table: Arc<DelegationTable>) -> Self {
        Self {
            inner,
            augmentor: ResponseAugmentor::new(table),
        }
    }
}

impl ResponseWriter for AugmentingWriter<'_> {
    fn write_message(&mut self, mut response: Message) -> Result<(), DomainError> {
        if !response.name_servers().is_empty() {
            self.augmentor.augment(&mut response);
        }
        self.inner.write_message(response)
    }
}
