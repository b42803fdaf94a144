#![allow(dead_code)]
use async_trait::async_trait;
use deleg_dns_application::ports::{DnsHandler, ResponseWriter};
use deleg_dns_domain::DomainError;
use deleg_dns_infrastructure::dns::with_id;
use hickory_proto::op::{Message, ResponseCode};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Downstream handler that writes a fixed set of responses, or fails.
pub struct BackendHandler {
    responses: Vec<Message>,
    error: Option<DomainError>,
    calls: AtomicUsize,
}

impl BackendHandler {
    pub fn answering(response: Message) -> Self {
        Self::answering_all(vec![response])
    }

    pub fn answering_all(responses: Vec<Message>) -> Self {
        Self {
            responses,
            error: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            responses: Vec::new(),
            error: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsHandler for BackendHandler {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref error) = self.error {
            return Err(error.clone());
        }
        for response in &self.responses {
            let response = with_id(response.clone(), request.id());
            writer.write_message(response)?;
        }
        Ok(ResponseCode::NoError)
    }
}

/// Client-side writer that keeps every message it receives.
#[derive(Default)]
pub struct Recorder {
    pub messages: Vec<Message>,
}

impl ResponseWriter for Recorder {
    fn write_message(&mut self, response: Message) -> Result<(), DomainError> {
        self.messages.push(response);
        Ok(())
    }
}
