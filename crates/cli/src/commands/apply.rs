use anyhow::Context;
use clap::Args;
use deleg_dns_application::ports::DnsHandler;
use deleg_dns_domain::Config;
use deleg_dns_infrastructure::dns::{
    decode_message, DelegHandler, DelegationTableStore, ReplayHandler, WireResponseWriter,
};
use hickory_proto::op::{Message, MessageType, OpCode};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args)]
pub struct ApplyArgs {
    /// Wire-format upstream response to run through the handler
    #[arg(short, long, value_name = "FILE")]
    response: PathBuf,

    /// Where to write the resulting wire bytes (hex on stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub async fn apply(config: &Config, args: &ApplyArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.response)
        .with_context(|| format!("Failed to read {}", args.response.display()))?;
    let upstream = decode_message(&bytes).context("Invalid upstream response")?;
    let request = request_for(&upstream);

    let tables = Arc::new(
        DelegationTableStore::from_config(config).context("Failed to build delegation table")?,
    );
    let handler = DelegHandler::new(Arc::new(ReplayHandler::new(upstream)), tables);

    let mut writer = WireResponseWriter::new();
    let rcode = handler.serve_dns(&request, &mut writer).await?;
    info!(id = request.id(), rcode = ?rcode, "Response processed");

    let responses = writer.into_responses();
    let response = responses
        .first()
        .context("Handler chain wrote no response")?;

    match args.output {
        Some(ref path) => std::fs::write(path, response)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", to_hex(response)),
    }
    Ok(())
}

/// The query that would have produced `response`.
fn request_for(response: &Message) -> Message {
    let mut request = Message::new(response.id(), MessageType::Query, OpCode::Query);
    for query in response.queries() {
        request.add_query(query.clone());
    }
    request
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{:02x}", b);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xab, 0x10]), "00ab10");
    }

    #[test]
    fn test_request_mirrors_response_id() {
        let response = Message::new(99, MessageType::Response, OpCode::Query);
        let request = request_for(&response);
        assert_eq!(request.id(), 99);
        assert_eq!(request.message_type(), MessageType::Query);
    }
}
