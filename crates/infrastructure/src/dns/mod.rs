pub mod deleg;
pub mod record_parser;
pub mod replay;
pub mod wire_response;

pub use deleg::{AugmentingWriter, DelegHandler, DelegationTableLoader, DelegationTableStore};
pub use record_parser::RecordParser;
pub use replay::{with_id, ReplayHandler};
pub use wire_response::{decode_message, encode_message, WireResponseWriter};
