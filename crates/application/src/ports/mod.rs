mod dns_handler;

pub use dns_handler::{DnsHandler, ResponseWriter};
