//! deleg-dns Infrastructure Layer
pub mod dns;
