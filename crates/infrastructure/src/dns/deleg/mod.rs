pub mod handler;
pub mod loader;
pub mod table_store;
pub mod writer;

pub use handler::DelegHandler;
pub use loader::DelegationTableLoader;
pub use table_store::DelegationTableStore;
pub use writer::AugmentingWriter;
