pub mod builders;
pub mod handler_mock;
