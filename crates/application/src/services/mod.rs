mod delegation_table;
mod response_augmentor;
mod zone_matcher;

pub use delegation_table::{DelegationTable, DelegationTableBuilder};
pub use response_augmentor::{Augmentation, ResponseAugmentor};
pub use zone_matcher::{label_count, ZoneMatcher};
