mod apply;
mod check;

pub use apply::{apply, ApplyArgs};
pub use check::check;
