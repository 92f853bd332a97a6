//! CLI command implementations

mod details;
mod random;
mod search;
mod status;

pub use details::details;
pub use random::random;
pub use search::search;
pub use status::status;
