//! Application services: the join protocols that turn upstream calls into
//! renderable page data.

pub mod detail;
pub mod error;
pub mod search;
