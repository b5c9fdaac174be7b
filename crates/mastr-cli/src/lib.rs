//! CLI library components for the storage registry change feed.

pub mod logging;
pub mod pipeline;
