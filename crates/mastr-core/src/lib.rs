//! Change feed engine for storage unit registry snapshots.
//!
//! Raw period snapshots are normalized, summarized per lifecycle status,
//! diffed against the previous period and folded into per-entity histories
//! with inferred lifecycle milestones.

pub mod diff;
pub mod error;
pub mod feed;
pub mod history;
pub mod lifecycle;
pub mod normalize;
pub mod short_form;
pub mod summary;

pub use diff::diff;
pub use error::{CoreError, Result};
pub use feed::build_feed;
pub use history::HistoryAggregator;
pub use lifecycle::infer_milestones;
pub use normalize::{Normalizer, cast_to_mega, parse_date};
pub use short_form::project;
pub use summary::summarize;
