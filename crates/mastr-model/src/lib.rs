pub mod change;
pub mod enums;
pub mod error;
pub mod fields;
pub mod history;
pub mod ids;
pub mod options;
pub mod record;
pub mod summary;

pub use change::{ChangeDescriptor, StatusTransition};
pub use enums::{CodeKind, Status};
pub use error::{ModelError, Result};
pub use history::{ChangeSet, EntityHistory, Milestones, PeriodChanges, UpdatedEntity};
pub use ids::{EntityKey, Period};
pub use options::{DiffOptions, FeedOptions, RecordFilter, SourceInfo};
pub use record::{
    ATTRIBUTE_PREFIX, EntityRecord, FieldValue, RawPeriod, RawRecord, VIEW_FIELDS,
    attribute_view_name,
};
pub use summary::{FeedSummary, PeriodSummary, ShortRecord, StatusTotals};
