//! Input boundary for the change feed: turns a directory of period
//! snapshots into raw records, one list per period, oldest first.

pub mod discovery;
pub mod error;
pub mod snapshot;

pub use discovery::{SnapshotFile, discover_snapshots, list_json_files};
pub use error::{IngestError, Result};
pub use snapshot::{load_periods, parse_snapshot, read_snapshot};
