mod day;
mod pipeline;
mod provider;
mod snapshot;
mod types;

pub use day::{day_key, day_start, today_range};
pub use pipeline::apply_usage_rows;
pub use provider::{JsonFileProvider, StaticUsageProvider, UsageSnapshotProvider};
pub use snapshot::{DEFAULT_QUERY_TIMEOUT, collect_usage, usage_snapshot};
pub use types::{RefreshStats, Result, UsageError};
