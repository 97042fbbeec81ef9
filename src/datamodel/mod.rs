pub mod stat_value;
pub mod stats_document;
pub mod tag_set;
pub mod timestamp;

pub use stat_value::StatValue;
pub use stats_document::{IndexStats, ShardScope, StatGroup, StatsDocument};
pub use tag_set::TagSet;
pub use timestamp::{ScrapeTimestamp, ScrapeTimestampExt};
