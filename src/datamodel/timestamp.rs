pub type ScrapeTimestamp = hifitime::Epoch;
use anyhow::Result;

pub trait ScrapeTimestampExt {
    fn capture() -> Result<Self>
    where
        Self: std::marker::Sized;
    fn to_unix_nanoseconds_i128(&self) -> i128;
}

impl ScrapeTimestampExt for ScrapeTimestamp {
    fn capture() -> Result<Self> {
        Ok(Self::now()?)
    }
    fn to_unix_nanoseconds_i128(&self) -> i128 {
        self.to_unix_duration().total_nanoseconds()
    }
}
