pub mod line_protocol;

pub use line_protocol::{FormattedMetric, LineProtocolConverter, flatten};
