use crate::config::ShimConfig;
use crate::datamodel::{ScrapeTimestamp, ScrapeTimestampExt, StatsDocument, TagSet};
use crate::exporters::LineProtocolConverter;
use crate::fetcher::{StatsClient, stats_url};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

/// Name of the local host, used for the `host=` tag.
pub fn local_hostname() -> Result<String> {
    hostname::get()
        .context("Failed to look up the hostname")?
        .into_string()
        .map_err(|name| anyhow::anyhow!("Hostname is not valid UTF-8: {:?}", name))
}

/// Write two lines per index, primaries then all shards, in index name order.
///
/// Returns the number of lines written.
pub fn write_document<W: Write>(
    out: &mut W,
    common_tags: &TagSet,
    document: &StatsDocument,
    timestamp_ns: i128,
) -> std::io::Result<usize> {
    let mut lines = 0;
    for (index, stats) in &document.indices {
        let index_tags = common_tags.with_index(index);
        for (scope, group) in stats.scopes() {
            let tags = index_tags.with_scope(scope);
            writeln!(
                out,
                "{}",
                LineProtocolConverter::to_line(&tags, group, timestamp_ns)
            )?;
            lines += 1;
        }
    }
    out.flush()?;
    Ok(lines)
}

/// Fetch the statistics once and print them.
///
/// The timestamp is taken before the request and shared by every line.
pub async fn run<W: Write>(config: &ShimConfig, hostname: &str, out: &mut W) -> Result<usize> {
    let common_tags = TagSet::common(&config.check_name, hostname);
    let url = stats_url(&config.base_url, &config.indices)?;
    let client = StatsClient::new()?;

    let timestamp = ScrapeTimestamp::capture().context("Failed to read the clock")?;
    let document = client.fetch(&url).await?;
    debug!(indices = document.indices.len(), "Decoded index statistics");

    let lines = write_document(
        out,
        &common_tags,
        &document,
        timestamp.to_unix_nanoseconds_i128(),
    )
    .context("Failed to write metric lines")?;
    info!(%url, lines, "Index statistics written");

    Ok(lines)
}
