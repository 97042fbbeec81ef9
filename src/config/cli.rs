use clap::Parser;
use url::Url;

/// A metrics agent input that prints statistics for every Elasticsearch index
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Check name, first tag of every line [default: program name]
    #[arg(long)]
    pub name: Option<String>,

    /// The base HTTP URL of the Elasticsearch node [default: http://localhost:9200]
    #[arg(long)]
    pub addr: Option<Url>,

    /// If set, enables debug logs
    #[arg(long)]
    pub debug: bool,

    /// If set, enables logging to stderr instead of syslog
    #[arg(long)]
    pub stderr: bool,

    /// Index name wildcard [default: *]
    #[arg(long)]
    pub indices: Option<String>,
}
