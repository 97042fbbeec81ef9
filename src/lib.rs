#![forbid(unsafe_code)]

pub mod config;
pub mod datamodel;
pub mod exporters;
pub mod fetcher;
pub mod logging;
pub mod scrape;
