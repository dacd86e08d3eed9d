pub mod atom;
pub mod date;
pub mod rss;

use std::io::BufReader;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed_source::FeedSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_name: String,
}

impl Entry {
    pub(crate) fn new(title: &str, url: &str, date: String, source: &FeedSource) -> Self {
        Self {
            title: title.trim().to_string(),
            url: url.trim().to_string(),
            date,
            source: source.source_id.clone(),
            source_name: source.source_name.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("not a valid RSS or Atom document (rss: {rss}; atom: {atom})")]
    Parse { rss: String, atom: String },
}

#[derive(Debug)]
pub enum Document {
    Rss(::rss::Channel),
    Atom(::atom_syndication::Feed),
}

impl Document {
    pub fn parse(bytes: &[u8]) -> Result<Self, FetchError> {
        let rss_err = match ::rss::Channel::read_from(BufReader::new(bytes)) {
            Ok(channel) => return Ok(Document::Rss(channel)),
            Err(e) => e,
        };
        match ::atom_syndication::Feed::read_from(BufReader::new(bytes)) {
            Ok(feed) => Ok(Document::Atom(feed)),
            Err(atom_err) => Err(FetchError::Parse {
                rss: rss_err.to_string(),
                atom: atom_err.to_string(),
            }),
        }
    }
}

pub fn fetch(client: &reqwest::blocking::Client, url: &str) -> Result<Document, FetchError> {
    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    Document::parse(&bytes)
}

/// Entries from `document` that have a title and link and pass the source's
/// author filter, in document order.
pub fn extract_entries(document: &Document, source: &FeedSource) -> Vec<Entry> {
    match document {
        Document::Rss(channel) => rss::extract(channel, source),
        Document::Atom(feed) => atom::extract(feed, source),
    }
}

/// Trimmed and non-empty, or nothing.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
