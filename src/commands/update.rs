use std::path::Path;

use tracing::{info, warn};

use crate::feed;
use crate::feed_source::FeedSource;
use crate::merge;
use crate::store;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UpdateReport {
    pub added: usize,
    pub total: usize,
}

pub(crate) fn cmd_update(data: &Path, sources: &[FeedSource]) -> anyhow::Result<UpdateReport> {
    let existing = store::load(data)?;
    let client = crate::http::http_client()?;

    let mut fetched = Vec::with_capacity(sources.len());
    for source in sources {
        info!(url = %source.url, "fetching feed");
        let document = match feed::fetch(&client, &source.url) {
            Ok(document) => document,
            Err(e) => {
                warn!(url = %source.url, error = %e, "could not fetch feed");
                continue;
            }
        };
        fetched.push(feed::extract_entries(&document, source));
    }

    let merged = merge::merge(existing, fetched.into_iter().flatten());
    store::save(data, &merged.entries)?;

    let report = UpdateReport {
        added: merged.added,
        total: merged.entries.len(),
    };
    println!(
        "Done. {} new items added. Total: {} items.",
        report.added, report.total
    );
    Ok(report)
}
