use std::collections::HashSet;

use tracing::{info, warn};

use crate::feed::Entry;

#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub entries: Vec<Entry>,
    pub added: usize,
}

/// Union `incoming` into `existing` by URL and sort newest first.
///
/// Candidates are taken in order; the first entry seen for a URL wins,
/// whether it was already persisted or arrived earlier in this run. Dates are
/// compared as strings, so undated entries end up last. The sort is stable.
pub fn merge<I>(existing: Vec<Entry>, incoming: I) -> Merged
where
    I: IntoIterator<Item = Entry>,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(existing.len());
    for entry in existing {
        if seen.insert(entry.url.clone()) {
            entries.push(entry);
        } else {
            warn!(url = %entry.url, "dropping duplicate stored entry");
        }
    }

    let mut added = 0;
    for entry in incoming {
        if seen.insert(entry.url.clone()) {
            info!(title = %entry.title, source = %entry.source, "new entry");
            entries.push(entry);
            added += 1;
        }
    }

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Merged { entries, added }
}
