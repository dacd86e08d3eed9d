use atom_syndication::{Entry as AtomEntry, Feed};

use super::{Entry, present};
use crate::feed_source::FeedSource;

fn link(entry: &AtomEntry) -> Option<&str> {
    let links = entry.links();
    links
        .iter()
        .find(|l| l.rel() == "alternate")
        .or_else(|| links.first())
        .and_then(|l| present(Some(l.href())))
}

fn author_text(entry: &AtomEntry) -> String {
    entry
        .authors()
        .iter()
        .map(|person| person.name().trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn extract(feed: &Feed, source: &FeedSource) -> Vec<Entry> {
    feed.entries()
        .iter()
        .filter_map(|entry| {
            let title = present(Some(entry.title().as_str()))?;
            let link = link(entry)?;
            if !source.accepts(&author_text(entry), title) {
                return None;
            }
            let date = entry
                .published()
                .unwrap_or(entry.updated())
                .to_utc()
                .format("%Y-%m-%d")
                .to_string();
            Some(Entry::new(title, link, date, source))
        })
        .collect()
}
