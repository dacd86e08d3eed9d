use rss::{Channel, Item};

use super::{Entry, date, present};
use crate::feed_source::FeedSource;

/// `dc:creator` when set, otherwise `<author>`.
fn author_text(item: &Item) -> &str {
    item.dublin_core_ext()
        .and_then(|dc| present(dc.creators().first().map(String::as_str)))
        .or_else(|| present(item.author()))
        .unwrap_or("")
}

pub fn extract(channel: &Channel, source: &FeedSource) -> Vec<Entry> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = present(item.title())?;
            let link = present(item.link())?;
            if !source.accepts(author_text(item), title) {
                return None;
            }
            let date = item.pub_date().map(date::normalize).unwrap_or_default();
            Some(Entry::new(title, link, date, source))
        })
        .collect()
}
