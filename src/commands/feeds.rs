use anyhow::ensure;

use crate::feed_source::FeedSource;

fn describe(source: &FeedSource) -> String {
    let line = format!("{} {} ({})", source.source_id, source.url, source.source_name);
    if source.filter_by_author {
        format!("{} [filtered: {}]", line, source.author_patterns.join(", "))
    } else {
        line
    }
}

pub(crate) fn cmd_feeds(sources: &[FeedSource]) -> anyhow::Result<()> {
    ensure!(!sources.is_empty(), "No feeds configured");
    for source in sources {
        println!("{}", describe(source));
    }
    Ok(())
}
