use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSource {
    pub url: String,
    pub source_id: String,
    pub source_name: String,
    #[serde(default)]
    pub filter_by_author: bool,
    #[serde(default)]
    pub author_patterns: Vec<String>,
}

impl FeedSource {
    /// Whether an item with this author text and title should be kept.
    ///
    /// Unfiltered sources keep everything. Filtered sources keep an item when
    /// any pattern occurs in the lowercased `author + " " + title`, so a
    /// title that names a tracked person is enough on its own.
    pub fn accepts(&self, author: &str, title: &str) -> bool {
        if !self.filter_by_author {
            return true;
        }
        let combined = format!("{} {}", author, title).to_lowercase();
        self.author_patterns
            .iter()
            .any(|pattern| combined.contains(pattern.as_str()))
    }
}

struct BuiltinFeed {
    url: &'static str,
    source_id: &'static str,
    source_name: &'static str,
    filter_by_author: bool,
    author_patterns: &'static [&'static str],
}

const BUILTIN_FEEDS: &[BuiltinFeed] = &[
    BuiltinFeed {
        url: "https://resolutionfoundation.substack.com/feed",
        source_id: "rf-substack",
        source_name: "Resolution Foundation Substack",
        filter_by_author: true,
        author_patterns: &["gregory thwaites", "greg thwaites"],
    },
    BuiltinFeed {
        url: "https://www.resolutionfoundation.org/feed/",
        source_id: "rf",
        source_name: "Resolution Foundation",
        filter_by_author: true,
        author_patterns: &["gregory thwaites", "greg thwaites", "thwaites"],
    },
];

pub fn builtin() -> Vec<FeedSource> {
    BUILTIN_FEEDS
        .iter()
        .map(|feed| FeedSource {
            url: feed.url.to_string(),
            source_id: feed.source_id.to_string(),
            source_name: feed.source_name.to_string(),
            filter_by_author: feed.filter_by_author,
            author_patterns: feed.author_patterns.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

/// Load a feed table from a JSON file, replacing the built-in one.
pub fn load(path: &Path) -> anyhow::Result<Vec<FeedSource>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read feed table {}", path.display()))?;
    let sources: Vec<FeedSource> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse feed table {}", path.display()))?;
    sources.into_iter().map(normalize).collect()
}

fn normalize(mut source: FeedSource) -> anyhow::Result<FeedSource> {
    let url = Url::parse(source.url.trim())
        .with_context(|| format!("invalid feed URL for {}: {}", source.source_id, source.url))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "feed URL for {} must be http or https: {}",
            source.source_id,
            source.url
        );
    }
    source.url = url.to_string();
    source.author_patterns = source
        .author_patterns
        .iter()
        .map(|p| p.to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    Ok(source)
}
