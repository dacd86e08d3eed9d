use chrono::{NaiveDate, NaiveDateTime};

/// Turn an RSS `pubDate` into `YYYY-MM-DD`, or `""` when it can't be read.
///
/// Tries `"<weekday>, <day> <month> <year> <HH:MM:SS> <tz>"` first, then an
/// ISO date in the first ten characters.
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();
    parse_rfc822(raw)
        .or_else(|| parse_iso_prefix(raw))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

fn is_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

// The weekday name must be real but is not checked against the date: feeds
// get it wrong often enough that doing so would lose real entries.
fn parse_rfc822(raw: &str) -> Option<NaiveDate> {
    let (weekday, rest) = raw.split_once(',')?;
    let weekday = weekday.to_ascii_lowercase();
    if !WEEKDAYS.contains(&weekday.as_str()) {
        return None;
    }
    let rest = rest.trim();
    let stamp = match rest.rsplit_once(char::is_whitespace) {
        Some((head, zone)) if !zone.contains(':') => head.trim_end(),
        _ => rest,
    };
    // chrono's %Y also takes short years; "26" must not become year 26.
    if !stamp.split_whitespace().nth(2).is_some_and(is_year) {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, "%d %b %Y %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn parse_iso_prefix(raw: &str) -> Option<NaiveDate> {
    let prefix: String = raw.chars().take(10).collect();
    if !prefix.get(..4).is_some_and(is_year) {
        return None;
    }
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()
}
