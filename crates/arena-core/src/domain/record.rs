//! Common behavior shared by the stored content collections.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

/// Maximum number of records returned by featured listings.
pub const FEATURED_LIMIT: usize = 6;

/// A record stored in a content collection.
///
/// Identifiers follow the `"<prefix>-<unix millis>"` scheme; the publish date
/// is a `YYYY-MM-DD` string used for ordering.
pub trait Record: Clone + Send + Sync + 'static {
    /// Prefix used when minting identifiers for this collection.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn date(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// A record that is addressable by slug and can be featured.
pub trait SluggedRecord: Record {
    fn slug(&self) -> &str;
    fn is_featured(&self) -> bool;
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn by_date<T: Record>(a: &T, b: &T) -> Ordering {
    match parse_date(a.date()).cmp(&parse_date(b.date())) {
        Ordering::Equal => a.created_at().cmp(&b.created_at()),
        other => other,
    }
}

/// Sort records by publish date descending; ties fall back to creation time.
/// Records with an unparseable date sort last.
pub fn sort_newest_first<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| by_date(b, a));
}

/// Sort records by publish date ascending (used for upcoming matches).
pub fn sort_oldest_first<T: Record>(records: &mut [T]) {
    records.sort_by(by_date);
}
