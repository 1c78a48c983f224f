//! # Location Filter
//!
//! Keeps the records whose canonical location tags intersect the query's
//! tags. Intersection, not subset or equality: any shared tag qualifies a
//! match, so a "Gurgaon and Noida" record answers a plain "noida" query.

use crate::record::Record;
use crate::tag::TagTable;

/// Filter `records` by a free-text location query.
///
/// Two cases deliberately return the full list unchanged:
///
/// - an empty or whitespace-only query (no filter requested), and
/// - a query whose canonical tag set is empty (nothing recognized; an
///   unrecognized query must not hide everything).
pub fn filter_by_location<'a>(
    records: &'a [Record],
    query: &str,
    table: &TagTable,
) -> Vec<&'a Record> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    let want = table.canonicalize(query);
    if want.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            let have = table.canonicalize(&record.location);
            have.intersection(&want).next().is_some()
        })
        .collect()
}
