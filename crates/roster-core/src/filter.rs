use crate::record::Record;

/// Case-insensitive substring filter over every field of every record.
/// The source list is never mutated; the result is a fresh derived
/// sequence in source order. An empty query matches everything.
#[must_use]
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| record.matches(&needle))
        .collect()
}
