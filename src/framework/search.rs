//! Free-text search over the fixed string fields of a record.

use std::borrow::Cow;

/// A record that exposes a fixed set of searchable text fields
/// (name, email, phone, restaurant, …).
///
/// Fields are usually borrowed; formatted ids (`ORD-003`) are owned.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Case-insensitive substring match across `record`'s search fields.
///
/// A blank query matches every record.
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the records that match `query`, preserving their order.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query))
        .collect()
}
