//! Common type definitions used across the codebase

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog entry, identified by its ISBN.
///
/// Books are immutable once loaded. The catalog is keyed by ISBN and a
/// duplicate ISBN overwrites the earlier entry (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year_published: i32,
}

impl Book {
    pub fn new(isbn: &str, title: &str, author: &str, year_published: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year_published,
        }
    }
}

/// One checkout/return event for a single book by a single patron.
///
/// `return_date` is assumed to be on or after `checkout_date`. The referenced
/// ISBN does not have to exist in the book catalog; records for unknown ISBNs
/// still feed the borrow statistics and the co-borrowing graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub patron_id: String,
    #[serde(rename = "bookISBN")]
    pub book_isbn: String,
    pub checkout_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl BorrowRecord {
    pub fn new(patron_id: &str, book_isbn: &str, checkout_date: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_isbn: book_isbn.to_string(),
            checkout_date,
            return_date,
        }
    }
}

/// Attribute used to order books within a cluster.
///
/// `Unsorted` is the explicit no-op case: clusters are still discovered and
/// ranked, but their contents keep discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Title,
    Author,
    YearPublished,
    Unsorted,
}

impl SortKey {
    /// Parse the wire form of a sort key. Matching is case-sensitive;
    /// anything unrecognized maps to `Unsorted` with a diagnostic, it is
    /// never an error.
    pub fn parse(raw: &str) -> SortKey {
        match raw {
            "title" => SortKey::Title,
            "author" => SortKey::Author,
            "yearPublished" => SortKey::YearPublished,
            other => {
                log::warn!(
                    "Unrecognized sort key '{}'; clusters keep discovery order",
                    other
                );
                SortKey::Unsorted
            }
        }
    }
}

/// Elapsed days of a checkout/return span.
///
/// A return date before the checkout date is outside the documented contract
/// and clamps to 0 so it cannot drive an accumulated total negative.
pub fn borrow_duration_days(checkout: NaiveDate, returned: NaiveDate) -> i64 {
    returned.signed_duration_since(checkout).num_days().max(0)
}
