//! Catalog restructuring engine.
//!
//! Owns the data derived once from raw borrow history — the ISBN-keyed
//! catalog, the per-book accumulated borrow duration, and the co-borrowing
//! graph — and exposes the clustering/sorting query built on top of them.
//! Everything here is total: malformed or dangling input degrades to
//! zero-valued statistics and default book attributes, never to an error.

use im::OrdMap;

use crate::analysis::clustering::connected_components;
use crate::borrow_graph::BorrowGraph;
use crate::core::{borrow_duration_days, Book, BorrowRecord, SortKey};
use crate::sorting::{merge_sort_by, radix_sort_by_key};

/// Scale applied to the fractional mean borrow duration to obtain an integer
/// radix key. Milli-day resolution: means closer than 0.0005 days tie and
/// keep discovery order.
const MEAN_KEY_SCALE: f64 = 1000.0;

pub struct LibraryRestructuring {
    catalog: OrdMap<String, Book>,
    borrow_days: OrdMap<String, i64>,
    graph: BorrowGraph,
}

impl LibraryRestructuring {
    /// Build the engine from raw borrow history and a book collection.
    ///
    /// Duplicate ISBNs in the collection resolve last-write-wins. Records
    /// referencing ISBNs absent from the collection are still accumulated
    /// and still contribute graph edges; referential integrity is not
    /// enforced.
    pub fn new(records: &[BorrowRecord], books: &[Book]) -> Self {
        let mut catalog = OrdMap::new();
        for book in books {
            catalog.insert(book.isbn.clone(), book.clone());
        }

        let mut borrow_days: OrdMap<String, i64> = OrdMap::new();
        for record in records {
            let days = borrow_duration_days(record.checkout_date, record.return_date);
            let total = borrow_days.get(&record.book_isbn).copied().unwrap_or(0);
            borrow_days.insert(record.book_isbn.clone(), total + days);
        }

        let graph = BorrowGraph::from_patron_history(records);
        log::debug!(
            "Restructuring engine built: {} catalog entries, {} tracked ISBNs, {} co-borrowed books",
            catalog.len(),
            borrow_days.len(),
            graph.node_count()
        );

        Self {
            catalog,
            borrow_days,
            graph,
        }
    }

    /// Catalog lookup that falls back to the default book (empty title and
    /// author, year 0) for an unknown ISBN.
    pub fn book(&self, isbn: &str) -> Book {
        self.catalog.get(isbn).cloned().unwrap_or_default()
    }

    /// Accumulated borrow duration for an ISBN, 0 when never borrowed.
    pub fn borrowed_days(&self, isbn: &str) -> i64 {
        self.borrow_days.get(isbn).copied().unwrap_or(0)
    }

    pub fn graph(&self) -> &BorrowGraph {
        &self.graph
    }

    /// Arithmetic mean of accumulated borrow days over a cluster's ISBNs.
    /// An empty cluster yields 0.0 by convention.
    pub fn mean_borrow_days(&self, cluster: &[String]) -> f64 {
        if cluster.is_empty() {
            return 0.0;
        }
        let total: i64 = cluster.iter().map(|isbn| self.borrowed_days(isbn)).sum();
        total as f64 / cluster.len() as f64
    }

    /// Cluster the co-borrowing graph and order the result.
    ///
    /// Clusters are connected components in discovery order, then radix-sorted
    /// ascending by mean borrow duration (stable, so equal means keep
    /// discovery order). Each cluster's ISBNs are then merge-sorted by the
    /// requested attribute; `SortKey::Unsorted` leaves them in discovery
    /// order. Never fails: an empty graph yields an empty result.
    pub fn cluster_and_sort(&self, sort_key: SortKey) -> Vec<Vec<String>> {
        let mut clusters = connected_components(&self.graph);

        radix_sort_by_key(&mut clusters, |cluster| {
            (self.mean_borrow_days(cluster) * MEAN_KEY_SCALE).round() as u64
        });

        for cluster in &mut clusters {
            match sort_key {
                SortKey::Title => {
                    merge_sort_by(cluster, &|a: &String, b: &String| {
                        self.book(a).title < self.book(b).title
                    });
                }
                SortKey::Author => {
                    merge_sort_by(cluster, &|a: &String, b: &String| {
                        self.book(a).author < self.book(b).author
                    });
                }
                SortKey::YearPublished => {
                    merge_sort_by(cluster, &|a: &String, b: &String| {
                        self.book(a).year_published < self.book(b).year_published
                    });
                }
                SortKey::Unsorted => {}
            }
        }
        clusters
    }
}
