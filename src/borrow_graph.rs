//! Co-borrowing graph over book ISBNs.
//!
//! An undirected edge connects two books whenever at least one patron has
//! borrowed both. The graph is symmetric by construction and has no
//! self-loops; a book nobody co-borrowed never appears as a node.

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::BorrowRecord;

/// Adjacency is kept in ordered containers so node enumeration and neighbor
/// iteration are ascending by ISBN. That makes clustering output reproducible
/// across runs, not just within one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BorrowGraph {
    adjacency: OrdMap<String, OrdSet<String>>,
}

impl BorrowGraph {
    pub fn new() -> Self {
        Self {
            adjacency: OrdMap::new(),
        }
    }

    /// Build the graph from raw borrow history: group records into per-patron
    /// borrowed-book sets, then connect every distinct pair within each set.
    /// Quadratic in the number of distinct books per patron.
    pub fn from_patron_history(records: &[BorrowRecord]) -> Self {
        let mut patron_books: HashMap<&str, OrdSet<&str>> = HashMap::new();
        for record in records {
            patron_books
                .entry(record.patron_id.as_str())
                .or_default()
                .insert(record.book_isbn.as_str());
        }

        let mut graph = Self::new();
        for books in patron_books.values() {
            let books: Vec<&str> = books.iter().copied().collect();
            for i in 0..books.len() {
                for j in (i + 1)..books.len() {
                    graph.add_edge(books[i], books[j]);
                }
            }
        }
        graph
    }

    /// Insert an undirected edge. Self-loops are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.insert_directed(a, b);
        self.insert_directed(b, a);
    }

    fn insert_directed(&mut self, from: &str, to: &str) {
        // Cloning a persistent set is O(1); update the copy and put it back.
        let mut neighbors = self.adjacency.get(from).cloned().unwrap_or_default();
        neighbors.insert(to.to_string());
        self.adjacency.insert(from.to_string(), neighbors);
    }

    pub fn neighbors(&self, isbn: &str) -> Option<&OrdSet<String>> {
        self.adjacency.get(isbn)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.adjacency.contains_key(isbn)
    }

    /// Nodes in ascending ISBN order.
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
