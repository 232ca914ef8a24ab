//! End-to-end tests for the clustering/sorting pipeline against the public
//! API: borrow history in, ordered clusters of ISBNs out.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shelfmap::{Book, BorrowRecord, LibraryRestructuring, SortKey};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(patron: &str, isbn: &str, days: u32) -> BorrowRecord {
    BorrowRecord::new(patron, isbn, date(2024, 1, 1), date(2024, 1, 1 + days))
}

/// Books A and B are co-borrowed by one patron; C is only ever borrowed
/// alone. Expected: a single cluster {A, B} with mean 3 days, C excluded,
/// and year ordering putting B (1990) before A (2000).
#[test]
fn co_borrowed_pair_clusters_and_isolated_book_is_excluded() {
    let books = vec![
        Book::new("isbn-a", "Cats", "Ann Marlow", 2000),
        Book::new("isbn-b", "Dogs", "Ben Okafor", 1990),
        Book::new("isbn-c", "Fish", "Cora Voss", 2010),
    ];
    let records = vec![
        record("p1", "isbn-a", 2),
        record("p1", "isbn-b", 4),
        record("p2", "isbn-c", 9),
    ];
    let engine = LibraryRestructuring::new(&records, &books);

    assert_eq!(
        engine.mean_borrow_days(&["isbn-a".to_string(), "isbn-b".to_string()]),
        3.0
    );

    let clusters = engine.cluster_and_sort(SortKey::YearPublished);
    assert_eq!(clusters, vec![vec!["isbn-b", "isbn-a"]]);
}

#[test]
fn empty_borrow_history_yields_empty_output_for_every_sort_key() {
    let books = vec![Book::new("isbn-a", "Cats", "Ann Marlow", 2000)];
    let engine = LibraryRestructuring::new(&[], &books);

    for sort_key in [
        SortKey::Title,
        SortKey::Author,
        SortKey::YearPublished,
        SortKey::Unsorted,
    ] {
        assert_eq!(engine.cluster_and_sort(sort_key), Vec::<Vec<String>>::new());
    }
}

#[test]
fn clusters_partition_the_co_borrowed_isbns() {
    let records = vec![
        record("p1", "a1", 1),
        record("p1", "a2", 2),
        record("p2", "a2", 3),
        record("p2", "a3", 4),
        record("p3", "b1", 5),
        record("p3", "b2", 6),
        record("p4", "solo", 7),
    ];
    let engine = LibraryRestructuring::new(&records, &[]);

    let clusters = engine.cluster_and_sort(SortKey::Unsorted);
    let mut all: Vec<String> = clusters.into_iter().flatten().collect();
    all.sort();
    assert_eq!(all, ["a1", "a2", "a3", "b1", "b2"]);
}

#[test]
fn clusters_order_by_mean_duration_across_sort_keys() {
    // Cluster {a1, a2}: mean 8 days. Cluster {b1, b2}: mean 2 days.
    let books = vec![
        Book::new("a1", "Zebra", "Zed", 2020),
        Book::new("a2", "Yak", "Yvonne", 2019),
        Book::new("b1", "Wren", "Walt", 2018),
        Book::new("b2", "Vole", "Vera", 2017),
    ];
    let records = vec![
        record("p1", "a1", 8),
        record("p1", "a2", 8),
        record("p2", "b1", 2),
        record("p2", "b2", 2),
    ];
    let engine = LibraryRestructuring::new(&records, &books);

    let by_title = engine.cluster_and_sort(SortKey::Title);
    assert_eq!(by_title, vec![vec!["b2", "b1"], vec!["a2", "a1"]]);

    let by_author = engine.cluster_and_sort(SortKey::Author);
    assert_eq!(by_author, vec![vec!["b2", "b1"], vec!["a2", "a1"]]);

    let by_year = engine.cluster_and_sort(SortKey::YearPublished);
    assert_eq!(by_year, vec![vec!["b2", "b1"], vec!["a2", "a1"]]);
}

#[test]
fn unsorted_key_preserves_discovery_order_within_clusters() {
    let records = vec![
        record("p1", "ccc", 3),
        record("p1", "aaa", 3),
        record("p1", "bbb", 3),
    ];
    let engine = LibraryRestructuring::new(&records, &[]);

    // Discovery starts at the lowest ISBN and walks neighbors in order.
    let clusters = engine.cluster_and_sort(SortKey::Unsorted);
    assert_eq!(clusters, vec![vec!["aaa", "bbb", "ccc"]]);
}

#[test]
fn records_for_unknown_isbns_are_still_clustered() {
    // Neither ISBN exists in the catalog; statistics and clustering proceed,
    // and attribute sorting compares default (empty) book values.
    let records = vec![record("p1", "ghost-2", 4), record("p1", "ghost-1", 4)];
    let engine = LibraryRestructuring::new(&records, &[]);

    let clusters = engine.cluster_and_sort(SortKey::Title);
    assert_eq!(clusters.len(), 1);
    let mut isbns = clusters[0].clone();
    isbns.sort();
    assert_eq!(isbns, ["ghost-1", "ghost-2"]);
}

#[test]
fn graph_symmetry_is_observable_through_the_engine() {
    let records = vec![
        record("p1", "aaa", 1),
        record("p1", "bbb", 2),
        record("p2", "bbb", 3),
        record("p2", "ccc", 4),
    ];
    let engine = LibraryRestructuring::new(&records, &[]);
    let graph = engine.graph();

    for node in graph.nodes() {
        let neighbors = graph.neighbors(node).unwrap();
        assert!(!neighbors.contains(node), "{} is its own neighbor", node);
        for neighbor in neighbors {
            assert!(
                graph.neighbors(neighbor).unwrap().contains(node),
                "edge {} -> {} is not mirrored",
                node,
                neighbor
            );
        }
    }
}

#[test]
fn dataset_file_feeds_the_engine_end_to_end() {
    use indoc::indoc;
    use std::io::Write;

    let json = indoc! {r#"
        {
          "books": [
            {"isbn": "isbn-a", "title": "Cats", "author": "Ann Marlow", "yearPublished": 2000},
            {"isbn": "isbn-b", "title": "Dogs", "author": "Ben Okafor", "yearPublished": 1990}
          ],
          "records": [
            {"patronId": "p1", "bookISBN": "isbn-a", "checkoutDate": "2024-01-01", "returnDate": "2024-01-03"},
            {"patronId": "p1", "bookISBN": "isbn-b", "checkoutDate": "2024-01-01", "returnDate": "2024-01-05"}
          ]
        }
    "#};
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let dataset = shelfmap::load_dataset(file.path()).unwrap();
    let engine = LibraryRestructuring::new(&dataset.records, &dataset.books);

    let clusters = engine.cluster_and_sort(SortKey::YearPublished);
    assert_eq!(clusters, vec![vec!["isbn-b", "isbn-a"]]);
}
