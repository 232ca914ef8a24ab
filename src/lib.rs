// Export modules for library usage
pub mod analysis;
pub mod borrow_graph;
pub mod core;
pub mod io;
pub mod sorting;

// Re-export commonly used types
pub use crate::analysis::clustering::connected_components;
pub use crate::analysis::restructuring::LibraryRestructuring;
pub use crate::borrow_graph::BorrowGraph;
pub use crate::core::{borrow_duration_days, Book, BorrowRecord, SortKey};
pub use crate::io::{load_dataset, Dataset};
pub use crate::sorting::{merge_sort_by, radix_sort_by_key};
