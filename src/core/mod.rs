pub mod types;

pub use types::{borrow_duration_days, Book, BorrowRecord, SortKey};
