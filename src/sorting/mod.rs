pub mod merge;
pub mod radix;

pub use merge::merge_sort_by;
pub use radix::radix_sort_by_key;
