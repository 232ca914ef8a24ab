pub mod clustering;
pub mod restructuring;

pub use clustering::connected_components;
pub use restructuring::LibraryRestructuring;
