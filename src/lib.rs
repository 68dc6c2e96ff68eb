// Library exports for percolation
pub mod error;
pub mod percolation;
pub mod site_list;
pub mod union_find;

pub use error::PercolationError;
pub use percolation::{Percolation, VIRTUAL_TOP};
pub use union_find::UnionFind;
