pub mod bfs;

pub use bfs::{IncrementalBfs, find_path};
