pub mod graph;
pub mod search;

pub use graph::*;
pub use search::*;
