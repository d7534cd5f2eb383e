pub mod codebook;
pub mod tree;

pub use codebook::Codebook;
pub use tree::{build_tree, build_tree_observed, HuffmanNode};
