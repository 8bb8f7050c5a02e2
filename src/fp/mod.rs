pub mod growth;
pub mod parallel;
pub mod tree;

pub use growth::{append_sorted, conditional_tree, fp_growth, frequent_items_in_tree, ItemsetWithCount};
pub use parallel::parallel_fp_growth;
pub use tree::{FPNode, FPTree};
