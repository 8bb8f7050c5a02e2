pub mod arguments;
pub mod count;
pub mod error;
pub mod fp;
pub mod itemizer;
pub mod miner;
pub mod output;
pub mod rules;
pub mod transactions;

pub use arguments::{Arguments, ValidationError};
pub use error::MineError;
pub use fp::{fp_growth, parallel_fp_growth, FPTree, ItemsetWithCount};
pub use itemizer::{Item, Itemizer};
pub use miner::{mine, MiningResult};
pub use rules::{generate_rules, Rule};
