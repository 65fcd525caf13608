pub mod dimacs;
pub mod fresh_ids;
pub mod instance;
pub mod reductions;
