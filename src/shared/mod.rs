pub mod fixtures;
pub mod money;
pub mod types;
