pub mod aggregate;
pub mod filter;
pub mod summary;
