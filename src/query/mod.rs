mod filter;
pub mod nearest;
