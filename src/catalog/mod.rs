pub mod error;
mod normalize;
mod raw;
pub mod simulate;
