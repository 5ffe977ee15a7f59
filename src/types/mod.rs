pub mod criteria;
pub mod station;
