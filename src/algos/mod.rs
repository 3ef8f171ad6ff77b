pub mod caesar;
pub mod strength;
