pub mod indication;
pub mod resolution;
pub mod target;
