pub mod classify;
pub mod disambiguate;
pub mod resolve;
