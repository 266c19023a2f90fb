pub mod compare;
pub mod db;
