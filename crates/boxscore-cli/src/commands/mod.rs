pub mod parse;
pub mod summary;
pub mod tables;
