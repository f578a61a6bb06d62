pub mod convert;
pub mod table;
pub mod tokens;
pub mod write;
