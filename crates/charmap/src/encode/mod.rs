//! Locale table generation and serialization

pub mod binary;
pub mod c_source;
pub mod table;
pub mod writer;
