//! Charmap decoding: scanner, symbol and encoding tokens, section parser

pub mod encoding;
pub mod parser;
pub mod scanner;
pub mod symbol;
pub mod validation;
