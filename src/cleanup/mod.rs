//! Normalization passes that turn a declaration tree into a [`crate::types::Bean`].
//!
//! Everything here is a pure transformation over already-parsed data, except
//! [`ClassDeclParser::parse_bean`] which re-reads the class's source file once.
pub mod annotations;
pub mod comments;
pub mod imports;
pub mod inner_types;
mod parser;
pub mod type_names;

pub use parser::ClassDeclParser;
