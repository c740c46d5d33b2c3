pub mod cleaner;
pub mod cleanup;
pub mod config;
pub mod declaration;
pub mod errors;
pub mod extraction;
pub mod types;
