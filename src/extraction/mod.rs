//! Tree-sitter based declaration extraction.
//!
//! Front ends in this module read source files and produce the declaration
//! tree consumed by [`crate::cleanup`].
mod java_extractor;
mod javadoc;

pub use java_extractor::JavaExtractor;
pub use javadoc::parse_javadoc;

use std::path::Path;

use crate::declaration::ClassDecl;
use crate::errors::Result;

/// Trait for language-specific declaration extractors.
pub trait DeclarationExtractor: Send + Sync {
    /// File extensions this extractor handles (without leading dot).
    fn extensions(&self) -> &[&str];

    /// Human-readable language name.
    fn language_name(&self) -> &str;

    /// Extracts the top-level class declarations of a source file.
    ///
    /// `file_path` is recorded on every declaration so the cleanup passes can
    /// re-read the file; `source` is its content.
    fn extract(&self, file_path: &Path, source: &str) -> Result<Vec<ClassDecl>>;

    /// Returns `true` if the extractor handles the given file.
    fn handles(&self, file_path: &Path) -> bool {
        file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}
