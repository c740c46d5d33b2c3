use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::cleanup::ClassDeclParser;
use crate::config::CleanupConfig;
use crate::errors::{CleanupError, Result};
use crate::extraction::{DeclarationExtractor, JavaExtractor};
use crate::types::Bean;

/// Runs the cleanup passes over every included source file of a project.
pub struct BeanCleaner {
    config: CleanupConfig,
    project_root: PathBuf,
    extractor: JavaExtractor,
    parser: ClassDeclParser,
}

/// A file that could not be cleaned.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupFailure {
    pub path: String,
    pub message: String,
}

/// Result of a project-wide cleanup.
#[derive(Debug, Serialize)]
pub struct CleanupResult {
    /// Number of files scanned.
    pub file_count: usize,
    /// Beans built, in file order.
    pub beans: Vec<Bean>,
    /// Files that failed; other files are unaffected.
    pub failures: Vec<CleanupFailure>,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl BeanCleaner {
    /// Writes a default configuration for the project and opens it.
    pub fn init(project_root: &Path) -> Result<Self> {
        let config = CleanupConfig::default();
        config.save(project_root)?;
        Ok(Self::with_config(project_root, config))
    }

    /// Opens a project, falling back to the default configuration when none
    /// has been written.
    pub fn open(project_root: &Path) -> Result<Self> {
        let config = CleanupConfig::load(project_root)?;
        Ok(Self::with_config(project_root, config))
    }

    pub fn with_config(project_root: &Path, config: CleanupConfig) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            extractor: JavaExtractor,
            parser: ClassDeclParser::new(),
        }
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// Builds the beans of every top-level class in one source file.
    pub fn clean_file(&self, path: &Path) -> Result<Vec<Bean>> {
        if !self.extractor.handles(path) {
            return Err(CleanupError::File {
                message: format!("no {} source", self.extractor.language_name()),
                path: path.display().to_string(),
            });
        }
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        };
        let source = std::fs::read_to_string(&abs_path).map_err(|e| CleanupError::File {
            message: e.to_string(),
            path: abs_path.display().to_string(),
        })?;

        let classes = self.extractor.extract(&abs_path, &source)?;
        classes
            .iter()
            .map(|class| self.parser.parse_bean(class))
            .collect()
    }

    /// Cleans every included file. Each file is independent: a failure is
    /// recorded and the run moves on.
    pub fn clean_all(&self) -> Result<CleanupResult> {
        let start = Instant::now();
        let files = self.scan_files()?;

        let mut beans = Vec::new();
        let mut failures = Vec::new();
        for file_path in &files {
            match self.clean_file(Path::new(file_path)) {
                Ok(file_beans) => beans.extend(file_beans),
                Err(e) => {
                    warn!(path = %file_path, error = %e, "failed to clean file");
                    failures.push(CleanupFailure {
                        path: file_path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let result = CleanupResult {
            file_count: files.len(),
            beans,
            failures,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            files = result.file_count,
            beans = result.beans.len(),
            failures = result.failures.len(),
            "cleanup complete"
        );
        Ok(result)
    }

    /// Scans the project root for files matching the configuration, returning
    /// paths relative to the root in sorted order.
    pub fn scan_files(&self) -> Result<Vec<String>> {
        let filter = self.config.file_filter()?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.project_root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let abs_path = entry.path();
            let rel_path = match abs_path.strip_prefix(&self.project_root) {
                Ok(p) => p.to_string_lossy().replace('\\', "/"),
                Err(_) => continue,
            };

            if !filter.accepts(&rel_path) {
                continue;
            }

            if let Ok(metadata) = entry.metadata() {
                if !filter.accepts_size(metadata.len()) {
                    debug!(path = %rel_path, size = metadata.len(), "skipping oversized file");
                    continue;
                }
            }

            files.push(rel_path);
        }

        files.sort();
        Ok(files)
    }
}
