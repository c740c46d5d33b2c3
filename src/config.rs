use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

use crate::errors::{CleanupError, Result};

/// Hidden per-project directory holding `config.json`.
pub const BEANCLEAN_DIR: &str = ".beanclean";
pub const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Which source files a cleanup run visits.
///
/// Missing keys in `config.json` take their default, so a file may list only
/// the settings it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Glob patterns, relative to the project root, of files to clean.
    pub include: Vec<String>,
    /// Glob patterns of files to skip even when included.
    pub exclude: Vec<String>,
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        let exclude = [
            "target/**",
            "build/**",
            "out/**",
            ".git/**",
            ".gradle/**",
            ".beanclean/**",
            "**/package-info.java",
            "**/module-info.java",
        ];
        Self {
            include: vec!["**/*.java".to_string()],
            exclude: exclude.iter().map(|p| p.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl CleanupConfig {
    /// Reads `<root>/.beanclean/config.json`, or the defaults when the file
    /// does not exist.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = get_config_path(project_root);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(config_error("read", &path, e)),
        };
        serde_json::from_str(&contents).map_err(|e| config_error("parse", &path, e))
    }

    /// Writes the configuration next to the project sources. The file is
    /// replaced in one rename so a reader never sees it half written.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let dir = get_beanclean_dir(project_root);
        fs::create_dir_all(&dir).map_err(|e| config_error("create", &dir, e))?;

        let path = get_config_path(project_root);
        let staged = path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(&staged, json).map_err(|e| config_error("write", &staged, e))?;
        fs::rename(&staged, &path).map_err(|e| config_error("replace", &path, e))
    }

    /// Compiles the include and exclude globs. An invalid pattern is a
    /// configuration error rather than a silent non-match.
    pub fn file_filter(&self) -> Result<FileFilter> {
        Ok(FileFilter {
            include: compile_patterns(&self.include)?,
            exclude: compile_patterns(&self.exclude)?,
            max_file_size: self.max_file_size,
        })
    }
}

/// Compiled form of a [`CleanupConfig`], built once per scan.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    max_file_size: u64,
}

impl FileFilter {
    /// `true` when `rel_path` (forward slashes, relative to the project root)
    /// matches an include pattern and no exclude pattern.
    pub fn accepts(&self, rel_path: &str) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        let matches = |patterns: &[Pattern]| {
            patterns
                .iter()
                .any(|pattern| pattern.matches_with(rel_path, options))
        };
        matches(&self.include) && !matches(&self.exclude)
    }

    pub fn accepts_size(&self, len: u64) -> bool {
        len <= self.max_file_size
    }
}

pub fn get_beanclean_dir(project_root: &Path) -> PathBuf {
    project_root.join(BEANCLEAN_DIR)
}

pub fn get_config_path(project_root: &Path) -> PathBuf {
    get_beanclean_dir(project_root).join(CONFIG_FILENAME)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| CleanupError::Config {
                message: format!("invalid glob pattern '{}': {}", p, e),
            })
        })
        .collect()
}

fn config_error(action: &str, path: &Path, err: impl std::fmt::Display) -> CleanupError {
    CleanupError::Config {
        message: format!("failed to {} config '{}': {}", action, path.display(), err),
    }
}
