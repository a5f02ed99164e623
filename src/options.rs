use crate::error::CombineError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions collected when none are given on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".html", ".md", ".css", ".cjs"];
/// Basenames skipped regardless of extension.
pub const DEFAULT_IGNORE_NAMES: &[&str] = &["package.json", "package-lock.json"];
pub const DEFAULT_SOURCE_SUBDIR: &str = "src";
pub const DEFAULT_OUTPUT_FILE: &str = "combined_file.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub ignore_names: Vec<String>,
    pub source_subdir: PathBuf,
    pub output_path: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    /// Whether dot-files and dot-directories are considered. Applies to both
    /// the recursive source walk and the top-level scan.
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub binary_detection: BinaryDetection,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore_names: DEFAULT_IGNORE_NAMES.iter().map(|n| n.to_string()).collect(),
            source_subdir: PathBuf::from(DEFAULT_SOURCE_SUBDIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            exclude_patterns: Vec::new(),
            max_depth: None,
            include_hidden: false,
            respect_gitignore: false,
            follow_links: false,
            binary_detection: BinaryDetection::None,
        }
    }
}

impl CombineOptions {
    /// Location of the output artifact, resolved against `root`.
    pub fn resolved_output_path(&self) -> PathBuf {
        self.root.join(&self.output_path)
    }

    pub(crate) fn validate(&self) -> Result<(), CombineError> {
        if self.extensions.is_empty() {
            return Err(CombineError::Config(
                "at least one extension is required".to_string(),
            ));
        }
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(CombineError::Config(format!(
                    "extension '{}' must be a dot followed by a suffix",
                    ext
                )));
            }
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(CombineError::Config("output path is empty".to_string()));
        }
        Ok(())
    }
}

/// Turns a bare command-line token such as `js` into the filter `.js`.
///
/// Tokens that already carry the leading dot are kept unchanged. Empty tokens
/// and tokens containing a path separator are rejected.
pub fn normalize_extension(token: &str) -> Result<String, CombineError> {
    let bare = token.strip_prefix('.').unwrap_or(token);
    if bare.is_empty() {
        return Err(CombineError::Config(format!(
            "invalid extension '{}'",
            token
        )));
    }
    if bare.contains('/') || bare.contains('\\') {
        return Err(CombineError::Config(format!(
            "extension '{}' must not contain a path separator",
            token
        )));
    }
    Ok(format!(".{}", bare))
}

#[derive(Debug, Default)]
pub struct CombineBuilder {
    options: CombineOptions,
}

impl CombineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the extension filter. Duplicates are dropped, first occurrence wins.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.into();
            if !unique.contains(&ext) {
                unique.push(ext);
            }
        }
        self.options.extensions = unique;
        self
    }
    pub fn ignore_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.ignore_names = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn add_ignore_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.options.ignore_names.contains(&name) {
            self.options.ignore_names.push(name);
        }
        self
    }
    pub fn source_subdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.source_subdir = dir.into();
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = path.into();
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> CombineOptions {
        self.options
    }
}
