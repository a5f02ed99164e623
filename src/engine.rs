use crate::error::CombineError;
use crate::options::{BinaryDetection, CombineOptions};
use crate::output::{write_block, write_manifest};
use crate::types::{CombineSummary, ProcessedFile};
use ignore::WalkBuilder;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Bytes inspected when sniffing for binary content.
const SNIFF_LEN: usize = 4096;

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(
        dir: &Path,
        max_depth: Option<usize>,
        options: &CombineOptions,
    ) -> Result<Self, CombineError> {
        let mut builder = WalkBuilder::new(dir);
        builder
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(max_depth)
            .follow_links(options.follow_links)
            .ignore(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !options.exclude_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.exclude_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    CombineError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| CombineError::Walk(format!("Failed to build glob set: {}", e)))?;
            let root = options.root.clone();
            builder.filter_entry(move |entry| {
                let path = entry.path();
                let relative = path.strip_prefix(&root).unwrap_or(path);
                !(matcher.is_match(relative) || matcher.is_match(entry.file_name()))
            });
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, CombineError>> {
        self.inner.map(|result| match result {
            Ok(entry) => Ok(entry.into_path()),
            Err(e) => Err(CombineError::Walk(e.to_string())),
        })
    }
}

/// Returns the extension of a basename: everything from the last `.` onward.
pub(crate) fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Renders `path` relative to `root` with `/` separators.
pub(crate) fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn read_file_content(
    path: &Path,
    binary_detection: BinaryDetection,
) -> Result<String, CombineError> {
    let bytes = fs::read(path).map_err(|e| CombineError::io(path, e))?;
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Err(CombineError::NotText {
            path: path.to_path_buf(),
        });
    }
    String::from_utf8(bytes)
        .map_err(|e| CombineError::io(path, io::Error::new(io::ErrorKind::InvalidData, e)))
}

struct Collector<'a, W: Write> {
    options: &'a CombineOptions,
    out: W,
    output_path: &'a Path,
    output_name: Option<OsString>,
    output_identity: PathBuf,
    files: Vec<ProcessedFile>,
}

impl<W: Write> Collector<'_, W> {
    fn run(&mut self, walker: Walker) -> Result<(), CombineError> {
        for path in walker.into_iter() {
            let path = path?;
            if self.accepts(&path)? {
                self.emit(&path)?;
            }
        }
        Ok(())
    }

    fn accepts(&self, path: &Path) -> Result<bool, CombineError> {
        if !path.is_file() {
            return Ok(false);
        }
        let Some(name) = path.file_name() else {
            return Ok(false);
        };
        let name_str = name.to_string_lossy();
        let ext_matches = extension_of(&name_str)
            .is_some_and(|ext| self.options.extensions.iter().any(|e| e == ext));
        if !ext_matches {
            return Ok(false);
        }
        if self.options.ignore_names.iter().any(|n| n.as_str() == name_str.as_ref()) {
            #[cfg(feature = "logging")]
            tracing::debug!("Ignoring {}", path.display());
            return Ok(false);
        }
        if self.output_name.as_deref() == Some(name) {
            let identity = fs::canonicalize(path).map_err(|e| CombineError::io(path, e))?;
            if identity == self.output_identity {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping the output file itself: {}", path.display());
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn emit(&mut self, path: &Path) -> Result<(), CombineError> {
        let content = read_file_content(path, self.options.binary_detection)?;
        let relative = relative_display(&self.options.root, path);
        #[cfg(feature = "logging")]
        tracing::debug!("Adding {} ({} bytes)", relative, content.len());
        write_block(&mut self.out, &relative, &content)
            .map_err(|e| CombineError::io(self.output_path, e))?;
        self.files.push(ProcessedFile {
            path: relative,
            bytes: content.len() as u64,
        });
        Ok(())
    }
}

/// Concatenates every matching file into the output artifact.
///
/// The source subdirectory is walked recursively first, then the top level of
/// `root` is scanned without descending. Each accepted file becomes one
/// Start/End block; a manifest of the emitted relative paths closes the
/// artifact. The output is truncated up front and the run stops at the first
/// file that cannot be read as UTF-8 text.
///
/// A file reachable from both walks is emitted twice.
pub fn combine(options: CombineOptions) -> Result<CombineSummary, CombineError> {
    options.validate()?;
    let output_path = options.resolved_output_path();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Combining under {} into {}",
        options.root.display(),
        output_path.display()
    );
    let file = File::create(&output_path).map_err(|e| CombineError::io(&output_path, e))?;
    let output_identity =
        fs::canonicalize(&output_path).map_err(|e| CombineError::io(&output_path, e))?;
    let mut collector = Collector {
        options: &options,
        out: BufWriter::new(file),
        output_path: &output_path,
        output_name: output_path.file_name().map(|n| n.to_os_string()),
        output_identity,
        files: Vec::new(),
    };

    let source_root = options.root.join(&options.source_subdir);
    if source_root.is_dir() {
        collector.run(Walker::new(&source_root, options.max_depth, &options)?)?;
    } else {
        #[cfg(feature = "logging")]
        tracing::debug!("No source directory at {}", source_root.display());
    }
    collector.run(Walker::new(&options.root, Some(1), &options)?)?;

    let paths: Vec<&str> = collector.files.iter().map(|f| f.path.as_str()).collect();
    write_manifest(&mut collector.out, &paths)
        .and_then(|_| collector.out.flush())
        .map_err(|e| CombineError::io(&output_path, e))?;

    let files = std::mem::take(&mut collector.files);
    drop(collector);
    #[cfg(feature = "logging")]
    tracing::info!("Combined {} files into {}", files.len(), output_path.display());
    Ok(CombineSummary {
        output_path,
        extensions: options.extensions,
        files,
    })
}
