//! # Combinecat
//!
//! `combinecat` concatenates the source files of a project into a single text file,
//! each file wrapped in `--- Start of <path> ---` / `--- End of <path> ---` markers
//! and followed by a manifest of every path that was included. The result can be pasted
//! into an AI assistant that cannot read a filesystem on its own.
//!
//! Two roots are scanned: a source subdirectory (`src` by default), recursively, and the
//! top level of the working directory, without descending.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use combinecat::{CombineBuilder, combine};
//!
//! let options = CombineBuilder::new(".")
//!     .extensions([".rs", ".toml"])
//!     .add_ignore_name("Cargo.lock")
//!     .output_path("combined_file.txt")
//!     .build();
//!
//! let summary = combine(options).expect("Failed to combine files");
//!
//! for file in &summary.files {
//!     println!("{} ({} bytes)", file.path, file.bytes);
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::combine;
pub use error::CombineError;
pub use options::{
    BinaryDetection, CombineBuilder, CombineOptions, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_NAMES,
    DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_SUBDIR, normalize_extension,
};
pub use types::{CombineSummary, ProcessedFile};
