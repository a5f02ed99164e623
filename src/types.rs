use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One file that was written into the output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedFile {
    /// Path relative to the run's root, `/`-separated, exactly as it appears
    /// in the markers and the manifest.
    pub path: String,
    /// Number of content bytes copied between the markers.
    pub bytes: u64,
}

/// The outcome of a completed combine run.
#[derive(Debug, Serialize, Deserialize)]
pub struct CombineSummary {
    /// Where the combined text was written.
    pub output_path: PathBuf,
    /// The effective extension filter.
    pub extensions: Vec<String>,
    /// Processed files in emission order. Same order as the manifest; a file
    /// reached through both roots is listed twice.
    pub files: Vec<ProcessedFile>,
}
