//! File writer tool for persisting reports and analysis output

use serde::Deserialize;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::constants::{DEFAULT_OUTPUT_DIR, PROJECT_ROOT_MARKER};
use crate::error::AppError;

/// Default directory for written files
fn default_directory() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileWriterInput {
    /// Name of the file to write (including extension)
    pub filename: String,
    /// Content to write to the file
    pub content: String,
    /// Directory to save the file in
    #[serde(default = "default_directory")]
    pub directory: String,
}

/// Writes text content to a resolved output directory. Useful for saving
/// analysis reports, team selections, and other outputs.
///
/// Like the search tools, filesystem failures degrade to a descriptive error
/// string rather than aborting the surrounding plan; only invalid input is a
/// hard error.
pub struct FileWriterTool;

impl FileWriterTool {
    pub fn name(&self) -> &'static str {
        "file_writer"
    }

    pub fn description(&self) -> &'static str {
        "Write content to a file in the specified directory. Useful for saving analysis \
         reports, team selections, and other outputs."
    }

    /// Validates raw arguments and writes the file.
    pub async fn run(&self, args: Value) -> Result<String, AppError> {
        let input: FileWriterInput = serde_json::from_value(args)
            .map_err(|e| AppError::tool_input(self.name(), e.to_string()))?;
        Ok(self.run_input(&input).await)
    }

    /// Writes the file, converting any filesystem error to a message string.
    pub async fn run_input(&self, input: &FileWriterInput) -> String {
        match self.try_write(input).await {
            Ok(path) => {
                info!("Wrote {} bytes to {}", input.content.len(), path.display());
                format!("Successfully wrote content to {}", path.display())
            }
            Err(e) => {
                warn!("File write failed for {}: {e}", input.filename);
                format!("Error writing to file {}: {e}", input.filename)
            }
        }
    }

    async fn try_write(&self, input: &FileWriterInput) -> Result<PathBuf, AppError> {
        let cwd = std::env::current_dir()?;
        // Joining an absolute directory replaces the base, so callers may
        // pass either a project-relative or an absolute target.
        let output_dir = project_root(&cwd).join(&input.directory);

        if !output_dir.exists() {
            fs::create_dir_all(&output_dir).await?;
        }

        let file_path = output_dir.join(&input.filename);
        fs::write(&file_path, &input.content).await?;

        Ok(file_path)
    }
}

/// Resolves the project root from a working directory. If the path contains
/// the project marker segment, it is truncated to the first occurrence of
/// that segment (ascending to the project root); otherwise the working
/// directory is used as-is.
fn project_root(cwd: &Path) -> PathBuf {
    let components: Vec<Component> = cwd.components().collect();
    match components
        .iter()
        .position(|c| c.as_os_str() == PROJECT_ROOT_MARKER)
    {
        Some(index) => components[..=index].iter().collect(),
        None => cwd.to_path_buf(),
    }
}
