// Writing the CSV artifact to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineError;
use crate::present::Artifact;

/// Write `artifact` into `dir` under its own file name, creating the
/// directory if needed. Returns the full path written.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf, PipelineError> {
    std::fs::create_dir_all(dir).map_err(|e| PipelineError::Export {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(artifact.file_name);
    std::fs::write(&path, &artifact.bytes).map_err(|e| PipelineError::Export {
        path: path.clone(),
        source: e,
    })?;

    info!(
        "wrote {} ({} bytes, {})",
        path.display(),
        artifact.bytes.len(),
        artifact.content_type
    );
    Ok(path)
}
