use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::render::{substitute, unresolved_placeholders};
use crate::domain::{AppError, OnboardingConfig};
use crate::ports::RepositoryFilesystem;

/// Render `source` with `config` into `dest_dir/dest_name`.
///
/// The destination is created or truncated. Returns the written path.
pub fn render_template<F: RepositoryFilesystem>(
    fs: &F,
    source: &Path,
    dest_dir: &Path,
    dest_name: &str,
    config: &OnboardingConfig,
) -> Result<PathBuf, AppError> {
    info!(source = %source.display(), dest = dest_name, "Processing template");

    let content = fs.read_file(source).map_err(|err| missing_template(source, err))?;
    let rendered = substitute(&content, config);

    for token in unresolved_placeholders(&rendered) {
        warn!(template = %source.display(), token = %token, "Unresolved placeholder left in output");
    }

    let dest = dest_dir.join(dest_name);
    fs.write_file(&dest, &rendered)?;
    info!(path = %dest.display(), "Wrote rendered file");
    Ok(dest)
}

fn missing_template(source: &Path, err: AppError) -> AppError {
    match err {
        AppError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            AppError::TemplateNotFound(source.display().to_string())
        }
        other => other,
    }
}
