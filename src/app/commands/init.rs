use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::paths::is_yaml_file;
use crate::ports::{RepositoryFilesystem, TemplateCatalog};

/// Execute the init command.
///
/// Installs the starter overlay templates into the template directory and
/// returns the written file names. Refuses to touch a directory that already
/// holds YAML templates.
pub fn execute<F, T>(ctx: &AppContext<F, T>) -> Result<Vec<String>, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateCatalog,
{
    let dir = &ctx.settings().overlay_dir;

    if ctx.fs().is_dir(dir) && ctx.fs().list_file_names(dir)?.iter().any(|n| is_yaml_file(n)) {
        return Err(AppError::TemplatesExist(dir.display().to_string()));
    }

    ctx.fs().create_dir_all(dir)?;

    let files = ctx.templates().starter_templates();
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        ctx.fs().write_file(&dir.join(&file.name), &file.content)?;
        info!(file = %file.name, "Installed starter template");
        written.push(file.name);
    }

    Ok(written)
}
