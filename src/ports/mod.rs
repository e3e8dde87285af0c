mod environment;
mod repository_filesystem;
mod template_catalog;

pub use environment::EnvironmentSource;
pub use repository_filesystem::RepositoryFilesystem;
pub use template_catalog::{TemplateCatalog, TemplateFile};
