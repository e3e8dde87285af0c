pub mod assets;
pub mod filesystem;
pub mod process_environment;

pub use assets::EmbeddedOverlayTemplates;
pub use filesystem::FilesystemStore;
pub use process_environment::ProcessEnvironment;
