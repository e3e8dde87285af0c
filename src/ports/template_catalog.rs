/// A template file shipped with the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name inside the overlay template directory.
    pub name: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Port for the starter overlay template set.
pub trait TemplateCatalog {
    /// All starter templates, sorted by name.
    fn starter_templates(&self) -> Vec<TemplateFile>;
}
