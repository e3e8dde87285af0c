use include_dir::{Dir, DirEntry, include_dir};

use crate::ports::{TemplateCatalog, TemplateFile};

static OVERLAY_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/overlay");

/// Starter overlay templates embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedOverlayTemplates;

impl EmbeddedOverlayTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for EmbeddedOverlayTemplates {
    fn starter_templates(&self) -> Vec<TemplateFile> {
        let mut files: Vec<TemplateFile> = OVERLAY_DIR
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                DirEntry::File(file) => {
                    let name = file.path().file_name()?.to_string_lossy().to_string();
                    let content = file.contents_utf8()?.to_string();
                    Some(TemplateFile { name, content })
                }
                DirEntry::Dir(_) => None,
            })
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        files
    }
}
