mod starter_overlay;

pub use starter_overlay::EmbeddedOverlayTemplates;
