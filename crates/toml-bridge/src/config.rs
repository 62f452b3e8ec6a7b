//! Encode configuration.

/// Options accepted by `encode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level for table sections. `0` keeps the `toml`
    /// crate's default layout.
    pub indent: usize,
}

impl EncodeOptions {
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }
}
