/// Output flavour for a generated locale table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Packed little-endian table, prefixed with an 8 byte name
    #[default]
    Binary,
    /// C source with `static const` arrays
    C,
    /// The parsed charmap model as JSON
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Turn recoverable oddities (duplicate names, unknown keywords,
    /// non-POSIX escape widths) into errors instead of warnings.
    pub strict: bool,
    /// Check that every character of the POSIX portable character set
    /// is defined.
    pub require_portable: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
