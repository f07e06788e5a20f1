//! Rendered vendor output.

/// A complete output document plus the metadata a writer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDocument {
    /// Exact bytes to persist.
    pub content: Vec<u8>,
    /// Suggested file name, e.g. `17633_Stephens.txt`.
    pub file_name: String,
    /// File extension without the dot.
    pub extension: &'static str,
    /// MIME type hint.
    pub media_type: &'static str,
}

impl VendorDocument {
    /// Content as UTF-8 text.
    ///
    /// Every encoder emits UTF-8, so this only fails for documents built by hand.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
