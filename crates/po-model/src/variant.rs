//! Color-code variant names used by the Traxxas template.

/// Closed mapping from color-code token to display name.
///
/// Unknown tokens pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantMapping;

const COLOR_CODES: &[(&str, &str)] = &[
    ("RED", "Red"),
    ("GRN", "Green"),
    ("BLU", "Blue"),
    ("BLUE", "Blue"),
    ("YEL", "Yellow"),
    ("BLK", "Black"),
    ("WHT", "White"),
    ("PNK", "Pink"),
    ("PUR", "Purple"),
    ("ORG", "Orange"),
];

impl VariantMapping {
    /// Display name for a recognized token.
    pub fn lookup(token: &str) -> Option<&'static str> {
        COLOR_CODES
            .iter()
            .find(|(code, _)| *code == token)
            .map(|(_, name)| *name)
    }

    /// Display name for the token, or the token itself when unrecognized.
    pub fn display_name(token: &str) -> String {
        Self::lookup(token).map_or_else(|| token.to_string(), str::to_string)
    }
}
