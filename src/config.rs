/// Output options shared by every annotated document.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Replaces the hex marker of every architecture, e.g. `0x`. Display only.
    pub override_hex_notation: Option<String>,
    /// Shows postfixed hex literals with the marker in front.
    pub override_hex_postfix: bool,
    pub capitalize_hex: bool,
    /// Capitalizes size suffixes attached to hex literals (`$10.w` -> `$10.W`).
    pub capitalize_hex_sizes: bool,
    /// Shown in the comment column in place of the comment text.
    pub comment_glyph: String,
    pub add_arch_caption: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            override_hex_notation: None,
            override_hex_postfix: false,
            capitalize_hex: false,
            capitalize_hex_sizes: true,
            comment_glyph: "//".to_owned(),
            add_arch_caption: true,
        }
    }
}
