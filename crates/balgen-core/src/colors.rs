//! ANSI color codes for generated source shown in a terminal.
//!
//! Three roles plus reset:
//! - Name: declared type names
//! - Keyword: Ballerina keywords, qualifiers and punctuation
//! - Builtin: primitive type keywords and the base service reference

/// ANSI palette for rendered declarations.
///
/// Uses only standard 16-color ANSI codes so output reads in light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub name: &'static str,
    pub keyword: &'static str,
    pub builtin: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        keyword: "\x1b[2m",
        builtin: "\x1b[32m",
        reset: "\x1b[0m",
    };

    /// Empty strings everywhere; rendering is byte-identical to uncolored text.
    pub const OFF: Self = Self {
        name: "",
        keyword: "",
        builtin: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in the keyword color.
    pub fn keyword(&self, text: &str) -> String {
        format!("{}{}{}", self.keyword, text, self.reset)
    }

    /// Wrap `text` in the name color.
    pub fn name(&self, text: &str) -> String {
        format!("{}{}{}", self.name, text, self.reset)
    }

    /// Wrap `text` in the builtin color.
    pub fn builtin(&self, text: &str) -> String {
        format!("{}{}{}", self.builtin, text, self.reset)
    }
}
