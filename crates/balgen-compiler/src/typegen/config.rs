//! Configuration for declaration generation.

use balgen_core::Colors;

/// Configuration for generation.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Emit record-eligible object types as records instead of service classes
    pub(crate) records_forced: bool,
    /// Color configuration for rendered output
    pub(crate) colors: Colors,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether record-eligible object types become records.
    pub fn records_forced(mut self, value: bool) -> Self {
        self.records_forced = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }
}
