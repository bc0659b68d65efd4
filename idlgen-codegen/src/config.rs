//! Generator configuration.

use idlgen_schema::NameStylizer;
use idlgen_schema::naming::DEFAULT_PREFIX;

/// Default sub-namespace of generated runtime classes.
pub const DEFAULT_SUBNAMESPACE: &str = "Graphics.Canvas";

/// Settings shared by the load and emission phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Standard prefix of projected type names.
    pub prefix: String,
    /// Namespace segment between `Microsoft.` and the class name in
    /// runtime class identities.
    pub subnamespace: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            subnamespace: DEFAULT_SUBNAMESPACE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the standard prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the runtime class sub-namespace.
    #[must_use]
    pub fn with_subnamespace(mut self, subnamespace: impl Into<String>) -> Self {
        self.subnamespace = subnamespace.into();
        self
    }

    /// Returns the name stylizer for the configured prefix.
    #[must_use]
    pub fn stylizer(&self) -> NameStylizer {
        NameStylizer::new(self.prefix.clone())
    }

    /// Returns the runtime class identity of a projected class.
    #[must_use]
    pub fn runtime_class_name(&self, projected_name: &str) -> String {
        format!("Microsoft.{}.{}", self.subnamespace, projected_name)
    }
}
