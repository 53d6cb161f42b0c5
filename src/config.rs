//! Registry configuration

/// Configuration for a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of names to pre-size the registry for
    pub initial_capacity: usize,
    /// Reject empty names and names containing whitespace or control characters
    pub validate_names: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            validate_names: true,
        }
    }
}

impl RegistryConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable name validation
    pub fn with_name_validation(mut self, enabled: bool) -> Self {
        self.validate_names = enabled;
        self
    }

    /// Whether `name` is acceptable under this config.
    pub fn accepts_name(&self, name: &str) -> bool {
        if !self.validate_names {
            return true;
        }
        !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c.is_control())
    }
}
