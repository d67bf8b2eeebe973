//! Configuration
//!
//! Controller configuration with environment-variable overrides. The
//! core has no config file; the host process layers its own CLI on top.

/// Text shown before any content has arrived.
pub const DEFAULT_PLACEHOLDER: &str = "Floater Ready";

/// Default capacity of the update-event channel.
const DEFAULT_EVENT_CAPACITY: usize = 32;

/// Display controller configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloaterConfig {
    /// Placeholder text shown until the fetch or an event supplies
    /// content.
    pub placeholder: String,
    /// Capacity of the update-event channel handed to the host.
    pub event_capacity: usize,
}

impl Default for FloaterConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl FloaterConfig {
    /// Create configuration from environment variables.
    ///
    /// - `FLOATER_PLACEHOLDER`: placeholder text
    /// - `FLOATER_EVENT_CAPACITY`: event channel capacity (positive integer)
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            placeholder: std::env::var("FLOATER_PLACEHOLDER")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER.to_string()),
            event_capacity: std::env::var("FLOATER_EVENT_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&capacity| capacity > 0)
                .unwrap_or(DEFAULT_EVENT_CAPACITY),
        }
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
