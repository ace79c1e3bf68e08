//! Rupa Configuration
//!
//! Defines recording limits for the Rupa core.
//! Configuration specifies constraints only; enforcement is handled by the
//! event recorder.

/// Core configuration
#[derive(Debug, Clone)]
pub struct RupaConfig {
    /// Maximum number of buffered events
    pub max_events: usize,

    /// Maximum length of an emitted message, in bytes
    pub max_message_len: usize,
}

impl Default for RupaConfig {
    fn default() -> Self {
        RupaConfig {
            max_events: 1024,
            max_message_len: 256,
        }
    }
}

impl RupaConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
