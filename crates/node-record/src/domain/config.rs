//! ENR configuration.

/// Hard ceiling on the encoded size of a record (bytes).
pub const MAX_RECORD_SIZE: usize = 300;

/// ENR configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct EnrConfig {
    /// Maximum size of an ENR record (bytes), capped at [`MAX_RECORD_SIZE`]
    pub max_record_size: usize,
}

impl Default for EnrConfig {
    fn default() -> Self {
        Self {
            max_record_size: MAX_RECORD_SIZE,
        }
    }
}

impl EnrConfig {
    /// Size limit actually enforced. Configuration can tighten the wire
    /// bound but never loosen it.
    pub fn record_size_limit(&self) -> usize {
        self.max_record_size.min(MAX_RECORD_SIZE)
    }

    /// Parse a configuration from TOML.
    ///
    /// ```toml
    /// max_record_size = 256
    /// ```
    #[cfg(feature = "config")]
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
