//! Calculator configuration

use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};

/// Delimiters active on every call, before any header is read
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// How a token that is not a plain decimal integer converts to a number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    /// Convert the leading integer and ignore the rest; no digits means zero
    ///
    /// Only ASCII whitespace is skipped before the sign. Digit separators are
    /// not understood, so `"1_000"` converts to 1.
    #[default]
    Lenient,
    /// Reject anything but a whitespace-padded decimal integer
    Strict,
}

/// Configuration for [`StringCalculator`](crate::StringCalculator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Delimiters used when no header is present (custom delimiter is appended)
    pub delimiters: Vec<String>,
    /// Token conversion policy
    pub token_policy: TokenPolicy,
    /// Whether a leading `//` header may declare a custom delimiter
    pub allow_custom_delimiter: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            token_policy: TokenPolicy::Lenient,
            allow_custom_delimiter: true,
        }
    }
}

impl CalculatorConfig {
    /// Create a strict configuration
    pub fn strict() -> Self {
        Self {
            token_policy: TokenPolicy::Strict,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing keys fall back to their defaults:
    ///
    /// ```toml
    /// delimiters = [",", "\n", ";"]
    /// token_policy = "strict"
    /// allow_custom_delimiter = true
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: CalculatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CalculatorError::Config(e.to_string()))
    }

    /// Check the delimiter set is usable
    pub fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(CalculatorError::Config(
                "at least one delimiter required".to_string(),
            ));
        }
        if self.delimiters.iter().any(String::is_empty) {
            return Err(CalculatorError::Config(
                "delimiters must not be empty strings".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: CalculatorConfig,
}

impl ConfigBuilder {
    /// Replace the default delimiter set
    pub fn delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Append one delimiter to the default set
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiters.push(delimiter.into());
        self
    }

    /// Set the token conversion policy
    pub fn token_policy(mut self, policy: TokenPolicy) -> Self {
        self.config.token_policy = policy;
        self
    }

    /// Enable or disable `//` header parsing
    pub fn allow_custom_delimiter(mut self, allow: bool) -> Self {
        self.config.allow_custom_delimiter = allow;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CalculatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
