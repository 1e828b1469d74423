//! WiziShop API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the WiziShop API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WiziShop API version.
///
/// The version is the first path segment after the API root
/// (`https://api.wizishop.com/v2/...`). `V2` is the version this SDK
/// targets; `Custom` lets callers point at a newer or older path segment.
///
/// # Example
///
/// ```rust
/// use wizishop_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "v2");
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom("v3".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    V2,
    /// Any other `v<number>` path segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns the API version this SDK was written against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns the URL path segment for this version.
    #[must_use]
    pub fn as_path_segment(&self) -> &str {
        match self {
            Self::V2 => "v2",
            Self::Custom(version) => version,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        let is_valid = normalized
            .strip_prefix('v')
            .is_some_and(|number| !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()));

        if !is_valid {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }

        if normalized == "v2" {
            Ok(Self::V2)
        } else {
            Ok(Self::Custom(normalized))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v2() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V2);
        assert_eq!(ApiVersion::default(), ApiVersion::V2);
    }

    #[test]
    fn test_parse_known_version() {
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!(" V2 ".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_parse_custom_version() {
        let version: ApiVersion = "v3".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v3".to_string()));
        assert_eq!(version.as_path_segment(), "v3");
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for input in ["", "v", "2", "version2", "v2.1", "2024-10"] {
            let result = input.parse::<ApiVersion>();
            assert!(
                matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(format!("{}", ApiVersion::V2), "v2");
    }
}
