//! BigCommerce API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// BigCommerce API version.
///
/// The REST API exposes two versions side by side: `v3` for the current
/// resource endpoints and `v2` for the older surface, including the legacy
/// collection API. Both versions are addressed through the same
/// `stores/{hash}/{version}` path scheme.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(format!("{}", version), "v3");
/// assert_eq!(ApiVersion::latest(), ApiVersion::V3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2, the older resource surface.
    V2,
    /// API version 3, the current surface.
    #[default]
    V3,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` if the legacy collection API accepts this version.
    ///
    /// The collection API predates v3 and is incompatible with it.
    #[must_use]
    pub const fn supports_collection_api(&self) -> bool {
        matches!(self, Self::V2)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::V3 => f.write_str("v3"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            other => Err(ConfigError::InvalidApiVersion {
                version: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!("v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
        assert_eq!("V3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("v1".parse::<ApiVersion>().is_err());
        assert!("3".parse::<ApiVersion>().is_err());
        assert!("".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(format!("{}", ApiVersion::V2), "v2");
        assert_eq!(format!("{}", ApiVersion::V3), "v3");
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
        assert_eq!(ApiVersion::latest(), ApiVersion::V3);
    }

    #[test]
    fn test_collection_api_support() {
        assert!(ApiVersion::V2.supports_collection_api());
        assert!(!ApiVersion::V3.supports_collection_api());
    }
}
