use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenApiVersion {
    V30x,
    V31x,
}

impl FromStr for OpenApiVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("3.1.") {
            Ok(OpenApiVersion::V31x)
        } else if s.starts_with("3.0.") {
            Ok(OpenApiVersion::V30x)
        } else {
            Err(VersionError::unsupported_version(s))
        }
    }
}

impl OpenApiVersion {
    /// Documents are modelled after 3.1; 3.0 documents parse but are not
    /// considered valid output of this crate.
    pub fn is_supported(&self) -> bool {
        matches!(self, OpenApiVersion::V31x)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VersionError {
    UnsupportedVersion(String),
}

impl VersionError {
    pub(crate) fn unsupported_version<T>(version: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        VersionError::UnsupportedVersion(version.to_string())
    }
}

impl Display for VersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionError::UnsupportedVersion(version) => {
                write!(f, "Unsupported version: {}", version)
            }
        }
    }
}

impl std::error::Error for VersionError {}

#[cfg(test)]
mod tests {
    use crate::types::version::{OpenApiVersion, VersionError};
    use std::str::FromStr;

    #[test]
    fn test_parse_versions() {
        assert_eq!(OpenApiVersion::from_str("3.1.0"), Ok(OpenApiVersion::V31x));
        assert_eq!(OpenApiVersion::from_str("3.1.1"), Ok(OpenApiVersion::V31x));
        assert_eq!(OpenApiVersion::from_str("3.0.3"), Ok(OpenApiVersion::V30x));
        assert!(OpenApiVersion::V31x.is_supported());
        assert!(!OpenApiVersion::V30x.is_supported());
    }

    #[test]
    fn test_unsupported_version() {
        let err = OpenApiVersion::from_str("2.0").unwrap_err();
        assert_eq!(err, VersionError::UnsupportedVersion("2.0".to_string()));
        assert_eq!(err.to_string(), "Unsupported version: 2.0");
    }
}
