//! Parsing of `module@version` upgrade requests.

use std::fmt;
use std::str::FromStr;

use crate::error::AuditError;

/// A requested upgrade of one module to a target version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrade {
    /// Module path, e.g. `github.com/pkg/errors`.
    pub module: String,
    /// Version to upgrade to.
    pub new_version: String,
}

impl Upgrade {
    /// Parses `module@version`.
    ///
    /// Both parts are trimmed and must be non-empty; exactly one `@` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MalformedUpgradeSpec`] if the input does not match.
    pub fn parse(spec: &str) -> Result<Self, AuditError> {
        let malformed = || AuditError::MalformedUpgradeSpec { spec: spec.to_string() };

        let mut parts = spec.split('@');
        let (Some(module), Some(version), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let module = module.trim();
        let version = version.trim();
        if module.is_empty() || version.is_empty() {
            return Err(malformed());
        }

        Ok(Self { module: module.to_string(), new_version: version.to_string() })
    }
}

impl FromStr for Upgrade {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Upgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.module, self.new_version)
    }
}
