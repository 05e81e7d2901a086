//! The three fixed MEA process domains.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the three fixed process groupings being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessDomain {
    Mea01,
    Mea02,
    Mea03,
}

impl ProcessDomain {
    /// All domains in catalog order.
    pub const ALL: [ProcessDomain; 3] = [
        ProcessDomain::Mea01,
        ProcessDomain::Mea02,
        ProcessDomain::Mea03,
    ];

    /// Returns the short framework code, e.g. "MEA01".
    pub fn code(&self) -> &'static str {
        match self {
            ProcessDomain::Mea01 => "MEA01",
            ProcessDomain::Mea02 => "MEA02",
            ProcessDomain::Mea03 => "MEA03",
        }
    }

    /// Returns the full display name of the domain.
    pub fn name(&self) -> &'static str {
        match self {
            ProcessDomain::Mea01 => "Monitor, Evaluate and Assess Performance and Conformance",
            ProcessDomain::Mea02 => "Monitor, Evaluate and Assess the System of Internal Control",
            ProcessDomain::Mea03 => {
                "Monitor, Evaluate and Assess Conformance with External Requirements"
            }
        }
    }

    /// Parses a framework code such as "MEA01".
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "MEA01" => Ok(ProcessDomain::Mea01),
            "MEA02" => Ok(ProcessDomain::Mea02),
            "MEA03" => Ok(ProcessDomain::Mea03),
            other => Err(ValidationError::invalid_format(
                "domain",
                format!("unknown domain code '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ProcessDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_domains_in_catalog_order() {
        assert_eq!(
            ProcessDomain::ALL,
            [
                ProcessDomain::Mea01,
                ProcessDomain::Mea02,
                ProcessDomain::Mea03
            ]
        );
    }

    #[test]
    fn code_roundtrips_through_from_code() {
        for domain in ProcessDomain::ALL {
            assert_eq!(ProcessDomain::from_code(domain.code()).unwrap(), domain);
        }
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        assert!(ProcessDomain::from_code("APO01").is_err());
        assert!(ProcessDomain::from_code("").is_err());
    }

    #[test]
    fn serializes_as_uppercase_code() {
        let json = serde_json::to_string(&ProcessDomain::Mea02).unwrap();
        assert_eq!(json, "\"MEA02\"");
    }

    #[test]
    fn deserializes_from_uppercase_code() {
        let domain: ProcessDomain = serde_json::from_str("\"MEA03\"").unwrap();
        assert_eq!(domain, ProcessDomain::Mea03);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(format!("{}", ProcessDomain::Mea01), "MEA01");
    }

    #[test]
    fn name_returns_full_title() {
        assert!(ProcessDomain::Mea02.name().contains("Internal Control"));
    }
}
