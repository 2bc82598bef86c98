use std::fmt;
use std::str::FromStr;

/// How a build reacts to a reference it cannot resolve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[serde(try_from = "String")]
pub enum ReportingSeverity {
    Ignore,
    Warn,
    Throw,
}

impl ReportingSeverity {
    pub const VARIANTS: [&'static str; 3] = ["ignore", "warn", "throw"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }
}

impl fmt::Display for ReportingSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown severity `{value}`, expected one of: {expected}",
    value = self.0,
    expected = ReportingSeverity::VARIANTS.join(", ")
)]
pub struct UnknownSeverity(String);

impl FromStr for ReportingSeverity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "throw" => Ok(Self::Throw),
            other => Err(UnknownSeverity(other.to_owned())),
        }
    }
}

impl TryFrom<String> for ReportingSeverity {
    type Error = UnknownSeverity;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_known_levels() {
        for name in ReportingSeverity::VARIANTS {
            let severity: ReportingSeverity = name.parse().unwrap();
            assert_eq!(severity.as_str(), name);
        }
    }

    #[test]
    fn unknown_level_lists_every_variant() {
        let message = "loud".parse::<ReportingSeverity>().unwrap_err().to_string();
        let (_, expected) = message.split_once("expected one of: ").unwrap();
        assert_eq!(
            expected.split(", ").collect::<Vec<_>>(),
            ReportingSeverity::VARIANTS
        );
    }

    #[test]
    fn parse_unknown_level() {
        let err = "fail".parse::<ReportingSeverity>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown severity `fail`, expected one of: ignore, warn, throw"
        );
    }

    #[test]
    fn deserialize_rejects_unknown() {
        let result: Result<ReportingSeverity, _> = serde_yaml::from_str("error");
        assert!(result.is_err());
    }

    #[test]
    fn serialize_snake_case() {
        let yaml = serde_yaml::to_string(&ReportingSeverity::Throw).unwrap();
        assert_eq!(yaml.trim(), "throw");
    }
}
