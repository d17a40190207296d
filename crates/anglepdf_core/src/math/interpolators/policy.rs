//! Out-of-domain handling for table lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when a query falls outside the interpolation domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtrapolationPolicy {
    /// Evaluate at the nearest domain endpoint.
    #[default]
    Clamp,
    /// Report `OutOfBounds`.
    Error,
    /// Extend the first or last segment linearly.
    Extrapolate,
}

impl ExtrapolationPolicy {
    /// Lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtrapolationPolicy::Clamp => "clamp",
            ExtrapolationPolicy::Error => "error",
            ExtrapolationPolicy::Extrapolate => "extrapolate",
        }
    }
}

impl fmt::Display for ExtrapolationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtrapolationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(ExtrapolationPolicy::Clamp),
            "error" => Ok(ExtrapolationPolicy::Error),
            "extrapolate" => Ok(ExtrapolationPolicy::Extrapolate),
            _ => Err(format!(
                "unknown extrapolation policy '{}': expected clamp, error or extrapolate",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clamp() {
        assert_eq!(ExtrapolationPolicy::default(), ExtrapolationPolicy::Clamp);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Extrapolate".parse::<ExtrapolationPolicy>().unwrap(),
            ExtrapolationPolicy::Extrapolate
        );
        assert_eq!("ERROR".parse::<ExtrapolationPolicy>().unwrap(), ExtrapolationPolicy::Error);
        assert!("nearest".parse::<ExtrapolationPolicy>().is_err());
    }
}
