use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Aggregation strategy applied to a day's quotes
///
/// - `Low`: highest buy and sell (least risk for the client)
/// - `Medium`: average of each side
/// - `High`: lowest buy and sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Profile {
    Low,
    Medium,
    High,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Low, Profile::Medium, Profile::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Low => "LOW",
            Profile::Medium => "MEDIUM",
            Profile::High => "HIGH",
        }
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    /// Tags are matched exactly; `low` is not a valid tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Profile::Low),
            "MEDIUM" => Ok(Profile::Medium),
            "HIGH" => Ok(Profile::High),
            other => Err(DomainError::InvalidProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for profile in Profile::ALL {
            assert_eq!(profile.as_str().parse::<Profile>(), Ok(profile));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "low".parse::<Profile>(),
            Err(DomainError::InvalidProfile("low".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for tag in ["EXTREME", "", " LOW", "MEDIUM "] {
            assert!(matches!(
                tag.parse::<Profile>(),
                Err(DomainError::InvalidProfile(_))
            ));
        }
    }

    #[test]
    fn test_serde_uses_upper_case() {
        assert_eq!(
            serde_json::to_string(&Profile::Medium).unwrap(),
            "\"MEDIUM\""
        );
        let parsed: Profile = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Profile::High);
    }
}
