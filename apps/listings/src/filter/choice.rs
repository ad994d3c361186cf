use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::ALL;

/// Selection on a single-select dimension.
///
/// The literal `"All"` parses to `Choice::All`; every other string, including
/// the empty string, is a concrete value that must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn only(value: impl Into<String>) -> Self {
        Choice::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(value) => value,
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        if value == ALL {
            Choice::All
        } else {
            Choice::only(value)
        }
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        if value == ALL {
            Choice::All
        } else {
            Choice::only(value)
        }
    }
}

impl std::str::FromStr for Choice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Choice::from(s))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Choice::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_literal_parses_to_sentinel() {
        assert_eq!(Choice::from("All"), Choice::All);
        assert!("All".parse::<Choice>().unwrap().is_all());
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        assert_eq!(Choice::from("all"), Choice::only("all"));
    }

    #[test]
    fn test_empty_string_is_a_concrete_value() {
        assert_eq!(Choice::from(""), Choice::only(""));
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        assert_eq!(serde_json::to_string(&Choice::All).unwrap(), r#""All""#);
        let parsed: Choice = serde_json::from_str(r#""Remote""#).unwrap();
        assert_eq!(parsed, Choice::only("Remote"));
        assert_eq!(parsed.to_string(), "Remote");
    }
}
