//! The yes/no answer to the opening question.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Answer to the opening question.
///
/// Serialized as `"Yes"`, `"No"`, or `null` while unanswered, matching the
/// payload the questionnaire has always exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValentineResponse {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl FromStr for ValentineResponse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(ValentineResponse::Yes),
            "no" | "n" => Ok(ValentineResponse::No),
            "" | "unanswered" => Ok(ValentineResponse::Unanswered),
            _ => Err(format!("Invalid valentine response: {s}")),
        }
    }
}

impl ValentineResponse {
    /// Canonical string form, as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValentineResponse::Yes => "Yes",
            ValentineResponse::No => "No",
            ValentineResponse::Unanswered => "Unanswered",
        }
    }

    /// Human-facing label; unanswered reads as "Not answered".
    pub fn label(&self) -> &'static str {
        match self {
            ValentineResponse::Unanswered => "Not answered",
            other => other.as_str(),
        }
    }
}

impl Serialize for ValentineResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValentineResponse::Unanswered => serializer.serialize_none(),
            answered => serializer.serialize_str(answered.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for ValentineResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(ValentineResponse::Unanswered),
            Some(value) => value.parse().map_err(serde::de::Error::custom),
        }
    }
}
