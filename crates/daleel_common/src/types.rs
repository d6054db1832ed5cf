//! Closed vocabularies: what the user wants (intent) and what it is about (topic).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of information the user is asking for.
///
/// Declaration order is significant: ties in intent scoring go to the
/// variant declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Treatment,
    Definition,
    Types,
    Symptoms,
    Causes,
    Identification,
    /// No trigger matched. Never carries a trigger list of its own.
    General,
}

impl Intent {
    /// Every intent, in declaration order.
    pub const ALL: [Intent; 7] = [
        Intent::Treatment,
        Intent::Definition,
        Intent::Types,
        Intent::Symptoms,
        Intent::Causes,
        Intent::Identification,
        Intent::General,
    ];

    /// Intents tried, in order, when the topic is known but the intent is not.
    pub const TOPIC_FALLBACK_ORDER: [Intent; 4] = [
        Intent::Treatment,
        Intent::Definition,
        Intent::Types,
        Intent::Symptoms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Treatment => "treatment",
            Self::Definition => "definition",
            Self::Types => "types",
            Self::Symptoms => "symptoms",
            Self::Causes => "causes",
            Self::Identification => "identification",
            Self::General => "general",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Self::General)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| format!("unknown intent: '{}'", s))
    }
}

/// Learning-disability domain a question is about.
///
/// Declaration order is the tie-break order for topic scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Perception,
    Attention,
    Memory,
    Writing,
    Reading,
    Arithmetic,
    LearningDisabilities,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Perception,
        Topic::Attention,
        Topic::Memory,
        Topic::Writing,
        Topic::Reading,
        Topic::Arithmetic,
        Topic::LearningDisabilities,
    ];

    /// Stable key used in resources, config and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perception => "perception",
            Self::Attention => "attention",
            Self::Memory => "memory",
            Self::Writing => "writing",
            Self::Reading => "reading",
            Self::Arithmetic => "arithmetic",
            Self::LearningDisabilities => "learning_disabilities",
        }
    }

    /// Arabic name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Perception => "الإدراك",
            Self::Attention => "الانتباه",
            Self::Memory => "الذاكرة",
            Self::Writing => "الكتابة",
            Self::Reading => "القراءة",
            Self::Arithmetic => "الحساب",
            Self::LearningDisabilities => "صعوبات التعلم",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| format!("unknown topic: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_round_trip_keys() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
        assert!("diagnosis".parse::<Intent>().is_err());
    }

    #[test]
    fn test_topic_keys_and_names() {
        assert_eq!("learning_disabilities".parse::<Topic>().unwrap(), Topic::LearningDisabilities);
        assert_eq!(Topic::Attention.display_name(), "الانتباه");
        assert!("الانتباه".parse::<Topic>().is_err());
    }

    #[test]
    fn test_serde_keys_match_as_str() {
        let json = serde_json::to_string(&Topic::LearningDisabilities).unwrap();
        assert_eq!(json, "\"learning_disabilities\"");
        let intent: Intent = serde_json::from_str("\"identification\"").unwrap();
        assert_eq!(intent, Intent::Identification);
    }

    #[test]
    fn test_general_is_last() {
        assert_eq!(Intent::ALL.last(), Some(&Intent::General));
        assert!(!Intent::TOPIC_FALLBACK_ORDER.contains(&Intent::General));
    }
}
