//! The intent tag: which backend skill handles a message.

use serde::{Deserialize, Serialize};

/// The classified purpose of a user message.
///
/// Each intent maps to exactly one backend skill endpoint. `Generate` is the
/// default and handles anything the classifier finds no stronger evidence for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// General text generation (default chat).
    #[default]
    Generate,
    /// Storytelling in the traditional Tamil style.
    Story,
    /// Tamil culture, traditions, and festivals.
    Culture,
    /// Tamil grammar help.
    Grammar,
    /// Open step-by-step explanation.
    Explain,
}

impl Intent {
    /// All intents, in classifier priority order (strongest evidence first).
    ///
    /// `Generate` is absent: it is the fallback, not an evidence class.
    pub const PRIORITY: [Self; 4] = [Self::Story, Self::Culture, Self::Grammar, Self::Explain];

    /// The wire name sent in the request `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Story => "story",
            Self::Culture => "culture",
            Self::Grammar => "grammar",
            Self::Explain => "explain",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Self::Generate),
            "story" => Ok(Self::Story),
            "culture" => Ok(Self::Culture),
            "grammar" => Ok(Self::Grammar),
            "explain" => Ok(Self::Explain),
            _ => Err(format!("invalid intent: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_generate() {
        assert_eq!(Intent::default(), Intent::Generate);
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for intent in [
            Intent::Generate,
            Intent::Story,
            Intent::Culture,
            Intent::Grammar,
            Intent::Explain,
        ] {
            let parsed: Intent = intent.to_string().parse().expect("round trip");
            assert_eq!(parsed, intent);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("poetry".parse::<Intent>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&Intent::Story).expect("serialize"),
            "\"story\""
        );
        let parsed: Intent = serde_json::from_str("\"culture\"").expect("deserialize");
        assert_eq!(parsed, Intent::Culture);
    }

    #[test]
    fn test_priority_excludes_generate() {
        assert!(!Intent::PRIORITY.contains(&Intent::Generate));
        assert_eq!(Intent::PRIORITY.len(), 4);
    }
}
