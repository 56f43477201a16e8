//! Static keyword evidence tables.
//!
//! Trigger substrings per skill, in Tamil script, English, and Tanglish
//! (romanized Tamil). Matching is case-insensitive substring containment, so
//! every entry is stored lowercased. Tamil has no letter case and passes
//! through lowercasing unchanged.

use vanakkam_core::Intent;

/// Evidence for a story request.
pub(super) const STORY_KEYWORDS: &[&str] = &[
    "கதை",
    "story",
    "kathai",
    "சொல்லு",
    "tell me a story",
    "ஒரு கதை",
    "கேட்க விரும்புகிறேன்",
];

/// Evidence for a culture question.
pub(super) const CULTURE_KEYWORDS: &[&str] = &[
    "கலாச்சார",
    "culture",
    "பண்பாடு",
    "பாரம்பரியம",
    "tradition",
    "festival",
    "திருவிழா",
    "சடங்கு",
    "ritual",
];

/// Evidence for a grammar question.
pub(super) const GRAMMAR_KEYWORDS: &[&str] = &[
    "இலக்கண",
    "grammar",
    "மொழி",
    "language",
    "எழுத்து",
    "சொல்",
    "வாக்கியம",
    "sentence",
    "தமிழ் கற்க",
];

/// Evidence for an explanation request.
pub(super) const EXPLAIN_KEYWORDS: &[&str] = &[
    "விளக்கு",
    "explain",
    "எப்படி",
    "how",
    "ஏன்",
    "why",
    "என்ன",
    "what",
    "யார்",
    "who",
];

/// The keyword set that is evidence for the given intent.
///
/// `Generate` has no evidence set: it is the fallback.
pub(super) const fn keywords_for(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Story => STORY_KEYWORDS,
        Intent::Culture => CULTURE_KEYWORDS,
        Intent::Grammar => GRAMMAR_KEYWORDS,
        Intent::Explain => EXPLAIN_KEYWORDS,
        Intent::Generate => &[],
    }
}
