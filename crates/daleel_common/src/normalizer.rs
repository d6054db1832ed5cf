//! Arabic text normalization.
//!
//! Both the stored patterns and the live input go through the same
//! transform before any comparison, so `normalize` must be idempotent.
//!
//! Rules run in a fixed order, each on the output of the previous one:
//! 1. hamza-carrying alef variants -> bare alef
//! 2. alef maqsura -> ya
//! 3. ta marbuta -> ha
//! 4. hamza on waw -> waw, hamza on ya -> ya
//! 5. strip tashkeel, superscript alef and tatweel
//! 6. collapse whitespace runs
//!
//! then trim and lower-case (Latin fragments mixed into Arabic input).

use regex::Regex;
use std::sync::LazyLock;

/// One ordered rewrite step.
pub struct NormalizationRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl NormalizationRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Option<Self> {
        Regex::new(pattern).ok().map(|pattern| Self {
            name,
            pattern,
            replacement,
        })
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

static NORMALIZATION_RULES: LazyLock<Vec<NormalizationRule>> = LazyLock::new(|| {
    let rules: [(&str, &str, &str); 7] = [
        ("alef", "[أإآا]", "ا"),
        ("alef_maqsura", "ى", "ي"),
        ("ta_marbuta", "ة", "ه"),
        ("hamza_waw", "ؤ", "و"),
        ("hamza_ya", "ئ", "ي"),
        ("diacritics", r"[\x{064B}-\x{0652}\x{0670}\x{0640}]", ""),
        ("whitespace", r"\s+", " "),
    ];

    rules
        .into_iter()
        .filter_map(|(name, pattern, replacement)| NormalizationRule::new(name, pattern, replacement))
        .collect()
});

/// Canonicalizes Arabic text for substring matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Ordered rule table.
    pub fn rules(&self) -> &'static [NormalizationRule] {
        &NORMALIZATION_RULES
    }

    /// Normalize one string. Empty input yields empty output.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut current = text.to_string();
        for rule in self.rules() {
            current = rule.apply(&current);
        }

        current.trim().to_lowercase()
    }

    /// Normalize every element, preserving order.
    pub fn normalize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}

/// Shorthand for `Normalizer::new().normalize(text)`.
pub fn normalize(text: &str) -> String {
    Normalizer.normalize(text)
}

/// Number of whitespace-separated words in already-normalized text.
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}
