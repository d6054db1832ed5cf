//! Trigger phrases for intents and keyword sets for topics.
//!
//! Phrases are stored raw (with hamzas, ta marbuta, dialect spellings) and
//! normalized once when a classifier is built. Near-duplicates that collapse
//! to the same normalized form are kept; each copy scores.

use crate::types::{Intent, Topic};

/// Intent trigger phrases and topic keyword sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub intent_patterns: Vec<(Intent, Vec<String>)>,
    pub topic_keywords: Vec<(Topic, Vec<String>)>,
}

impl Lexicon {
    pub fn new(
        intent_patterns: Vec<(Intent, Vec<String>)>,
        topic_keywords: Vec<(Topic, Vec<String>)>,
    ) -> Self {
        Self {
            intent_patterns,
            topic_keywords,
        }
    }

    /// Build from static string tables.
    pub fn from_static(
        intent_patterns: &[(Intent, &[&str])],
        topic_keywords: &[(Topic, &[&str])],
    ) -> Self {
        Self {
            intent_patterns: intent_patterns
                .iter()
                .map(|(intent, phrases)| (*intent, owned(phrases)))
                .collect(),
            topic_keywords: topic_keywords
                .iter()
                .map(|(topic, keywords)| (*topic, owned(keywords)))
                .collect(),
        }
    }

    pub fn patterns_for(&self, intent: Intent) -> impl Iterator<Item = &String> {
        self.intent_patterns
            .iter()
            .filter(move |(i, _)| *i == intent)
            .flat_map(|(_, phrases)| phrases.iter())
    }

    pub fn keywords_for(&self, topic: Topic) -> impl Iterator<Item = &String> {
        self.topic_keywords
            .iter()
            .filter(move |(t, _)| *t == topic)
            .flat_map(|(_, keywords)| keywords.iter())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::from_static(INTENT_PATTERNS, TOPIC_KEYWORDS)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Treatment,
        &[
            "كيف أعالج", "كيفية علاج", "طرق علاج", "علاج",
            "كيف أحل", "حل مشكلة", "طريقة حل", "أساليب علاج",
            "تدريب", "تأهيل", "تحسين", "تطوير", "معالجة",
            "كيف اعالج", "ازاي اعالج", "ايه العلاج", "طريقه علاج",
        ],
    ),
    (
        Intent::Definition,
        &[
            "ما هي", "ما هو", "تعريف", "مفهوم", "معنى", "شرح", "وضح",
            "ايه هي", "ايه هو", "يعني ايه", "المقصود", "مفهوم",
        ],
    ),
    (
        Intent::Types,
        &[
            "أنواع", "أقسام", "تصنيف", "فئات", "مراحل", "تقسيم",
            "انواع", "اقسام", "تصنيفات",
        ],
    ),
    (
        Intent::Symptoms,
        &[
            "أعراض", "علامات", "مظاهر", "كيف أعرف", "ازاي اعرف",
            "اعراض", "علامات", "مظاهر",
        ],
    ),
    (
        Intent::Causes,
        &["أسباب", "لماذا", "ليه", "السبب", "اسباب", "سبب"],
    ),
    (
        Intent::Identification,
        &[
            "كيف أميز", "التمييز", "تحديد", "معرفة نوع", "ازاي اميز",
            "الفرق بين", "كيف افرق",
        ],
    ),
];

const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Perception,
        &[
            "إدراك", "ادراك", "تمييز", "فهم", "مثيرات", "بصري", "سمعي",
            "حسي", "تآزر", "تازر", "إدراك بصري", "إدراك سمعي",
        ],
    ),
    (
        Topic::Attention,
        &[
            "انتباه", "انتباة", "إنتباه", "تشتت", "تركيز", "تركيذ",
            "مدة الانتباه", "مرونة", "الانتباه الانتقائي", "مش بيركز",
            "بيتشتت", "شارد", "تشتيت",
        ],
    ),
    (
        Topic::Memory,
        &[
            "ذاكرة", "ذاكره", "حفظ", "استدعاء", "تذكر", "نسيان",
            "ذاكرة قصيرة", "ذاكرة طويلة", "ذاكرة عاملة", "تذكر",
        ],
    ),
    (
        Topic::Writing,
        &[
            "كتابة", "كتابه", "إملاء", "املاء", "خط", "تهجئة", "تهجئه",
            "أخطاء كتابية", "هجاء", "أخطاء إملائية", "اخطاء املائيه",
        ],
    ),
    (
        Topic::Reading,
        &[
            "قراءة", "قراءه", "حروف", "مقاطع", "نصوص", "كلمات",
            "أخطاء القراءة", "تهجئة", "نطق", "فهم القراءة",
        ],
    ),
    (
        Topic::Arithmetic,
        &[
            "حساب", "رياضيات", "رياضه", "أرقام", "ارقام", "جمع", "طرح",
            "ضرب", "قسمة", "عمليات حسابية", "مفاهيم رياضية",
        ],
    ),
    (
        Topic::LearningDisabilities,
        &[
            "صعوبات التعلم", "صعوبات التعليم", "مشاكل التعلم",
            "إصعوبات التعلم", "صعوبات تعلم",
        ],
    ),
];
