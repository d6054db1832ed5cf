//! Fixed follow-up tables and the text built from them.
//!
//! Everything here is static content plus string assembly. No decisions
//! are made in this module beyond "which table row".

use crate::types::{Intent, Topic};

const SUGGESTIONS_HEADER: &str = "💡 **اقتراحات إضافية قد تهمك:**";

const NOT_UNDERSTOOD: &str = "عذراً، لم أفهم سؤالك بوضوح.";

const REPHRASE_PROMPT: &str = "🔄 **جرب إعادة صياغة السؤال بوضوح أكثر**";

const TREATMENT_HEADER: &str = "**يبدو أنك تبحث عن طرق العلاج. جرب:**";

/// Follow-up questions appended to a direct answer, per (topic, intent).
pub fn related_suggestions(topic: Topic, intent: Intent) -> &'static [&'static str] {
    match (topic, intent) {
        (Topic::Perception, Intent::Treatment) => &[
            "هل تريد معرفة تدريبات التمييز البصري المحددة؟",
            "هل تحتاج معلومات عن التآزر البصري الحركي؟",
            "هل تريد تمارين للإدراك السمعي؟",
        ],
        (Topic::Perception, Intent::Definition) => &[
            "هل تريد معرفة طرق علاج مشاكل الإدراك؟",
            "هل تحتاج معلومات عن أنواع الإدراك المختلفة؟",
        ],
        (Topic::Attention, Intent::Treatment) => &[
            "هل تريد تدريبات لزيادة مدة الانتباه؟",
            "هل تحتاج أنشطة لتحسين مرونة الانتباه؟",
            "هل تريد علاج مشاكل التشتت المحددة؟",
        ],
        (Topic::Attention, Intent::Definition) => &[
            "هل تريد معرفة طرق علاج مشاكل الانتباه؟",
            "هل تحتاج معلومات عن أنواع الانتباه المختلفة؟",
        ],
        (Topic::Memory, Intent::Treatment) => &[
            "هل تريد تدريبات الذاكرة قصيرة المدى؟",
            "هل تحتاج تمارين الذاكرة العاملة المتقدمة؟",
            "هل تريد نصائح لتحسين العوامل المؤثرة على الذاكرة؟",
        ],
        (Topic::Memory, Intent::Definition) => &[
            "هل تريد معرفة طرق علاج مشاكل الذاكرة؟",
            "هل تحتاج معلومات عن أنواع الذاكرة المختلفة؟",
        ],
        (Topic::Writing, Intent::Treatment) => &[
            "هل تريد تفاصيل أكثر عن طريقة التنقيط؟",
            "هل تحتاج تدريبات للحروف المتشابهة؟",
            "هل تريد برنامج أسبوعي للإملاء؟",
        ],
        _ => &[],
    }
}

/// Example questions offered when a topic was detected but not answered.
pub fn topic_examples(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Perception => &[
            "كيف أعالج مشاكل الإدراك؟",
            "ما هو الإدراك البصري؟",
            "أنواع الإدراك السمعي",
        ],
        Topic::Attention => &[
            "كيف أعالج مشاكل الانتباه؟",
            "ما هو الانتباه الانتقائي؟",
            "طرق تحسين مدة الانتباه",
        ],
        Topic::Memory => &[
            "كيف أعالج مشاكل الذاكرة؟",
            "ما هي الذاكرة العاملة؟",
            "تدريبات تقوية الذاكرة",
        ],
        Topic::Writing => &[
            "كيف أحل مشكلة الإملاء؟",
            "طرق علاج صعوبات الكتابة",
            "تدريبات تحسين الخط",
        ],
        Topic::Reading => &[
            "كيف أعالج صعوبات القراءة؟",
            "ما هي أخطاء القراءة الشائعة؟",
        ],
        Topic::Arithmetic => &[
            "كيف أعالج صعوبات الحساب؟",
            "تدريبات الجمع والطرح",
        ],
        Topic::LearningDisabilities => &[
            "ما هي صعوبات التعلم؟",
            "أنواع صعوبات التعلم",
            "كيف أعرف أن طفلي لديه صعوبات تعلم؟",
        ],
    }
}

/// Example questions offered when the user seems to want a treatment.
pub const TREATMENT_EXAMPLES: &[&str] = &[
    "كيف أعالج مشاكل الإدراك؟",
    "طرق علاج الانتباه",
    "تدريبات تحسين الذاكرة",
];

/// Full menu, used when nothing at all was recognized.
pub const GENERIC_MENU: &[&str] = &[
    "**💡 يمكنك السؤال عن:**",
    "",
    "**للعلاج والحلول:**",
    "• كيف أعالج مشاكل الإدراك؟",
    "• طرق علاج الانتباه",
    "• كيفية تحسين الكتابة والإملاء",
    "",
    "**للتعريفات:**",
    "• ما هو الإدراك؟",
    "• تعريف الانتباه",
    "• مفهوم الذاكرة",
    "",
    "**للأنواع والتصنيفات:**",
    "• أنواع الإدراك",
    "• أنواع مشاكل الانتباه",
];

fn bullet(text: &str) -> String {
    format!("• {}", text)
}

/// Append up to `max` suggestion bullets. No suggestions, no header.
pub fn append_suggestions(response: &str, suggestions: &[&str], max: usize) -> String {
    let picked: Vec<&str> = suggestions.iter().take(max).copied().collect();
    if picked.is_empty() {
        return response.to_string();
    }

    let mut out = format!("{}\n\n{}\n", response, SUGGESTIONS_HEADER);
    for suggestion in picked {
        out.push_str(&bullet(suggestion));
        out.push('\n');
    }
    out
}

/// Prefix for an answer found through the topic alone.
pub fn related_info_notice(topic: Topic) -> String {
    format!(
        "**ملاحظة**: لم أجد معلومات محددة لسؤالك، لكن إليك معلومات مفيدة عن {}:",
        topic.display_name()
    )
}

/// Wrap a topic-level answer with the "no exact match" notice.
pub fn with_related_info_notice(topic: Topic, response: &str) -> String {
    format!("{}\n\n{}", related_info_notice(topic), response)
}

/// The "didn't understand" reply, shaped by whatever was partially detected.
pub fn default_response(intent: Intent, topic: Option<Topic>) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(topic) = topic {
        lines.push(format!(
            "**يبدو أن سؤالك يتعلق بـ {}. يمكنك السؤال عن:**",
            topic.display_name()
        ));
        lines.extend(topic_examples(topic).iter().map(|q| bullet(q)));
    }

    if intent == Intent::Treatment {
        lines.push(TREATMENT_HEADER.to_string());
        lines.extend(TREATMENT_EXAMPLES.iter().map(|q| bullet(q)));
    }

    if lines.is_empty() {
        lines.extend(GENERIC_MENU.iter().map(|l| l.to_string()));
    }

    format!("{}\n\n{}\n\n{}", NOT_UNDERSTOOD, lines.join("\n"), REPHRASE_PROMPT)
}
