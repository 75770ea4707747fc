//! Rule-based clause explanation
//!
//! Matches a clause against a fixed glossary of case-insensitive patterns and
//! assembles a three-part plain-language explanation. Total and stateless:
//! the same text always produces the same explanation.

mod explanation;
mod glossary;

#[cfg(test)]
mod tests;

pub use explanation::Explanation;
pub use glossary::{glossary, GlossaryEntry};

/// Number of detected terms summarised in the simple explanation
pub const SUMMARY_TERM_LIMIT: usize = 3;

const LEAD_SENTENCE: &str = "This means you may have specific responsibilities or restrictions.";

/// Sentences appended to "what it means", keyed on text of the detected
/// explanations (never the clause itself). Evaluated in this order.
const FOLLOW_UPS: [(&str, &str); 3] = [
    ("insurance", "You might need to purchase insurance coverage."),
    (
        "liable",
        "You could be financially responsible for certain situations.",
    ),
    (
        "non-compete",
        "Your future employment options could be limited.",
    ),
];

const CONSIDER_ASKING: &str = "Consider asking: What are specific examples of how this applies? \
     Can any terms be modified? What are the consequences if this is violated?";

const FALLBACK_SIMPLE: &str =
    "This clause contains various legal terms that create specific rights and responsibilities.";
const FALLBACK_MEANING: &str = "You should carefully review this section as it may contain \
     important obligations, restrictions, or potential costs.";
const FALLBACK_ASKING: &str = "Ask for specific examples of how this clause would apply in \
     practice, and whether any terms can be negotiated or clarified.";

/// Explain a clause in plain language
pub fn explain(text: &str) -> Explanation {
    let detected_terms = detect_terms(text);

    if detected_terms.is_empty() {
        tracing::debug!("[explain] no glossary terms matched");
        return Explanation::fallback();
    }

    let summary: Vec<&str> = detected_terms
        .iter()
        .take(SUMMARY_TERM_LIMIT)
        .copied()
        .collect();
    let simple_explanation = format!("This clause covers: {}.", summary.join("; "));

    let mut meaning = vec![LEAD_SENTENCE];
    for (trigger, sentence) in FOLLOW_UPS {
        if detected_terms.iter().any(|term| term.contains(trigger)) {
            meaning.push(sentence);
        }
    }

    Explanation {
        simple_explanation,
        what_it_means: meaning.join(" "),
        consider_asking: CONSIDER_ASKING.to_string(),
        detected_terms,
    }
}

/// Explanations of every glossary entry found in `text`, in table order
pub fn detect_terms(text: &str) -> Vec<&'static str> {
    glossary()
        .iter()
        .filter(|entry| entry.matches(text))
        .inspect(|entry| tracing::debug!("[explain] detected term: {}", entry.term))
        .map(|entry| entry.explanation)
        .collect()
}
