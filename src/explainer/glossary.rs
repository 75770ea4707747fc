use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One rule of the static glossary
#[derive(Debug)]
pub struct GlossaryEntry {
    /// Short label for diagnostics
    pub term: &'static str,
    /// Case-insensitive pattern searched anywhere in the clause
    pub pattern: Regex,
    /// Plain-language explanation shown when the pattern matches
    pub explanation: &'static str,
}

impl GlossaryEntry {
    /// Whether the pattern occurs anywhere in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// (term, pattern, explanation). Order determines output order.
const RULES: [(&str, &str, &str); 15] = [
    (
        "indemnification",
        r"indemnify|hold harmless",
        "You agree to protect someone else from losses or lawsuits",
    ),
    (
        "liability",
        r"liability|liable",
        "You can be held liable, meaning responsible or sued, for something",
    ),
    (
        "warranty",
        r"warrant(y|ies)",
        "You promise that something is true or will work a certain way",
    ),
    (
        "confidentiality",
        r"confidentiality|non-disclosure",
        "You cannot share certain information with others",
    ),
    (
        "non-compete",
        r"non-compete",
        "Under a non-compete, you cannot work for competitors after leaving this job",
    ),
    (
        "termination",
        r"terminat(e|ion)",
        "How and when this agreement can be ended",
    ),
    (
        "arbitration",
        r"arbitration",
        "Disputes must be solved through private arbitration instead of court",
    ),
    (
        "jurisdiction",
        r"jurisdiction|venue",
        "Which state/court will handle any legal disputes",
    ),
    (
        "insurance",
        r"insurance|coverage",
        "You need to have insurance protection",
    ),
    (
        "damages",
        r"damages|compensation",
        "Money that must be paid for losses or injuries",
    ),
    (
        "premises",
        r"premises|property",
        "Refers to the building or land being discussed",
    ),
    (
        "landlord",
        r"lessor|landlord",
        "The property owner or manager",
    ),
    (
        "tenant",
        r"lessee|tenant",
        "The person renting or using the property",
    ),
    (
        "breach",
        r"default|breach",
        "When someone fails to follow the agreement",
    ),
    (
        "remedies",
        r"remed(y|ies)",
        "Solutions or fixes for problems that occur",
    ),
];

static GLOSSARY: Lazy<Vec<GlossaryEntry>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|&(term, pattern, explanation)| GlossaryEntry {
            term,
            pattern: RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("glossary patterns are valid regexes"),
            explanation,
        })
        .collect()
});

/// The compiled glossary, built once per process
pub fn glossary() -> &'static [GlossaryEntry] {
    &GLOSSARY
}
