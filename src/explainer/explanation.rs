use std::fmt;

/// Plain-language explanation of one clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub simple_explanation: String,
    pub what_it_means: String,
    pub consider_asking: String,
    /// Explanations of every matched glossary entry, in glossary order
    pub detected_terms: Vec<&'static str>,
}

impl Explanation {
    /// Generic advice used when no glossary term matches
    pub fn fallback() -> Self {
        Self {
            simple_explanation: super::FALLBACK_SIMPLE.to_string(),
            what_it_means: super::FALLBACK_MEANING.to_string(),
            consider_asking: super::FALLBACK_ASKING.to_string(),
            detected_terms: Vec::new(),
        }
    }

    /// True when nothing in the clause matched the glossary
    pub fn is_fallback(&self) -> bool {
        self.detected_terms.is_empty()
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Simple Explanation:**")?;
        writeln!(f, "{}", self.simple_explanation)?;
        writeln!(f)?;
        writeln!(f, "**What This Means For You:**")?;
        writeln!(f, "{}", self.what_it_means)?;
        writeln!(f)?;
        writeln!(f, "**Consider Asking:**")?;
        write!(f, "{}", self.consider_asking)?;

        if !self.detected_terms.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "**Key Terms Detected:**")?;
            for term in &self.detected_terms {
                write!(f, "\n• {}", term)?;
            }
        }

        Ok(())
    }
}
