#[cfg(test)]
mod tests {
    use crate::explainer::SUMMARY_TERM_LIMIT;
    use crate::{detect_terms, explain, glossary, Explanation};

    const INDEMNIFICATION: &str = "You agree to protect someone else from losses or lawsuits";
    const LIABILITY: &str = "You can be held liable, meaning responsible or sued, for something";
    const INSURANCE: &str = "You need to have insurance protection";
    const DAMAGES: &str = "Money that must be paid for losses or injuries";
    const TENANT: &str = "The person renting or using the property";

    const INSURANCE_WARNING: &str = "You might need to purchase insurance coverage.";
    const LIABILITY_WARNING: &str = "You could be financially responsible for certain situations.";
    const NON_COMPETE_WARNING: &str = "Your future employment options could be limited.";

    // ========================================================================
    // Glossary Tests
    // ========================================================================

    #[test]
    fn test_glossary_has_fifteen_entries() {
        assert_eq!(glossary().len(), 15);
    }

    #[test]
    fn test_glossary_terms_are_distinct() {
        let mut terms: Vec<_> = glossary().iter().map(|e| e.term).collect();
        terms.sort_unstable();
        terms.dedup();
        assert_eq!(terms.len(), 15);
    }

    #[test]
    fn test_glossary_patterns_ignore_case() {
        let test_cases = vec![
            ("HOLD HARMLESS", "indemnification"),
            ("Warranties", "warranty"),
            ("Non-Disclosure", "confidentiality"),
            ("TERMINATE", "termination"),
            ("Venue", "jurisdiction"),
            ("LESSOR", "landlord"),
            ("Remedy", "remedies"),
        ];

        for (text, term) in test_cases {
            let entry = glossary().iter().find(|e| e.term == term).unwrap();
            assert!(entry.matches(text), "{} should match {}", term, text);
        }
    }

    // ========================================================================
    // Fallback Tests
    // ========================================================================

    #[test]
    fn test_no_match_returns_fallback() {
        let explanation = explain("The weather is nice today");

        assert!(explanation.is_fallback());
        assert!(explanation.detected_terms.is_empty());
        assert_eq!(explanation, Explanation::fallback());
        assert_eq!(
            explanation.simple_explanation,
            "This clause contains various legal terms that create specific rights and responsibilities."
        );
        assert_eq!(
            explanation.what_it_means,
            "You should carefully review this section as it may contain important obligations, restrictions, or potential costs."
        );
        assert_eq!(
            explanation.consider_asking,
            "Ask for specific examples of how this clause would apply in practice, and whether any terms can be negotiated or clarified."
        );
    }

    #[test]
    fn test_empty_and_whitespace_input_fall_back() {
        assert!(explain("").is_fallback());
        assert!(explain("   \n\t  ").is_fallback());
    }

    // ========================================================================
    // Detection Tests
    // ========================================================================

    #[test]
    fn test_indemnify_detected_once_regardless_of_case() {
        for text in [
            "indemnify",
            "INDEMNIFY",
            "You shall Indemnify the Company and indemnify its officers",
        ] {
            let terms = detect_terms(text);
            let count = terms.iter().filter(|t| **t == INDEMNIFICATION).count();
            assert_eq!(count, 1, "Failed for {}", text);
        }
    }

    #[test]
    fn test_detected_terms_follow_glossary_order() {
        let explanation = explain("The tenant shall maintain insurance and is liable for damages");

        assert_eq!(
            explanation.detected_terms,
            vec![LIABILITY, INSURANCE, DAMAGES, TENANT]
        );
    }

    #[test]
    fn test_insurance_and_liability_follow_ups() {
        let explanation = explain("The tenant shall maintain insurance and is liable for damages");

        assert!(explanation
            .what_it_means
            .starts_with("This means you may have specific responsibilities or restrictions."));
        assert!(explanation.what_it_means.contains(INSURANCE_WARNING));
        assert!(explanation.what_it_means.contains(LIABILITY_WARNING));
        assert!(!explanation.what_it_means.contains(NON_COMPETE_WARNING));

        // Follow-ups appear in fixed order
        let insurance_at = explanation.what_it_means.find(INSURANCE_WARNING).unwrap();
        let liability_at = explanation.what_it_means.find(LIABILITY_WARNING).unwrap();
        assert!(insurance_at < liability_at);
    }

    #[test]
    fn test_follow_ups_check_explanations_not_clause() {
        // The clause never says "insurance"; the follow-up fires from the
        // matched explanation text
        let explanation = explain("Coverage must be in place");
        assert_eq!(explanation.detected_terms, vec![INSURANCE]);
        assert!(explanation.what_it_means.contains(INSURANCE_WARNING));
        assert!(!explanation.what_it_means.contains(LIABILITY_WARNING));
    }

    #[test]
    fn test_non_compete_follow_up() {
        let explanation = explain("Employee accepts a non-compete covenant.");
        assert_eq!(
            explanation.what_it_means,
            format!(
                "This means you may have specific responsibilities or restrictions. {}",
                NON_COMPETE_WARNING
            )
        );
    }

    #[test]
    fn test_simple_explanation_format() {
        let explanation = explain("The tenant shall maintain insurance and is liable for damages");
        assert_eq!(
            explanation.simple_explanation,
            format!("This clause covers: {}; {}; {}.", LIABILITY, INSURANCE, DAMAGES)
        );
    }

    #[test]
    fn test_simple_explanation_with_fewer_than_three_terms() {
        let explanation = explain("Disputes go to arbitration.");
        assert_eq!(
            explanation.simple_explanation,
            "This clause covers: Disputes must be solved through private arbitration instead of court."
        );
    }

    #[test]
    fn test_simple_explanation_caps_at_three_terms() {
        let text = "The landlord and tenant agree to indemnify, provide a warranty, \
                    submit to arbitration in this venue, and pursue remedies on breach.";
        let explanation = explain(text);

        assert!(explanation.detected_terms.len() >= 5);
        let listed = explanation
            .simple_explanation
            .trim_start_matches("This clause covers: ")
            .split("; ")
            .count();
        assert_eq!(listed, SUMMARY_TERM_LIMIT);
    }

    #[test]
    fn test_consider_asking_is_fixed() {
        let a = explain("Confidentiality survives termination.");
        let b = explain("The lessee shall pay compensation.");
        assert_eq!(a.consider_asking, b.consider_asking);
        assert_eq!(
            a.consider_asking,
            "Consider asking: What are specific examples of how this applies? Can any terms be modified? What are the consequences if this is violated?"
        );
    }

    #[test]
    fn test_explain_is_idempotent() {
        let text = "The lessor may terminate on default and recover damages.";
        assert_eq!(explain(text), explain(text));
        assert_eq!(explain(text).to_string(), explain(text).to_string());
    }

    // ========================================================================
    // Rendering Tests
    // ========================================================================

    #[test]
    fn test_render_fallback_has_no_term_list() {
        let rendered = Explanation::fallback().to_string();

        assert!(rendered.starts_with("**Simple Explanation:**\n"));
        assert!(rendered.contains("\n\n**What This Means For You:**\n"));
        assert!(rendered.contains("\n\n**Consider Asking:**\n"));
        assert!(!rendered.contains("Key Terms Detected"));
        assert!(!rendered.contains('•'));
    }

    #[test]
    fn test_render_lists_every_detected_term() {
        let text = "The landlord and tenant agree to indemnify, provide a warranty, \
                    submit to arbitration in this venue, and pursue remedies on breach.";
        let explanation = explain(text);
        let rendered = explanation.to_string();

        let (_, list) = rendered.split_once("**Key Terms Detected:**\n").unwrap();
        let bullets: Vec<&str> = list.lines().collect();

        assert_eq!(bullets.len(), explanation.detected_terms.len());
        for (bullet, term) in bullets.iter().zip(&explanation.detected_terms) {
            assert_eq!(*bullet, format!("• {}", term));
        }
    }

    #[test]
    fn test_render_section_order() {
        let rendered = explain("You are liable for damages.").to_string();

        let simple = rendered.find("**Simple Explanation:**").unwrap();
        let meaning = rendered.find("**What This Means For You:**").unwrap();
        let asking = rendered.find("**Consider Asking:**").unwrap();
        let terms = rendered.find("**Key Terms Detected:**").unwrap();
        assert!(simple < meaning && meaning < asking && asking < terms);
    }
}
