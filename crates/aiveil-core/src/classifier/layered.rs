//! Layered keyword classifier for AI-related content.
//!
//! Stages run in strict order and each one may end classification:
//!
//! 1. Skip-phrase veto ("paid", "air", "metadata", ...)
//! 2. Definitive terms (high confidence)
//! 3. Standalone "AI" / "A.I." scan
//! 4. Context scoring: context pattern (high), clean text (medium),
//!    foreign-word heavy text (low or rejected)
//! 5. Ambiguous-term verification for low-confidence matches

use super::{Confidence, Verdict};
use crate::post::PostText;
use crate::rules::RuleSet;

/// Phrase that disarms the skip-phrase veto.
const ARTIFICIAL_INTELLIGENCE: &str = "artificial intelligence";

/// Reported pattern for low-confidence bare "AI" matches.
const BARE_AI: &str = "AI";

/// Words at most this many characters long are suspect when they contain "ai".
const SUSPECT_WORD_MAX_CHARS: usize = 4;

/// More suspect words than this multiple of standalone "AI" hits rejects the match.
const SUSPECT_RATIO: usize = 2;

/// Rule-driven classifier that decides whether text is about AI.
///
/// Holds only an immutable [`RuleSet`], so a single instance can be shared
/// across threads and called concurrently.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    /// Creates a classifier over the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the rule set this classifier runs against.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classifies a block of text.
    ///
    /// Never fails: empty text, or text nothing matches, yields a
    /// non-matching verdict.
    pub fn classify(&self, text: &str) -> Verdict {
        if text.trim().is_empty() {
            return Verdict::no_match();
        }

        let rules = &self.rules;
        let text_lower = text.to_lowercase();
        let has_standalone_ai = rules.standalone_ai.is_match(text);

        if !has_standalone_ai
            && !text_lower.contains(ARTIFICIAL_INTELLIGENCE)
            && rules
                .skip_phrases
                .iter()
                .any(|phrase| text_lower.contains(phrase.as_str()))
        {
            return Verdict::no_match();
        }

        if let Some(m) = rules.definitive.as_ref().and_then(|re| re.find(text)) {
            return Verdict::matched(Confidence::High, m.as_str());
        }

        let standalone: Vec<_> = rules.standalone_ai.find_iter(text).collect();
        let Some(first) = standalone.first() else {
            return Verdict::no_match();
        };

        if let Some(m) = rules.context.as_ref().and_then(|re| re.find(text)) {
            return Verdict::matched(Confidence::High, m.as_str());
        }

        let words: Vec<&str> = words(&text_lower).collect();
        if !words.iter().any(|w| rules.is_foreign_false_positive(w)) {
            return Verdict::matched(Confidence::Medium, first.as_str());
        }

        let suspects = words.iter().filter(|w| is_suspect_word(w)).count();
        if suspects > standalone.len() * SUSPECT_RATIO {
            return Verdict::no_match();
        }

        for ambiguous in &rules.ambiguous {
            if contains_word(&text_lower, &ambiguous.term)
                && !ambiguous.required_context.is_match(text)
            {
                return Verdict::no_match();
            }
        }

        Verdict::matched(Confidence::Low, BARE_AI)
    }

    /// Assembles post text from content segments and classifies it.
    ///
    /// Missing or empty segments are skipped.
    pub fn classify_segments<'a, I>(&self, segments: I) -> Verdict
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let post = PostText::from_segments(segments);
        self.classify(post.as_str())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

/// Splits lowercase text into alphanumeric words.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Short words containing "ai" that are not the token "ai" itself.
fn is_suspect_word(word: &str) -> bool {
    word != "ai" && word.contains("ai") && word.chars().count() <= SUSPECT_WORD_MAX_CHARS
}

/// Checks whether `needle` occurs in `haystack` delimited by non-alphanumerics.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let end = start + matched.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSetConfig;
    use std::sync::Arc;

    fn classifier() -> Classifier {
        Classifier::default()
    }

    fn assert_no_match(text: &str) {
        let verdict = classifier().classify(text);
        assert_eq!(verdict, Verdict::no_match(), "expected no match for {:?}", text);
    }

    fn assert_match(text: &str, confidence: Confidence, pattern: &str) {
        let verdict = classifier().classify(text);
        assert!(verdict.matched, "expected match for {:?}", text);
        assert_eq!(verdict.confidence, Some(confidence), "text: {:?}", text);
        assert_eq!(verdict.matched_pattern.as_deref(), Some(pattern), "text: {:?}", text);
    }

    // === Empty Input Tests ===

    #[test]
    fn empty_text_is_not_matched() {
        assert_no_match("");
    }

    #[test]
    fn whitespace_text_is_not_matched() {
        assert_no_match("   \n\t ");
    }

    // === Skip Phrase Tests ===

    #[test]
    fn skip_paid_for_parking() {
        assert_no_match("I paid for parking");
    }

    #[test]
    fn skip_air_india() {
        assert_no_match("I am flying on Air India");
    }

    #[test]
    fn skip_metadata() {
        assert_no_match("Update the metadata on every record");
    }

    #[test]
    fn skip_phrase_vetoes_definitive_term_without_bare_ai() {
        assert_no_match("Shipping TensorFlow upgrades is our main aim this quarter");
    }

    #[test]
    fn skip_phrase_ignored_with_artificial_intelligence() {
        assert_match(
            "Artificial intelligence will aid doctors",
            Confidence::High,
            "Artificial intelligence",
        );
    }

    #[test]
    fn skip_phrase_ignored_with_standalone_ai() {
        assert_match("I paid for my AI subscription", Confidence::High, "my AI");
    }

    // === Definitive Term Tests ===

    #[test]
    fn definitive_machine_learning() {
        assert_match(
            "We are using machine learning models",
            Confidence::High,
            "machine learning",
        );
    }

    #[test]
    fn definitive_reports_literal_text() {
        assert_match("Just tried CHATGPT for the first time", Confidence::High, "CHATGPT");
    }

    #[test]
    fn definitive_reports_leftmost_term() {
        assert_match("PyTorch or TensorFlow?", Confidence::High, "PyTorch");
    }

    #[test]
    fn definitive_meta_ai() {
        assert_match("Meta AI launched a new assistant", Confidence::High, "Meta AI");
    }

    #[test]
    fn definitive_gpt_versions() {
        assert_match("Benchmarks for GPT-4 look strong", Confidence::High, "GPT-4");
    }

    // === Standalone AI Tests ===

    #[test]
    fn no_bare_ai_is_not_matched() {
        assert_no_match("Lovely weather for a walk in the park");
    }

    #[test]
    fn ambiguous_term_without_bare_ai_is_not_matched() {
        assert_no_match("meta is a great company");
    }

    #[test]
    fn ai_inside_words_is_not_matched() {
        assert_no_match("Thai curry and a quick chat with my team");
    }

    // === Context Scoring Tests ===

    #[test]
    fn context_ai_powered() {
        assert_match(
            "Excited to share my new AI-powered app!",
            Confidence::High,
            "AI-powered",
        );
    }

    #[test]
    fn context_overrides_foreign_words() {
        assert_match("kaise ho bhai, AI is cool", Confidence::High, "AI is");
    }

    #[test]
    fn bare_ai_is_medium() {
        assert_match("Everyone is talking about AI lately", Confidence::Medium, "AI");
    }

    #[test]
    fn bare_dotted_ai_is_medium() {
        assert_match("Thoughts on A.I. these days", Confidence::Medium, "A.I.");
    }

    #[test]
    fn foreign_words_lower_confidence() {
        assert_match("bhai ye AI dekho", Confidence::Low, "AI");
    }

    #[test]
    fn foreign_words_swamp_bare_ai() {
        // bhai, hai, mai: three suspects against one "AI"
        assert_no_match("bhai hai mai AI");
    }

    #[test]
    fn suspect_ratio_is_more_than_double() {
        // bhai, hai: exactly double, still a match
        assert_match("bhai hai AI", Confidence::Low, "AI");
    }

    #[test]
    fn long_foreign_words_are_not_suspects() {
        // "kaise" is a foreign word but longer than four characters
        assert_match("kaise kaise AI", Confidence::Low, "AI");
    }

    // === Ambiguous Term Tests ===

    #[test]
    fn ambiguous_term_without_context_rejects_low_match() {
        assert_no_match("bhai, meta ka naya AI dekha");
    }

    #[test]
    fn ambiguous_term_with_context_keeps_low_match() {
        assert_match("bhai, meta company ka naya AI dekha", Confidence::Low, "AI");
    }

    #[test]
    fn ambiguous_term_inside_word_is_ignored() {
        assert_match("bhai, metal ka naya AI dekha", Confidence::Low, "AI");
    }

    #[test]
    fn ambiguous_term_ignored_for_medium_match() {
        assert_match("meta and AI news", Confidence::Medium, "AI");
    }

    // === Segment Tests ===

    #[test]
    fn classify_segments_joins_content() {
        let verdict = classifier().classify_segments([
            Some("Big news:"),
            None,
            Some(""),
            Some("our product is AI-driven"),
        ]);
        assert_eq!(verdict.confidence, Some(Confidence::High));
    }

    #[test]
    fn classify_segments_all_missing() {
        let verdict = classifier().classify_segments([None, None]);
        assert_eq!(verdict, Verdict::no_match());
    }

    // === Custom Rule Tests ===

    #[test]
    fn custom_definitive_term() {
        let mut config = RuleSetConfig::builtin();
        config.definitive_terms.push(r"\bGrok\b".to_string());
        let classifier = Classifier::new(RuleSet::compile(config).unwrap());

        let verdict = classifier.classify("Asked Grok about it");
        assert_eq!(verdict, Verdict::matched(Confidence::High, "Grok"));
    }

    #[test]
    fn empty_rule_tables_still_find_bare_ai() {
        let config = RuleSetConfig {
            definitive_terms: Vec::new(),
            context_patterns: Vec::new(),
            ambiguous_terms: Default::default(),
            skip_phrases: Vec::new(),
            foreign_false_positives: Vec::new(),
        };
        let classifier = Classifier::new(RuleSet::compile(config).unwrap());

        assert_eq!(
            classifier.classify("the AI is here"),
            Verdict::matched(Confidence::Medium, "AI")
        );
        assert_eq!(classifier.classify("ChatGPT"), Verdict::no_match());
    }

    // === Purity Tests ===

    #[test]
    fn classify_is_deterministic() {
        let classifier = classifier();
        let texts = [
            "",
            "I paid for parking",
            "Excited to share my new AI-powered app!",
            "bhai ye AI dekho",
            "Everyone is talking about AI lately",
        ];

        for text in texts {
            assert_eq!(classifier.classify(text), classifier.classify(text));
        }
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        let classifier = Arc::new(classifier());
        let expected = classifier.classify("Our AI tools ship today");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let classifier = Arc::clone(&classifier);
                let expected = expected.clone();
                scope.spawn(move || {
                    assert_eq!(classifier.classify("Our AI tools ship today"), expected);
                });
            }
        });
    }

    // === Helper Tests ===

    #[test]
    fn contains_word_checks_boundaries() {
        assert!(contains_word("meta is here", "meta"));
        assert!(contains_word("ask meta", "meta"));
        assert!(contains_word("meta's plans", "meta"));
        assert!(!contains_word("metadata", "meta"));
        assert!(!contains_word("a metal band", "meta"));
    }

    #[test]
    fn suspect_words() {
        assert!(is_suspect_word("bhai"));
        assert!(is_suspect_word("hai"));
        assert!(!is_suspect_word("ai"));
        assert!(!is_suspect_word("kaise"));
        assert!(!is_suspect_word("ho"));
    }
}
