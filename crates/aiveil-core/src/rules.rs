//! Rule tables for AI-content classification.
//!
//! Rules come in five tables, layered by the classifier:
//!
//! - **Definitive terms**: unambiguous indicators (named tools, companies, techniques)
//! - **Context patterns**: phrases confirming a bare "AI" means artificial intelligence
//! - **Ambiguous terms**: trigger words that need a confirming context pattern
//! - **Skip phrases**: substrings that veto a match absent a strong AI signal
//! - **Foreign false positives**: non-English words that happen to contain "ai"
//!
//! A [`RuleSetConfig`] is the plain-data form (what a rule file holds), and
//! [`RuleSet`] is the compiled, immutable form the classifier runs against.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Matches the bare token "AI" or "A.I." as a whole word.
const STANDALONE_AI_PATTERN: &str = r"\bA\.I\.|\bAI\b";

const DEFINITIVE_TERMS: &[&str] = &[
    // Fields and techniques
    r"\bartificial intelligence\b",
    r"\bmachine learning\b",
    r"\bdeep learning\b",
    r"\bneural networks?\b",
    r"\bnatural language processing\b",
    r"\bcomputer vision\b",
    r"\breinforcement learning\b",
    r"\bgenerative AI\b",
    r"\bpredictive analytics\b",
    r"\bdata science\b",
    r"\bautonomous agents?\b",
    r"\btransformer models?\b",
    r"\bdiffusion models?\b",
    r"\bfoundation models?\b",
    r"\blarge language models?\b",
    r"\bLLMs?\b",
    r"\bvector databases?\b",
    r"\bprompt engineering\b",
    r"\bsemantic search\b",
    r"\bknowledge graphs?\b",
    r"\bimage recognition\b",
    r"\brecommendation engines?\b",
    r"\bchatbots?\b",
    r"\bvoice assistants?\b",
    r"\bsuperintelligence\b",
    r"\bAI (?:ethics|safety|bias)\b",
    // Products and models
    r"\bGPT-?[345](?:\.5)?(?:o|-?turbo)?\b",
    r"\bChatGPT\b",
    r"\bClaude\b",
    r"\bGemini\b",
    r"\bMidjourney\b",
    r"\bDALL[-\s]?E\b",
    r"\bStable Diffusion\b",
    r"\bLlama[\s-]?[23]\b",
    r"(?-i:\bPaLM\b)",
    r"\bCopilot\b",
    r"\bAuto-?GPT\b",
    r"\bBabyAGI\b",
    r"\bAgentGPT\b",
    // Companies and platforms
    r"\bOpenAI\b",
    r"\bAnthropic\b",
    r"\bDeepMind\b",
    r"\b(?:Facebook's\s+|FB's\s+|Zuckerberg's\s+)?Meta\s+AI\b",
    r"\bMeta's\s+AI\b",
    r"\bMeta\s+(?:Llama|AI\s+research|AI\s+lab|AI\s+team)\b",
    r"\bAzure AI\b",
    r"\bAWS AI\b",
    r"\bIBM Watson\b",
    // Frameworks
    r"\bLangChain\b",
    r"\bHugging\s?Face\b",
    r"\bTensorFlow\b",
    r"\bPyTorch\b",
    r"\bKeras\b",
    r"\bscikit-learn\b",
];

const CONTEXT_PATTERNS: &[&str] = &[
    r"\bAI[-\s]?(?:powered|driven|enabled|based|generated|assisted|native|first)\b",
    r"\b(?:powered|driven|enabled|generated)[-\s]by[-\s]AI\b",
    r"\bAI\s+(?:apps?|tools?|models?|systems?|solutions?|agents?|assistants?|startups?|features?|products?|revolution|strategy|adoption|research|game[-\s]?changer)\b",
    r"\b(?:the|an|our|my|your|their|this|with|using|use|uses|leverage|leveraging|harness|harnessing|adopt|adopting)\s+AI\b",
    r"\bAI\s+(?:is|are|was|were|will|can|could|should|has|have|won't|isn't)\b",
    r"\bAI\s+(?:in|for)\s+(?:business|marketing|development|innovation|research|healthcare|finance|education|sales|recruiting|work)\b",
    r"\b(?:future|age|era|power|rise|impact)\s+of\s+AI\b",
    r"\b(?:revolutionizing|revolutionized\s+by|transformative|disruptive|responsible|ethical)\s+AI\b",
    r"\bAI\s+to\s+(?:generate|create|write|build|automate)\b",
    r"\b(?:generated|created|written|built)\s+(?:with|using|by)\s+AI\b",
];

const AMBIGUOUS_TERMS: &[(&str, &str)] = &[
    ("agi", r"\b(?:artificial|general|intelligence|superintelligence)\b"),
    ("bard", r"\b(?:google|ai|assistant|chatbot|language|model)\b"),
    ("meta", r"\b(?:facebook|zuckerberg|llama|company|platform)\b"),
    ("rag", r"\b(?:retrieval|augmented|generation|vector|embeddings?)\b"),
    ("sora", r"\b(?:openai|video|generator|text-to-video|ai\s+model)\b"),
];

const SKIP_PHRASES: &[&str] = &[
    "air",
    "aim",
    "aid",
    "aisle",
    "airing",
    "aint",
    "paid",
    "metadata",
    "meta-analysis",
    "meta description",
    "meta tag",
    "meta-learning",
    "metaverse",
];

// Romanized Hindi/Urdu plus a few Romance-language words.
const FOREIGN_FALSE_POSITIVES: &[&str] = &[
    "hai", "hain", "bhai", "bhaiya", "kaise", "kaisa", "kaisi", "jaise", "jaisa", "waise", "aise",
    "aisa", "aisi", "nai", "mai", "chai", "padhai", "ladai", "mithai", "badhai", "bataiye", "baith",
    "taiyar", "mais", "jamais", "vrai", "fait",
];

/// Plain-data rule tables, as stored in a rule file.
///
/// Any table omitted from a file keeps its builtin value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    /// Unambiguous AI indicators, matched case-insensitively as one alternation.
    pub definitive_terms: Vec<String>,
    /// Patterns confirming a standalone "AI" is about artificial intelligence.
    pub context_patterns: Vec<String>,
    /// Trigger term to required-context pattern.
    pub ambiguous_terms: BTreeMap<String, String>,
    /// Substrings that veto a match unless a strong AI signal is present.
    pub skip_phrases: Vec<String>,
    /// Non-English words that contain "ai".
    pub foreign_false_positives: Vec<String>,
}

impl RuleSetConfig {
    /// Returns the builtin rule tables.
    pub fn builtin() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            definitive_terms: owned(DEFINITIVE_TERMS),
            context_patterns: owned(CONTEXT_PATTERNS),
            ambiguous_terms: AMBIGUOUS_TERMS
                .iter()
                .map(|(term, ctx)| (term.to_string(), ctx.to_string()))
                .collect(),
            skip_phrases: owned(SKIP_PHRASES),
            foreign_false_positives: owned(FOREIGN_FALSE_POSITIVES),
        }
    }

    /// Parses rule tables from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads rule tables from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded rule file {:?}", path);
        Ok(config)
    }
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A trigger term together with the context it requires.
#[derive(Debug, Clone)]
pub(crate) struct AmbiguousTerm {
    pub(crate) term: String,
    pub(crate) required_context: Regex,
}

/// Compiled, immutable rule set.
///
/// Built once at startup and shared by reference; nothing in it changes
/// after [`RuleSet::compile`] returns.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) standalone_ai: Regex,
    /// `None` when the table is empty; an empty alternation would match everything.
    pub(crate) definitive: Option<Regex>,
    pub(crate) context: Option<Regex>,
    pub(crate) ambiguous: Vec<AmbiguousTerm>,
    pub(crate) skip_phrases: Vec<String>,
    pub(crate) foreign_false_positives: HashSet<String>,
}

impl RuleSet {
    /// Compiles the builtin rule tables.
    pub fn builtin() -> Self {
        Self::compile(RuleSetConfig::builtin()).expect("builtin rule tables must compile")
    }

    /// Compiles rule tables, validating every pattern.
    ///
    /// A malformed pattern is reported with the table it came from; no
    /// partially built rule set is ever returned.
    pub fn compile(config: RuleSetConfig) -> Result<Self> {
        let standalone_ai = compile_pattern("standalone_ai", STANDALONE_AI_PATTERN)?;
        let definitive = compile_alternation("definitive_terms", &config.definitive_terms)?;
        let context = compile_alternation("context_patterns", &config.context_patterns)?;

        let ambiguous = config
            .ambiguous_terms
            .iter()
            .map(|(term, ctx)| {
                let term = normalize_word("ambiguous_terms", term)?;
                let ctx = non_empty("ambiguous_terms", ctx)?;
                let required_context = compile_pattern("ambiguous_terms", ctx)?;
                Ok::<_, Error>(AmbiguousTerm {
                    term,
                    required_context,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let skip_phrases = config
            .skip_phrases
            .iter()
            .map(|p| normalize_word("skip_phrases", p))
            .collect::<Result<Vec<_>>>()?;

        let foreign_false_positives = config
            .foreign_false_positives
            .iter()
            .map(|w| normalize_word("foreign_false_positives", w))
            .collect::<Result<HashSet<_>>>()?;

        tracing::debug!(
            "Compiled rule set: {} definitive, {} context, {} ambiguous, {} skip, {} foreign",
            config.definitive_terms.len(),
            config.context_patterns.len(),
            ambiguous.len(),
            skip_phrases.len(),
            foreign_false_positives.len()
        );

        Ok(Self {
            standalone_ai,
            definitive,
            context,
            ambiguous,
            skip_phrases,
            foreign_false_positives,
        })
    }

    /// Loads and compiles a JSON rule file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::compile(RuleSetConfig::from_file(path)?)
    }

    /// Returns the trigger terms that need confirming context.
    pub fn ambiguous_terms(&self) -> impl Iterator<Item = &str> {
        self.ambiguous.iter().map(|a| a.term.as_str())
    }

    /// Returns the skip phrases, lowercased.
    pub fn skip_phrases(&self) -> &[String] {
        &self.skip_phrases
    }

    /// Checks whether a lowercase word is a known foreign false positive.
    pub fn is_foreign_false_positive(&self, word: &str) -> bool {
        self.foreign_false_positives.contains(word)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn non_empty<'a>(table: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("empty entry in {}", table)));
    }
    Ok(value)
}

fn normalize_word(table: &'static str, value: &str) -> Result<String> {
    Ok(non_empty(table, value)?.trim().to_lowercase())
}

fn compile_pattern(table: &'static str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            table,
            pattern: pattern.to_string(),
            source,
        })
}

/// Joins a table into one alternation, checking each pattern on its own
/// first so an error names the pattern at fault.
fn compile_alternation(table: &'static str, patterns: &[String]) -> Result<Option<Regex>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    for pattern in patterns {
        compile_pattern(table, non_empty(table, pattern)?)?;
    }

    let joined = patterns
        .iter()
        .map(|p| format!("(?:{})", p))
        .collect::<Vec<_>>()
        .join("|");
    compile_pattern(table, &joined).map(Some)
}
