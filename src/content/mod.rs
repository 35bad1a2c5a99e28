//! Quiz content: the identity table
//!
//! The table is a fixed mapping from a prompt expression to its equivalent
//! expansion, both written in the same backslash notation the
//! [`notation`](crate::notation) module renders. It is built once at startup
//! and never mutated afterwards.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

/// Minimum number of distinct answer strings the table must provide.
///
/// Every round shows the correct answer plus two distractors drawn without
/// replacement, so anything below three makes option building impossible.
pub const MIN_DISTINCT_ANSWERS: usize = 3;

/// The built-in drill content: double angle, half angle, angle sum/difference
/// identities and the six trig derivatives.
pub const BUILTIN_IDENTITIES: &[(&str, &str)] = &[
    (r"sin(2\theta)", r"2sin(\theta)cos(\theta)"),
    (r"cos(2\theta)", r"cos^2(\theta) - sin^2(\theta)"),
    (r"tan(2\theta)", r"\frac{2tan(\theta)}{1-tan^2(\theta)}"),
    (r"\frac{d}{dx} sin(\theta)", r"cos(\theta)"),
    (r"\frac{d}{dx} cos(\theta)", r"-sin(\theta)"),
    (r"\frac{d}{dx} tan(\theta)", r"sec^2(\theta)"),
    (r"\frac{d}{dx} csc(\theta)", r"-csc(\theta)cot(\theta)"),
    (r"\frac{d}{dx} sec(\theta)", r"sec(\theta)tan(\theta)"),
    (r"\frac{d}{dx} cot(\theta)", r"-csc^2(\theta)"),
    (r"sin^2(\frac{\theta}{2})", r"\frac{1-cos(\theta)}{2}"),
    (r"cos^2(\frac{\theta}{2})", r"\frac{1+cos(\theta)}{2}"),
    (r"tan^2(\frac{\theta}{2})", r"\frac{1-cos(\theta)}{1+cos(\theta)}"),
    (r"sin(A + B)", r"sin(A)cos(B) + cos(A)sin(B)"),
    (r"sin(A - B)", r"sin(A)cos(B) - cos(A)sin(B)"),
    (r"cos(A + B)", r"cos(A)cos(B) - sin(A)sin(B)"),
    (r"cos(A - B)", r"cos(A)cos(B) + sin(A)sin(B)"),
    (r"tan(A + B)", r"\frac{tan(A) + tan(B)}{1 - tan(A)tan(B)}"),
    (r"tan(A - B)", r"\frac{tan(A) - tan(B)}{1 + tan(A)tan(B)}"),
];

/// One quiz item: a prompt expression and its equivalent expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub prompt: String,
    pub answer: String,
}

/// Errors detected while building an [`IdentityTable`].
///
/// A malformed table is a programming error, not a runtime condition; these
/// are fatal at startup.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// The table does not provide enough distinct answers to build a round.
    TooFewAnswers { distinct: usize, required: usize },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::TooFewAnswers { distinct, required } => {
                write!(
                    f,
                    "identity table has {} distinct answer(s), need at least {}",
                    distinct, required
                )
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// The fixed set of identities a game runs over.
///
/// Prompts are unique; inserting a prompt twice replaces the earlier answer.
/// The table also precomputes the deduplicated answer pool used when drawing
/// distractors.
#[derive(Debug, Clone)]
pub struct IdentityTable {
    identities: Vec<Identity>,
    index: FxHashMap<String, usize>,
    answer_pool: Vec<String>,
}

impl IdentityTable {
    /// Build a table from `(prompt, answer)` pairs.
    pub fn new<P, A, I>(pairs: I) -> Result<Self, ContentError>
    where
        P: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = (P, A)>,
    {
        let mut identities: Vec<Identity> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for (prompt, answer) in pairs {
            let prompt = prompt.into();
            let answer = answer.into();
            match index.get(&prompt) {
                Some(&slot) => identities[slot].answer = answer,
                None => {
                    index.insert(prompt.clone(), identities.len());
                    identities.push(Identity { prompt, answer });
                }
            }
        }

        // Distractors are drawn from the distinct answers, in first-seen order.
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut answer_pool: Vec<String> = Vec::new();
        for identity in &identities {
            if seen.insert(identity.answer.as_str()) {
                answer_pool.push(identity.answer.clone());
            }
        }

        if answer_pool.len() < MIN_DISTINCT_ANSWERS {
            return Err(ContentError::TooFewAnswers {
                distinct: answer_pool.len(),
                required: MIN_DISTINCT_ANSWERS,
            });
        }

        Ok(IdentityTable {
            identities,
            index,
            answer_pool,
        })
    }

    /// The built-in trig identity table.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(BUILTIN_IDENTITIES.iter().copied())
    }

    /// All identities, in insertion order.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// Look up an identity by its prompt.
    pub fn identity_for(&self, prompt: &str) -> Option<&Identity> {
        self.index.get(prompt).map(|&slot| &self.identities[slot])
    }

    /// Look up the correct answer for a prompt.
    pub fn answer_for(&self, prompt: &str) -> Option<&str> {
        self.identity_for(prompt).map(|identity| identity.answer.as_str())
    }

    /// Distinct answer strings, in first-seen order.
    pub fn answer_pool(&self) -> &[String] {
        &self.answer_pool
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
