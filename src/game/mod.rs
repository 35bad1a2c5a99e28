//! Game state and round logic
//!
//! [`Game`] owns everything that changes while playing: the running score and
//! the [`RecencyList`] of missed prompts. Question selection and option
//! building are sampling operations over the immutable
//! [`IdentityTable`](crate::content::IdentityTable); they take the RNG as an
//! argument so tests can drive them with a seeded generator.

pub mod recency;

pub use recency::RecencyList;

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::{Identity, IdentityTable};

/// Distractors shown next to the correct answer in every round.
const DISTRACTOR_COUNT: usize = 2;

/// Tuning knobs for the drill loop.
///
/// The bias and cap are tuning constants, not invariants; they are carried
/// here instead of being buried in the selection code.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Probability of drawing the next question from the recency list
    /// (when it is non-empty). Must be within `0.0..=1.0`.
    pub recency_bias: f64,
    /// Maximum number of missed prompts remembered.
    pub recency_cap: usize,
    /// Points awarded per correct answer.
    pub score_increment: u32,
    /// How long the feedback screen stays up before the next round.
    pub feedback_dwell: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            recency_bias: 0.5,
            recency_cap: 5,
            score_increment: 10,
            feedback_dwell: Duration::from_secs(1),
        }
    }
}

/// One question as presented: the prompt, its correct answer, and the three
/// shuffled option strings (one correct, two distractors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub prompt: String,
    pub answer: String,
    pub options: Vec<String>,
}

/// Outcome of judging a chosen option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// All mutable quiz state, owned in one place and threaded through the event
/// loop rather than living in globals.
#[derive(Debug)]
pub struct Game {
    table: IdentityTable,
    tuning: Tuning,
    score: u32,
    recency: RecencyList,
}

impl Game {
    pub fn new(table: IdentityTable, tuning: Tuning) -> Self {
        let recency = RecencyList::new(tuning.recency_cap);
        Game {
            table,
            tuning,
            score: 0,
            recency,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn recency(&self) -> &RecencyList {
        &self.recency
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn table(&self) -> &IdentityTable {
        &self.table
    }

    /// Produce the next round: pick a prompt, then lay three options around
    /// its answer.
    pub fn next_round<R: Rng>(&self, rng: &mut R) -> Round {
        let identity = self.select_identity(rng);
        let options = self.build_options(rng, &identity.answer);
        Round {
            prompt: identity.prompt.clone(),
            answer: identity.answer.clone(),
            options,
        }
    }

    /// Judge the option at `choice` against the round's answer, updating
    /// score and recency accordingly.
    pub fn judge(&mut self, round: &Round, choice: usize) -> Verdict {
        if round.options[choice] == round.answer {
            self.score += self.tuning.score_increment;
            self.recency.record_correct(&round.prompt);
            Verdict::Correct
        } else {
            self.recency.record_miss(&round.prompt);
            Verdict::Wrong
        }
    }

    /// With probability `recency_bias`, re-present a recently-missed prompt;
    /// otherwise draw uniformly from the whole table. A soft bias only: a
    /// missed question may or may not come back soon.
    fn select_identity<R: Rng>(&self, rng: &mut R) -> &Identity {
        if !self.recency.is_empty() && rng.gen_bool(self.tuning.recency_bias) {
            if let Some(identity) = self
                .recency
                .choose(rng)
                .and_then(|prompt| self.table.identity_for(prompt))
            {
                return identity;
            }
        }
        self.table
            .identities()
            .choose(rng)
            .expect("identity table is never empty")
    }

    /// Two distinct distractors from the answer pool (minus the correct
    /// answer), plus the correct answer, shuffled.
    fn build_options<R: Rng>(&self, rng: &mut R, correct: &str) -> Vec<String> {
        let pool: Vec<&str> = self
            .table
            .answer_pool()
            .iter()
            .map(String::as_str)
            .filter(|answer| *answer != correct)
            .collect();

        let mut options: Vec<String> = pool
            .choose_multiple(rng, DISTRACTOR_COUNT)
            .map(|answer| (*answer).to_owned())
            .collect();
        options.push(correct.to_owned());
        options.shuffle(rng);
        options
    }
}
