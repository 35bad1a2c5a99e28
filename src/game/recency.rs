//! Bounded history of recently-missed prompts
//!
//! The list biases question selection toward material the player keeps
//! getting wrong. It is ordered oldest-first, never holds duplicates, and
//! evicts its oldest entry once the cap is exceeded.

use rand::seq::SliceRandom;
use rand::Rng;

/// Recently-missed prompts, capped and duplicate-free.
#[derive(Debug, Clone)]
pub struct RecencyList {
    entries: Vec<String>,
    cap: usize,
}

impl RecencyList {
    pub fn new(cap: usize) -> Self {
        RecencyList {
            entries: Vec::new(),
            cap,
        }
    }

    /// Record a miss. A prompt already on the list stays where it is; a new
    /// prompt is appended, evicting the oldest entry if the list is full.
    pub fn record_miss(&mut self, prompt: &str) {
        if self.contains(prompt) {
            return;
        }
        self.entries.push(prompt.to_owned());
        if self.entries.len() > self.cap {
            self.entries.remove(0);
        }
    }

    /// Record a correct answer, clearing the prompt from the list if present.
    pub fn record_correct(&mut self, prompt: &str) {
        self.entries.retain(|entry| entry != prompt);
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.entries.iter().any(|entry| entry == prompt)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries oldest-first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Pick one entry uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.entries.choose(rng).map(String::as_str)
    }
}
