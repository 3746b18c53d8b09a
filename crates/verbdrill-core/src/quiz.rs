//! Multiple-choice round state machine.
//!
//! A round holds four options drawn from the catalog, one of which is the
//! prompt. Correctness is never stored: [`mark`] derives it from the
//! `(answer_index, selection, option)` triple each time a round is rendered.

use rand::Rng;

use crate::model::{Catalog, VerbRecord};

/// Number of options in every round.
pub const ROUND_SIZE: usize = 4;

/// Where the session is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round yet, either because the catalog is not loaded or is empty.
    Loading,
    /// A round is shown and no option has been chosen.
    RoundActive,
    /// An option has been chosen; only `next` moves on.
    RoundResolved,
}

/// Classification of one option for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Neutral,
    Correct,
    Wrong,
}

/// Classify option `index` (0-based) given the round's answer and the
/// 1-based `selection` (0 = nothing chosen).
pub fn mark(answer_index: usize, selection: usize, index: usize) -> Mark {
    if selection == 0 {
        Mark::Neutral
    } else if index == answer_index {
        Mark::Correct
    } else if index == selection - 1 {
        Mark::Wrong
    } else {
        Mark::Neutral
    }
}

/// One multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    options: Vec<VerbRecord>,
    answer_index: usize,
    selection: usize,
}

impl QuizRound {
    /// Assemble a round from explicit parts. Returns `None` unless there
    /// are exactly [`ROUND_SIZE`] options and `answer_index` is in range.
    pub fn new(options: Vec<VerbRecord>, answer_index: usize) -> Option<Self> {
        if options.len() != ROUND_SIZE || answer_index >= ROUND_SIZE {
            return None;
        }
        Some(Self {
            options,
            answer_index,
            selection: 0,
        })
    }

    /// Sample a round from `catalog`.
    ///
    /// Each slot is drawn independently and uniformly, so the same verb can
    /// appear more than once. The prompt index is then drawn uniformly over
    /// the four slots. Returns `None` for an empty catalog.
    pub fn build<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }
        let options = (0..ROUND_SIZE)
            .filter_map(|_| catalog.get(rng.gen_range(0..catalog.len())).cloned())
            .collect();
        let answer_index = rng.gen_range(0..ROUND_SIZE);
        Self::new(options, answer_index)
    }

    pub fn options(&self) -> &[VerbRecord] {
        &self.options
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// 1-based chosen option, 0 when nothing has been chosen.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The verb being tested.
    pub fn prompt(&self) -> &VerbRecord {
        &self.options[self.answer_index]
    }

    pub fn state(&self) -> RoundState {
        if self.selection == 0 {
            RoundState::RoundActive
        } else {
            RoundState::RoundResolved
        }
    }

    /// Choose option `index` (0-based).
    ///
    /// Returns `true` if the selection was recorded. A resolved round or an
    /// out-of-range index leaves the round untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if self.state() != RoundState::RoundActive || index >= ROUND_SIZE {
            return false;
        }
        self.selection = index + 1;
        true
    }

    /// Whether the recorded selection is the prompt.
    pub fn is_correct(&self) -> Option<bool> {
        (self.selection > 0).then(|| self.selection - 1 == self.answer_index)
    }

    /// Mark for option `index`, derived on every call.
    pub fn mark(&self, index: usize) -> Mark {
        mark(self.answer_index, self.selection, index)
    }
}
