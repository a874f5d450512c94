//! Assessment run state machine.

use careerpath_core::Question;
use tracing::{debug, warn};

use crate::bank::QuestionBank;
use crate::error::{AssessmentError, Result};
use crate::result::AssessmentResult;

/// Where a run stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// Waiting for the answer to question `current`
    InProgress {
        /// Zero-based index of the question being asked
        current: usize,
        /// One recorded option index per answered question
        answers: Vec<u8>,
    },
    /// Every question answered
    Complete {
        /// One recorded option index per question
        answers: Vec<u8>,
    },
}

impl Default for RunState {
    fn default() -> Self {
        RunState::InProgress {
            current: 0,
            answers: Vec::new(),
        }
    }
}

/// Collects answers one question at a time and scores the finished run.
#[derive(Debug, Clone)]
pub struct AssessmentScorer {
    bank: QuestionBank,
    state: RunState,
}

impl AssessmentScorer {
    /// Start a run over a question bank.
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: RunState::default(),
        }
    }

    /// The question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Current state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, RunState::Complete { .. })
    }

    /// Index of the question being asked, `None` once complete.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            RunState::InProgress { current, .. } => Some(current),
            RunState::Complete { .. } => None,
        }
    }

    /// The question being asked.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.bank.get(i))
    }

    /// Category of the question being asked.
    pub fn current_category(&self) -> Option<&str> {
        self.current_question().map(|q| q.category.as_str())
    }

    /// One-based question number and total, for "Question x of N".
    ///
    /// A complete run reports `(N, N)`.
    pub fn position(&self) -> (usize, usize) {
        let total = self.bank.len();
        match self.current_index() {
            Some(current) => (current + 1, total),
            None => (total, total),
        }
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &[u8] {
        match &self.state {
            RunState::InProgress { answers, .. } | RunState::Complete { answers } => answers,
        }
    }

    /// Record the chosen option for the current question and advance.
    pub fn submit_answer(&mut self, option: usize) -> Result<()> {
        let RunState::InProgress { current, answers } = &mut self.state else {
            warn!("Answer {} submitted to a completed assessment", option);
            return Err(AssessmentError::AlreadyComplete);
        };

        let option_count = self.bank.questions()[*current].option_count();
        if option >= option_count {
            warn!("Option {} out of range for question {}", option, *current + 1);
            return Err(AssessmentError::InvalidOption { option, option_count });
        }

        answers.push(option as u8);
        debug!("Question {} answered with option {}", *current + 1, option);

        if *current + 1 == self.bank.len() {
            let answers = std::mem::take(answers);
            debug!("Assessment complete after {} answers", answers.len());
            self.state = RunState::Complete { answers };
        } else {
            *current += 1;
        }
        Ok(())
    }

    /// Discard all answers and start over at the first question.
    pub fn reset(&mut self) {
        debug!("Assessment reset");
        self.state = RunState::default();
    }

    /// Score the completed run. Does not change state.
    pub fn compute_result(&self) -> Result<AssessmentResult> {
        match &self.state {
            RunState::Complete { answers } => AssessmentResult::score(&self.bank, answers),
            RunState::InProgress { .. } => Err(AssessmentError::NotComplete),
        }
    }
}
