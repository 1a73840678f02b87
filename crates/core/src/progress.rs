use crate::model::QuestionSet;
use crate::validation::validate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnswerStatus {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl AnswerStatus {
    /// A correct answer is final; the question accepts no further input.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, AnswerStatus::Correct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub status: AnswerStatus,
    pub completed: bool,
}

/// Answer state of one rendered question set.
///
/// Keeps a running count of correct answers, so completion is known without
/// re-inspecting every question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetProgress {
    statuses: Vec<AnswerStatus>,
    correct: usize,
}

impl SetProgress {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            statuses: vec![AnswerStatus::Unanswered; question_count],
            correct: 0,
        }
    }

    #[must_use]
    pub fn for_set(set: &QuestionSet) -> Self {
        Self::new(set.questions().len())
    }

    #[must_use]
    pub fn status(&self, index: usize) -> Option<AnswerStatus> {
        self.statuses.get(index).copied()
    }

    #[must_use]
    pub fn statuses(&self) -> &[AnswerStatus] {
        &self.statuses
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Every question answered correctly. An empty set is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.statuses.is_empty() && self.correct == self.statuses.len()
    }

    /// Validates `input` against question `index` of `set` and records the result.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn submit(
        &mut self,
        set: &QuestionSet,
        index: usize,
        input: Option<&str>,
    ) -> Option<SubmitOutcome> {
        let question = set.questions().get(index)?;
        if self.status(index)?.is_locked() {
            return Some(self.outcome(index));
        }
        let passed = validate(input, question.pattern());
        self.record(index, passed)
    }

    /// Records a checked answer for question `index`.
    ///
    /// A question that is already correct stays correct.
    pub fn record(&mut self, index: usize, passed: bool) -> Option<SubmitOutcome> {
        let status = self.statuses.get_mut(index)?;
        if !status.is_locked() {
            if passed {
                *status = AnswerStatus::Correct;
                self.correct += 1;
            } else {
                *status = AnswerStatus::Incorrect;
            }
        }

        tracing::debug!(
            questions = self.statuses.len(),
            correct = self.correct,
            "completion check"
        );
        Some(self.outcome(index))
    }

    fn outcome(&self, index: usize) -> SubmitOutcome {
        SubmitOutcome {
            status: self.statuses[index],
            completed: self.is_complete(),
        }
    }
}
