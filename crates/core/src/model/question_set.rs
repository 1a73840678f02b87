use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionSetId;
use crate::model::question::{Question, QuestionDraft};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetDraft {
    pub question_set_title: String,
    pub question_set_id: QuestionSetId,
    #[serde(default)]
    pub question_set: Vec<QuestionDraft>,
}

impl QuestionSetDraft {
    /// Compiles every question of the set.
    ///
    /// A question whose pattern does not compile is kept and logged at `warn`;
    /// it accepts no answer, and the rest of the set is unaffected.
    #[must_use]
    pub fn compile(self) -> QuestionSet {
        let id = self.question_set_id;
        let questions = self
            .question_set
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                let (question, error) = draft.compile();
                if let Some(error) = error {
                    tracing::warn!(
                        set_id = %id,
                        index,
                        "question will never accept an answer: {error}"
                    );
                }
                question
            })
            .collect();

        QuestionSet::new(id, self.question_set_title, questions)
    }
}

/// An ordered set of questions, addressable by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    id: QuestionSetId,
    title: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    #[must_use]
    pub fn new(id: QuestionSetId, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id,
            title: title.into(),
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionSetId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
