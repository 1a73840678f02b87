use quiz_core::model::QuestionSet;
use quiz_core::{QuizConfig, SetProgress};

use super::question_vm::{QuestionBlockVm, map_question_block};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetIntent {
    /// A question's form was submitted with these field values.
    Submit { index: usize, fields: Vec<String> },
}

impl SetIntent {
    /// Submission of a question form whose only field holds `answer`.
    #[must_use]
    pub fn answer(index: usize, answer: impl Into<String>) -> Self {
        SetIntent::Submit {
            index,
            fields: vec![answer.into()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetScreenVm {
    Empty { title: String, message: String },
    Questions { title: String, blocks: Vec<QuestionBlockVm> },
    Completed { message: String },
}

#[must_use]
pub fn map_set_screen(set: &QuestionSet, progress: &SetProgress, config: &QuizConfig) -> SetScreenVm {
    if progress.is_complete() {
        return SetScreenVm::Completed {
            message: config.texts.congratulation.clone(),
        };
    }

    let title = set.title().to_string();
    if set.is_empty() {
        return SetScreenVm::Empty {
            title,
            message: config.texts.empty_set.clone(),
        };
    }

    let blocks = set
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let status = progress.status(index).unwrap_or_default();
            map_question_block(index, question, status, &config.classes)
        })
        .collect();

    SetScreenVm::Questions { title, blocks }
}
