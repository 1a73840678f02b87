use quiz_core::config::ClassNames;
use quiz_core::model::Question;
use quiz_core::{AnswerStatus, ClassList, PromptSpan};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBlockVm {
    pub index: usize,
    pub prompt: Vec<PromptSpan>,
    pub wrapper_class: String,
    pub status: AnswerStatus,
    pub locked: bool,
}

/// Wrapper classes for a question: the configured base classes plus one
/// status token.
#[must_use]
pub fn status_classes(status: AnswerStatus, classes: &ClassNames) -> ClassList {
    let list = ClassList::parse(&classes.question);
    match status {
        AnswerStatus::Unanswered => list,
        AnswerStatus::Correct => list.with(&classes.correct),
        AnswerStatus::Incorrect => list.with(&classes.incorrect),
    }
}

#[must_use]
pub fn map_question_block(
    index: usize,
    question: &Question,
    status: AnswerStatus,
    classes: &ClassNames,
) -> QuestionBlockVm {
    QuestionBlockVm {
        index,
        prompt: question.prompt_spans(),
        wrapper_class: status_classes(status, classes).to_string(),
        status,
        locked: status.is_locked(),
    }
}
