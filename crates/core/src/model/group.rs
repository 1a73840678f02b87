use serde::{Deserialize, Serialize};

use crate::model::question_set::{QuestionSet, QuestionSetDraft};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDraft {
    pub group_title: String,
    #[serde(default)]
    pub question_sets: Vec<QuestionSetDraft>,
}

impl GroupDraft {
    #[must_use]
    pub fn compile(self) -> Group {
        Group {
            title: self.group_title,
            sets: self
                .question_sets
                .into_iter()
                .map(QuestionSetDraft::compile)
                .collect(),
        }
    }
}

/// A titled group of question sets, shown as one block on the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    title: String,
    sets: Vec<QuestionSet>,
}

impl Group {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sets(&self) -> &[QuestionSet] {
        &self.sets
    }
}
