use std::collections::HashSet;

use thiserror::Error;

use crate::model::group::{Group, GroupDraft};
use crate::model::ids::QuestionSetId;
use crate::model::question_set::QuestionSet;

/// The sample question data shipped with the crate.
pub const SAMPLE_DATA: &str = include_str!("../../data/questions.json");

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    #[error("question data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

//
// ─── DATA ──────────────────────────────────────────────────────────────────────
//

/// All groups of question sets, in display order.
///
/// Immutable once loaded; lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionData {
    groups: Vec<Group>,
}

impl QuestionData {
    /// Parses and compiles question data in its JSON form.
    ///
    /// Patterns that do not compile are logged and leave their question
    /// unanswerable; they never fail the load.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Json` when the input is not question data.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let drafts: Vec<GroupDraft> = serde_json::from_str(json)?;
        Ok(Self::from_drafts(drafts))
    }

    #[must_use]
    pub fn from_drafts(drafts: Vec<GroupDraft>) -> Self {
        let data = Self {
            groups: drafts.into_iter().map(GroupDraft::compile).collect(),
        };

        for id in data.duplicate_set_ids() {
            tracing::warn!("question set id `{id}` is defined more than once; the first one wins");
        }

        data
    }

    /// The bundled sample data.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn sample() -> Result<Self, DataError> {
        Self::from_json(SAMPLE_DATA)
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn sets(&self) -> impl Iterator<Item = &QuestionSet> {
        self.groups.iter().flat_map(|group| group.sets().iter())
    }

    /// First set whose id equals `id`, scanning groups then sets in order.
    #[must_use]
    pub fn find_set(&self, id: &str) -> Option<&QuestionSet> {
        let found = self.sets().find(|set| set.id().as_str() == id);
        if found.is_none() {
            tracing::debug!("find_set: question set `{id}` not found");
        }
        found
    }

    /// Ids that occur more than once, each reported once, in data order.
    #[must_use]
    pub fn duplicate_set_ids(&self) -> Vec<QuestionSetId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for set in self.sets() {
            let id = set.id();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id.clone());
            }
        }
        duplicates
    }
}
