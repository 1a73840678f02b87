use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a question set, also used as the address fragment token.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSetId(String);

impl QuestionSetId {
    /// Creates a new `QuestionSetId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address fragment that navigates to this set, e.g. `#ak_a`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Debug for QuestionSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionSetId({})", self.0)
    }
}

impl fmt::Display for QuestionSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
