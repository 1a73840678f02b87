use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::markup::{PromptSpan, parse_prompt};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    #[error("validation pattern `{pattern}` does not compile: {source}")]
    Invalid {
        pattern: String,
        source: regex::Error,
    },
}

//
// ─── PATTERN ───────────────────────────────────────────────────────────────────
//

/// A compiled, case-insensitive answer pattern.
///
/// Keeps the original source around for diagnostics and equality. A source
/// that did not compile is kept as a pattern that never matches.
#[derive(Clone)]
pub struct ValidationPattern {
    source: String,
    regex: Option<Regex>,
}

impl ValidationPattern {
    /// Compiles `source` as a case-insensitive regular expression.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::Invalid` when the expression does not compile.
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        let source = source.into();
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| PatternError::Invalid {
                pattern: source.clone(),
                source: err,
            })?;
        Ok(Self {
            source,
            regex: Some(regex),
        })
    }

    /// A pattern that rejects every answer.
    #[must_use]
    pub fn never_matching(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            regex: None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(haystack))
    }
}

impl PartialEq for ValidationPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ValidationPattern {}

impl fmt::Debug for ValidationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidationPattern({self})")
    }
}

impl fmt::Display for ValidationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/i", self.source)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A question as it appears in the data file, before its pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question_text: String,
    pub validation_regexp: String,
}

impl QuestionDraft {
    /// Compiles the draft into a question.
    ///
    /// A pattern that does not compile still yields a question, one that
    /// accepts no answer. The compile error is returned next to it.
    #[must_use]
    pub fn compile(self) -> (Question, Option<PatternError>) {
        let (pattern, error) = match ValidationPattern::new(self.validation_regexp.as_str()) {
            Ok(pattern) => (pattern, None),
            Err(err) => (
                ValidationPattern::never_matching(self.validation_regexp),
                Some(err),
            ),
        };
        (Question::new(self.question_text, pattern), error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt_text: String,
    pattern: ValidationPattern,
}

impl Question {
    #[must_use]
    pub fn new(prompt_text: impl Into<String>, pattern: ValidationPattern) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            pattern,
        }
    }

    /// Raw prompt, possibly containing `**bold**` markup.
    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Prompt split into plain and emphasized spans.
    #[must_use]
    pub fn prompt_spans(&self) -> Vec<PromptSpan> {
        parse_prompt(&self.prompt_text)
    }

    #[must_use]
    pub fn pattern(&self) -> &ValidationPattern {
        &self.pattern
    }
}
