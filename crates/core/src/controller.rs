//! Navigation state machine: which view a fragment token selects, and which
//! surrounding regions are visible for it.

use crate::class_list::ClassList;
use crate::model::{QuestionData, QuestionSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Every group with links to its sets.
    Index,
    /// One set's questions.
    Detail(&'a QuestionSet),
}

/// Selects the screen for a navigation token.
///
/// A missing token and a token that matches no set both select the index.
#[must_use]
pub fn run<'a>(data: &'a QuestionData, token: Option<&str>) -> Screen<'a> {
    let Some(token) = token.filter(|token| !token.is_empty()) else {
        tracing::info!("navigation: no token, showing index");
        return Screen::Index;
    };

    match data.find_set(token) {
        Some(set) => {
            tracing::info!("navigation: showing set `{}`", set.id());
            Screen::Detail(set)
        }
        None => {
            tracing::info!("navigation: unknown token `{token}`, showing index");
            Screen::Index
        }
    }
}

/// Class lists of the help and navigation regions.
///
/// Both start hidden. Each navigation adds or removes the hidden token, and
/// the lists carry over between navigations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    hidden_class: String,
    help: ClassList,
    navigation: ClassList,
}

impl Chrome {
    #[must_use]
    pub fn new(hidden_class: impl Into<String>) -> Self {
        let hidden_class = hidden_class.into();
        let hidden = ClassList::new().with(&hidden_class);
        Self {
            help: hidden.clone(),
            navigation: hidden,
            hidden_class,
        }
    }

    pub fn apply(&mut self, screen: &Screen<'_>) {
        match screen {
            Screen::Index => {
                self.help.add(&self.hidden_class);
                self.navigation.add(&self.hidden_class);
            }
            Screen::Detail(_) => {
                self.navigation.remove(&self.hidden_class);
                self.help.remove(&self.hidden_class);
            }
        }
    }

    #[must_use]
    pub fn help(&self) -> &ClassList {
        &self.help
    }

    #[must_use]
    pub fn navigation(&self) -> &ClassList {
        &self.navigation
    }

    #[must_use]
    pub fn help_visible(&self) -> bool {
        !self.help.contains(&self.hidden_class)
    }

    #[must_use]
    pub fn navigation_visible(&self) -> bool {
        !self.navigation.contains(&self.hidden_class)
    }
}
