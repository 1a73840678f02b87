use std::sync::Arc;

use quiz_core::{QuestionData, QuizConfig};

pub trait UiApp: Send + Sync {
    fn question_data(&self) -> Arc<QuestionData>;
    fn config(&self) -> Arc<QuizConfig>;

    /// Set when the question data could not be loaded; the app shows it instead of the quiz.
    fn load_error(&self) -> Option<String> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    data: Arc<QuestionData>,
    config: Arc<QuizConfig>,
    load_error: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            data: app.question_data(),
            config: app.config(),
            load_error: app.load_error(),
        }
    }

    #[must_use]
    pub fn data(&self) -> Arc<QuestionData> {
        Arc::clone(&self.data)
    }

    #[must_use]
    pub fn config(&self) -> Arc<QuizConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
