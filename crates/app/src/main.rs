use std::sync::Arc;

use dioxus::LaunchBuilder;
use quiz_core::{Environment, QuestionData, QuizConfig, SAMPLE_DATA};
use ui::{App, UiApp, build_app_context};

const CONFIG_JSON: &str = include_str!("../quiz.json");

struct StaticQuiz {
    data: Arc<QuestionData>,
    config: Arc<QuizConfig>,
    load_error: Option<String>,
}

impl UiApp for StaticQuiz {
    fn question_data(&self) -> Arc<QuestionData> {
        Arc::clone(&self.data)
    }

    fn config(&self) -> Arc<QuizConfig> {
        Arc::clone(&self.config)
    }

    fn load_error(&self) -> Option<String> {
        self.load_error.clone()
    }
}

/// Embedded configuration, with the environment overridable at build time via `QUIZ_ENV`.
fn load_config() -> Result<QuizConfig, quiz_core::Error> {
    let mut config = QuizConfig::from_json(CONFIG_JSON)?;
    if let Some(raw) = option_env!("QUIZ_ENV") {
        config = config.with_environment(Environment::parse(raw)?);
    }
    Ok(config)
}

fn log_level(environment: Environment) -> tracing::Level {
    if environment.diagnostics_enabled() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    }
}

fn load_quiz(config: QuizConfig) -> StaticQuiz {
    match QuestionData::from_json(SAMPLE_DATA) {
        Ok(data) => {
            tracing::info!(
                groups = data.groups().len(),
                sets = data.sets().count(),
                "question data loaded"
            );
            StaticQuiz {
                data: Arc::new(data),
                config: Arc::new(config),
                load_error: None,
            }
        }
        Err(err) => {
            tracing::error!("could not load question data: {err}");
            StaticQuiz {
                data: Arc::new(QuestionData::default()),
                config: Arc::new(config),
                load_error: Some(err.to_string()),
            }
        }
    }
}

fn main() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (QuizConfig::default(), Some(err)),
    };

    if let Err(err) = dioxus::logger::init(log_level(config.environment)) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("logger already initialized: {err}");
    }
    if let Some(err) = config_error {
        tracing::error!("invalid embedded configuration, using defaults: {err}");
    }

    let app: Arc<dyn UiApp> = Arc::new(load_quiz(config));
    let context = build_app_context(&app);

    let builder = LaunchBuilder::new().with_context(context);

    #[cfg(feature = "desktop")]
    let builder = {
        use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
        let title = app.config().texts.app_title.clone();
        builder.with_cfg(
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            ),
        )
    };

    builder.launch(App);
}
