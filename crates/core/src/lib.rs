#![forbid(unsafe_code)]

pub mod class_list;
pub mod config;
pub mod controller;
pub mod error;
pub mod markup;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod text;
pub mod validation;

pub use class_list::ClassList;
pub use config::{ConfigError, Environment, QuizConfig};
pub use controller::{Chrome, Screen, run};
pub use error::Error;
pub use markup::PromptSpan;
pub use model::{DataError, QuestionData, SAMPLE_DATA};
pub use navigation::fragment_token;
pub use progress::{AnswerStatus, SetProgress, SubmitOutcome};
pub use text::normalize_space;
pub use validation::{extract_single_value, validate};
