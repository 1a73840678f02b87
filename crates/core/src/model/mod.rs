mod data;
mod group;
mod ids;
mod question;
mod question_set;

pub use data::{DataError, QuestionData, SAMPLE_DATA};
pub use group::{Group, GroupDraft};
pub use ids::QuestionSetId;
pub use question::{PatternError, Question, QuestionDraft, ValidationPattern};
pub use question_set::{QuestionSet, QuestionSetDraft};
