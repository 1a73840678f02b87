mod index;
mod question;
mod quiz;
mod set;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use index::IndexView;
pub use question::QuestionBlock;
pub use quiz::QuizView;
pub use set::SetView;
