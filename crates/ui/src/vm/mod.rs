mod chrome_vm;
mod index_vm;
mod question_vm;
mod set_vm;

pub use chrome_vm::{ChromeVm, map_chrome};
pub use index_vm::{IndexGroupVm, SetLinkVm, map_index};
pub use question_vm::{QuestionBlockVm, map_question_block, status_classes};
pub use set_vm::{SetIntent, SetScreenVm, map_set_screen};
