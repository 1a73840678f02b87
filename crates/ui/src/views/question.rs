use dioxus::prelude::*;
use quiz_core::PromptSpan;

use crate::vm::{QuestionBlockVm, SetIntent};

/// One question: prompt, a single answer field and a submit button.
///
/// Submitting never navigates; the answer goes to `on_submit` as the form's
/// field values.
#[component]
pub fn QuestionBlock(
    vm: QuestionBlockVm,
    submit_label: String,
    on_submit: Callback<SetIntent>,
) -> Element {
    let mut answer = use_signal(String::new);
    let index = vm.index;

    rsx! {
        div { class: "{vm.wrapper_class}",
            p {
                for span in vm.prompt.iter() {
                    match span {
                        PromptSpan::Strong(text) => rsx! {
                            strong { "{text}" }
                        },
                        PromptSpan::Plain(text) => rsx! { "{text}" },
                    }
                }
            }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(SetIntent::answer(index, answer()));
                },
                input {
                    r#type: "text",
                    value: "{answer}",
                    disabled: vm.locked,
                    oninput: move |evt| answer.set(evt.value()),
                }
                button { r#type: "submit", disabled: vm.locked, "{submit_label}" }
            }
        }
    }
}
