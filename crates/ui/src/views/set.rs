use dioxus::prelude::*;
use quiz_core::{SetProgress, extract_single_value};

use crate::context::AppContext;
use crate::views::QuestionBlock;
use crate::vm::{SetIntent, SetScreenVm, map_set_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Questions of one set. Answer state lives here and is dropped when the view
/// is left.
#[component]
pub fn SetView(set_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let data = ctx.data();
    let config = ctx.config();

    let initial = data.find_set(&set_id).map(SetProgress::for_set).unwrap_or_default();
    let mut progress = use_signal(move || initial);

    let dispatch_intent = {
        let data = data.clone();
        let set_id = set_id.clone();
        use_callback(move |intent: SetIntent| match intent {
            SetIntent::Submit { index, fields } => {
                let Some(set) = data.find_set(&set_id) else {
                    return;
                };
                let outcome = progress
                    .write()
                    .submit(set, index, extract_single_value(&fields));
                if outcome.is_some_and(|outcome| outcome.completed) {
                    tracing::info!("question set `{set_id}` completed");
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SetTestHandles>() {
                handles.register(dispatch_intent, progress);
            }
        }
    }

    let Some(set) = data.find_set(&set_id) else {
        return rsx! {};
    };
    let screen = map_set_screen(set, &progress.read(), &config);
    let submit_label = config.texts.submit_label.clone();
    let message_class = config.classes.message.clone();

    match screen {
        SetScreenVm::Completed { message } => rsx! {
            h2 { id: "gratHeading", "{message}" }
        },
        SetScreenVm::Empty { title, message } => rsx! {
            h2 { "{title}" }
            div { class: "{message_class}",
                p { "{message}" }
            }
        },
        SetScreenVm::Questions { title, blocks } => rsx! {
            h2 { "{title}" }
            for block in blocks {
                QuestionBlock {
                    key: "{block.index}",
                    vm: block.clone(),
                    submit_label: submit_label.clone(),
                    on_submit: dispatch_intent,
                }
            }
        },
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SetTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SetIntent>>>>,
    progress: Rc<RefCell<Option<Signal<SetProgress>>>>,
}

#[cfg(test)]
impl SetTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SetIntent>, progress: Signal<SetProgress>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.progress.borrow_mut() = Some(progress);
    }

    pub(crate) fn dispatch(&self) -> Callback<SetIntent> {
        (*self.dispatch.borrow()).expect("set dispatch registered")
    }

    pub(crate) fn progress(&self) -> Signal<SetProgress> {
        (*self.progress.borrow()).expect("set progress registered")
    }
}
