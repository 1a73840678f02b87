use dioxus::prelude::*;

use crate::context::AppContext;
use crate::platform::use_fragment_token;
use crate::views::QuizView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let config = ctx.config();
    let render_failed = config.texts.render_failed.clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{config.texts.app_title}" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            h1 { "{config.texts.app_title}" }
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    tracing::error!("quiz view failed to render: {errors:?}");
                    rsx! {
                        Fatal { message: render_failed.clone(), detail: format!("{errors:?}") }
                    }
                },
                if let Some(error) = ctx.load_error() {
                    Fatal { message: config.texts.load_failed.clone(), detail: error.to_string() }
                } else {
                    FragmentRoutedQuiz {}
                }
            }
        }
    }
}

#[component]
fn FragmentRoutedQuiz() -> Element {
    let token = use_fragment_token();
    rsx! {
        QuizView { token: token() }
    }
}

#[component]
fn Fatal(message: String, detail: String) -> Element {
    rsx! {
        div { class: "fatal",
            h2 { "{message}" }
            pre { "{detail}" }
        }
    }
}
