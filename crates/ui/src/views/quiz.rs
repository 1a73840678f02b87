use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use quiz_core::{Chrome, Screen, run};

use crate::context::AppContext;
use crate::views::{IndexView, SetView};
use crate::vm::map_chrome;

/// Renders the screen selected by `token`, plus the help and navigation regions.
#[component]
pub fn QuizView(token: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let data = ctx.data();
    let config = ctx.config();
    let chrome = use_hook(|| Rc::new(RefCell::new(Chrome::new(&config.classes.hidden))));

    let screen = run(&data, token.as_deref());
    chrome.borrow_mut().apply(&screen);
    let chrome_vm = map_chrome(&chrome.borrow());

    let regions = &config.regions;
    let texts = &config.texts;

    rsx! {
        nav { id: "{regions.navigation}", class: chrome_vm.navigation_class,
            a { href: "#", "{texts.back_to_index}" }
        }
        div { id: "{regions.help}", class: chrome_vm.help_class,
            p { "{texts.help}" }
        }
        div { id: "{regions.content}",
            match screen {
                Screen::Index => rsx! {
                    IndexView {}
                },
                Screen::Detail(set) => {
                    let set_id = set.id().to_string();
                    rsx! {
                        SetView { key: "{set_id}", set_id: set_id.clone() }
                    }
                }
            }
        }
    }
}
