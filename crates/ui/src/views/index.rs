use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_index;

#[component]
pub fn IndexView() -> Element {
    let ctx = use_context::<AppContext>();
    let group_class = ctx.config().classes.group.clone();
    let groups = map_index(&ctx.data());

    rsx! {
        for group in groups {
            div { class: "{group_class}",
                h2 { "{group.title}" }
                ul {
                    for link in group.links {
                        li {
                            a { href: "{link.href}", "{link.title}" }
                        }
                    }
                }
            }
        }
    }
}
