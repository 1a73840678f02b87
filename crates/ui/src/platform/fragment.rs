use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::fragment_token;

// Sends the current hash once, then again on every `hashchange`. The pending
// promise keeps the channel open for the lifetime of the page.
const HASH_BRIDGE: &str = r#"
    dioxus.send(window.location.hash);
    window.addEventListener("hashchange", () => dioxus.send(window.location.hash));
    await new Promise(() => {});
"#;

/// Current address fragment token, updated on every fragment change.
pub fn use_fragment_token() -> Signal<Option<String>> {
    let mut token = use_signal(|| None::<String>);

    use_future(move || async move {
        let mut bridge = eval(HASH_BRIDGE);
        while let Ok(hash) = bridge.recv::<String>().await {
            let next = fragment_token(&hash).map(str::to_string);
            if *token.peek() != next {
                token.set(next);
            }
        }
        tracing::debug!("address bridge closed");
    });

    token
}
