use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]*)\*\*").expect("static regex"));

/// A run of prompt text, either plain or emphasized with `**...**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSpan {
    Plain(String),
    Strong(String),
}

/// Splits a prompt on `**bold**` pairs.
///
/// Unpaired `**` stays in the plain text. Empty plain runs are omitted.
#[must_use]
pub fn parse_prompt(prompt: &str) -> Vec<PromptSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for captures in BOLD.captures_iter(prompt) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(PromptSpan::Plain(prompt[last..whole.start()].to_string()));
        }
        spans.push(PromptSpan::Strong(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < prompt.len() {
        spans.push(PromptSpan::Plain(prompt[last..].to_string()));
    }
    spans
}
