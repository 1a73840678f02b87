use dioxus::prelude::*;
use quiz_core::{AnswerStatus, QuestionData};

use super::test_harness::{setup_quiz_harness, setup_quiz_harness_with_data};

const CONGRATULATION: &str = "Kaikki oikein! Onneksi olkoon!";

fn two_question_data() -> QuestionData {
    QuestionData::from_json(
        r#"[{ "groupTitle": "Ryhmä", "questionSets": [
            { "questionSetTitle": "Kaksi", "questionSetId": "kaksi", "questionSet": [
                { "questionText": "Ensimmäinen **tärkeä** kysymys?", "validationRegexp": "^yksi$" },
                { "questionText": "Toinen?", "validationRegexp": "^kaksi$" }
            ] },
            { "questionSetTitle": "Tyhjä", "questionSetId": "tyhja", "questionSet": [] }
        ] }]"#,
    )
    .expect("test data")
}

#[test]
fn index_view_smoke_renders_groups_and_links() {
    let mut harness = setup_quiz_harness(None);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("<h2>").count(), 2, "expected two group headings in {html}");
    assert_eq!(html.matches("<li>").count(), 4, "expected four links in {html}");
    assert!(html.contains("Kysymysryhmä A"), "missing group title in {html}");
    for href in ["#ak_a", "#ak_b", "#yk_a", "#yk_b"] {
        let expected = format!("href=\"{href}\"");
        assert!(html.contains(&expected), "missing {expected} in {html}");
    }
    assert!(
        html.contains("id=\"ohje\" class=\"piilotettu\""),
        "help should be hidden in {html}"
    );
    assert!(!html.contains("<form"), "index has no forms: {html}");
}

#[test]
fn unknown_token_falls_back_to_index() {
    let mut harness = setup_quiz_harness(Some("zz_z"));
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("<li>").count(), 4, "expected index in {html}");
    assert!(html.contains("class=\"wrap\""), "missing group wrapper in {html}");
}

#[test]
fn set_view_smoke_renders_question_and_reveals_help() {
    let mut harness = setup_quiz_harness(Some("ak_a"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Kysymyssarja A"), "missing set title in {html}");
    assert!(html.contains("Kysymys?"), "missing prompt in {html}");
    assert!(html.contains("Tarkista"), "missing submit label in {html}");
    assert_eq!(html.matches("<form").count(), 1, "expected one form in {html}");
    assert!(html.contains("<div id=\"ohje\">"), "help should be visible in {html}");
    assert!(
        html.contains("<nav id=\"navigaatio\">"),
        "navigation should be visible in {html}"
    );
}

#[test]
fn correct_answer_completes_single_question_set() {
    let mut harness = setup_quiz_harness(Some("ak_a"));
    harness.rebuild();

    harness.submit(0, "  vastaus ");
    let html = harness.render();

    assert!(html.contains(CONGRATULATION), "missing congratulation in {html}");
    assert!(
        html.contains("<h2 id=\"gratHeading\">"),
        "congratulation heading keeps its id in {html}"
    );
    assert!(!html.contains("<form"), "question UI should be gone: {html}");
    assert!(!html.contains("Kysymyssarja A"), "set title should be gone: {html}");
    let progress = harness.set_handles.progress();
    let status = harness.dom.in_runtime(|| progress.peek().status(0));
    assert_eq!(status, Some(AnswerStatus::Correct));
}

#[test]
fn incorrect_answer_allows_retry() {
    let mut harness = setup_quiz_harness(Some("ak_b"));
    harness.rebuild();

    harness.submit(0, "väärä");
    let html = harness.render();
    assert!(
        html.contains("class=\"question incorrect\""),
        "missing incorrect marker in {html}"
    );
    assert!(html.contains("<form"), "form should stay for retry: {html}");
    assert!(!html.contains(CONGRATULATION), "not complete yet: {html}");

    harness.submit(0, "Vaihtoehto");
    let html = harness.render();
    assert!(html.contains(CONGRATULATION), "missing congratulation in {html}");
}

#[test]
fn correct_answer_locks_only_its_question() {
    let mut harness = setup_quiz_harness_with_data(two_question_data(), Some("kaksi"));
    harness.rebuild();

    harness.submit(0, "YKSI");
    let html = harness.render();

    assert!(
        html.contains("class=\"question correct\""),
        "missing correct marker in {html}"
    );
    assert!(html.contains("disabled"), "answered question should be disabled: {html}");
    assert_eq!(html.matches("<form").count(), 2, "both forms remain: {html}");
    assert!(html.contains("<strong>tärkeä</strong>"), "missing emphasis in {html}");
    assert!(!html.contains(CONGRATULATION), "not complete yet: {html}");

    harness.submit(1, "kaksi");
    let html = harness.render();
    assert!(html.contains(CONGRATULATION), "missing congratulation in {html}");
}

#[test]
fn malformed_submission_is_incorrect() {
    let mut harness = setup_quiz_harness(Some("ak_a"));
    harness.rebuild();

    harness.submit_fields(0, Vec::new());
    let html = harness.render();
    assert!(
        html.contains("class=\"question incorrect\""),
        "missing incorrect marker in {html}"
    );
}

#[test]
fn empty_set_shows_message() {
    let mut harness = setup_quiz_harness_with_data(two_question_data(), Some("tyhja"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Tyhjä"), "missing set title in {html}");
    assert!(
        html.contains("Ei vielä kysymyksiä tässä osiossa"),
        "missing empty message in {html}"
    );
    assert!(html.contains("class=\"message\""), "missing message block in {html}");
    assert!(!html.contains("<form"), "empty set has no forms: {html}");
}

#[test]
fn unsupported_pattern_disables_only_its_question() {
    let data = QuestionData::from_json(
        r#"[{ "groupTitle": "Ryhmä", "questionSets": [
            { "questionSetTitle": "Rikki", "questionSetId": "rikki", "questionSet": [
                { "questionText": "Kissa?", "validationRegexp": "^(?!x)(kissa)$" },
                { "questionText": "Koira?", "validationRegexp": "^koira$" }
            ] },
            { "questionSetTitle": "Ehjä", "questionSetId": "ehja", "questionSet": [
                { "questionText": "Kysymys?", "validationRegexp": "^vastaus$" }
            ] }
        ] }]"#,
    )
    .expect("data with one unsupported pattern still loads");

    let mut harness = setup_quiz_harness_with_data(data, Some("rikki"));
    harness.rebuild();
    assert_eq!(harness.render().matches("<form").count(), 2, "both questions render");

    harness.submit(0, "kissa");
    harness.submit(1, "koira");
    let html = harness.render();
    assert!(html.contains("class=\"question incorrect\""), "missing marker in {html}");
    assert!(html.contains("class=\"question correct\""), "missing marker in {html}");
    assert!(!html.contains(CONGRATULATION), "set cannot complete: {html}");

    harness.navigate(Some("ehja"));
    harness.submit(0, "vastaus");
    let html = harness.render();
    assert!(html.contains(CONGRATULATION), "other sets still work: {html}");
}

#[test]
fn navigation_switches_views_and_resets_answers() {
    let mut harness = setup_quiz_harness(None);
    harness.rebuild();

    harness.navigate(Some("ak_a"));
    harness.submit(0, "väärä");
    let html = harness.render();
    assert!(html.contains("class=\"question incorrect\""), "missing marker in {html}");

    harness.navigate(None);
    let html = harness.render();
    assert_eq!(html.matches("<li>").count(), 4, "expected index in {html}");
    assert!(
        html.contains("id=\"ohje\" class=\"piilotettu\""),
        "help should be hidden again in {html}"
    );

    harness.navigate(Some("ak_a"));
    let html = harness.render();
    assert!(html.contains("class=\"question\""), "answers should reset: {html}");
    assert!(!html.contains("incorrect"), "answers should reset: {html}");
}
