use forum_extract::balance::resolve;
use forum_extract::{extract_by_tag, Error, ExtractOptions};

#[test]
fn returns_one_string_per_occurrence_in_document_order() {
    for n in [0usize, 1, 2, 7] {
        let html: String = (0..n)
            .map(|i| format!(r#"<p>filler</p><div class="item">ITEM_{i}</div>"#))
            .collect();

        let out = extract_by_tag(&html, &ExtractOptions::by_class("item"))
            .expect("expected Ok(_)");
        let expected: Vec<String> = (0..n).map(|i| format!("ITEM_{i}")).collect();
        assert_eq!(out, expected);
    }
}

#[test]
fn nested_wrappers_are_not_truncated_at_first_inner_close() {
    for depth in 1..=5 {
        let inner_open = r#"<div class="wrap">"#.repeat(depth - 1);
        let inner_close = "</div>".repeat(depth - 1);
        let html = format!(
            r#"<div class="outer"><div class="target">{inner_open}BODY{inner_close}</div></div>"#
        );

        let out = extract_by_tag(&html, &ExtractOptions::by_class("target").keep_html())
            .expect("expected Ok(_)");
        assert_eq!(out, vec![format!("{inner_open}BODY{inner_close}")]);
    }
}

#[test]
fn raw_round_trip_excludes_closing_tag() {
    let html = r#"<div class="c">A<div>B</div>C</div>"#;
    let out = extract_by_tag(html, &ExtractOptions::by_class("c").keep_html())
        .expect("expected Ok(_)");
    assert_eq!(out, vec!["A<div>B</div>C"]);
}

#[test]
fn cleaned_output_strips_nested_markup() {
    let html = r#"
        <div id="post">
            <div class="quote">quoted<br>text</div>
            reply
        </div>
    "#;
    let out = extract_by_tag(html, &ExtractOptions::by_id("post")).expect("expected Ok(_)");
    assert_eq!(out, vec!["quoted\ntext\n            reply"]);
}

#[test]
fn element_nested_in_matching_element_is_returned_separately() {
    let html = r#"<div class="c">outer<div class="c">inner</div></div>"#;
    let out = extract_by_tag(html, &ExtractOptions::by_class("c").keep_html())
        .expect("expected Ok(_)");
    assert_eq!(out, vec![r#"outer<div class="c">inner</div>"#, "inner"]);
}

#[test]
fn other_tag_names_use_their_own_depth() {
    let html = r#"<section id="s"><div>a</div><section>b</section></section><section>x</section>"#;
    let out = extract_by_tag(html, &ExtractOptions::by_id("s").with_tag("section").keep_html())
        .expect("expected Ok(_)");
    assert_eq!(out, vec!["<div>a</div><section>b</section>"]);
}

#[test]
fn unterminated_element_is_unbalanced_markup() {
    let html = r#"<div class="c">unterminated"#;
    match extract_by_tag(html, &ExtractOptions::by_class("c")) {
        Err(Error::UnbalancedMarkup { tag, .. }) => assert_eq!(tag, "div"),
        other => panic!("expected UnbalancedMarkup, got {other:?}"),
    }
}

#[test]
fn selector_must_be_exactly_one_of_class_or_id() {
    let none = ExtractOptions::default();
    let both = ExtractOptions {
        class_name: Some("c".into()),
        id_name: Some("i".into()),
        ..ExtractOptions::default()
    };
    for options in [none, both] {
        assert!(matches!(
            extract_by_tag("<div class=\"c\" id=\"i\"></div>", &options),
            Err(Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn regex_metacharacters_in_selector_are_literal() {
    let html = r#"<div class="a+b (c)">yes</div><div class="aab c">no</div>"#;
    let out = extract_by_tag(html, &ExtractOptions::by_class("a+b (c)")).expect("expected Ok(_)");
    assert_eq!(out, vec!["yes"]);
}

#[test]
fn error_messages_name_the_problem() {
    let err = extract_by_tag("<div class=\"c\">", &ExtractOptions::by_class("c"))
        .expect_err("expected Err(_)");
    assert!(err.to_string().contains("<div>"));
    assert!(err.to_string().contains("never closed"));
}

#[test]
fn long_run_of_unclosed_nested_tags_is_unbalanced_markup() {
    let html = format!(r#"<div class="c">{}"#, "<div x".repeat(20_000));
    match extract_by_tag(&html, &ExtractOptions::by_class("c")) {
        Err(Error::UnbalancedMarkup { tag, offset, .. }) => {
            assert_eq!(tag, "div");
            assert_eq!(offset, 15);
        }
        other => panic!("expected UnbalancedMarkup, got {other:?}"),
    }
}

#[test]
fn resolve_rejects_offsets_inside_a_character() {
    let html = "<div>é</div>";
    assert!(matches!(
        resolve(html, "div", 6),
        Err(Error::InvalidArgument(_))
    ));
    match resolve(html, "div", 5) {
        Ok(span) => assert_eq!(span.slice(html), "é"),
        other => panic!("expected Ok(_), got {other:?}"),
    }
}
