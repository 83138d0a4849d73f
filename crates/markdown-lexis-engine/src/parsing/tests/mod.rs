//! Whole-document parsing tests.
//!
//! Fixtures (.md) and their expected HTML (.html) are co-located in
//! `fixtures/`; the token-level cases below use the compact `normalize`
//! summary.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    parsing::{
        MarkdownParser, ParserOptions, parse,
        snapshot::{invariants, normalize},
        span::Span,
        token::{Nesting, TokenKind},
    },
    render::{HtmlRenderer, Renderer},
};

fn summary(md: &str) -> Vec<String> {
    let tokens = parse(md);
    invariants(&tokens);
    normalize(&tokens)
}

// Fixture-based tests

#[rstest]
#[case("simple_paragraph")]
#[case("mixed_blocks")]
#[case("nested_lists")]
#[case("quotes_and_fences")]
#[case("aligned_table")]
#[case("inline_styles")]
fn fixture(#[case] name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let tokens = parse(&md);
    invariants(&tokens);
    assert_eq!(HtmlRenderer.render(&tokens), expected);
}

// Behavior tests

#[test]
fn paragraphs_split_on_blank_line() {
    assert_eq!(
        summary("Hello\n\nWorld"),
        vec!["+p", "text(Hello)", "-p", "+p", "text(World)", "-p"]
    );
}

#[test]
fn heading_is_single_line() {
    assert_eq!(summary("# Title"), vec!["+h1", "text(Title)", "-h1"]);
}

#[test]
fn adjacent_items_share_one_list() {
    assert_eq!(
        summary("- a\n- b"),
        vec!["+ul", "+li", "text(a)", "-li", "+li", "text(b)", "-li", "-ul"]
    );
}

#[test]
fn escaped_star_is_one_text_token() {
    assert_eq!(summary("a\\*b"), vec!["+p", "text(a*b)", "-p"]);
}

#[test]
fn unclosed_strong_becomes_text() {
    let tokens = parse("**bold");
    assert!(!tokens.iter().any(|t| t.kind == TokenKind::Strong));
    assert_eq!(
        normalize(&tokens),
        vec!["+p", "text(**)", "text(bold)", "-p"]
    );
}

#[test]
fn minimal_table() {
    let tokens = parse("|h1|h2|\n|---|---|\n|a|b|");
    invariants(&tokens);
    assert_eq!(
        normalize(&tokens),
        vec![
            "+table", "+thead", "+tr", "+th", "text(h1)", "-th", "+th", "text(h2)", "-th", "-tr",
            "-thead", "+tbody", "+tr", "+td", "text(a)", "-td", "+td", "text(b)", "-td", "-tr",
            "-tbody", "-table",
        ]
    );
    let cells = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::TableCell { .. }) && t.is_open());
    for cell in cells {
        assert_eq!(cell.attr("style"), Some("text-align: left"));
    }
}

#[test]
fn paragraph_lines_join_with_soft_breaks() {
    assert_eq!(
        summary("one\ntwo"),
        vec!["+p", "text(one)", "softbreak", "text(two)", "-p"]
    );
}

#[test]
fn list_after_paragraph_closes_it() {
    assert_eq!(
        summary("intro\n- item"),
        vec!["+p", "text(intro)", "-p", "+ul", "+li", "text(item)", "-li", "-ul"]
    );
}

#[test]
fn ordered_and_unordered_lists_stay_separate() {
    assert_eq!(
        summary("- a\n1. b"),
        vec![
            "+ul", "+li", "text(a)", "-li", "-ul", "+ol", "+li", "text(b)", "-li", "-ol",
        ]
    );
}

#[test]
fn nested_list_closes_inner_level_on_dedent() {
    assert_eq!(
        summary("- a\n  - b\n- c"),
        vec![
            "+ul", "+li", "text(a)", "-li", "+ul", "+li", "text(b)", "-li", "-ul", "+li",
            "text(c)", "-li", "-ul",
        ]
    );
}

#[test]
fn horizontal_rule_between_paragraphs() {
    assert_eq!(
        summary("a\n***\nb"),
        vec!["+p", "text(a)", "-p", "hr(***)", "+p", "text(b)", "-p"]
    );
}

#[test]
fn blank_line_ends_table() {
    assert_eq!(
        summary("|x|\n|---|\n\n|y|"),
        vec![
            "+table", "+thead", "+tr", "+th", "text(x)", "-th", "-tr", "-thead", "+tbody",
            "-tbody", "-table", "+p", "text(|y|)", "-p",
        ]
    );
}

#[test]
fn table_without_separator_is_paragraph() {
    assert_eq!(
        summary("|a|b|\n|c|d|"),
        vec!["+p", "text(|a|b|)", "softbreak", "text(|c|d|)", "-p"]
    );
}

#[test]
fn escaped_closing_pipe_keeps_text() {
    assert_eq!(
        summary("|a|b\\|\n|---|"),
        vec!["+p", "text(|a|b|)", "softbreak", "text(|---|)", "-p"]
    );
}

#[test]
fn cell_less_rows_are_not_a_table() {
    assert_eq!(
        summary("|\\|\n|\\|"),
        vec!["+p", "text(||)", "softbreak", "text(||)", "-p"]
    );
}

#[test]
fn empty_quote_line_adds_no_break() {
    assert_eq!(
        summary(">\n> b"),
        vec!["+blockquote", "text(b)", "-blockquote"]
    );
}

#[test]
fn code_fence_is_raw() {
    let tokens = parse("```rust\n**not bold**\n# not heading\n```");
    invariants(&tokens);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::CodeBlock);
    assert_eq!(tokens[0].content, "**not bold**\n# not heading\n");
    assert_eq!(tokens[0].info, "rust");
}

#[test]
fn quote_content_sits_directly_in_quote() {
    assert_eq!(
        summary("> quoted\n\nplain"),
        vec!["+blockquote", "text(quoted)", "-blockquote", "+p", "text(plain)", "-p"]
    );
}

#[test]
fn inline_levels_nest_under_blocks() {
    let tokens = parse("- **x**");
    let strong = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Strong && t.nesting == Nesting::Open)
        .unwrap();
    let text = tokens.iter().find(|t| t.content == "x").unwrap();
    assert_eq!(text.level, strong.level + 1);
}

#[test]
fn crlf_line_endings_are_stripped() {
    assert_eq!(summary("a\r\nb\r\n"), summary("a\nb\n"));
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t")]
fn blank_documents_produce_nothing(#[case] md: &str) {
    assert!(parse(md).is_empty());
}

#[rstest]
#[case("# a\n- b\n> c\n|d|\n|---|\n***\n```\ne")]
#[case("- a\n      - b\n            - c\n- d\n> e\n>> f\n> g")]
#[case("**a *b ~~c")]
#[case("1. x\n2. y\n   - z\n\n> q\n- r")]
fn arbitrary_input_is_well_formed(#[case] md: &str) {
    let tokens = parse(md);
    invariants(&tokens);
    assert!(crate::parsing::snapshot::invariants::is_well_formed(&tokens));
}

#[test]
fn parsing_is_deterministic() {
    let md = "# T\n\n- a\n  - b\n\n|x|y|\n|:--|--:|\n|1|2|\n\n> **q**";
    assert_eq!(parse(md), parse(md));
}

#[test]
fn debug_option_does_not_change_output() {
    let md = "# T\n\ntext *em*\n- item";
    let traced = MarkdownParser::new(ParserOptions { debug: true }).parse(md);
    assert_eq!(traced, parse(md));
}

#[test]
fn parser_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarkdownParser>();
}

#[test]
fn block_spans_are_line_ranges() {
    let tokens = parse("a\n\n|x|\n|---|\n|1|");
    let table = tokens.iter().find(|t| t.kind == TokenKind::Table).unwrap();
    assert_eq!(table.source_span, Some(Span::new(2, 5)));
}
