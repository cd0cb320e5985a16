//! End-to-end tests for comment formatting
//!
//! These drive the whole pipeline through the public entry points and pin the
//! externally observable behavior: collapse, width bounds, structural markup
//! preservation, and the fatal error conditions.

use docblock::{format_comment, format_comment_with_width, FormatError};

fn assert_idempotent(input: &str, indent: usize) {
    let once = format_comment(input, indent).unwrap();
    let twice = format_comment(&once, indent).unwrap();
    assert_eq!(once, twice, "re-formatting changed the output");
}

#[test]
fn test_short_comment_collapses_to_one_line() {
    assert_eq!(
        format_comment("/**\n * hello world\n */", 0).unwrap(),
        "/** hello world */"
    );
}

#[test]
fn test_empty_comment_becomes_minimal_form() {
    assert_eq!(format_comment("/**\n *\n */", 0).unwrap(), "/** */");
}

#[test]
fn test_over_budget_content_stays_multiline() {
    // 94 + 7 > 100, so the one-content-line shape is returned unchanged
    let input = format!("/**\n * {}\n */", "x".repeat(94));
    assert_eq!(format_comment(&input, 0).unwrap(), input);
}

#[test]
fn test_content_at_exact_budget_collapses() {
    let input = format!("/**\n * {}\n */", "x".repeat(93));
    assert_eq!(
        format_comment(&input, 0).unwrap(),
        format!("/** {} */", "x".repeat(93))
    );
}

#[test]
fn test_block_indent_counts_against_the_budget() {
    let input = format!("/**\n     * {}\n     */", "x".repeat(90));
    // 90 + 7 + 4 > 100
    assert_eq!(format_comment(&input, 4).unwrap(), input);
}

#[test]
fn test_long_prose_reflows_within_width() {
    let words: Vec<String> = (0..40).map(|i| format!("word{:02}", i)).collect();
    let input = format!("/**\n * {}\n */", words.join(" "));
    let output = format_comment(&input, 4).unwrap();
    assert!(output.starts_with("/**"));
    assert!(output.ends_with("*/"));
    for line in output.lines().skip(1) {
        assert!(line.len() <= 100, "line exceeds width: {:?}", line);
        assert!(line.starts_with("     *"));
    }
    assert_idempotent(&input, 4);
}

#[test]
fn test_single_source_line_reflows_to_many() {
    let words: Vec<String> = (0..40).map(|i| format!("word{:02}", i)).collect();
    let input = format!("/** {} */", words.join(" "));
    let output = format_comment(&input, 0).unwrap();
    assert!(output.lines().count() > 3);
    assert_idempotent(&input, 0);
}

#[test]
fn test_list_items_keep_their_own_lines() {
    let input = "/**\n * - first item\n * - second item\n */";
    assert_eq!(format_comment(input, 0).unwrap(), input);
}

#[test]
fn test_wrapped_list_item_gets_hang_indent() {
    let input = "/**\n * - aaaa bbbb cccc dddd\n */";
    let expected = "/**\n * - aaaa bbbb cccc\n *   dddd\n */";
    assert_eq!(format_comment_with_width(input, 0, 20).unwrap(), expected);
    // Formatting the wrapped form again is a no-op
    assert_eq!(
        format_comment_with_width(expected, 0, 20).unwrap(),
        expected
    );
}

#[test]
fn test_dash_without_following_space_is_not_a_list() {
    assert_eq!(
        format_comment("/**\n * -foo bar\n */", 0).unwrap(),
        "/** -foo bar */"
    );
}

#[test]
fn test_code_block_is_preserved() {
    let input = "/**\n * before\n * ```\n * let x = compute(1,   2);\n *\n *     nested()\n * ```\n * after\n */";
    assert_eq!(format_comment(input, 0).unwrap(), input);
    assert_idempotent(input, 0);
}

#[test]
fn test_code_lines_are_exempt_from_the_width_bound() {
    let code = "let value = a_very_long_expression(with, many, arguments, that, will, not, fit);";
    let input = format!("/**\n * ```\n * {}\n * ```\n */", code);
    let output = format_comment_with_width(&input, 0, 30).unwrap();
    assert!(output.contains(code));
}

#[test]
fn test_fence_close_on_the_comment_close_line() {
    let output = format_comment("/**\n * ```\n * foo()\n * ``` */", 0).unwrap();
    assert_eq!(output, "/**\n * ```\n * foo()\n * ```\n */");
}

#[test]
fn test_blank_lines_inside_fence_are_preserved() {
    let input = "/**\n * ```\n * a\n *\n *\n * b\n * ```\n */";
    assert_eq!(format_comment(input, 0).unwrap(), input);
}

#[test]
fn test_width_is_measured_in_characters() {
    let content = "é".repeat(93);
    let input = format!("/**\n * {}\n */", content);
    assert_eq!(
        format_comment(&input, 0).unwrap(),
        format!("/** {} */", content)
    );
}

#[test]
fn test_pre_block_is_preserved() {
    let input = "/**\n * <pre>\n * col1    col2\n * a       b\n * </pre>\n */";
    assert_eq!(format_comment(input, 0).unwrap(), input);
}

#[test]
fn test_table_rows_are_not_reflowed() {
    let input = "/**\n * | name | value |\n * | a    | 1     |\n */";
    assert_eq!(format_comment(input, 0).unwrap(), input);
    assert_idempotent(input, 0);
}

#[test]
fn test_tag_line_after_blank_keeps_its_paragraph() {
    let input = "/**\n * Does a thing.\n *\n * @param x the input\n */";
    assert_eq!(format_comment(input, 0).unwrap(), input);
}

#[test]
fn test_tag_at_end_of_line_joins_with_a_single_space() {
    let input = "/**\n * @return\n * the value\n */";
    assert_eq!(
        format_comment(input, 0).unwrap(),
        "/** @return the value */"
    );
}

#[test]
fn test_link_and_punctuation_stay_adjacent() {
    let input = "/**\n * See [Foo](http://example.com), then [Bar].\n */";
    assert_eq!(
        format_comment(input, 0).unwrap(),
        "/** See [Foo](http://example.com), then [Bar]. */"
    );
}

#[test]
fn test_excess_whitespace_is_normalized() {
    assert_eq!(
        format_comment("/** one  two\n *    three\n */", 0).unwrap(),
        "/** one two three */"
    );
}

#[test]
fn test_blank_runs_collapse_to_one() {
    let input = "/**\n * a\n *\n *\n *\n * b\n */";
    assert_eq!(format_comment(input, 0).unwrap(), "/**\n * a\n *\n * b\n */");
}

#[test]
fn test_truncated_comment_reports_missing_terminator() {
    assert_eq!(
        format_comment("/** no closing marker", 0).unwrap_err(),
        FormatError::MissingTerminator
    );
}

#[test]
fn test_output_always_keeps_the_delimiters() {
    for input in [
        "/** a */",
        "/**\n * a\n */",
        "/**\n * ```\n * x\n * ```\n */",
        "/**\n *\n */",
    ] {
        let output = format_comment(input, 2).unwrap();
        assert!(output.starts_with("/**"), "{:?}", output);
        assert!(output.ends_with("*/"), "{:?}", output);
    }
}
