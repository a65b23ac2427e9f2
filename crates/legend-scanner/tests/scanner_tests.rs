//! Scanner integration tests.

use legend_scanner::{ScannerState, SyntaxKind, TokenFlags};

fn tokens(text: &str) -> Vec<SyntaxKind> {
    let mut scanner = ScannerState::new(text);
    let mut out = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        out.push(kind);
    }
    out
}

#[test]
fn scans_variable_statement() {
    use SyntaxKind::*;
    assert_eq!(
        tokens("const count$ = observable(0);"),
        vec![
            ConstKeyword,
            Identifier,
            EqualsToken,
            Identifier,
            OpenParenToken,
            NumericLiteral,
            CloseParenToken,
            SemicolonToken,
        ]
    );
}

#[test]
fn identifier_value_includes_dollar() {
    let mut scanner = ScannerState::new("  count$ ");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "count$");
    assert_eq!(scanner.token_pos(), 2);
    assert_eq!(scanner.token_full_start(), 0);
    assert_eq!(scanner.token_end(), 8);
}

#[test]
fn comments_are_trivia_and_record_line_breaks() {
    let mut scanner = ScannerState::new("a /* one\ntwo */ b // tail\nc");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "b");
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "c");
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn punctuators_use_longest_match() {
    use SyntaxKind::*;
    assert_eq!(
        tokens("a?.b ?? c ??= d ** e **= f => ...g"),
        vec![
            Identifier,
            QuestionDotToken,
            Identifier,
            QuestionQuestionToken,
            Identifier,
            QuestionQuestionEqualsToken,
            Identifier,
            AsteriskAsteriskToken,
            Identifier,
            AsteriskAsteriskEqualsToken,
            Identifier,
            EqualsGreaterThanToken,
            DotDotDotToken,
            Identifier,
        ]
    );
}

#[test]
fn question_dot_before_digit_is_conditional() {
    use SyntaxKind::*;
    assert_eq!(
        tokens("a?.5:1"),
        vec![Identifier, QuestionToken, NumericLiteral, ColonToken, NumericLiteral]
    );
}

#[test]
fn greater_than_is_combined_only_on_rescan() {
    let mut scanner = ScannerState::new("a >>>= b");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(
        scanner.re_scan_greater_token(),
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
    );
    assert_eq!(scanner.token_text(), ">>>=");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn numeric_literals() {
    let cases = [
        ("42", SyntaxKind::NumericLiteral, "42"),
        ("1_000", SyntaxKind::NumericLiteral, "1000"),
        ("0xFF", SyntaxKind::NumericLiteral, "0xFF"),
        ("0b1010", SyntaxKind::NumericLiteral, "0b1010"),
        ("0o17", SyntaxKind::NumericLiteral, "0o17"),
        ("3.14e-2", SyntaxKind::NumericLiteral, "3.14e-2"),
        (".5", SyntaxKind::NumericLiteral, ".5"),
        ("10n", SyntaxKind::BigIntLiteral, "10n"),
    ];
    for (text, kind, value) in cases {
        let mut scanner = ScannerState::new(text);
        assert_eq!(scanner.scan(), kind, "{text}");
        assert_eq!(scanner.token_value(), value, "{text}");
    }
}

#[test]
fn numeric_separator_sets_flag() {
    let mut scanner = ScannerState::new("1_000");
    scanner.scan();
    assert!(scanner.token_flags().contains(TokenFlags::NUMERIC_SEPARATOR));
}

#[test]
fn string_escapes_are_cooked() {
    let mut scanner = ScannerState::new(r#""a\n\tA\u{1F600}\x41\"""#);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "a\n\tA\u{1F600}A\"");
}

#[test]
fn unterminated_string_reports_diagnostic() {
    let mut scanner = ScannerState::new("'abc\nx");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.get_scanner_diagnostics().len(), 1);
    assert_eq!(scanner.get_scanner_diagnostics()[0].code, 1002);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn template_with_substitutions() {
    let mut scanner = ScannerState::new("`a${x}b${y}c`");
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.token_value(), "b");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.token_value(), "c");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn no_substitution_template() {
    let mut scanner = ScannerState::new("`plain`");
    assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert_eq!(scanner.token_value(), "plain");
}

#[test]
fn slash_rescans_as_regex() {
    let mut scanner = ScannerState::new("/[/]a\\/b/gi.test(s)");
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(
        scanner.re_scan_slash_token(),
        SyntaxKind::RegularExpressionLiteral
    );
    assert_eq!(scanner.token_value(), "/[/]a\\/b/gi");
    assert_eq!(scanner.scan(), SyntaxKind::DotToken);
}

#[test]
fn keywords_and_private_names() {
    use SyntaxKind::*;
    assert_eq!(
        tokens("class A extends B { #x = 1 }"),
        vec![
            ClassKeyword,
            Identifier,
            ExtendsKeyword,
            Identifier,
            OpenBraceToken,
            PrivateIdentifier,
            EqualsToken,
            NumericLiteral,
            CloseBraceToken,
        ]
    );
}

#[test]
fn save_and_restore_state() {
    let mut scanner = ScannerState::new("a b c");
    scanner.scan();
    let snapshot = scanner.save_state();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.token_value(), "c");
    scanner.restore_state(snapshot);
    assert_eq!(scanner.token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "b");
}

#[test]
fn jsx_text_and_children_tokens() {
    let mut scanner = ScannerState::new("hello {name}</div>");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    assert_eq!(scanner.token_value(), "hello ");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::OpenBraceToken);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanSlashToken);
}

#[test]
fn jsx_whitespace_only_text() {
    let mut scanner = ScannerState::new("\n   <span/>");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxTextAllWhiteSpaces);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanToken);
}

#[test]
fn jsx_identifier_extends_with_hyphens() {
    let mut scanner = ScannerState::new("data-test-id=\"x\"");
    scanner.scan();
    assert_eq!(scanner.scan_jsx_identifier(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "data-test-id");
    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
    assert_eq!(scanner.scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "x");
}

#[test]
fn shebang_is_skipped() {
    let mut scanner = ScannerState::new("#!/usr/bin/env node\nlet x");
    scanner.scan_shebang_trivia();
    assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
}

#[test]
fn multibyte_identifiers() {
    let mut scanner = ScannerState::new("const café = 1");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "café");
    assert_eq!(scanner.token_end() - scanner.token_pos(), "café".len() as u32);
}
