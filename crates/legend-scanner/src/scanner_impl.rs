//! Scanner implementation.
//!
//! `ScannerState` produces one token per `scan()` call. Context-sensitive
//! tokens (`>>`, regular expressions, template continuations, JSX text and
//! hyphenated JSX names) are produced by the `re_scan_*`/`scan_jsx_*`
//! entry points, which the parser calls when it knows the context.

use std::sync::Arc;

use bitflags::bitflags;

use crate::char_codes::{
    is_binary_digit, is_digit, is_hex_digit, is_identifier_part, is_identifier_start,
    is_line_break, is_octal_digit, is_white_space_single_line,
};
use crate::syntax_kind::{SyntaxKind, text_to_keyword};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TokenFlags: u32 {
        const PRECEDING_LINE_BREAK = 1 << 0;
        const UNTERMINATED = 1 << 1;
        const NUMERIC_SEPARATOR = 1 << 2;
        const HEX_SPECIFIER = 1 << 3;
        const BINARY_OR_OCTAL_SPECIFIER = 1 << 4;
    }
}

/// A lexical error. Scanning always continues past it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

/// Saved scanner position for speculative parsing.
#[derive(Clone, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    full_start: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: TokenFlags,
    diagnostics_len: usize,
}

pub struct ScannerState {
    text: Arc<str>,
    /// Current position (end of the current token)
    pos: usize,
    /// Start of the current token including leading trivia
    full_start: usize,
    /// Start of the current token excluding trivia
    token_start: usize,
    token: SyntaxKind,
    /// Cooked value for literals and identifiers
    token_value: String,
    token_flags: TokenFlags,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        ScannerState {
            text: text.into(),
            pos: 0,
            full_start: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::empty(),
            diagnostics: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn token_pos(&self) -> u32 {
        self.token_start as u32
    }

    #[inline]
    pub fn token_full_start(&self) -> u32 {
        self.full_start as u32
    }

    #[inline]
    pub fn token_end(&self) -> u32 {
        self.pos as u32
    }

    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Raw source text of the current token.
    pub fn token_text(&self) -> &str {
        self.text.get(self.token_start..self.pos).unwrap_or("")
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    pub fn source_text_arc(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    pub fn get_scanner_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    // =========================================================================
    // Speculation
    // =========================================================================

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            full_start: self.full_start,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.full_start = snapshot.full_start;
        self.token_start = snapshot.token_start;
        self.token = snapshot.token;
        self.token_value = snapshot.token_value;
        self.token_flags = snapshot.token_flags;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    // =========================================================================
    // Character helpers
    // =========================================================================

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..)?.chars().next()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.text.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn error(&mut self, pos: usize, length: usize, message: &'static str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message,
            code,
        });
    }

    #[inline]
    fn finish(&mut self, kind: SyntaxKind, len: usize) -> SyntaxKind {
        self.pos += len;
        self.token = kind;
        kind
    }

    // =========================================================================
    // Main scan
    // =========================================================================

    /// Skip a `#!` line at the very start of the file.
    pub fn scan_shebang_trivia(&mut self) {
        if self.pos == 0 && self.text.starts_with("#!") {
            while let Some(ch) = self.peek() {
                if is_line_break(ch) {
                    break;
                }
                self.pos += ch.len_utf8();
            }
        }
    }

    pub fn scan(&mut self) -> SyntaxKind {
        use SyntaxKind::*;

        self.full_start = self.pos;
        self.token_flags = TokenFlags::empty();
        self.token_value.clear();

        loop {
            self.token_start = self.pos;
            let Some(ch) = self.peek() else {
                self.token = EndOfFileToken;
                return EndOfFileToken;
            };

            if is_line_break(ch) {
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                self.pos += ch.len_utf8();
                continue;
            }
            if is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
                continue;
            }

            let b1 = self.byte_at(self.pos + 1);
            let b2 = self.byte_at(self.pos + 2);

            return match ch {
                '/' => {
                    if b1 == b'/' {
                        self.skip_line_comment();
                        continue;
                    }
                    if b1 == b'*' {
                        self.skip_block_comment();
                        continue;
                    }
                    if b1 == b'=' {
                        self.finish(SlashEqualsToken, 2)
                    } else {
                        self.finish(SlashToken, 1)
                    }
                }
                '"' | '\'' => self.scan_string(ch),
                '`' => {
                    self.pos += 1;
                    self.scan_template_and_set_token(true)
                }
                '0'..='9' => self.scan_number(),
                '.' => {
                    if b1.is_ascii_digit() {
                        self.scan_number()
                    } else if b1 == b'.' && b2 == b'.' {
                        self.finish(DotDotDotToken, 3)
                    } else {
                        self.finish(DotToken, 1)
                    }
                }
                '{' => self.finish(OpenBraceToken, 1),
                '}' => self.finish(CloseBraceToken, 1),
                '(' => self.finish(OpenParenToken, 1),
                ')' => self.finish(CloseParenToken, 1),
                '[' => self.finish(OpenBracketToken, 1),
                ']' => self.finish(CloseBracketToken, 1),
                ';' => self.finish(SemicolonToken, 1),
                ',' => self.finish(CommaToken, 1),
                ':' => self.finish(ColonToken, 1),
                '~' => self.finish(TildeToken, 1),
                '@' => self.finish(AtToken, 1),
                '?' => {
                    if b1 == b'.' && !b2.is_ascii_digit() {
                        self.finish(QuestionDotToken, 2)
                    } else if b1 == b'?' {
                        if b2 == b'=' {
                            self.finish(QuestionQuestionEqualsToken, 3)
                        } else {
                            self.finish(QuestionQuestionToken, 2)
                        }
                    } else {
                        self.finish(QuestionToken, 1)
                    }
                }
                '<' => match (b1, b2) {
                    (b'<', b'=') => self.finish(LessThanLessThanEqualsToken, 3),
                    (b'<', _) => self.finish(LessThanLessThanToken, 2),
                    (b'=', _) => self.finish(LessThanEqualsToken, 2),
                    _ => self.finish(LessThanToken, 1),
                },
                // `>>`, `>=` etc. are produced by re_scan_greater_token
                '>' => self.finish(GreaterThanToken, 1),
                '=' => match (b1, b2) {
                    (b'=', b'=') => self.finish(EqualsEqualsEqualsToken, 3),
                    (b'=', _) => self.finish(EqualsEqualsToken, 2),
                    (b'>', _) => self.finish(EqualsGreaterThanToken, 2),
                    _ => self.finish(EqualsToken, 1),
                },
                '!' => match (b1, b2) {
                    (b'=', b'=') => self.finish(ExclamationEqualsEqualsToken, 3),
                    (b'=', _) => self.finish(ExclamationEqualsToken, 2),
                    _ => self.finish(ExclamationToken, 1),
                },
                '+' => match b1 {
                    b'+' => self.finish(PlusPlusToken, 2),
                    b'=' => self.finish(PlusEqualsToken, 2),
                    _ => self.finish(PlusToken, 1),
                },
                '-' => match b1 {
                    b'-' => self.finish(MinusMinusToken, 2),
                    b'=' => self.finish(MinusEqualsToken, 2),
                    _ => self.finish(MinusToken, 1),
                },
                '*' => match (b1, b2) {
                    (b'*', b'=') => self.finish(AsteriskAsteriskEqualsToken, 3),
                    (b'*', _) => self.finish(AsteriskAsteriskToken, 2),
                    (b'=', _) => self.finish(AsteriskEqualsToken, 2),
                    _ => self.finish(AsteriskToken, 1),
                },
                '%' => {
                    if b1 == b'=' {
                        self.finish(PercentEqualsToken, 2)
                    } else {
                        self.finish(PercentToken, 1)
                    }
                }
                '&' => match (b1, b2) {
                    (b'&', b'=') => self.finish(AmpersandAmpersandEqualsToken, 3),
                    (b'&', _) => self.finish(AmpersandAmpersandToken, 2),
                    (b'=', _) => self.finish(AmpersandEqualsToken, 2),
                    _ => self.finish(AmpersandToken, 1),
                },
                '|' => match (b1, b2) {
                    (b'|', b'=') => self.finish(BarBarEqualsToken, 3),
                    (b'|', _) => self.finish(BarBarToken, 2),
                    (b'=', _) => self.finish(BarEqualsToken, 2),
                    _ => self.finish(BarToken, 1),
                },
                '^' => {
                    if b1 == b'=' {
                        self.finish(CaretEqualsToken, 2)
                    } else {
                        self.finish(CaretToken, 1)
                    }
                }
                '#' => {
                    if self.char_at(self.pos + 1).is_some_and(is_identifier_start) {
                        self.pos += 1;
                        self.scan_identifier_rest(self.pos - 1);
                        self.token = PrivateIdentifier;
                        PrivateIdentifier
                    } else {
                        self.error(self.pos, 1, "Invalid character.", 1127);
                        self.finish(Unknown, 1)
                    }
                }
                c if is_identifier_start(c) => {
                    let start = self.pos;
                    self.scan_identifier_rest(start);
                    let kind = text_to_keyword(&self.token_value).unwrap_or(Identifier);
                    self.token = kind;
                    kind
                }
                c => {
                    self.error(self.pos, c.len_utf8(), "Invalid character.", 1127);
                    self.finish(Unknown, c.len_utf8())
                }
            };
        }
    }

    fn skip_line_comment(&mut self) {
        self.pos += 2;
        while let Some(ch) = self.peek() {
            if is_line_break(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        loop {
            match self.peek() {
                None => {
                    self.error(start, self.pos - start, "'*/' expected.", 1010);
                    return;
                }
                Some('*') if self.byte_at(self.pos + 1) == b'/' => {
                    self.pos += 2;
                    return;
                }
                Some(ch) => {
                    if is_line_break(ch) {
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    }
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    /// Consume identifier part characters; the token value spans `start..pos`.
    fn scan_identifier_rest(&mut self, start: usize) {
        while let Some(ch) = self.peek() {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.token_value.clear();
        self.token_value.push_str(&self.text[start..self.pos]);
    }

    fn scan_digits(&mut self, is_valid: fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if is_valid(ch) {
                self.pos += 1;
            } else if ch == '_' {
                self.token_flags |= TokenFlags::NUMERIC_SEPARATOR;
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let b1 = self.byte_at(self.pos + 1);
        let mut is_integer = true;

        if self.byte_at(self.pos) == b'0' && matches!(b1, b'x' | b'X' | b'o' | b'O' | b'b' | b'B') {
            self.pos += 2;
            match b1 {
                b'x' | b'X' => {
                    self.token_flags |= TokenFlags::HEX_SPECIFIER;
                    self.scan_digits(is_hex_digit);
                }
                b'o' | b'O' => {
                    self.token_flags |= TokenFlags::BINARY_OR_OCTAL_SPECIFIER;
                    self.scan_digits(is_octal_digit);
                }
                _ => {
                    self.token_flags |= TokenFlags::BINARY_OR_OCTAL_SPECIFIER;
                    self.scan_digits(is_binary_digit);
                }
            }
        } else {
            self.scan_digits(is_digit);
            if self.byte_at(self.pos) == b'.' {
                is_integer = false;
                self.pos += 1;
                self.scan_digits(is_digit);
            }
            if matches!(self.byte_at(self.pos), b'e' | b'E') {
                let sign = self.byte_at(self.pos + 1);
                let digit_at = if sign == b'+' || sign == b'-' { 2 } else { 1 };
                if self.byte_at(self.pos + digit_at).is_ascii_digit() {
                    is_integer = false;
                    self.pos += digit_at;
                    self.scan_digits(is_digit);
                }
            }
        }

        let kind = if is_integer && self.byte_at(self.pos) == b'n' {
            self.pos += 1;
            SyntaxKind::BigIntLiteral
        } else {
            SyntaxKind::NumericLiteral
        };

        self.token_value = self.text[start..self.pos].replace('_', "");
        self.token = kind;
        kind
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(start, self.pos - start, "Unterminated string literal.", 1002);
                    break;
                }
                Some(ch) if ch == quote => {
                    self.pos += 1;
                    break;
                }
                Some('\\') => {
                    self.pos += 1;
                    self.scan_escape_sequence(&mut value);
                }
                Some(ch) if ch == '\n' || ch == '\r' => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(start, self.pos - start, "Unterminated string literal.", 1002);
                    break;
                }
                Some(ch) => {
                    value.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
        self.token_value = value;
        self.token = SyntaxKind::StringLiteral;
        SyntaxKind::StringLiteral
    }

    fn scan_hex_value(&mut self, max_digits: usize) -> Option<u32> {
        let start = self.pos;
        while self.pos - start < max_digits && is_hex_digit(self.byte_at(self.pos) as char) {
            self.pos += 1;
        }
        u32::from_str_radix(self.text.get(start..self.pos)?, 16).ok()
    }

    fn scan_escape_sequence(&mut self, out: &mut String) {
        let Some(ch) = self.peek() else {
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'v' => out.push('\u{000B}'),
            '0' if !self.byte_at(self.pos).is_ascii_digit() => out.push('\0'),
            '\r' => {
                if self.byte_at(self.pos) == b'\n' {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            'x' => {
                if let Some(c) = self.scan_hex_value(2).and_then(char::from_u32) {
                    out.push(c);
                }
            }
            'u' => {
                let value = if self.byte_at(self.pos) == b'{' {
                    self.pos += 1;
                    let value = self.scan_hex_value(6);
                    if self.byte_at(self.pos) == b'}' {
                        self.pos += 1;
                    }
                    value
                } else {
                    self.scan_hex_value(4)
                };
                out.push(
                    value
                        .and_then(char::from_u32)
                        .unwrap_or(char::REPLACEMENT_CHARACTER),
                );
            }
            other => out.push(other),
        }
    }

    /// Scan template characters after a backtick (`is_head`) or after the
    /// `}` that closes a substitution.
    fn scan_template_and_set_token(&mut self, is_head: bool) -> SyntaxKind {
        let start = self.token_start;
        let mut value = String::new();
        let kind = loop {
            match self.peek() {
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(start, self.pos - start, "Unterminated template literal.", 1160);
                    break if is_head {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                Some('`') => {
                    self.pos += 1;
                    break if is_head {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                Some('$') if self.byte_at(self.pos + 1) == b'{' => {
                    self.pos += 2;
                    break if is_head {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                Some('\\') => {
                    self.pos += 1;
                    self.scan_escape_sequence(&mut value);
                }
                Some('\r') => {
                    self.pos += 1;
                    if self.byte_at(self.pos) == b'\n' {
                        self.pos += 1;
                    }
                    value.push('\n');
                }
                Some(ch) => {
                    value.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        };
        self.token_value = value;
        self.token = kind;
        kind
    }

    // =========================================================================
    // Re-scan entry points
    // =========================================================================

    /// Combine `>` with following `>`/`=` characters in operator position.
    pub fn re_scan_greater_token(&mut self) -> SyntaxKind {
        use SyntaxKind::*;
        if self.token != GreaterThanToken {
            return self.token;
        }
        let b0 = self.byte_at(self.pos);
        let b1 = self.byte_at(self.pos + 1);
        let b2 = self.byte_at(self.pos + 2);
        match (b0, b1, b2) {
            (b'>', b'>', b'=') => self.finish(GreaterThanGreaterThanGreaterThanEqualsToken, 3),
            (b'>', b'>', _) => self.finish(GreaterThanGreaterThanGreaterThanToken, 2),
            (b'>', b'=', _) => self.finish(GreaterThanGreaterThanEqualsToken, 2),
            (b'>', _, _) => self.finish(GreaterThanGreaterThanToken, 1),
            (b'=', _, _) => self.finish(GreaterThanEqualsToken, 1),
            _ => self.token,
        }
    }

    /// Re-scan a `/` or `/=` token as a regular expression literal.
    pub fn re_scan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(
            self.token,
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken
        ) {
            return self.token;
        }
        let start = self.token_start;
        let mut p = start + 1;
        let mut in_class = false;
        let mut escaped = false;
        loop {
            let Some(ch) = self.char_at(p) else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(start, p - start, "Unterminated regular expression literal.", 1161);
                break;
            };
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(start, p - start, "Unterminated regular expression literal.", 1161);
                break;
            }
            p += ch.len_utf8();
            if escaped {
                escaped = false;
            } else if ch == '/' && !in_class {
                break;
            } else if ch == '[' {
                in_class = true;
            } else if ch == ']' {
                in_class = false;
            } else if ch == '\\' {
                escaped = true;
            }
        }
        while let Some(ch) = self.char_at(p) {
            if !is_identifier_part(ch) {
                break;
            }
            p += ch.len_utf8();
        }
        self.pos = p;
        self.token_value = self.text[start..p].to_string();
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    /// Re-scan a `}` that closes a template substitution.
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::CloseBraceToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.scan_template_and_set_token(false)
    }

    // =========================================================================
    // JSX
    // =========================================================================

    /// Scan inside JSX children: `<`, `</`, `{` or a run of text.
    pub fn scan_jsx_token(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::empty();
        self.token_value.clear();

        match self.peek() {
            None => {
                self.token = SyntaxKind::EndOfFileToken;
                self.token
            }
            Some('<') => {
                if self.byte_at(self.pos + 1) == b'/' {
                    self.finish(SyntaxKind::LessThanSlashToken, 2)
                } else {
                    self.finish(SyntaxKind::LessThanToken, 1)
                }
            }
            Some('{') => self.finish(SyntaxKind::OpenBraceToken, 1),
            Some(_) => {
                let start = self.pos;
                let mut all_white_space = true;
                while let Some(ch) = self.peek() {
                    if ch == '<' || ch == '{' {
                        break;
                    }
                    if !ch.is_whitespace() {
                        all_white_space = false;
                    }
                    self.pos += ch.len_utf8();
                }
                self.token_value = self.text[start..self.pos].to_string();
                self.token = if all_white_space {
                    SyntaxKind::JsxTextAllWhiteSpaces
                } else {
                    SyntaxKind::JsxText
                };
                self.token
            }
        }
    }

    /// Extend an identifier/keyword token with `-` segments (`data-id`).
    pub fn scan_jsx_identifier(&mut self) -> SyntaxKind {
        if !self.token.is_identifier_or_keyword() {
            return self.token;
        }
        let mut extended = false;
        while let Some(ch) = self.peek() {
            if ch == '-' || is_identifier_part(ch) {
                extended |= ch == '-';
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        if extended {
            self.token_value = self.text[self.token_start..self.pos].to_string();
            self.token = SyntaxKind::Identifier;
        }
        self.token
    }

    /// Scan a JSX attribute value; quoted strings take no escapes.
    pub fn scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_flags = TokenFlags::empty();
        while let Some(ch) = self.peek() {
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
            } else if !is_white_space_single_line(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.token_start = self.pos;

        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let start = self.pos;
                self.pos += 1;
                loop {
                    match self.peek() {
                        None => {
                            self.token_flags |= TokenFlags::UNTERMINATED;
                            self.error(start, self.pos - start, "Unterminated string literal.", 1002);
                            break;
                        }
                        Some(ch) if ch == quote => {
                            self.pos += 1;
                            break;
                        }
                        Some(ch) => self.pos += ch.len_utf8(),
                    }
                }
                let inner_end = if self.is_unterminated() {
                    self.pos
                } else {
                    self.pos - 1
                };
                self.token_value = self.text[start + 1..inner_end].to_string();
                self.token = SyntaxKind::StringLiteral;
                self.token
            }
            _ => {
                self.pos = self.full_start;
                self.scan()
            }
        }
    }
}
