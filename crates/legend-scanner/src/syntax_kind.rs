//! Token kinds produced by the scanner.
//!
//! Node kinds that only the parser creates live in
//! `legend_parser::syntax_kind_ext` and start above [`SyntaxKind::LAST_TOKEN`].

use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    JsxText,
    JsxTextAllWhiteSpaces,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Pseudo-literals
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    LessThanSlashToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,
    CaretEqualsToken,

    // Identifiers
    Identifier,
    PrivateIdentifier,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    ReadonlyKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,
}

impl SyntaxKind {
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::OfKeyword;

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    /// Words that can never be used as identifiers.
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_RESERVED_WORD
    }

    /// Identifier, or a keyword that may still name a binding
    /// (`async`, `type`, `get`, `of`, ...).
    #[inline]
    pub fn is_identifier_like(self) -> bool {
        self == Self::Identifier || (self.is_keyword() && !self.is_reserved_word())
    }

    /// Identifier or any keyword (valid after `.` and as a property name).
    #[inline]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == Self::Identifier || self.is_keyword()
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= Self::FIRST_ASSIGNMENT && self <= Self::LAST_ASSIGNMENT
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NumericLiteral
                | Self::BigIntLiteral
                | Self::StringLiteral
                | Self::RegularExpressionLiteral
                | Self::NoSubstitutionTemplateLiteral
        )
    }

    /// Try to recover a `SyntaxKind` from a raw node kind.
    pub fn try_from_u16(value: u16) -> Option<SyntaxKind> {
        if value <= Self::LAST_TOKEN as u16 {
            ALL_TOKENS.get(value as usize).copied()
        } else {
            None
        }
    }
}

/// Dense table of every token kind, indexed by discriminant.
const ALL_TOKENS: &[SyntaxKind] = {
    use SyntaxKind::*;
    &[
        Unknown,
        EndOfFileToken,
        NumericLiteral,
        BigIntLiteral,
        StringLiteral,
        JsxText,
        JsxTextAllWhiteSpaces,
        RegularExpressionLiteral,
        NoSubstitutionTemplateLiteral,
        TemplateHead,
        TemplateMiddle,
        TemplateTail,
        OpenBraceToken,
        CloseBraceToken,
        OpenParenToken,
        CloseParenToken,
        OpenBracketToken,
        CloseBracketToken,
        DotToken,
        DotDotDotToken,
        SemicolonToken,
        CommaToken,
        QuestionDotToken,
        LessThanToken,
        LessThanSlashToken,
        GreaterThanToken,
        LessThanEqualsToken,
        GreaterThanEqualsToken,
        EqualsEqualsToken,
        ExclamationEqualsToken,
        EqualsEqualsEqualsToken,
        ExclamationEqualsEqualsToken,
        EqualsGreaterThanToken,
        PlusToken,
        MinusToken,
        AsteriskToken,
        AsteriskAsteriskToken,
        SlashToken,
        PercentToken,
        PlusPlusToken,
        MinusMinusToken,
        LessThanLessThanToken,
        GreaterThanGreaterThanToken,
        GreaterThanGreaterThanGreaterThanToken,
        AmpersandToken,
        BarToken,
        CaretToken,
        ExclamationToken,
        TildeToken,
        AmpersandAmpersandToken,
        BarBarToken,
        QuestionToken,
        ColonToken,
        AtToken,
        QuestionQuestionToken,
        EqualsToken,
        PlusEqualsToken,
        MinusEqualsToken,
        AsteriskEqualsToken,
        AsteriskAsteriskEqualsToken,
        SlashEqualsToken,
        PercentEqualsToken,
        LessThanLessThanEqualsToken,
        GreaterThanGreaterThanEqualsToken,
        GreaterThanGreaterThanGreaterThanEqualsToken,
        AmpersandEqualsToken,
        BarEqualsToken,
        BarBarEqualsToken,
        AmpersandAmpersandEqualsToken,
        QuestionQuestionEqualsToken,
        CaretEqualsToken,
        Identifier,
        PrivateIdentifier,
        BreakKeyword,
        CaseKeyword,
        CatchKeyword,
        ClassKeyword,
        ConstKeyword,
        ContinueKeyword,
        DebuggerKeyword,
        DefaultKeyword,
        DeleteKeyword,
        DoKeyword,
        ElseKeyword,
        EnumKeyword,
        ExportKeyword,
        ExtendsKeyword,
        FalseKeyword,
        FinallyKeyword,
        ForKeyword,
        FunctionKeyword,
        IfKeyword,
        ImportKeyword,
        InKeyword,
        InstanceOfKeyword,
        NewKeyword,
        NullKeyword,
        ReturnKeyword,
        SuperKeyword,
        SwitchKeyword,
        ThisKeyword,
        ThrowKeyword,
        TrueKeyword,
        TryKeyword,
        TypeOfKeyword,
        VarKeyword,
        VoidKeyword,
        WhileKeyword,
        WithKeyword,
        ImplementsKeyword,
        InterfaceKeyword,
        LetKeyword,
        PackageKeyword,
        PrivateKeyword,
        ProtectedKeyword,
        PublicKeyword,
        StaticKeyword,
        YieldKeyword,
        AbstractKeyword,
        AccessorKeyword,
        AsKeyword,
        AssertsKeyword,
        AnyKeyword,
        AsyncKeyword,
        AwaitKeyword,
        BooleanKeyword,
        ConstructorKeyword,
        DeclareKeyword,
        GetKeyword,
        InferKeyword,
        IsKeyword,
        KeyOfKeyword,
        ModuleKeyword,
        NamespaceKeyword,
        NeverKeyword,
        ReadonlyKeyword,
        NumberKeyword,
        ObjectKeyword,
        SatisfiesKeyword,
        SetKeyword,
        StringKeyword,
        SymbolKeyword,
        TypeKeyword,
        UndefinedKeyword,
        UniqueKeyword,
        UnknownKeyword,
        FromKeyword,
        GlobalKeyword,
        BigIntKeyword,
        OverrideKeyword,
        OfKeyword,
    ]
};

/// Map identifier text to its keyword kind, if it is one.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    use SyntaxKind::*;
    let kind = match text {
        "break" => BreakKeyword,
        "case" => CaseKeyword,
        "catch" => CatchKeyword,
        "class" => ClassKeyword,
        "const" => ConstKeyword,
        "continue" => ContinueKeyword,
        "debugger" => DebuggerKeyword,
        "default" => DefaultKeyword,
        "delete" => DeleteKeyword,
        "do" => DoKeyword,
        "else" => ElseKeyword,
        "enum" => EnumKeyword,
        "export" => ExportKeyword,
        "extends" => ExtendsKeyword,
        "false" => FalseKeyword,
        "finally" => FinallyKeyword,
        "for" => ForKeyword,
        "function" => FunctionKeyword,
        "if" => IfKeyword,
        "import" => ImportKeyword,
        "in" => InKeyword,
        "instanceof" => InstanceOfKeyword,
        "new" => NewKeyword,
        "null" => NullKeyword,
        "return" => ReturnKeyword,
        "super" => SuperKeyword,
        "switch" => SwitchKeyword,
        "this" => ThisKeyword,
        "throw" => ThrowKeyword,
        "true" => TrueKeyword,
        "try" => TryKeyword,
        "typeof" => TypeOfKeyword,
        "var" => VarKeyword,
        "void" => VoidKeyword,
        "while" => WhileKeyword,
        "with" => WithKeyword,
        "implements" => ImplementsKeyword,
        "interface" => InterfaceKeyword,
        "let" => LetKeyword,
        "package" => PackageKeyword,
        "private" => PrivateKeyword,
        "protected" => ProtectedKeyword,
        "public" => PublicKeyword,
        "static" => StaticKeyword,
        "yield" => YieldKeyword,
        "abstract" => AbstractKeyword,
        "accessor" => AccessorKeyword,
        "as" => AsKeyword,
        "asserts" => AssertsKeyword,
        "any" => AnyKeyword,
        "async" => AsyncKeyword,
        "await" => AwaitKeyword,
        "boolean" => BooleanKeyword,
        "constructor" => ConstructorKeyword,
        "declare" => DeclareKeyword,
        "get" => GetKeyword,
        "infer" => InferKeyword,
        "is" => IsKeyword,
        "keyof" => KeyOfKeyword,
        "module" => ModuleKeyword,
        "namespace" => NamespaceKeyword,
        "never" => NeverKeyword,
        "readonly" => ReadonlyKeyword,
        "number" => NumberKeyword,
        "object" => ObjectKeyword,
        "satisfies" => SatisfiesKeyword,
        "set" => SetKeyword,
        "string" => StringKeyword,
        "symbol" => SymbolKeyword,
        "type" => TypeKeyword,
        "undefined" => UndefinedKeyword,
        "unique" => UniqueKeyword,
        "unknown" => UnknownKeyword,
        "from" => FromKeyword,
        "global" => GlobalKeyword,
        "bigint" => BigIntKeyword,
        "override" => OverrideKeyword,
        "of" => OfKeyword,
        _ => return None,
    };
    Some(kind)
}

/// Source text of a punctuation token, for "'{0}' expected." messages.
pub fn token_to_string(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        OpenBraceToken => "{",
        CloseBraceToken => "}",
        OpenParenToken => "(",
        CloseParenToken => ")",
        OpenBracketToken => "[",
        CloseBracketToken => "]",
        DotToken => ".",
        DotDotDotToken => "...",
        SemicolonToken => ";",
        CommaToken => ",",
        QuestionDotToken => "?.",
        LessThanToken => "<",
        LessThanSlashToken => "</",
        GreaterThanToken => ">",
        EqualsGreaterThanToken => "=>",
        EqualsToken => "=",
        ColonToken => ":",
        QuestionToken => "?",
        Identifier => "identifier",
        FromKeyword => "from",
        AsKeyword => "as",
        WhileKeyword => "while",
        EndOfFileToken => "end of file",
        _ => "token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_table_is_dense() {
        assert_eq!(ALL_TOKENS.len(), SyntaxKind::LAST_TOKEN as usize + 1);
        for (i, kind) in ALL_TOKENS.iter().enumerate() {
            assert_eq!(*kind as usize, i, "{kind:?} out of order");
        }
    }

    #[test]
    fn contextual_keywords_are_identifier_like() {
        assert!(SyntaxKind::AsyncKeyword.is_identifier_like());
        assert!(SyntaxKind::TypeKeyword.is_identifier_like());
        assert!(!SyntaxKind::ReturnKeyword.is_identifier_like());
        assert_eq!(text_to_keyword("satisfies"), Some(SyntaxKind::SatisfiesKeyword));
        assert_eq!(text_to_keyword("count$"), None);
    }
}
