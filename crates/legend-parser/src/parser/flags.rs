//! Node and modifier flags.

/// Packed into `Node::flags`.
pub mod node_flags {
    pub const NONE: u16 = 0;
    pub const LET: u16 = 1 << 0;
    pub const CONST: u16 = 1 << 1;
    pub const USING: u16 = 1 << 2;
    pub const OPTIONAL_CHAIN: u16 = 1 << 3;
    pub const EXPORT_CONTEXT: u16 = 1 << 4;
    pub const HAS_IMPLICIT_RETURN: u16 = 1 << 5;
    /// Node was synthesized by error recovery
    pub const THIS_NODE_HAS_ERROR: u16 = 1 << 6;
    pub const AMBIENT: u16 = 1 << 7;

    pub const BLOCK_SCOPED: u16 = LET | CONST | USING;
}

bitflags::bitflags! {
    /// Modifiers stored in `ExtendedNodeInfo::modifier_flags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ACCESSOR = 1 << 7;
        const ABSTRACT = 1 << 8;
        const ASYNC = 1 << 9;
        const DEFAULT = 1 << 10;
        const CONST = 1 << 11;
        const OVERRIDE = 1 << 12;
        const DECORATOR = 1 << 13;
    }
}

impl ModifierFlags {
    /// Flag for a modifier keyword token.
    pub fn from_keyword(kind: legend_scanner::SyntaxKind) -> ModifierFlags {
        use legend_scanner::SyntaxKind;
        match kind {
            SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
            SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            _ => ModifierFlags::empty(),
        }
    }
}
