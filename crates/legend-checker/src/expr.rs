//! Expression and declaration types.

use legend_binder::{ImportKind, symbol_flags};
use legend_parser::parser::node::Node;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;
use tracing::trace;

use crate::oracle::{SymbolRef, TypeDescriptor, TypeOracle};
use crate::state::{CheckerState, declaration_of};

/// Members of an observable that are methods rather than child observables.
pub const OBSERVABLE_METHODS: &[&str] = &[
    "get", "peek", "set", "assign", "delete", "onChange", "use", "toggle",
];

impl<'a> CheckerState<'a> {
    pub(crate) fn compute_type_of(&self, idx: NodeIndex) -> Option<TypeDescriptor> {
        let node = self.arena.get(idx)?;
        match node.kind {
            k if k == syntax_kind_ext::VARIABLE_DECLARATION => {
                let decl = self.arena.get_variable_declaration(node)?;
                self.declared_type(decl.type_annotation, decl.initializer)
            }
            k if k == syntax_kind_ext::PARAMETER => {
                let param = self.arena.get_parameter(node)?;
                self.declared_type(param.type_annotation, param.initializer)
            }
            k if k == syntax_kind_ext::PROPERTY_DECLARATION => {
                let prop = self.arena.get_property_decl(node)?;
                self.declared_type(prop.type_annotation, prop.initializer)
            }
            k if k == syntax_kind_ext::PROPERTY_SIGNATURE => {
                let sig = self.arena.get_signature(node)?;
                self.type_from_type_node(sig.type_annotation)
            }
            k if k == syntax_kind_ext::PROPERTY_ASSIGNMENT => {
                let prop = self.arena.get_property_assignment(node)?;
                self.type_of(prop.initializer)
            }
            k if k == syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT => {
                let prop = self.arena.get_property_assignment(node)?;
                self.type_of(prop.name)
            }
            k if k == syntax_kind_ext::BINDING_ELEMENT => self.type_of_binding_element(idx, node),
            k if k == syntax_kind_ext::GET_ACCESSOR => self.return_type_of_function(idx),
            k if k == syntax_kind_ext::METHOD_DECLARATION
                || k == syntax_kind_ext::FUNCTION_DECLARATION
                || k == syntax_kind_ext::FUNCTION_EXPRESSION
                || k == syntax_kind_ext::ARROW_FUNCTION =>
            {
                self.function_type_of(idx)
            }
            k if k == SyntaxKind::Identifier as u16 => self.type_of_identifier(idx),
            k if k == syntax_kind_ext::PARENTHESIZED_EXPRESSION
                || k == syntax_kind_ext::NON_NULL_EXPRESSION =>
            {
                let inner = self.arena.get_unary_expr_ex(node)?;
                self.type_of(inner.expression)
            }
            k if k == syntax_kind_ext::SATISFIES_EXPRESSION => {
                let assertion = self.arena.get_type_assertion(node)?;
                self.type_of(assertion.expression)
            }
            k if k == syntax_kind_ext::AS_EXPRESSION || k == syntax_kind_ext::TYPE_ASSERTION => {
                let assertion = self.arena.get_type_assertion(node)?;
                // `as const` keeps the expression's own type.
                if self.node_text(assertion.type_node).as_deref() == Some("const") {
                    return self.type_of(assertion.expression);
                }
                self.type_from_type_node(assertion.type_node)
            }
            k if k == syntax_kind_ext::CALL_EXPRESSION => self.type_of_call(idx, node),
            k if k == syntax_kind_ext::NEW_EXPRESSION => self.type_of_new(node),
            k if k == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                self.type_of_property_access(idx, node)
            }
            k if k == syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION => {
                let access = self.arena.get_access_expr(node)?;
                self.observable_child_type(access.expression)
            }
            k if k == syntax_kind_ext::BINARY_EXPRESSION => self.type_of_binary(node),
            k if k == syntax_kind_ext::CONDITIONAL_EXPRESSION => {
                let cond = self.arena.get_conditional_expr(node)?;
                let when_true = self.type_of(cond.when_true)?;
                let when_false = self.type_of(cond.when_false)?;
                (when_true.name == when_false.name).then_some(when_true)
            }
            k if syntax_kind_ext::is_jsx_markup(k) => Some(self.jsx_element_type()),
            k if k == syntax_kind_ext::CLASS_EXPRESSION || k == syntax_kind_ext::CLASS_DECLARATION => {
                let class = self.arena.get_class(node)?;
                let name = self.arena.identifier_text(class.name).unwrap_or("(Anonymous class)");
                Some(
                    TypeDescriptor::named(format!("typeof {name}"))
                        .with_symbol(self.symbol_of(idx)),
                )
            }
            k if k == syntax_kind_ext::OBJECT_LITERAL_EXPRESSION => {
                Some(TypeDescriptor::named("object"))
            }
            k if k == syntax_kind_ext::ARRAY_LITERAL_EXPRESSION => {
                let literal = self.arena.get_literal_expr(node)?;
                let element = literal
                    .elements
                    .first()
                    .and_then(|first| self.type_of(first))
                    .map_or_else(|| "any".to_string(), |t| t.name);
                Some(TypeDescriptor::with_family(format!("{element}[]"), "Array"))
            }
            k if k == syntax_kind_ext::TEMPLATE_EXPRESSION => Some(TypeDescriptor::named("string")),
            k if k == syntax_kind_ext::PREFIX_UNARY_EXPRESSION => {
                let unary = self.arena.get_unary_expr(node)?;
                if unary.operator == SyntaxKind::ExclamationToken as u16 {
                    Some(TypeDescriptor::named("boolean"))
                } else {
                    self.type_of(unary.operand)
                }
            }
            k if k == syntax_kind_ext::TYPE_OF_EXPRESSION => Some(TypeDescriptor::named("string")),
            k if k == syntax_kind_ext::AWAIT_EXPRESSION => {
                let inner = self.arena.get_unary_expr_ex(node)?;
                let awaited = self.type_of(inner.expression)?;
                if awaited.family.as_deref() == Some("Promise") {
                    return self.promise_inner_type(&awaited);
                }
                Some(awaited)
            }
            _ => literal_type(node),
        }
    }

    /// Annotation wins; otherwise the initializer's type.
    pub(crate) fn declared_type(
        &self,
        annotation: NodeIndex,
        initializer: NodeIndex,
    ) -> Option<TypeDescriptor> {
        if annotation.is_some() {
            return self.type_from_type_node(annotation);
        }
        if initializer.is_some() {
            return self.type_of(initializer);
        }
        None
    }

    pub(crate) fn jsx_element_type(&self) -> TypeDescriptor {
        let name = self.options.jsx_element_type.clone();
        TypeDescriptor::with_family(name.clone(), name.clone())
            .with_symbol(Some(SymbolRef::synthetic(name)))
    }

    fn type_of_identifier(&self, idx: NodeIndex) -> Option<TypeDescriptor> {
        let Some((id, symbol)) = self.bound_symbol(idx) else {
            return match self.arena.identifier_text(idx)? {
                "undefined" => Some(TypeDescriptor::named("undefined")),
                "React" => Some(
                    TypeDescriptor::named("typeof React")
                        .with_symbol(Some(SymbolRef::synthetic("React"))),
                ),
                _ => None,
            };
        };

        if let Some(import) = &symbol.import {
            if !self.options.is_react_module(&import.module_specifier) {
                return None;
            }
            let reference = self.react_import_symbol(symbol)?;
            return Some(
                TypeDescriptor::named(format!("typeof {}", reference.name))
                    .with_symbol(Some(reference)),
            );
        }

        let declaration = declaration_of(symbol);
        let decl_node = self.arena.get(declaration)?;
        match decl_node.kind {
            k if k == syntax_kind_ext::VARIABLE_DECLARATION
                || k == syntax_kind_ext::PARAMETER
                || k == syntax_kind_ext::BINDING_ELEMENT
                || k == syntax_kind_ext::PROPERTY_DECLARATION =>
            {
                // Don't recurse into the identifier's own declaration name.
                if declaration == idx {
                    return None;
                }
                self.type_of(declaration)
            }
            k if k == syntax_kind_ext::FUNCTION_DECLARATION => self.function_type_of(declaration),
            _ if symbol.has_any_flags(symbol_flags::CLASS | symbol_flags::ENUM | symbol_flags::MODULE) =>
            {
                Some(
                    TypeDescriptor::named(format!("typeof {}", symbol.name))
                        .with_symbol(Some(Self::symbol_ref(id, symbol))),
                )
            }
            _ => None,
        }
    }

    /// `{ a } = init` and `[a] = init` bindings.
    fn type_of_binding_element(&self, idx: NodeIndex, node: &Node) -> Option<TypeDescriptor> {
        let element = self.arena.get_binding_element(node)?;
        if element.initializer.is_some()
            && let Some(ty) = self.type_of(element.initializer)
        {
            return Some(ty);
        }
        let pattern = self.arena.parent_of(idx);
        if !self.arena.is_kind(pattern, syntax_kind_ext::OBJECT_BINDING_PATTERN) {
            return None;
        }
        let declaration = self.arena.parent_of(pattern);
        let decl = self
            .arena
            .get(declaration)
            .and_then(|n| self.arena.get_variable_declaration(n))?;
        let key = if element.property_name.is_some() {
            element.property_name
        } else {
            element.name
        };
        let name = self.arena.identifier_text(key)?;
        if decl.type_annotation.is_some() {
            let member = self.member_of_type_node(decl.type_annotation, name)?;
            return self.type_of(member);
        }
        self.property_type_of_expression(decl.initializer, name)
    }

    fn type_of_call(&self, idx: NodeIndex, node: &Node) -> Option<TypeDescriptor> {
        let call = self.arena.get_call_expr(node)?;
        let callee = self.arena.skip_parentheses(call.expression);

        if let Some(function) = self.local_function_of(callee) {
            return self.return_type_of_function(function);
        }

        let family = self.factory_family_of(callee)?;
        trace!(call = idx.0, family, "factory call");
        let argument = match call.type_arguments.as_ref().and_then(|args| args.first()) {
            Some(type_arg) => self.node_text(type_arg),
            None => call
                .arguments
                .as_ref()
                .and_then(|args| args.first())
                .and_then(|first| self.type_of(first))
                .map(|t| t.name),
        };
        let name = match argument {
            Some(argument) => format!("{family}<{argument}>"),
            None => family.to_string(),
        };
        Some(
            TypeDescriptor::with_family(name, family)
                .with_symbol(Some(SymbolRef::synthetic(family))),
        )
    }

    /// Result family when `callee` names a configured factory, directly,
    /// through a renamed import, or as `ns.factory`.
    pub(crate) fn factory_family_of(&self, callee: NodeIndex) -> Option<&'a str> {
        let callee_node = self.arena.get(callee)?;
        let name = if callee_node.kind == SyntaxKind::Identifier as u16 {
            match self.bound_symbol(callee) {
                Some((_, symbol)) => match &symbol.import {
                    Some(import) if import.kind == ImportKind::Named => {
                        import.imported_name.as_deref().unwrap_or(&symbol.name)
                    }
                    // Local declarations and default/namespace imports shadow factories.
                    _ => return None,
                },
                None => self.arena.identifier_text(callee)?,
            }
        } else if callee_node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION {
            let access = self.arena.get_access_expr(callee_node)?;
            self.arena.identifier_text(access.name_or_argument)?
        } else {
            return None;
        };
        self.options.factory_family(name)
    }

    fn type_of_new(&self, node: &Node) -> Option<TypeDescriptor> {
        let call = self.arena.get_call_expr(node)?;
        let family = self.arena.entity_name_text(call.expression)?;
        let name = match &call.type_arguments {
            Some(args) if !args.is_empty() => {
                let args: Vec<String> = args.iter().filter_map(|a| self.node_text(a)).collect();
                format!("{family}<{}>", args.join(", "))
            }
            _ => family.clone(),
        };
        Some(TypeDescriptor::with_family(name, family).with_symbol(self.symbol_of(call.expression)))
    }

    fn type_of_property_access(&self, idx: NodeIndex, node: &Node) -> Option<TypeDescriptor> {
        let access = self.arena.get_access_expr(node)?;

        if let Some(symbol) = self.symbol_of(idx)
            && symbol.id.is_none()
            && symbol.declaration.is_none()
        {
            return Some(TypeDescriptor::named(format!("typeof {}", symbol.name)).with_symbol(Some(symbol)));
        }

        let name = self.arena.identifier_text(access.name_or_argument)?;
        if let Some(member) = self.member_declaration(access.expression, name) {
            return self.type_of(member);
        }
        if OBSERVABLE_METHODS.contains(&name) {
            return None;
        }
        self.observable_child_type(access.expression)
    }

    /// Children of an observable are observables of the same family.
    pub(crate) fn observable_child_type(&self, receiver: NodeIndex) -> Option<TypeDescriptor> {
        let parent = self.type_of(receiver)?;
        let family = parent.family.as_deref()?;
        if !family.starts_with(self.options.observable_type_prefix.as_str()) {
            return None;
        }
        Some(
            TypeDescriptor::with_family(family, family)
                .with_symbol(Some(SymbolRef::synthetic(family))),
        )
    }

    fn type_of_binary(&self, node: &Node) -> Option<TypeDescriptor> {
        let binary = self.arena.get_binary_expr(node)?;
        let op = binary.operator_token;
        if op == SyntaxKind::EqualsToken as u16 {
            return self.type_of(binary.right);
        }
        if op == SyntaxKind::QuestionQuestionToken as u16 || op == SyntaxKind::BarBarToken as u16 {
            return self.type_of(binary.left).or_else(|| self.type_of(binary.right));
        }
        let is_comparison = [
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::LessThanToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::LessThanEqualsToken,
            SyntaxKind::GreaterThanEqualsToken,
            SyntaxKind::InstanceOfKeyword,
            SyntaxKind::InKeyword,
        ]
        .iter()
        .any(|kind| *kind as u16 == op);
        is_comparison.then(|| TypeDescriptor::named("boolean"))
    }

    fn promise_inner_type(&self, promise: &TypeDescriptor) -> Option<TypeDescriptor> {
        let inner = promise
            .name
            .strip_prefix("Promise<")?
            .strip_suffix('>')?
            .trim();
        let family = inner.split('<').next().unwrap_or(inner).trim();
        Some(TypeDescriptor::with_family(inner, family))
    }

    // Symbols

    pub(crate) fn compute_symbol_of(&self, idx: NodeIndex) -> Option<SymbolRef> {
        let node = self.arena.get(idx)?;
        match node.kind {
            k if k == SyntaxKind::Identifier as u16 => match self.bound_symbol(idx) {
                Some((id, symbol)) => {
                    if let Some(import) = &symbol.import
                        && self.options.is_react_module(&import.module_specifier)
                    {
                        return self.react_import_symbol(symbol);
                    }
                    Some(Self::symbol_ref(id, symbol))
                }
                None => (self.arena.identifier_text(idx)? == "React")
                    .then(|| SymbolRef::synthetic("React")),
            },
            k if k == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                let access = self.arena.get_access_expr(node)?;
                let name = self.arena.identifier_text(access.name_or_argument)?;
                if let Some(member) = self.member_declaration(access.expression, name) {
                    return match self.bound_symbol(member) {
                        Some((id, symbol)) => Some(Self::symbol_ref(id, symbol)),
                        None => Some(SymbolRef {
                            id: legend_binder::SymbolId::NONE,
                            name: name.to_string(),
                            declaration: member,
                        }),
                    };
                }
                let receiver = self.symbol_of(access.expression)?;
                // Members of a module namespace are qualified by it.
                let is_namespace = (receiver.id.is_none() && receiver.declaration.is_none())
                    || self
                        .binder
                        .get_symbol(receiver.id)
                        .and_then(|s| s.import.as_ref())
                        .is_some_and(|i| i.kind != ImportKind::Named);
                is_namespace.then(|| SymbolRef::synthetic(format!("{}.{name}", receiver.name)))
            }
            k if k == syntax_kind_ext::PARENTHESIZED_EXPRESSION => {
                let inner = self.arena.get_unary_expr_ex(node)?;
                self.symbol_of(inner.expression)
            }
            k if k == syntax_kind_ext::EXPRESSION_WITH_TYPE_ARGUMENTS => {
                let expr = self.arena.get_expr_type_args(node)?;
                self.symbol_of(expr.expression)
            }
            _ => {
                let (id, symbol) = self.bound_symbol(idx)?;
                Some(Self::symbol_ref(id, symbol))
            }
        }
    }

    /// `React.<name>` for named imports, `React` for default and namespace
    /// imports of a React module.
    fn react_import_symbol(&self, symbol: &legend_binder::Symbol) -> Option<SymbolRef> {
        let import = symbol.import.as_ref()?;
        let name = match import.kind {
            ImportKind::Named => {
                format!("React.{}", import.imported_name.as_deref().unwrap_or(&symbol.name))
            }
            ImportKind::Default | ImportKind::Namespace => "React".to_string(),
        };
        Some(SymbolRef::synthetic(name))
    }
}

/// Types of literal tokens.
fn literal_type(node: &Node) -> Option<TypeDescriptor> {
    let name = match node.kind {
        k if k == SyntaxKind::NumericLiteral as u16 => "number",
        k if k == SyntaxKind::BigIntLiteral as u16 => "bigint",
        k if k == SyntaxKind::StringLiteral as u16
            || k == SyntaxKind::NoSubstitutionTemplateLiteral as u16 =>
        {
            "string"
        }
        k if k == SyntaxKind::TrueKeyword as u16 || k == SyntaxKind::FalseKeyword as u16 => {
            "boolean"
        }
        k if k == SyntaxKind::NullKeyword as u16 => "null",
        k if k == SyntaxKind::RegularExpressionLiteral as u16 => "RegExp",
        _ => return None,
    };
    Some(TypeDescriptor::named(name))
}
