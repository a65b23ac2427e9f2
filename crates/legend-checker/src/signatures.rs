//! Function types, return types and call signature counts.

use legend_binder::symbol_flags;
use legend_parser::parser::flags::ModifierFlags;
use legend_parser::{NodeIndex, NodeList, syntax_kind_ext};
use legend_scanner::SyntaxKind;
use smallvec::SmallVec;

use crate::oracle::{TypeDescriptor, TypeOracle};
use crate::state::{CheckerState, declaration_of};

/// The parts of a function-like node the return type depends on.
struct FunctionParts<'n> {
    parameters: &'n NodeList,
    annotation: NodeIndex,
    body: NodeIndex,
    is_async: bool,
    is_generator: bool,
}

impl CheckerState<'_> {
    fn function_parts(&self, function: NodeIndex) -> Option<FunctionParts<'_>> {
        let node = self.arena.get(function)?;
        let is_async = self.arena.modifier_flags(function).contains(ModifierFlags::ASYNC);
        match node.kind {
            k if k == syntax_kind_ext::FUNCTION_DECLARATION
                || k == syntax_kind_ext::FUNCTION_EXPRESSION
                || k == syntax_kind_ext::ARROW_FUNCTION =>
            {
                let func = self.arena.get_function(node)?;
                Some(FunctionParts {
                    parameters: &func.parameters,
                    annotation: func.type_annotation,
                    body: func.body,
                    is_async: is_async || func.is_async,
                    is_generator: func.asterisk_token,
                })
            }
            k if k == syntax_kind_ext::METHOD_DECLARATION => {
                let method = self.arena.get_method_decl(node)?;
                Some(FunctionParts {
                    parameters: &method.parameters,
                    annotation: method.type_annotation,
                    body: method.body,
                    is_async,
                    is_generator: method.asterisk_token,
                })
            }
            k if k == syntax_kind_ext::GET_ACCESSOR || k == syntax_kind_ext::SET_ACCESSOR => {
                let accessor = self.arena.get_accessor(node)?;
                Some(FunctionParts {
                    parameters: &accessor.parameters,
                    annotation: accessor.type_annotation,
                    body: accessor.body,
                    is_async: false,
                    is_generator: false,
                })
            }
            _ => None,
        }
    }

    /// `(a: number) => string` for a function-like node.
    pub(crate) fn function_type_of(&self, function: NodeIndex) -> Option<TypeDescriptor> {
        let parts = self.function_parts(function)?;
        let params: Vec<String> = parts
            .parameters
            .iter()
            .filter_map(|param| self.node_text(param))
            .collect();
        let returns = self
            .return_type_of_function(function)
            .map_or_else(|| "void".to_string(), |t| t.name);
        Some(TypeDescriptor::named(format!("({}) => {returns}", params.join(", "))))
    }

    /// Declared return type, else one inferred from the body: UI markup
    /// anywhere among the returns wins, then the first return whose type
    /// is known.
    pub(crate) fn return_type_of_function(&self, function: NodeIndex) -> Option<TypeDescriptor> {
        let parts = self.function_parts(function)?;
        if parts.annotation.is_some() {
            return self.type_from_type_node(parts.annotation);
        }
        if parts.is_generator {
            return None;
        }
        let body = self.arena.get(parts.body)?;
        let inferred = if body.kind == syntax_kind_ext::BLOCK {
            self.inferred_return_type(parts.body)
        } else {
            self.type_of(parts.body)
        };
        if !parts.is_async {
            return inferred;
        }
        let inner = inferred.map_or_else(|| "void".to_string(), |t| t.name);
        Some(TypeDescriptor::with_family(format!("Promise<{inner}>"), "Promise"))
    }

    fn inferred_return_type(&self, body: NodeIndex) -> Option<TypeDescriptor> {
        let returned = self.own_return_expressions(body);
        let returns_markup = returned.iter().any(|&expr| {
            let expr = self.arena.skip_parentheses(expr);
            self.arena
                .kind_of(expr)
                .is_some_and(syntax_kind_ext::is_jsx_markup)
        });
        if returns_markup {
            return Some(self.jsx_element_type());
        }
        returned.iter().find_map(|&expr| self.type_of(expr))
    }

    /// Expressions of `return` statements belonging to this body, not to
    /// nested functions or classes.
    fn own_return_expressions(&self, body: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut found = SmallVec::new();
        let mut stack: SmallVec<[NodeIndex; 32]> = SmallVec::new();
        stack.push(body);
        while let Some(idx) = stack.pop() {
            let Some(node) = self.arena.get(idx) else {
                continue;
            };
            if idx != body
                && (syntax_kind_ext::is_function_like(node.kind)
                    || syntax_kind_ext::is_class_like(node.kind))
            {
                continue;
            }
            if node.kind == syntax_kind_ext::RETURN_STATEMENT {
                if let Some(ret) = self.arena.get_return_statement(node)
                    && ret.expression.is_some()
                {
                    found.push(ret.expression);
                }
                continue;
            }
            let start = stack.len();
            self.arena.for_each_child(idx, |child| stack.push(child));
            stack[start..].reverse();
        }
        found
    }

    /// How many call signatures the value at `node` has, as far as this
    /// file shows. Imported and factory callees count as one.
    pub(crate) fn count_call_signatures(&self, node: NodeIndex) -> usize {
        let idx = self.arena.skip_parentheses(node);
        let Some(n) = self.arena.get(idx) else {
            return 0;
        };
        if syntax_kind_ext::is_function_like(n.kind) {
            return 1;
        }
        match n.kind {
            k if k == SyntaxKind::Identifier as u16 => match self.bound_symbol(idx) {
                Some((_, symbol)) if symbol.import.is_some() => 1,
                Some((_, symbol)) if symbol.has_any_flags(symbol_flags::FUNCTION) => {
                    let overloads = symbol
                        .declarations
                        .iter()
                        .filter(|&&decl| {
                            self.arena
                                .get(decl)
                                .and_then(|d| self.arena.get_function(d))
                                .is_some_and(|f| f.body.is_none())
                        })
                        .count();
                    overloads.max(1)
                }
                Some((_, symbol)) if symbol.has_any_flags(symbol_flags::METHOD) => 1,
                Some((_, symbol)) => self.signatures_of_declaration(declaration_of(symbol)),
                None => {
                    let is_factory = self.factory_family_of(idx).is_some();
                    usize::from(is_factory)
                }
            },
            k if k == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                let Some(access) = self.arena.get_access_expr(n) else {
                    return 0;
                };
                let Some(name) = self.arena.identifier_text(access.name_or_argument) else {
                    return 0;
                };
                if let Some(member) = self.member_declaration(access.expression, name) {
                    return self.signatures_of_declaration(member);
                }
                let module_member = self
                    .symbol_of(idx)
                    .is_some_and(|s| s.id.is_none() && s.declaration.is_none());
                usize::from(module_member || self.factory_family_of(idx).is_some())
            }
            _ => 0,
        }
    }

    fn signatures_of_declaration(&self, declaration: NodeIndex) -> usize {
        let Some(node) = self.arena.get(declaration) else {
            return 0;
        };
        if syntax_kind_ext::is_function_like(node.kind) || node.kind == syntax_kind_ext::METHOD_SIGNATURE {
            return 1;
        }
        let (annotation, initializer) = match node.kind {
            k if k == syntax_kind_ext::VARIABLE_DECLARATION => self
                .arena
                .get_variable_declaration(node)
                .map_or((NodeIndex::NONE, NodeIndex::NONE), |d| (d.type_annotation, d.initializer)),
            k if k == syntax_kind_ext::PARAMETER => self
                .arena
                .get_parameter(node)
                .map_or((NodeIndex::NONE, NodeIndex::NONE), |p| (p.type_annotation, p.initializer)),
            k if k == syntax_kind_ext::PROPERTY_DECLARATION => self
                .arena
                .get_property_decl(node)
                .map_or((NodeIndex::NONE, NodeIndex::NONE), |p| (p.type_annotation, p.initializer)),
            k if k == syntax_kind_ext::PROPERTY_SIGNATURE => self
                .arena
                .get_signature(node)
                .map_or((NodeIndex::NONE, NodeIndex::NONE), |s| (s.type_annotation, NodeIndex::NONE)),
            k if k == syntax_kind_ext::PROPERTY_ASSIGNMENT => self
                .arena
                .get_property_assignment(node)
                .map_or((NodeIndex::NONE, NodeIndex::NONE), |p| (NodeIndex::NONE, p.initializer)),
            k if k == syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT => self
                .arena
                .get_property_assignment(node)
                .map_or((NodeIndex::NONE, NodeIndex::NONE), |p| (NodeIndex::NONE, p.name)),
            _ => return 0,
        };
        if annotation.is_some() {
            return self.signatures_of_type_node(annotation);
        }
        if initializer.is_some() {
            return self.call_signatures_of(initializer);
        }
        0
    }

    fn signatures_of_type_node(&self, type_node: NodeIndex) -> usize {
        self.guarded(|| Some(self.compute_signatures_of_type_node(type_node)))
            .unwrap_or(0)
    }

    fn compute_signatures_of_type_node(&self, type_node: NodeIndex) -> usize {
        let Some(node) = self.arena.get(type_node) else {
            return 0;
        };
        let count_call_members = |members: &NodeList| {
            members
                .iter()
                .filter(|&m| self.arena.is_kind(m, syntax_kind_ext::CALL_SIGNATURE))
                .count()
        };
        match node.kind {
            k if k == syntax_kind_ext::FUNCTION_TYPE => 1,
            k if k == syntax_kind_ext::PARENTHESIZED_TYPE => self
                .arena
                .get_wrapped_type(node)
                .map_or(0, |w| self.signatures_of_type_node(w.type_node)),
            k if k == syntax_kind_ext::TYPE_LITERAL => self
                .arena
                .get_type_literal(node)
                .map_or(0, |lit| count_call_members(&lit.members)),
            k if k == syntax_kind_ext::TYPE_REFERENCE => {
                let Some(reference) = self.arena.get_type_ref(node) else {
                    return 0;
                };
                let Some((_, symbol)) = self.bound_symbol(reference.type_name) else {
                    return 0;
                };
                symbol
                    .declarations
                    .iter()
                    .map(|&decl| {
                        let Some(decl_node) = self.arena.get(decl) else {
                            return 0;
                        };
                        if let Some(iface) = self.arena.get_interface(decl_node) {
                            count_call_members(&iface.members)
                        } else if let Some(alias) = self.arena.get_type_alias(decl_node) {
                            self.signatures_of_type_node(alias.type_node)
                        } else {
                            0
                        }
                    })
                    .sum()
            }
            _ => 0,
        }
    }
}
