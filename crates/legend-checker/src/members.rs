//! Member lookup: `this.x`, object literals, interfaces, type literals and
//! classes declared in the same file.

use legend_binder::symbol_flags;
use legend_parser::parser::flags::ModifierFlags;
use legend_parser::syntax::find_ancestor;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;

use crate::oracle::{TypeDescriptor, TypeOracle};
use crate::state::{CheckerState, declaration_of};

impl CheckerState<'_> {
    /// Declaration of `receiver.name`, when it is written in this file.
    pub(crate) fn member_declaration(&self, receiver: NodeIndex, name: &str) -> Option<NodeIndex> {
        self.guarded(|| self.compute_member_declaration(receiver, name))
    }

    fn compute_member_declaration(&self, receiver: NodeIndex, name: &str) -> Option<NodeIndex> {
        let receiver = self.arena.skip_parentheses(receiver);
        let node = self.arena.get(receiver)?;
        match node.kind {
            k if k == SyntaxKind::ThisKeyword as u16 => {
                let class = find_ancestor(self.arena, receiver, syntax_kind_ext::is_class_like)?;
                self.class_member(class, name)
            }
            k if k == SyntaxKind::Identifier as u16 => {
                let (_, symbol) = self.bound_symbol(receiver)?;
                let declaration = declaration_of(symbol);
                if symbol.has_any_flags(symbol_flags::CLASS) {
                    return self.class_member(declaration, name);
                }
                self.member_of_declaration(declaration, name)
            }
            k if k == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                let access = self.arena.get_access_expr(node)?;
                let inner_name = self.arena.identifier_text(access.name_or_argument)?;
                let inner = self.member_declaration(access.expression, inner_name)?;
                self.member_of_declaration(inner, name)
            }
            _ => self.member_of_expression(receiver, name),
        }
    }

    /// Member `name` of the value a declaration holds.
    fn member_of_declaration(&self, declaration: NodeIndex, name: &str) -> Option<NodeIndex> {
        let node = self.arena.get(declaration)?;
        let (annotation, initializer) = match node.kind {
            k if k == syntax_kind_ext::VARIABLE_DECLARATION => {
                let decl = self.arena.get_variable_declaration(node)?;
                (decl.type_annotation, decl.initializer)
            }
            k if k == syntax_kind_ext::PARAMETER => {
                let param = self.arena.get_parameter(node)?;
                (param.type_annotation, param.initializer)
            }
            k if k == syntax_kind_ext::PROPERTY_DECLARATION => {
                let prop = self.arena.get_property_decl(node)?;
                (prop.type_annotation, prop.initializer)
            }
            k if k == syntax_kind_ext::PROPERTY_SIGNATURE => {
                let sig = self.arena.get_signature(node)?;
                (sig.type_annotation, NodeIndex::NONE)
            }
            k if k == syntax_kind_ext::PROPERTY_ASSIGNMENT => {
                let prop = self.arena.get_property_assignment(node)?;
                (NodeIndex::NONE, prop.initializer)
            }
            _ => return None,
        };
        if annotation.is_some() {
            return self.member_of_type_node(annotation, name);
        }
        self.member_of_expression(initializer, name)
    }

    fn member_of_expression(&self, expr: NodeIndex, name: &str) -> Option<NodeIndex> {
        let expr = self.arena.skip_parentheses(expr);
        let node = self.arena.get(expr)?;
        match node.kind {
            k if k == syntax_kind_ext::OBJECT_LITERAL_EXPRESSION => {
                let literal = self.arena.get_literal_expr(node)?;
                literal
                    .elements
                    .iter()
                    .find(|&element| self.element_name(element) == Some(name))
            }
            k if k == syntax_kind_ext::NEW_EXPRESSION => {
                let call = self.arena.get_call_expr(node)?;
                let (_, symbol) = self.bound_symbol(call.expression)?;
                if !symbol.has_any_flags(symbol_flags::CLASS) {
                    return None;
                }
                self.class_member(declaration_of(symbol), name)
            }
            k if k == syntax_kind_ext::AS_EXPRESSION || k == syntax_kind_ext::SATISFIES_EXPRESSION => {
                let assertion = self.arena.get_type_assertion(node)?;
                self.member_of_type_node(assertion.type_node, name)
                    .or_else(|| self.member_of_expression(assertion.expression, name))
            }
            _ => None,
        }
    }

    pub(crate) fn member_of_type_node(&self, type_node: NodeIndex, name: &str) -> Option<NodeIndex> {
        self.guarded(|| self.compute_member_of_type_node(type_node, name))
    }

    fn compute_member_of_type_node(&self, type_node: NodeIndex, name: &str) -> Option<NodeIndex> {
        let node = self.arena.get(type_node)?;
        match node.kind {
            k if k == syntax_kind_ext::TYPE_LITERAL => {
                let literal = self.arena.get_type_literal(node)?;
                literal
                    .members
                    .iter()
                    .find(|&member| self.element_name(member) == Some(name))
            }
            k if k == syntax_kind_ext::PARENTHESIZED_TYPE => {
                let wrapped = self.arena.get_wrapped_type(node)?;
                self.member_of_type_node(wrapped.type_node, name)
            }
            k if k == syntax_kind_ext::INTERSECTION_TYPE => {
                let composite = self.arena.get_composite_type(node)?;
                composite
                    .types
                    .iter()
                    .find_map(|t| self.member_of_type_node(t, name))
            }
            k if k == syntax_kind_ext::TYPE_REFERENCE => {
                let reference = self.arena.get_type_ref(node)?;
                let (_, symbol) = self.bound_symbol(reference.type_name)?;
                symbol.declarations.iter().find_map(|&decl| {
                    let decl_node = self.arena.get(decl)?;
                    match decl_node.kind {
                        k if k == syntax_kind_ext::INTERFACE_DECLARATION => {
                            let iface = self.arena.get_interface(decl_node)?;
                            iface
                                .members
                                .iter()
                                .find(|&member| self.element_name(member) == Some(name))
                        }
                        k if k == syntax_kind_ext::TYPE_ALIAS_DECLARATION => {
                            let alias = self.arena.get_type_alias(decl_node)?;
                            self.member_of_type_node(alias.type_node, name)
                        }
                        k if k == syntax_kind_ext::CLASS_DECLARATION => {
                            self.class_member(decl, name)
                        }
                        _ => None,
                    }
                })
            }
            _ => None,
        }
    }

    /// Property, method or accessor of a class, including constructor
    /// parameter properties.
    pub(crate) fn class_member(&self, class: NodeIndex, name: &str) -> Option<NodeIndex> {
        let class = self.arena.get(class).and_then(|n| self.arena.get_class(n))?;
        for member in class.members.iter() {
            let Some(member_node) = self.arena.get(member) else {
                continue;
            };
            if member_node.kind == syntax_kind_ext::CONSTRUCTOR {
                let Some(ctor) = self.arena.get_constructor(member_node) else {
                    continue;
                };
                let property_modifiers = ModifierFlags::PUBLIC
                    | ModifierFlags::PRIVATE
                    | ModifierFlags::PROTECTED
                    | ModifierFlags::READONLY;
                let found = ctor.parameters.iter().find(|&param| {
                    self.arena.modifier_flags(param).intersects(property_modifiers)
                        && self
                            .arena
                            .get(param)
                            .and_then(|n| self.arena.get_parameter(n))
                            .and_then(|p| self.arena.identifier_text(p.name))
                            == Some(name)
                });
                if found.is_some() {
                    return found;
                }
                continue;
            }
            if self.element_name(member) == Some(name) {
                return Some(member);
            }
        }
        None
    }

    /// Written name of a member-like node.
    fn element_name(&self, element: NodeIndex) -> Option<&str> {
        let node = self.arena.get(element)?;
        let name = match node.kind {
            k if k == syntax_kind_ext::PROPERTY_ASSIGNMENT
                || k == syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT =>
            {
                self.arena.get_property_assignment(node)?.name
            }
            k if k == syntax_kind_ext::METHOD_DECLARATION => self.arena.get_method_decl(node)?.name,
            k if k == syntax_kind_ext::PROPERTY_DECLARATION => self.arena.get_property_decl(node)?.name,
            k if k == syntax_kind_ext::GET_ACCESSOR || k == syntax_kind_ext::SET_ACCESSOR => {
                self.arena.get_accessor(node)?.name
            }
            k if k == syntax_kind_ext::PROPERTY_SIGNATURE || k == syntax_kind_ext::METHOD_SIGNATURE => {
                self.arena.get_signature(node)?.name
            }
            _ => return None,
        };
        self.arena
            .identifier_text(name)
            .or_else(|| self.arena.literal_text(name))
    }

    /// Type of `expr.name`, or of `name` destructured from `expr`.
    pub(crate) fn property_type_of_expression(
        &self,
        expr: NodeIndex,
        name: &str,
    ) -> Option<TypeDescriptor> {
        if let Some(member) = self.member_declaration(expr, name) {
            return self.type_of(member);
        }
        self.observable_child_type(expr)
    }

    /// Function-like node a callee refers to, if it is declared here.
    pub(crate) fn local_function_of(&self, callee: NodeIndex) -> Option<NodeIndex> {
        let callee = self.arena.skip_parentheses(callee);
        let node = self.arena.get(callee)?;
        let declaration = if node.kind == SyntaxKind::Identifier as u16 {
            let (_, symbol) = self.bound_symbol(callee)?;
            if symbol.import.is_some() {
                return None;
            }
            declaration_of(symbol)
        } else if node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION {
            let access = self.arena.get_access_expr(node)?;
            let name = self.arena.identifier_text(access.name_or_argument)?;
            self.member_declaration(access.expression, name)?
        } else {
            return None;
        };
        self.function_of_declaration(declaration)
    }

    fn function_of_declaration(&self, declaration: NodeIndex) -> Option<NodeIndex> {
        let node = self.arena.get(declaration)?;
        if syntax_kind_ext::is_function_like(node.kind) {
            return Some(declaration);
        }
        let initializer = match node.kind {
            k if k == syntax_kind_ext::VARIABLE_DECLARATION => {
                self.arena.get_variable_declaration(node)?.initializer
            }
            k if k == syntax_kind_ext::PROPERTY_DECLARATION => {
                self.arena.get_property_decl(node)?.initializer
            }
            k if k == syntax_kind_ext::PROPERTY_ASSIGNMENT => {
                self.arena.get_property_assignment(node)?.initializer
            }
            _ => return None,
        };
        let initializer = self.arena.skip_parentheses(initializer);
        self.arena
            .kind_of(initializer)
            .is_some_and(syntax_kind_ext::is_function_like)
            .then_some(initializer)
    }
}
