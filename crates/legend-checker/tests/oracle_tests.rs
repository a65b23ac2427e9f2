use legend_binder::BinderState;
use legend_checker::{CheckerOptions, CheckerState, TypeOracle};
use legend_parser::parser::node::NodeArena;
use legend_parser::syntax::preorder;
use legend_parser::{NodeIndex, ParserState, syntax_kind_ext};

struct Fixture {
    source: String,
    arena: NodeArena,
    root: NodeIndex,
    binder: BinderState,
    options: CheckerOptions,
}

impl Fixture {
    fn new(source: &str) -> Fixture {
        let mut parser = ParserState::new("test.tsx".to_string(), source.to_string());
        let root = parser.parse_source_file();
        let arena = parser.into_arena();
        let mut binder = BinderState::new();
        binder.bind_source_file(&arena, root);
        Fixture {
            source: source.to_string(),
            arena,
            root,
            binder,
            options: CheckerOptions::default(),
        }
    }

    fn checker(&self) -> CheckerState<'_> {
        CheckerState::new(&self.arena, &self.binder, &self.options)
    }

    /// First node of `kind` whose source text is exactly `text`.
    fn node(&self, kind: u16, text: &str) -> NodeIndex {
        preorder(&self.arena, self.root)
            .find(|&idx| {
                self.arena.is_kind(idx, kind)
                    && self.arena.node_text(idx, &self.source) == Some(text)
            })
            .unwrap_or_else(|| panic!("no node {text:?} of kind {kind}"))
    }

    /// The variable declaration named `name`.
    fn declaration(&self, name: &str) -> NodeIndex {
        preorder(&self.arena, self.root)
            .find(|&idx| {
                self.arena
                    .get(idx)
                    .and_then(|n| self.arena.get_variable_declaration(n))
                    .is_some_and(|d| self.arena.identifier_text(d.name) == Some(name))
            })
            .unwrap_or_else(|| panic!("no declaration {name:?}"))
    }

    fn function(&self, name: &str) -> NodeIndex {
        preorder(&self.arena, self.root)
            .find(|&idx| {
                self.arena.is_kind(idx, syntax_kind_ext::FUNCTION_DECLARATION)
                    && self
                        .arena
                        .get(idx)
                        .and_then(|n| self.arena.get_function(n))
                        .is_some_and(|f| self.arena.identifier_text(f.name) == Some(name))
            })
            .unwrap_or_else(|| panic!("no function {name:?}"))
    }

    /// Expression of the first heritage clause of the first class.
    fn base_class_expression(&self) -> NodeIndex {
        let class = preorder(&self.arena, self.root)
            .find(|&idx| self.arena.is_kind(idx, syntax_kind_ext::CLASS_DECLARATION))
            .expect("class");
        let data = self.arena.get_class(self.arena.get(class).unwrap()).unwrap();
        let clause = data.heritage_clauses.as_ref().unwrap().first().unwrap();
        let heritage = self.arena.get_heritage_clause(self.arena.get(clause).unwrap()).unwrap();
        heritage.types.first().unwrap()
    }

    fn type_name(&self, idx: NodeIndex) -> Option<String> {
        self.checker().type_of(idx).map(|t| t.name)
    }

    fn family(&self, idx: NodeIndex) -> Option<String> {
        self.checker().type_of(idx).and_then(|t| t.family)
    }
}

// =============================================================================
// Declared and inferred types
// =============================================================================

#[test]
fn test_annotated_observable_declaration() {
    let fx = Fixture::new("const count$: Observable<number> = source;");
    let decl = fx.declaration("count$");
    let ty = fx.checker().type_of(decl).unwrap();
    assert_eq!(ty.name, "Observable<number>");
    assert_eq!(ty.family.as_deref(), Some("Observable"));
    assert!(ty.is_in_family("Observable"));
}

#[test]
fn test_factory_call_infers_observable() {
    let fx = Fixture::new("const state$ = observable({ count: 0 });\nstate$.get();");
    assert_eq!(fx.family(fx.declaration("state$")).as_deref(), Some("Observable"));
    let use_site = fx.node(legend_scanner::SyntaxKind::Identifier as u16, "state$");
    assert_eq!(fx.family(use_site).as_deref(), Some("Observable"));
}

#[test]
fn test_factory_type_argument_names_the_type() {
    let fx = Fixture::new("const name$ = observable<string>();");
    assert_eq!(fx.type_name(fx.declaration("name$")).as_deref(), Some("Observable<string>"));
}

#[test]
fn test_computed_factory_family() {
    let fx = Fixture::new("const total$ = computed(() => 1);");
    assert_eq!(fx.family(fx.declaration("total$")).as_deref(), Some("ObservableComputed"));
}

#[test]
fn test_renamed_factory_import() {
    let fx = Fixture::new(
        "import { observable as obs } from \"@legendapp/state\";\nconst count$ = obs(0);",
    );
    let ty = fx.checker().type_of(fx.declaration("count$")).unwrap();
    assert_eq!(ty.name, "Observable<number>");
    assert_eq!(ty.family.as_deref(), Some("Observable"));
}

#[test]
fn test_namespace_factory_call() {
    let fx = Fixture::new(
        "import * as legend from \"@legendapp/state\";\nconst count$ = legend.observable(0);",
    );
    assert_eq!(fx.family(fx.declaration("count$")).as_deref(), Some("Observable"));
}

#[test]
fn test_local_function_shadows_factory() {
    let fx = Fixture::new("function observable() { return 1; }\nconst value = observable();");
    assert_eq!(fx.type_name(fx.declaration("value")).as_deref(), Some("number"));
}

#[test]
fn test_default_import_is_not_a_factory() {
    let fx = Fixture::new("import observable from \"./custom\";\nconst value = observable();");
    assert_eq!(fx.type_name(fx.declaration("value")), None);
}

#[test]
fn test_union_with_undefined_keeps_family() {
    let fx = Fixture::new("let maybe$: Observable<string> | undefined;");
    let ty = fx.checker().type_of(fx.declaration("maybe$")).unwrap();
    assert_eq!(ty.name, "Observable<string> | undefined");
    assert_eq!(ty.family.as_deref(), Some("Observable"));
}

#[test]
fn test_union_of_unrelated_types_has_no_family() {
    let fx = Fixture::new("let mixed: Observable<string> | Date;");
    assert_eq!(fx.family(fx.declaration("mixed")), None);
}

#[test]
fn test_type_alias_is_followed() {
    let fx = Fixture::new("type Store = Observable<{ n: number }>;\nconst store$: Store = source;");
    assert_eq!(fx.family(fx.declaration("store$")).as_deref(), Some("Observable"));
}

#[test]
fn test_literal_and_array_types() {
    let fx = Fixture::new("const title = \"x\";\nconst flags = [true, false];\nconst n = 1;");
    assert_eq!(fx.type_name(fx.declaration("title")).as_deref(), Some("string"));
    assert_eq!(fx.type_name(fx.declaration("flags")).as_deref(), Some("boolean[]"));
    assert_eq!(fx.type_name(fx.declaration("n")).as_deref(), Some("number"));
}

// =============================================================================
// Members
// =============================================================================

#[test]
fn test_child_of_observable_is_observable() {
    let fx = Fixture::new(
        "const state$ = observable({ user: { name: \"\" } });\nstate$.user.name;",
    );
    let child = fx.node(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION, "state$.user.name");
    assert_eq!(fx.family(child).as_deref(), Some("Observable"));
}

#[test]
fn test_observable_methods_are_not_children() {
    let fx = Fixture::new("const state$ = observable(0);\nstate$.get;");
    let method = fx.node(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION, "state$.get");
    assert_eq!(fx.checker().type_of(method), None);
}

#[test]
fn test_this_member_type() {
    let source = "class Store {\n  count$ = observable(0);\n  read() { return this.count$; }\n}";
    let fx = Fixture::new(source);
    let member = fx.node(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION, "this.count$");
    assert_eq!(fx.family(member).as_deref(), Some("Observable"));
}

#[test]
fn test_interface_member_type() {
    let source = "interface Props { count$: Observable<number>; label: string }\n\
                  function show(props: Props) { return props.count$; }";
    let fx = Fixture::new(source);
    let member = fx.node(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION, "props.count$");
    assert_eq!(fx.type_name(member).as_deref(), Some("Observable<number>"));
    let symbol = fx.checker().symbol_of(member).unwrap();
    assert_eq!(symbol.name, "count$");
    assert!(fx.arena.is_kind(symbol.declaration, syntax_kind_ext::PROPERTY_SIGNATURE));
}

#[test]
fn test_destructured_observable_child() {
    let fx = Fixture::new("const state$ = observable({ a: 1 });\nconst { a } = state$;");
    let element = preorder(&fx.arena, fx.root)
        .find(|&idx| fx.arena.is_kind(idx, syntax_kind_ext::BINDING_ELEMENT))
        .unwrap();
    assert_eq!(fx.family(element).as_deref(), Some("Observable"));
}

// =============================================================================
// Symbols
// =============================================================================

#[test]
fn test_default_react_import_base_class() {
    let fx = Fixture::new(
        "import React from \"react\";\nclass Counter extends React.Component<Props> {}",
    );
    let symbol = fx.checker().symbol_of(fx.base_class_expression()).unwrap();
    assert_eq!(symbol.name, "React.Component");
}

#[test]
fn test_named_react_import_base_class() {
    let fx = Fixture::new(
        "import { PureComponent } from \"react\";\nclass Counter extends PureComponent {}",
    );
    let symbol = fx.checker().symbol_of(fx.base_class_expression()).unwrap();
    assert_eq!(symbol.name, "React.PureComponent");
}

#[test]
fn test_local_base_class_symbol() {
    let fx = Fixture::new("class Base {}\nclass Counter extends Base {}");
    let symbol = fx.checker().symbol_of(fx.base_class_expression()).unwrap();
    assert_eq!(symbol.name, "Base");
    assert!(symbol.id.is_some());
}

#[test]
fn test_non_react_module_base_class() {
    let fx = Fixture::new(
        "import { Component } from \"preact\";\nclass Counter extends Component {}",
    );
    let symbol = fx.checker().symbol_of(fx.base_class_expression()).unwrap();
    assert_eq!(symbol.name, "Component");
}

// =============================================================================
// Return types
// =============================================================================

#[test]
fn test_markup_return_type() {
    let fx = Fixture::new("function App() {\n  if (loading) { return null; }\n  return <div />;\n}");
    let ret = fx.checker().return_type_name_of(fx.function("App"));
    assert_eq!(ret.as_deref(), Some("JSX.Element"));
}

#[test]
fn test_annotated_return_type() {
    let fx = Fixture::new("function label(): string { return compute(); }");
    let ret = fx.checker().return_type_name_of(fx.function("label"));
    assert_eq!(ret.as_deref(), Some("string"));
}

#[test]
fn test_nested_function_returns_are_ignored() {
    let fx = Fixture::new("function outer() {\n  const inner = () => <div />;\n  return 1;\n}");
    let ret = fx.checker().return_type_name_of(fx.function("outer"));
    assert_eq!(ret.as_deref(), Some("number"));
}

#[test]
fn test_async_arrow_returns_promise() {
    let fx = Fixture::new("const load = async () => 1;");
    let arrow = preorder(&fx.arena, fx.root)
        .find(|&idx| fx.arena.is_kind(idx, syntax_kind_ext::ARROW_FUNCTION))
        .unwrap();
    let ret = fx.checker().return_type_name_of(arrow);
    assert_eq!(ret.as_deref(), Some("Promise<number>"));
}

#[test]
fn test_call_of_local_component_is_markup() {
    let fx = Fixture::new("const Row = () => <li />;\nconst row = Row();");
    assert_eq!(fx.type_name(fx.declaration("row")).as_deref(), Some("JSX.Element"));
}

// =============================================================================
// Call signatures
// =============================================================================

#[test]
fn test_call_signature_counts() {
    let source = "function one() {}\n\
                  function two(a: string): void;\n\
                  function two(a: number): void;\n\
                  function two(a: any) {}\n\
                  const arrow = () => 1;\n\
                  const plain = 5;\n\
                  const typed: (a: number) => void = source;\n\
                  import { useSelector } from \"@legendapp/state/react\";\n\
                  one; two; arrow; plain; typed; useSelector; observable; mystery;";
    let fx = Fixture::new(source);
    let statements: Vec<NodeIndex> = preorder(&fx.arena, fx.root)
        .filter(|&idx| fx.arena.is_kind(idx, syntax_kind_ext::EXPRESSION_STATEMENT))
        .collect();
    let counts: Vec<usize> = statements
        .iter()
        .map(|&stmt| {
            let expr = fx
                .arena
                .get_expression_statement(fx.arena.get(stmt).unwrap())
                .unwrap()
                .expression;
            fx.checker().call_signatures_of(expr)
        })
        .collect();
    assert_eq!(counts, vec![1, 2, 1, 0, 1, 1, 1, 0]);
}

#[test]
fn test_method_member_is_callable() {
    let fx = Fixture::new("const api = { load() { return 1; } };\napi.load;");
    let access = fx.node(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION, "api.load");
    assert_eq!(fx.checker().call_signatures_of(access), 1);
}

// =============================================================================
// Cycles
// =============================================================================

#[test]
fn test_self_referential_declarations_terminate() {
    let fx = Fixture::new("const a = b;\nconst b = a;");
    assert_eq!(fx.checker().type_of(fx.declaration("a")), None);
}

#[test]
fn test_alias_cycle_terminates() {
    let fx = Fixture::new("type A = B;\ntype B = A;\nconst x: A = source;");
    assert_eq!(fx.checker().type_of(fx.declaration("x")), None);
}
