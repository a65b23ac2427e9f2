use legend_checker::CheckerState;
use legend_lint::{ContextClassifier, LintDocument, LintOptions};
use legend_parser::syntax::preorder;
use legend_parser::{NodeIndex, syntax_kind_ext};

struct Fixture {
    document: LintDocument,
    options: LintOptions,
}

impl Fixture {
    fn new(source: &str) -> Fixture {
        Fixture {
            document: LintDocument::new("component.tsx".to_string(), source.to_string()),
            options: LintOptions::default(),
        }
    }

    fn checker(&self) -> CheckerState<'_> {
        CheckerState::new(
            self.document.arena(),
            self.document.binder(),
            &self.options.checker,
        )
    }

    /// First call expression whose text is exactly `text`.
    fn call(&self, text: &str) -> NodeIndex {
        let arena = self.document.arena();
        let source = self.document.source_text();
        preorder(arena, self.document.root())
            .find(|&idx| {
                arena.is_kind(idx, syntax_kind_ext::CALL_EXPRESSION)
                    && arena.node_text(idx, source) == Some(text)
            })
            .unwrap_or_else(|| panic!("no call `{text}`"))
    }

    /// Function declaration named `name`.
    fn function(&self, name: &str) -> NodeIndex {
        let arena = self.document.arena();
        preorder(arena, self.document.root())
            .find(|&idx| {
                arena.is_kind(idx, syntax_kind_ext::FUNCTION_DECLARATION)
                    && arena
                        .get(idx)
                        .and_then(|node| arena.get_function(node))
                        .and_then(|func| arena.identifier_text(func.name))
                        == Some(name)
            })
            .unwrap_or_else(|| panic!("no function `{name}`"))
    }

    fn in_ui_context(&self, call_text: &str) -> bool {
        let checker = self.checker();
        let classifier = ContextClassifier::new(self.document.arena(), &checker, &self.options);
        classifier.is_ui_context(self.call(call_text))
    }
}

#[test]
fn test_function_returning_markup_is_ui() {
    let fixture = Fixture::new(
        "function App() {\n  const v = count$.use();\n  return <div>{v}</div>;\n}",
    );
    assert!(fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_parenthesized_and_fragment_returns() {
    let fixture = Fixture::new(
        "function A() {\n  a$.use();\n  return (\n    <section />\n  );\n}\n\
         function B() {\n  b$.use();\n  return <></>;\n}",
    );
    assert!(fixture.in_ui_context("a$.use()"));
    assert!(fixture.in_ui_context("b$.use()"));
}

#[test]
fn test_arrow_with_markup_body() {
    let fixture = Fixture::new("const Row = () => <li>{count$.use()}</li>;");
    assert!(fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_conditional_markup_return() {
    let fixture = Fixture::new(
        "const Panel = function (open) {\n  count$.use();\n  if (!open) {\n    return null;\n  }\n  return <div />;\n};",
    );
    assert!(fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_top_level_is_not_ui() {
    let fixture = Fixture::new("count$.use();\nfunction App() { return <div />; }");
    assert!(!fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_nested_markup_does_not_make_outer_a_component() {
    let fixture = Fixture::new(
        "function outer() {\n  const value = count$.use();\n  const render = () => <div />;\n  return value;\n}",
    );
    assert!(!fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_helper_nested_in_component_is_ui() {
    let source = "function App() {\n  function helper() {\n    return count$.use();\n  }\n  return <div>{helper()}</div>;\n}";
    let fixture = Fixture::new(source);
    assert!(fixture.in_ui_context("count$.use()"));

    let checker = fixture.checker();
    let classifier =
        ContextClassifier::new(fixture.document.arena(), &checker, &fixture.options);
    let root = classifier.enclosing_ui_root(fixture.call("count$.use()"));
    assert_eq!(root, Some(fixture.function("App")));
    assert!(!classifier.is_ui_root(fixture.function("helper")));
}

#[test]
fn test_annotated_element_return_type() {
    let fixture = Fixture::new(
        "function Widget(): JSX.Element {\n  count$.use();\n  return render();\n}",
    );
    assert!(fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_returning_local_component_call() {
    let fixture = Fixture::new(
        "function Inner() { return <span />; }\n\
         function Outer() {\n  count$.use();\n  return Inner();\n}",
    );
    assert!(fixture.in_ui_context("count$.use()"));
}

#[test]
fn test_react_component_classes() {
    let fixture = Fixture::new(
        "import React, { PureComponent } from \"react\";\n\
         class A extends React.Component {\n  render() { a$.use(); return null; }\n}\n\
         class B extends PureComponent {\n  render() { b$.use(); return null; }\n}",
    );
    assert!(fixture.in_ui_context("a$.use()"));
    assert!(fixture.in_ui_context("b$.use()"));
}

#[test]
fn test_non_component_classes() {
    let fixture = Fixture::new(
        "class Base {}\n\
         class A extends Base {\n  run() { a$.use(); }\n}\n\
         class B implements Runnable {\n  run() { b$.use(); }\n}\n\
         class C {\n  run() { c$.use(); }\n}",
    );
    assert!(!fixture.in_ui_context("a$.use()"));
    assert!(!fixture.in_ui_context("b$.use()"));
    assert!(!fixture.in_ui_context("c$.use()"));
}

#[test]
fn test_configured_base_class() {
    let mut fixture = Fixture::new(
        "import { Component } from \"preact\";\n\
         class A extends Component {\n  render() { a$.use(); return null; }\n}",
    );
    assert!(!fixture.in_ui_context("a$.use()"));

    fixture.options.checker.react_modules.push("preact".to_string());
    assert!(fixture.in_ui_context("a$.use()"));
}
