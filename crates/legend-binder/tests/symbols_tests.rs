use legend_binder::{BinderState, ImportKind, symbol_flags};
use legend_parser::parser::node::NodeArena;
use legend_parser::{NodeIndex, ParserState};

fn bind(source: &str) -> (NodeArena, NodeIndex, BinderState) {
    let mut parser = ParserState::new("test.tsx".to_string(), source.to_string());
    let root = parser.parse_source_file();
    let arena = parser.into_arena();
    let mut binder = BinderState::new();
    binder.bind_source_file(&arena, root);
    (arena, root, binder)
}

#[test]
fn test_top_level_declarations() {
    let (_, _, binder) = bind(
        "const a = 1;\nlet b = 2;\nvar c = 3;\nfunction f() {}\nclass K {}\ninterface I {}\ntype T = number;\nenum E { X }",
    );
    let locals = binder.file_locals().expect("file scope");
    for name in ["a", "b", "c", "f", "K", "I", "T", "E"] {
        assert!(locals.has(name), "missing {name}");
    }

    let flags_of = |name: &str| {
        binder
            .get_symbol(locals.get(name).unwrap())
            .map(|s| s.flags)
            .unwrap()
    };
    assert_ne!(flags_of("a") & symbol_flags::BLOCK_SCOPED_VARIABLE, 0);
    assert_ne!(flags_of("c") & symbol_flags::FUNCTION_SCOPED_VARIABLE, 0);
    assert_ne!(flags_of("f") & symbol_flags::FUNCTION, 0);
    assert_ne!(flags_of("K") & symbol_flags::CLASS, 0);
    assert_ne!(flags_of("I") & symbol_flags::INTERFACE, 0);
    assert_ne!(flags_of("T") & symbol_flags::TYPE_ALIAS, 0);
}

#[test]
fn test_import_bindings_record_module() {
    let (_, _, binder) = bind(
        "import React, { useState as useLocal } from \"react\";\nimport * as legend from \"@legendapp/state\";\nimport fs = require(\"fs\");",
    );
    let locals = binder.file_locals().unwrap();

    let react = binder.get_symbol(locals.get("React").unwrap()).unwrap();
    let target = react.import.as_ref().unwrap();
    assert_eq!(target.module_specifier, "react");
    assert_eq!(target.kind, ImportKind::Default);
    assert_ne!(react.flags & symbol_flags::ALIAS, 0);

    let local = binder.get_symbol(locals.get("useLocal").unwrap()).unwrap();
    let target = local.import.as_ref().unwrap();
    assert_eq!(target.kind, ImportKind::Named);
    assert_eq!(target.imported_name.as_deref(), Some("useState"));
    assert!(!locals.has("useState"));

    let legend = binder.get_symbol(locals.get("legend").unwrap()).unwrap();
    let target = legend.import.as_ref().unwrap();
    assert_eq!(target.kind, ImportKind::Namespace);
    assert_eq!(target.module_specifier, "@legendapp/state");

    let fs = binder.get_symbol(locals.get("fs").unwrap()).unwrap();
    assert_eq!(fs.import.as_ref().map(|t| t.kind), Some(ImportKind::Namespace));
    assert_eq!(fs.import.as_ref().map(|t| t.module_specifier.as_str()), Some("fs"));
}

#[test]
fn test_destructured_names_are_declared() {
    let (_, _, binder) = bind("const { a, b: { c }, ...rest } = obj;\nconst [x, , y] = arr;");
    let locals = binder.file_locals().unwrap();
    for name in ["a", "c", "rest", "x", "y"] {
        assert!(locals.has(name), "missing {name}");
    }
    assert!(!locals.has("b"));
}

#[test]
fn test_interface_declarations_merge() {
    let (_, _, binder) = bind("interface Store { a: number }\ninterface Store { b: string }");
    let locals = binder.file_locals().unwrap();
    let store = binder.get_symbol(locals.get("Store").unwrap()).unwrap();
    assert_eq!(store.declarations.len(), 2);
}

#[test]
fn test_class_members_and_parameter_properties() {
    let (_, _, binder) = bind(
        "class Todo {\n  title$ = observable('');\n  static count = 0;\n  constructor(private store$: Store) {}\n  toggle() {}\n  get done() { return true; }\n}",
    );
    let class_id = binder.file_locals().unwrap().get("Todo").unwrap();
    for name in ["title$", "count", "store$", "toggle", "done"] {
        assert!(binder.member_of(class_id, name).is_some(), "missing member {name}");
    }
    let count = binder
        .get_symbol(binder.member_of(class_id, "count").unwrap())
        .unwrap();
    assert_ne!(count.flags & symbol_flags::STATIC, 0);
}

#[test]
fn test_exported_declarations_are_marked() {
    let (_, _, binder) = bind("export const a = 1;\nconst b = 2;\nexport function f() {}");
    let locals = binder.file_locals().unwrap();
    let exported = |name: &str| binder.get_symbol(locals.get(name).unwrap()).unwrap().is_exported;
    assert!(exported("a"));
    assert!(!exported("b"));
    assert!(exported("f"));
}
