mod harness;

use harness::parse_ok;
use luau_parser::ast::{self, lower};
use serde_json::json;

#[test]
fn lowers_return_to_plain_shapes() {
    let block = lower(&parse_ok("return 1"));
    assert!(block.stats.is_empty());
    assert_eq!(
        block.last_stat,
        Some(ast::LastStat::Return {
            exprs: vec![ast::Expr::Number {
                value: "1".to_string()
            }]
        })
    );
}

#[test]
fn lowers_compound_assignment() {
    let block = lower(&parse_ok("x //= 2"));
    let ast::Stat::CompoundAssign { target, op, value } = &block.stats[0] else {
        panic!("expected a compound assignment");
    };
    assert_eq!(*op, ast::CompoundOp::FloorDiv);
    assert_eq!(
        target.root,
        ast::VarRoot::Name {
            name: "x".to_string()
        }
    );
    assert_eq!(
        *value,
        ast::Expr::Number {
            value: "2".to_string()
        }
    );
}

#[test]
fn lowering_discards_trivia_and_punctuation() {
    let spaced = lower(&parse_ok("local x --[[ c ]] = ( 1 + 2 )  -- t"));
    let dense = lower(&parse_ok("local x = (1+2)"));
    assert_eq!(spaced, dense);
}

#[test]
fn splits_function_type_varargs() {
    let block = lower(&parse_ok("local x: (number, ...string) -> number = f"));
    let ast::Stat::LocalVariable { bindings, .. } = &block.stats[0] else {
        panic!("expected a local variable");
    };
    let Some(ast::Type::Function {
        params, varargs, ..
    }) = &bindings[0].ty
    else {
        panic!("expected a function type annotation");
    };
    assert_eq!(params.len(), 1);
    assert!(matches!(
        varargs.as_deref(),
        Some(ast::TypePack::Variadic { .. })
    ));
}

#[test]
fn lowers_interpolated_strings_to_parts() {
    let block = lower(&parse_ok("local s = `hi {name}!`"));
    let ast::Stat::LocalVariable { exprs, .. } = &block.stats[0] else {
        panic!("expected a local variable");
    };
    let ast::Expr::Istring { value } = &exprs[0] else {
        panic!("expected an interpolated string");
    };
    assert_eq!(value.len(), 3);
    assert!(matches!(&value[0], ast::IstringPart::Text { text } if text == "`hi {"));
    assert!(matches!(&value[1], ast::IstringPart::Expr { .. }));
    assert!(matches!(&value[2], ast::IstringPart::Text { text } if text == "}!`"));
}

#[test]
fn serializes_with_kind_tags() {
    let block = lower(&parse_ok("x += y"));
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(
        value,
        json!({
            "stats": [{
                "kind": "compoundassign",
                "target": { "root": { "kind": "name", "name": "x" }, "suffixes": [] },
                "op": "+=",
                "value": {
                    "kind": "var",
                    "var": { "root": { "kind": "name", "name": "y" }, "suffixes": [] }
                }
            }],
            "last_stat": null
        })
    );
}

#[test]
fn lowers_type_aliases() {
    let block = lower(&parse_ok("export type Pair<K, V = K> = { first: K, second: V }"));
    let ast::Stat::Type {
        export,
        name,
        generics,
        value,
    } = &block.stats[0]
    else {
        panic!("expected a type alias");
    };
    assert!(*export);
    assert_eq!(name, "Pair");
    assert_eq!(generics.len(), 2);
    assert_eq!(generics[0].name, "K");
    assert!(generics[0].default.is_none());
    assert!(matches!(
        generics[1].default,
        Some(ast::TypeOrPack::Type(ast::Type::Reference { .. }))
    ));
    assert!(matches!(value, ast::Type::Table { fields } if fields.len() == 2));
}
