mod harness;

use harness::{parse_err, parse_ok};
use luau_parser::cst::*;
use luau_parser::{print, Span, SyntaxKind};

#[test]
fn return_one() {
    let cst = parse_ok("return 1");
    assert!(cst.block.stats.is_empty());
    let last = cst.block.last_stat.as_ref().expect("a last statement");
    let LastStat::Return(ret) = &last.node else {
        panic!("expected a return, got {:?}", last.node);
    };
    assert_eq!(ret.exprs.len(), 1);
    let Expr::Number(number) = ret.exprs.first().unwrap().node.clone() else {
        panic!("expected a number expression");
    };
    assert_eq!(number.text(), "1");
    assert_eq!(print(&cst), "return 1");
}

#[test]
fn table_type_binding() {
    let cst = parse_ok("local x: {a: number, [string]: boolean} = t");
    let Stat::LocalVariable(local) = &cst.block.stats[0].node else {
        panic!("expected a local variable");
    };
    let binding = &local.bindings.first().unwrap().node;
    let annotation = binding.annotation.as_ref().expect("a type annotation");
    let Type::Table(table) = &annotation.ty else {
        panic!("expected a table type, got {:?}", annotation.ty);
    };
    let fields: Vec<_> = table.fields.nodes().collect();
    assert_eq!(fields.len(), 2);
    assert!(matches!(fields[0], TableTypeField::NameProp(prop) if prop.name.text() == "a"));
    assert!(matches!(fields[1], TableTypeField::Indexer(_)));
}

#[test]
fn interpolated_string_value() {
    let source = "local s = `hi {name}!`";
    let cst = parse_ok(source);
    let Stat::LocalVariable(local) = &cst.block.stats[0].node else {
        panic!("expected a local variable");
    };
    let assignment = local.assignment.as_ref().expect("an initializer");
    let Expr::InterpString(InterpString::Complex(istring)) =
        &assignment.exprs.first().unwrap().node
    else {
        panic!("expected a complex interpolated string");
    };
    assert_eq!(istring.first.text(), "`hi {");
    assert_eq!(istring.segments.len(), 1);
    let segment = &istring.segments[0];
    assert!(matches!(
        &segment.expr,
        Expr::Var(var) if matches!(&var.root, VarRoot::Name(name) if name.text() == "name")
    ));
    assert_eq!(segment.text.kind(), SyntaxKind::INTERP_STRING_END);
    assert_eq!(segment.text.text(), "}!`");
    assert_eq!(print(&cst), source);
}

#[test]
fn numeric_for_shape_and_span() {
    let source = "for i = 1, 10, 2 do end";
    let cst = parse_ok(source);
    let stat = &cst.block.stats[0].node;
    let Stat::NumericFor(numeric) = stat else {
        panic!("expected a numeric for");
    };
    assert!(matches!(&numeric.start, Expr::Number(n) if n.text() == "1"));
    assert!(matches!(&numeric.limit, Expr::Number(n) if n.text() == "10"));
    let step = numeric.step.as_ref().expect("a step expression");
    assert!(matches!(&step.expr, Expr::Number(n) if n.text() == "2"));
    assert!(numeric.block.is_empty());
    assert_eq!(numeric.block.span(), None);

    // The statement's span covers `for` through `end`.
    assert_eq!(stat.span(), Span::new(0, source.len() as u32));
}

#[test]
fn call_statement_suffixes() {
    let cst = parse_ok("a.b:c(1)(2)");
    let Stat::Call(var) = &cst.block.stats[0].node else {
        panic!("expected a call statement");
    };
    assert!(matches!(&var.root, VarRoot::Name(name) if name.text() == "a"));
    assert_eq!(var.suffixes.len(), 3);
    assert!(matches!(&var.suffixes[0], VarSuffix::NameIndex(index) if index.name.text() == "b"));
    let VarSuffix::Call(first_call) = &var.suffixes[1] else {
        panic!("expected a method call");
    };
    assert_eq!(first_call.method.as_ref().unwrap().name.text(), "c");
    let VarSuffix::Call(second_call) = &var.suffixes[2] else {
        panic!("expected a plain call");
    };
    assert!(second_call.method.is_none());
    assert!(var.ends_in_call());
}

#[test]
fn compound_assignment() {
    let cst = parse_ok("x += y");
    let Stat::CompoundAssign(compound) = &cst.block.stats[0].node else {
        panic!("expected a compound assignment");
    };
    assert_eq!(compound.op.kind(), SyntaxKind::PLUS_EQUAL);
    assert!(matches!(&compound.target.root, VarRoot::Name(name) if name.text() == "x"));
    assert!(
        matches!(&compound.value, Expr::Var(var) if matches!(&var.root, VarRoot::Name(name) if name.text() == "y"))
    );
}

#[test]
fn missing_binding_error() {
    let err = parse_err("local = 1");
    assert_eq!(err.span, Span::new(6, 7));
    assert!(
        err.message.contains("a variable name"),
        "unexpected message: {}",
        err.message
    );
}

//#region Grammar invariants

#[test]
fn generic_names_must_precede_packs() {
    let err = parse_err("function f<T..., U>() end");
    assert!(
        err.message.contains("before generic type packs"),
        "unexpected message: {}",
        err.message
    );
    // The offending parameter is the name after the pack.
    assert_eq!(err.span, Span::new(17, 18));
}

#[test]
fn generic_defaults_must_be_suffix() {
    let err = parse_err("type Foo<T = string, U> = T");
    assert!(
        err.message.contains("must also have defaults"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn generic_defaults_forbidden_on_functions() {
    let err = parse_err("function f<T = string>() end");
    assert!(
        err.message.contains("type alias declarations"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn call_statement_requires_call_suffix() {
    let err = parse_err("x.y");
    assert!(
        err.message.contains("incomplete statement"),
        "unexpected message: {}",
        err.message
    );
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn cannot_assign_to_calls() {
    let err = parse_err("f() = 1");
    assert!(
        err.message.contains("cannot assign to a function call"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn compound_assign_takes_a_single_target() {
    let err = parse_err("a, b += 1");
    assert!(
        err.message.contains("expected `=`"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn varargs_must_be_last_parameter() {
    let err = parse_err("function f(..., a) end");
    assert!(
        err.message.contains("last parameter"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn statements_after_return_are_rejected() {
    let err = parse_err("return 1 print(2)");
    assert!(
        err.message.contains("no statements are allowed"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn type_packs_rejected_in_type_position() {
    let err = parse_err("local x: (number, string) = f");
    assert!(
        err.message.contains("type pack"),
        "unexpected message: {}",
        err.message
    );
}
//#endregion

//#region Lex failures at the parse boundary

#[test]
fn lex_errors_surface_as_parse_errors() {
    let err = parse_err("local s = 'abc");
    assert_eq!(err.message, "unterminated string literal");
    assert_eq!(err.span.start, 10);

    let err = parse_err("local n = 0x");
    assert_eq!(err.message, "malformed number literal");

    let err = parse_err(r#"local s = "\q""#);
    assert!(err.message.contains("invalid escape"));
}
//#endregion

#[test]
fn stray_end_is_rejected() {
    let err = parse_err("end");
    assert!(
        err.message.contains("expected the end of the file"),
        "unexpected message: {}",
        err.message
    );
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn eof_token_owns_trailing_trivia() {
    let cst = parse_ok("return 1 -- done\n");
    assert_eq!(cst.eof.kind(), SyntaxKind::EOF);
    assert_eq!(cst.eof.trivia().len(), 3);
    assert_eq!(cst.eof.span(), Span::new(17, 17));
}
