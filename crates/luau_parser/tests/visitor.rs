mod harness;

use harness::parse_ok;
use luau_parser::cst::*;
use luau_parser::{Span, Token};

/// Records the name of every structural visit, producing a trace of the walk
/// for golden comparison.
#[derive(Default)]
struct KindRecorder {
    kinds: Vec<&'static str>,
}

macro_rules! record_kinds {
    ($($method:ident => $ty:ty,)*) => {
        $(
            fn $method(&mut self, node: &$ty) {
                self.kinds.push(stringify!($method));
                node.visit_children_with(self);
            }
        )*
    };
}

impl Visit for KindRecorder {
    record_kinds! {
        visit_cst => Cst,
        visit_block => Block,
        visit_stat => Stat,
        visit_last_stat => LastStat,
        visit_return_stat => ReturnStat,
        visit_assign => Assign,
        visit_compound_assign => CompoundAssign,
        visit_do_stat => DoStat,
        visit_while_stat => WhileStat,
        visit_repeat_stat => RepeatStat,
        visit_if_stat => IfStat,
        visit_else_if_branch => ElseIfBranch,
        visit_else_branch => ElseBranch,
        visit_numeric_for => NumericFor,
        visit_for_in => ForIn,
        visit_function_stat => FunctionStat,
        visit_function_name => FunctionName,
        visit_local_function => LocalFunction,
        visit_local_variable => LocalVariable,
        visit_type_alias => TypeAlias,
        visit_attribute => Attribute,
        visit_function_body => FunctionBody,
        visit_param => Param,
        visit_varargs_param => VarargsParam,
        visit_binding => Binding,
        visit_expr => Expr,
        visit_function_expr => FunctionExpr,
        visit_if_else_expr => IfElseExpr,
        visit_else_if_expr_branch => ElseIfExprBranch,
        visit_assertion => Assertion,
        visit_unary_expr => UnaryExpr,
        visit_binary_expr => BinaryExpr,
        visit_interp_string => InterpString,
        visit_var => Var,
        visit_var_root => VarRoot,
        visit_paren_expr => ParenExpr,
        visit_var_suffix => VarSuffix,
        visit_name_index => NameIndex,
        visit_expr_index => ExprIndex,
        visit_call_suffix => CallSuffix,
        visit_function_args => FunctionArgs,
        visit_pack_args => PackArgs,
        visit_table_constructor => TableConstructor,
        visit_table_field => TableField,
        visit_name_key_field => NameKeyField,
        visit_expr_key_field => ExprKeyField,
        visit_type => Type,
        visit_type_reference => TypeReference,
        visit_type_generics => TypeGenerics,
        visit_typeof_type => TypeofType,
        visit_array_type => ArrayType,
        visit_table_type => TableType,
        visit_table_type_field => TableTypeField,
        visit_name_prop => NameProp,
        visit_string_prop => StringProp,
        visit_indexer => Indexer,
        visit_function_type => FunctionType,
        visit_type_param => TypeParam,
        visit_paren_type => ParenType,
        visit_optional_type => OptionalType,
        visit_union_type => UnionType,
        visit_intersection_type => IntersectionType,
        visit_type_or_pack => TypeOrPack,
        visit_type_pack => TypePack,
        visit_type_pack_list => TypePackList,
        visit_variadic_type_pack => VariadicTypePack,
        visit_generic_type_pack => GenericTypePack,
        visit_generic_decl => GenericDecl,
        visit_generic_param => GenericParam,
    }
}

fn trace(source: &str) -> Vec<&'static str> {
    let cst = parse_ok(source);
    let mut recorder = KindRecorder::default();
    cst.visit_with(&mut recorder);
    recorder.kinds
}

#[test]
fn traces_a_local_variable() {
    assert_eq!(
        trace("local x = 1"),
        vec![
            "visit_cst",
            "visit_block",
            "visit_stat",
            "visit_local_variable",
            "visit_binding",
            "visit_expr",
        ]
    );
}

#[test]
fn traces_a_numeric_for() {
    assert_eq!(
        trace("for i = 1, 10, 2 do end"),
        vec![
            "visit_cst",
            "visit_block",
            "visit_stat",
            "visit_numeric_for",
            "visit_binding",
            "visit_expr",
            "visit_expr",
            "visit_expr",
            "visit_block",
        ]
    );
}

#[test]
fn traces_a_typed_function() {
    assert_eq!(
        trace("function f(x: number): boolean return true end"),
        vec![
            "visit_cst",
            "visit_block",
            "visit_stat",
            "visit_function_stat",
            "visit_function_name",
            "visit_function_body",
            "visit_param",
            "visit_binding",
            "visit_type",
            "visit_type_reference",
            "visit_type_or_pack",
            "visit_type",
            "visit_type_reference",
            "visit_block",
            "visit_last_stat",
            "visit_return_stat",
            "visit_expr",
        ]
    );
}

/// Collects every token span in walk order.
#[derive(Default)]
struct TokenCollector {
    spans: Vec<Span>,
}

impl Visit for TokenCollector {
    fn visit_token(&mut self, token: &Token) {
        self.spans.push(token.span());
    }
}

/// The walk is strictly left-to-right: token spans come out in source order,
/// and every descendant token of a node lies within the node's span.
#[test]
fn walk_is_ordered_and_spans_are_monotonic() {
    let source = "local t = { a = 1 }\nfor i = 1, #t do\n    t.a += i\nend\n";
    let cst = parse_ok(source);

    let mut collector = TokenCollector::default();
    cst.visit_with(&mut collector);
    assert!(
        collector.spans.windows(2).all(|pair| pair[0].end <= pair[1].start),
        "token spans out of order: {:?}",
        collector.spans
    );

    // Every token of the `for` statement lies within its computed span.
    let for_stat = &cst.block.stats[1].node;
    let span = for_stat.span();
    let mut tokens = TokenCollector::default();
    for_stat.visit_with(&mut tokens);
    assert!(!tokens.spans.is_empty());
    for token_span in &tokens.spans {
        assert!(
            span.contains(*token_span),
            "token {token_span} escapes node span {span}"
        );
    }
}

/// The empty block reports no span, and blocks with content report the span
/// of their statements including trailing semicolons.
#[test]
fn block_spans() {
    let cst = parse_ok("do end");
    let Stat::Do(do_stat) = &cst.block.stats[0].node else {
        panic!("expected a do statement");
    };
    assert_eq!(do_stat.block.span(), None);

    let cst = parse_ok("do x = 1 ; end");
    let Stat::Do(do_stat) = &cst.block.stats[0].node else {
        panic!("expected a do statement");
    };
    assert_eq!(do_stat.block.span(), Some(Span::new(3, 10)));
}
