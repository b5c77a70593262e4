//! Lowering from the lossless CST to the lossy AST. Delimiters, separators,
//! and trivia are discarded; literal values are carried as their raw source
//! text, never canonicalized.

use super::*;
use crate::cst;
use luau_syntax::{SyntaxKind, Token};

/// Produce the lossy view of a parsed tree.
pub fn lower(tree: &cst::Cst) -> Block {
    lower_block(&tree.block)
}

fn text(token: &Token) -> String {
    token.text().to_string()
}

fn lower_block(block: &cst::Block) -> Block {
    Block {
        stats: block
            .stats
            .iter()
            .map(|pair| lower_stat(&pair.node))
            .collect(),
        last_stat: block
            .last_stat
            .as_ref()
            .map(|pair| lower_last_stat(&pair.node)),
    }
}

fn lower_stat(stat: &cst::Stat) -> Stat {
    match stat {
        cst::Stat::Assign(node) => Stat::Assign {
            targets: node.targets.nodes().map(lower_var).collect(),
            values: node.values.nodes().map(lower_expr).collect(),
        },
        cst::Stat::CompoundAssign(node) => Stat::CompoundAssign {
            target: lower_var(&node.target),
            op: compound_op(&node.op),
            value: lower_expr(&node.value),
        },
        cst::Stat::Call(node) => Stat::Call {
            var: lower_var(node),
        },
        cst::Stat::Do(node) => Stat::Do {
            body: lower_block(&node.block),
        },
        cst::Stat::While(node) => Stat::While {
            condition: lower_expr(&node.condition),
            body: lower_block(&node.block),
        },
        cst::Stat::Repeat(node) => Stat::Repeat {
            body: lower_block(&node.block),
            condition: lower_expr(&node.condition),
        },
        cst::Stat::If(node) => {
            let mut branches = vec![IfBranch {
                condition: lower_expr(&node.condition),
                body: lower_block(&node.block),
            }];
            branches.extend(node.elseifs.iter().map(|branch| IfBranch {
                condition: lower_expr(&branch.condition),
                body: lower_block(&branch.block),
            }));
            Stat::If {
                branches,
                else_body: node
                    .else_branch
                    .as_ref()
                    .map(|branch| lower_block(&branch.block)),
            }
        }
        cst::Stat::NumericFor(node) => Stat::NumericFor {
            binding: lower_binding(&node.binding),
            start: lower_expr(&node.start),
            limit: lower_expr(&node.limit),
            step: node.step.as_ref().map(|step| lower_expr(&step.expr)),
            body: lower_block(&node.block),
        },
        cst::Stat::ForIn(node) => Stat::ForIn {
            bindings: node.bindings.nodes().map(lower_binding).collect(),
            exprs: node.exprs.nodes().map(lower_expr).collect(),
            body: lower_block(&node.block),
        },
        cst::Stat::Function(node) => Stat::Function {
            attributes: node.attributes.iter().map(|a| text(&a.name)).collect(),
            name: FunctionName {
                base: text(&node.name.base),
                fields: node.name.fields.iter().map(|f| text(&f.name)).collect(),
                method: node.name.method.as_ref().map(|m| text(&m.name)),
            },
            body: lower_function_body(&node.body),
        },
        cst::Stat::LocalFunction(node) => Stat::LocalFunction {
            attributes: node.attributes.iter().map(|a| text(&a.name)).collect(),
            name: text(&node.name),
            body: lower_function_body(&node.body),
        },
        cst::Stat::LocalVariable(node) => Stat::LocalVariable {
            bindings: node.bindings.nodes().map(lower_binding).collect(),
            exprs: node
                .assignment
                .as_ref()
                .map(|assignment| assignment.exprs.nodes().map(lower_expr).collect())
                .unwrap_or_default(),
        },
        cst::Stat::TypeAlias(node) => Stat::Type {
            export: node.export_token.is_some(),
            name: text(&node.name),
            generics: node
                .generics
                .as_ref()
                .map(lower_generic_params)
                .unwrap_or_default(),
            value: lower_type(&node.ty),
        },
    }
}

fn lower_last_stat(stat: &cst::LastStat) -> LastStat {
    match stat {
        cst::LastStat::Return(node) => LastStat::Return {
            exprs: node.exprs.nodes().map(lower_expr).collect(),
        },
        cst::LastStat::Break(_) => LastStat::Break,
        cst::LastStat::Continue(_) => LastStat::Continue,
    }
}

fn lower_binding(binding: &cst::Binding) -> Binding {
    Binding {
        name: text(&binding.name),
        ty: binding
            .annotation
            .as_ref()
            .map(|annotation| lower_type(&annotation.ty)),
    }
}

fn lower_function_body(body: &cst::FunctionBody) -> FunctionBody {
    let mut params = Vec::new();
    let mut varargs = None;
    for param in body.params.nodes() {
        match param {
            cst::Param::Binding(binding) => params.push(lower_binding(binding)),
            cst::Param::Varargs(node) => {
                varargs = Some(Varargs {
                    ty: node
                        .annotation
                        .as_ref()
                        .map(|annotation| lower_type_or_pack(&annotation.ty)),
                });
            }
        }
    }
    FunctionBody {
        generics: body
            .generics
            .as_ref()
            .map(lower_generic_params)
            .unwrap_or_default(),
        params,
        varargs,
        ret: body
            .ret
            .as_ref()
            .map(|annotation| lower_type_or_pack(&annotation.ty)),
        body: lower_block(&body.block),
    }
}

fn lower_generic_params(decl: &cst::GenericDecl) -> Vec<GenericParam> {
    decl.params
        .nodes()
        .map(|param| {
            let (name, pack) = match &param.info {
                cst::GenericParamInfo::Name(token) => (text(token), false),
                cst::GenericParamInfo::Pack { name, .. } => (text(name), true),
            };
            GenericParam {
                name,
                pack,
                default: param
                    .default
                    .as_ref()
                    .map(|default| lower_type_or_pack(&default.value)),
            }
        })
        .collect()
}

fn lower_expr(expr: &cst::Expr) -> Expr {
    match expr {
        cst::Expr::Nil(_) => Expr::Nil,
        cst::Expr::Boolean(token) => Expr::Boolean {
            value: token.kind() == SyntaxKind::TRUE_KW,
        },
        cst::Expr::Number(token) => Expr::Number { value: text(token) },
        cst::Expr::String(token) => Expr::String { value: text(token) },
        cst::Expr::Varargs(_) => Expr::Varargs,
        cst::Expr::InterpString(node) => Expr::Istring {
            value: lower_interp_string(node),
        },
        cst::Expr::Table(node) => Expr::Table {
            table: lower_table(node),
        },
        cst::Expr::Function(node) => Expr::Function {
            attributes: node.attributes.iter().map(|a| text(&a.name)).collect(),
            body: Box::new(lower_function_body(&node.body)),
        },
        cst::Expr::IfElse(node) => {
            let mut branches = vec![IfElseBranch {
                condition: lower_expr(&node.condition),
                value: lower_expr(&node.value),
            }];
            branches.extend(node.elseifs.iter().map(|branch| IfElseBranch {
                condition: lower_expr(&branch.condition),
                value: lower_expr(&branch.value),
            }));
            Expr::IfElse {
                branches,
                else_body: Box::new(lower_expr(&node.else_value)),
            }
        }
        cst::Expr::Var(node) => Expr::Var {
            var: Box::new(lower_var(node)),
        },
        cst::Expr::Assertion(node) => Expr::Assertion {
            expr: Box::new(lower_expr(&node.expr)),
            ty: lower_type(&node.ty),
        },
        cst::Expr::Unary(node) => Expr::Unary {
            operator: unary_op(&node.op),
            expr: Box::new(lower_expr(&node.expr)),
        },
        cst::Expr::Binary(node) => Expr::Binary {
            left: Box::new(lower_expr(&node.lhs)),
            operator: binary_op(&node.op),
            right: Box::new(lower_expr(&node.rhs)),
        },
    }
}

fn lower_interp_string(node: &cst::InterpString) -> Vec<IstringPart> {
    match node {
        cst::InterpString::Simple(token) => vec![IstringPart::Text { text: text(token) }],
        cst::InterpString::Complex(node) => {
            let mut parts = vec![IstringPart::Text {
                text: text(&node.first),
            }];
            for segment in &node.segments {
                parts.push(IstringPart::Expr {
                    expr: lower_expr(&segment.expr),
                });
                parts.push(IstringPart::Text {
                    text: text(&segment.text),
                });
            }
            parts
        }
    }
}

fn lower_var(var: &cst::Var) -> Var {
    Var {
        root: match &var.root {
            cst::VarRoot::Name(token) => VarRoot::Name { name: text(token) },
            cst::VarRoot::Paren(node) => VarRoot::Paren {
                expr: Box::new(lower_expr(&node.expr)),
            },
        },
        suffixes: var.suffixes.iter().map(lower_var_suffix).collect(),
    }
}

fn lower_var_suffix(suffix: &cst::VarSuffix) -> VarSuffix {
    match suffix {
        cst::VarSuffix::NameIndex(node) => VarSuffix::NameIndex {
            name: text(&node.name),
        },
        cst::VarSuffix::ExprIndex(node) => VarSuffix::ExprIndex {
            expr: lower_expr(&node.expr),
        },
        cst::VarSuffix::Call(node) => VarSuffix::Call {
            method: node.method.as_ref().map(|method| text(&method.name)),
            arg: match &node.args {
                cst::FunctionArgs::Pack(args) => FunctionArg::Pack {
                    exprs: args.exprs.nodes().map(lower_expr).collect(),
                },
                cst::FunctionArgs::Table(table) => FunctionArg::Table {
                    table: lower_table(table),
                },
                cst::FunctionArgs::String(token) => FunctionArg::String { value: text(token) },
            },
        },
    }
}

fn lower_table(table: &cst::TableConstructor) -> Vec<TableField> {
    table
        .fields
        .nodes()
        .map(|field| match field {
            cst::TableField::NameKey(node) => TableField::NameKey {
                name: text(&node.name),
                value: lower_expr(&node.value),
            },
            cst::TableField::ExprKey(node) => TableField::ExprKey {
                key: lower_expr(&node.key),
                value: lower_expr(&node.value),
            },
            cst::TableField::NoKey(node) => TableField::NoKey {
                value: lower_expr(node),
            },
        })
        .collect()
}

fn lower_type(ty: &cst::Type) -> Type {
    match ty {
        cst::Type::Nil(_) => Type::Nil,
        cst::Type::Boolean(token) => Type::Boolean {
            value: token.kind() == SyntaxKind::TRUE_KW,
        },
        cst::Type::String(token) => Type::String { value: text(token) },
        cst::Type::Reference(node) => Type::Reference {
            prefix: node.prefix.as_ref().map(|prefix| text(&prefix.name)),
            name: text(&node.name),
            generics: node
                .generics
                .as_ref()
                .map(|generics| generics.args.nodes().map(lower_type_or_pack).collect())
                .unwrap_or_default(),
        },
        cst::Type::Typeof(node) => Type::Typeof {
            expr: Box::new(lower_expr(&node.expr)),
        },
        cst::Type::Array(node) => Type::Array {
            ty: Box::new(lower_type(&node.element)),
        },
        cst::Type::Table(node) => Type::Table {
            fields: node.fields.nodes().map(lower_table_type_field).collect(),
        },
        cst::Type::Function(node) => {
            let mut params = Vec::new();
            let mut varargs = None;
            for param in node.params.nodes() {
                match &param.ty {
                    cst::TypeOrPack::Type(ty) => params.push(lower_type(ty)),
                    cst::TypeOrPack::Pack(pack) => {
                        varargs = Some(Box::new(lower_type_pack(pack)))
                    }
                }
            }
            Type::Function {
                generics: node
                    .generics
                    .as_ref()
                    .map(lower_generic_params)
                    .unwrap_or_default(),
                params,
                varargs,
                ret: Some(Box::new(lower_type_or_pack(&node.ret))),
            }
        }
        cst::Type::Paren(node) => Type::Paren {
            ty: Box::new(lower_type(&node.ty)),
        },
        cst::Type::Optional(node) => Type::Optional {
            ty: Box::new(lower_type(&node.ty)),
        },
        cst::Type::Union(node) => Type::Union {
            types: node.types.nodes().map(lower_type).collect(),
        },
        cst::Type::Intersection(node) => Type::Intersection {
            types: node.types.nodes().map(lower_type).collect(),
        },
    }
}

fn lower_table_type_field(field: &cst::TableTypeField) -> TableTypeField {
    match field {
        cst::TableTypeField::NameProp(node) => TableTypeField::NameProp {
            access: node.access.as_ref().map(access),
            name: text(&node.name),
            ty: lower_type(&node.ty),
        },
        cst::TableTypeField::StringProp(node) => TableTypeField::StringProp {
            access: node.access.as_ref().map(access),
            key: text(&node.key),
            ty: lower_type(&node.ty),
        },
        cst::TableTypeField::Indexer(node) => TableTypeField::Indexer {
            access: node.access.as_ref().map(access),
            key: lower_type(&node.key),
            ty: lower_type(&node.ty),
        },
    }
}

fn lower_type_pack(pack: &cst::TypePack) -> TypePack {
    match pack {
        cst::TypePack::Variadic(node) => TypePack::Variadic {
            ty: Box::new(lower_type(&node.ty)),
        },
        cst::TypePack::Generic(node) => TypePack::Generic {
            name: text(&node.name),
        },
        cst::TypePack::List(node) => {
            let mut types = Vec::new();
            let mut tail = None;
            for element in node.types.nodes() {
                match element {
                    cst::TypeOrPack::Type(ty) => types.push(lower_type(ty)),
                    // The parser only allows a pack in final position.
                    cst::TypeOrPack::Pack(pack) => tail = Some(Box::new(lower_type_pack(pack))),
                }
            }
            TypePack::List { types, tail }
        }
    }
}

fn lower_type_or_pack(value: &cst::TypeOrPack) -> TypeOrPack {
    match value {
        cst::TypeOrPack::Type(ty) => TypeOrPack::Type(lower_type(ty)),
        cst::TypeOrPack::Pack(pack) => TypeOrPack::Pack(lower_type_pack(pack)),
    }
}

fn access(token: &Token) -> Access {
    match token.text() {
        "read" => Access::Read,
        "write" => Access::Write,
        other => unreachable!("invalid access modifier {other:?}"),
    }
}

fn unary_op(token: &Token) -> UnOp {
    match token.kind() {
        SyntaxKind::PLUS => UnOp::Plus,
        SyntaxKind::MINUS => UnOp::Minus,
        SyntaxKind::NOT_KW => UnOp::Not,
        SyntaxKind::HASH => UnOp::Len,
        kind => unreachable!("invalid unary operator {kind:?}"),
    }
}

fn binary_op(token: &Token) -> BinOp {
    match token.kind() {
        SyntaxKind::PLUS => BinOp::Add,
        SyntaxKind::MINUS => BinOp::Sub,
        SyntaxKind::STAR => BinOp::Mul,
        SyntaxKind::SLASH => BinOp::Div,
        SyntaxKind::SLASH2 => BinOp::FloorDiv,
        SyntaxKind::PERCENT => BinOp::Mod,
        SyntaxKind::CARET => BinOp::Pow,
        SyntaxKind::DOT2 => BinOp::Concat,
        SyntaxKind::LANGLE => BinOp::Lt,
        SyntaxKind::LANGLE_EQUAL => BinOp::Le,
        SyntaxKind::RANGLE => BinOp::Gt,
        SyntaxKind::RANGLE_EQUAL => BinOp::Ge,
        SyntaxKind::EQUAL2 => BinOp::Eq,
        SyntaxKind::TILDE_EQUAL => BinOp::Ne,
        SyntaxKind::AND_KW => BinOp::And,
        SyntaxKind::OR_KW => BinOp::Or,
        kind => unreachable!("invalid binary operator {kind:?}"),
    }
}

fn compound_op(token: &Token) -> CompoundOp {
    match token.kind() {
        SyntaxKind::PLUS_EQUAL => CompoundOp::Add,
        SyntaxKind::MINUS_EQUAL => CompoundOp::Sub,
        SyntaxKind::STAR_EQUAL => CompoundOp::Mul,
        SyntaxKind::SLASH_EQUAL => CompoundOp::Div,
        SyntaxKind::SLASH2_EQUAL => CompoundOp::FloorDiv,
        SyntaxKind::PERCENT_EQUAL => CompoundOp::Mod,
        SyntaxKind::CARET_EQUAL => CompoundOp::Pow,
        SyntaxKind::DOT2_EQUAL => CompoundOp::Concat,
        kind => unreachable!("invalid compound operator {kind:?}"),
    }
}
