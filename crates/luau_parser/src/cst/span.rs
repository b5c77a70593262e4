//! On-demand span synthesis. Composite nodes do not store their own spans;
//! a node's span is the merge of its first and last constituent tokens,
//! computed recursively here.

use super::nodes::*;
use luau_syntax::{Span, Token};

pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Token {
    fn span(&self) -> Span {
        Token::span(self)
    }
}

/// Span of a non-empty punctuated list, from its first element through its
/// last element or that element's trailing separator.
fn list_span<T: Spanned>(list: &Punctuated<T>) -> Option<Span> {
    let first = list.first()?;
    let last = list.last()?;
    let end = match &last.sep {
        Some(sep) => sep.span(),
        None => last.node.span(),
    };
    Some(first.node.span().merge(end))
}

impl Block {
    /// The span from the first through the last statement (or its trailing
    /// semicolon). An empty block occupies no bytes of its own, so its span
    /// is undefined.
    pub fn span(&self) -> Option<Span> {
        let start = self
            .stats
            .first()
            .map(|pair| pair.node.span())
            .or_else(|| self.last_stat.as_ref().map(|pair| pair.node.span()))?;
        let end = match &self.last_stat {
            Some(pair) => pair
                .sep
                .as_ref()
                .map(Spanned::span)
                .unwrap_or_else(|| pair.node.span()),
            None => {
                // At least one stat exists here, or `start` above was None.
                let pair = self.stats.last().unwrap();
                pair.sep
                    .as_ref()
                    .map(Spanned::span)
                    .unwrap_or_else(|| pair.node.span())
            }
        };
        Some(start.merge(end))
    }
}

impl Spanned for Stat {
    fn span(&self) -> Span {
        match self {
            Stat::Assign(node) => node.span(),
            Stat::CompoundAssign(node) => node.span(),
            Stat::Call(node) => node.span(),
            Stat::Do(node) => node.span(),
            Stat::While(node) => node.span(),
            Stat::Repeat(node) => node.span(),
            Stat::If(node) => node.span(),
            Stat::NumericFor(node) => node.span(),
            Stat::ForIn(node) => node.span(),
            Stat::Function(node) => node.span(),
            Stat::LocalFunction(node) => node.span(),
            Stat::LocalVariable(node) => node.span(),
            Stat::TypeAlias(node) => node.span(),
        }
    }
}

impl Spanned for LastStat {
    fn span(&self) -> Span {
        match self {
            LastStat::Return(node) => node.span(),
            LastStat::Break(token) | LastStat::Continue(token) => token.span(),
        }
    }
}

impl Spanned for ReturnStat {
    fn span(&self) -> Span {
        match list_span(&self.exprs) {
            Some(exprs) => self.return_token.span().merge(exprs),
            None => self.return_token.span(),
        }
    }
}

impl Spanned for Assign {
    fn span(&self) -> Span {
        let targets = list_span(&self.targets).unwrap();
        let values = list_span(&self.values).unwrap();
        targets.merge(values)
    }
}

impl Spanned for CompoundAssign {
    fn span(&self) -> Span {
        self.target.span().merge(self.value.span())
    }
}

impl Spanned for DoStat {
    fn span(&self) -> Span {
        self.do_token.span().merge(self.end_token.span())
    }
}

impl Spanned for WhileStat {
    fn span(&self) -> Span {
        self.while_token.span().merge(self.end_token.span())
    }
}

impl Spanned for RepeatStat {
    fn span(&self) -> Span {
        self.repeat_token.span().merge(self.condition.span())
    }
}

impl Spanned for IfStat {
    fn span(&self) -> Span {
        self.if_token.span().merge(self.end_token.span())
    }
}

impl Spanned for NumericFor {
    fn span(&self) -> Span {
        self.for_token.span().merge(self.end_token.span())
    }
}

impl Spanned for ForIn {
    fn span(&self) -> Span {
        self.for_token.span().merge(self.end_token.span())
    }
}

impl Spanned for FunctionStat {
    fn span(&self) -> Span {
        let start = self
            .attributes
            .first()
            .map(Spanned::span)
            .unwrap_or_else(|| self.function_token.span());
        start.merge(self.body.end_token.span())
    }
}

impl Spanned for LocalFunction {
    fn span(&self) -> Span {
        let start = self
            .attributes
            .first()
            .map(Spanned::span)
            .unwrap_or_else(|| self.local_token.span());
        start.merge(self.body.end_token.span())
    }
}

impl Spanned for LocalVariable {
    fn span(&self) -> Span {
        let end = match &self.assignment {
            Some(assignment) => list_span(&assignment.exprs).unwrap(),
            None => list_span(&self.bindings).unwrap(),
        };
        self.local_token.span().merge(end)
    }
}

impl Spanned for TypeAlias {
    fn span(&self) -> Span {
        let start = self
            .export_token
            .as_ref()
            .map(Spanned::span)
            .unwrap_or_else(|| self.type_token.span());
        start.merge(self.ty.span())
    }
}

impl Spanned for Attribute {
    fn span(&self) -> Span {
        self.at.span().merge(self.name.span())
    }
}

impl Spanned for FunctionBody {
    fn span(&self) -> Span {
        let start = match &self.generics {
            Some(generics) => generics.angles.open.span(),
            None => self.parens.open.span(),
        };
        start.merge(self.end_token.span())
    }
}

impl Spanned for Param {
    fn span(&self) -> Span {
        match self {
            Param::Binding(node) => node.span(),
            Param::Varargs(node) => node.span(),
        }
    }
}

impl Spanned for VarargsParam {
    fn span(&self) -> Span {
        match &self.annotation {
            Some(annotation) => self.dots.span().merge(annotation.ty.span()),
            None => self.dots.span(),
        }
    }
}

impl Spanned for Binding {
    fn span(&self) -> Span {
        match &self.annotation {
            Some(annotation) => self.name.span().merge(annotation.ty.span()),
            None => self.name.span(),
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Nil(token)
            | Expr::Boolean(token)
            | Expr::Number(token)
            | Expr::String(token)
            | Expr::Varargs(token) => token.span(),
            Expr::InterpString(node) => node.span(),
            Expr::Table(node) => node.span(),
            Expr::Function(node) => node.span(),
            Expr::IfElse(node) => node.span(),
            Expr::Var(node) => node.span(),
            Expr::Assertion(node) => node.span(),
            Expr::Unary(node) => node.span(),
            Expr::Binary(node) => node.span(),
        }
    }
}

impl Spanned for FunctionExpr {
    fn span(&self) -> Span {
        let start = self
            .attributes
            .first()
            .map(Spanned::span)
            .unwrap_or_else(|| self.function_token.span());
        start.merge(self.body.end_token.span())
    }
}

impl Spanned for IfElseExpr {
    fn span(&self) -> Span {
        self.if_token.span().merge(self.else_value.span())
    }
}

impl Spanned for ElseIfExprBranch {
    fn span(&self) -> Span {
        self.elseif_token.span().merge(self.value.span())
    }
}

impl Spanned for ElseIfBranch {
    fn span(&self) -> Span {
        let end = self
            .block
            .span()
            .unwrap_or_else(|| self.then_token.span());
        self.elseif_token.span().merge(end)
    }
}

impl Spanned for ElseBranch {
    fn span(&self) -> Span {
        let end = self
            .block
            .span()
            .unwrap_or_else(|| self.else_token.span());
        self.else_token.span().merge(end)
    }
}

impl Spanned for Assertion {
    fn span(&self) -> Span {
        self.expr.span().merge(self.ty.span())
    }
}

impl Spanned for UnaryExpr {
    fn span(&self) -> Span {
        self.op.span().merge(self.expr.span())
    }
}

impl Spanned for BinaryExpr {
    fn span(&self) -> Span {
        self.lhs.span().merge(self.rhs.span())
    }
}

impl Spanned for InterpString {
    fn span(&self) -> Span {
        match self {
            InterpString::Simple(token) => token.span(),
            InterpString::Complex(node) => {
                let end = node
                    .segments
                    .last()
                    .map(|segment| segment.text.span())
                    .unwrap_or_else(|| node.first.span());
                node.first.span().merge(end)
            }
        }
    }
}

impl Spanned for Var {
    fn span(&self) -> Span {
        match self.suffixes.last() {
            Some(suffix) => self.root.span().merge(suffix.span()),
            None => self.root.span(),
        }
    }
}

impl Spanned for VarRoot {
    fn span(&self) -> Span {
        match self {
            VarRoot::Name(token) => token.span(),
            VarRoot::Paren(node) => node.span(),
        }
    }
}

impl Spanned for ParenExpr {
    fn span(&self) -> Span {
        self.parens.open.span().merge(self.parens.close.span())
    }
}

impl Spanned for VarSuffix {
    fn span(&self) -> Span {
        match self {
            VarSuffix::NameIndex(node) => node.span(),
            VarSuffix::ExprIndex(node) => node.span(),
            VarSuffix::Call(node) => node.span(),
        }
    }
}

impl Spanned for NameIndex {
    fn span(&self) -> Span {
        self.dot.span().merge(self.name.span())
    }
}

impl Spanned for ExprIndex {
    fn span(&self) -> Span {
        self.bracks.open.span().merge(self.bracks.close.span())
    }
}

impl Spanned for CallSuffix {
    fn span(&self) -> Span {
        match &self.method {
            Some(method) => method.colon.span().merge(self.args.span()),
            None => self.args.span(),
        }
    }
}

impl Spanned for FunctionArgs {
    fn span(&self) -> Span {
        match self {
            FunctionArgs::Pack(node) => node.span(),
            FunctionArgs::Table(node) => node.span(),
            FunctionArgs::String(token) => token.span(),
        }
    }
}

impl Spanned for PackArgs {
    fn span(&self) -> Span {
        self.parens.open.span().merge(self.parens.close.span())
    }
}

impl Spanned for TableConstructor {
    fn span(&self) -> Span {
        self.braces.open.span().merge(self.braces.close.span())
    }
}

impl Spanned for TableField {
    fn span(&self) -> Span {
        match self {
            TableField::NameKey(node) => node.name.span().merge(node.value.span()),
            TableField::ExprKey(node) => node.bracks.open.span().merge(node.value.span()),
            TableField::NoKey(node) => node.span(),
        }
    }
}

impl Spanned for Type {
    fn span(&self) -> Span {
        match self {
            Type::Nil(token) | Type::Boolean(token) | Type::String(token) => token.span(),
            Type::Reference(node) => node.span(),
            Type::Typeof(node) => node.span(),
            Type::Array(node) => node.span(),
            Type::Table(node) => node.span(),
            Type::Function(node) => node.span(),
            Type::Paren(node) => node.span(),
            Type::Optional(node) => node.span(),
            Type::Union(node) => node.span(),
            Type::Intersection(node) => node.span(),
        }
    }
}

impl Spanned for TypeReference {
    fn span(&self) -> Span {
        let start = match &self.prefix {
            Some(prefix) => prefix.name.span(),
            None => self.name.span(),
        };
        let end = match &self.generics {
            Some(generics) => generics.angles.close.span(),
            None => self.name.span(),
        };
        start.merge(end)
    }
}

impl Spanned for TypeGenerics {
    fn span(&self) -> Span {
        self.angles.open.span().merge(self.angles.close.span())
    }
}

impl Spanned for TypeofType {
    fn span(&self) -> Span {
        self.typeof_token.span().merge(self.parens.close.span())
    }
}

impl Spanned for ArrayType {
    fn span(&self) -> Span {
        self.braces.open.span().merge(self.braces.close.span())
    }
}

impl Spanned for TableType {
    fn span(&self) -> Span {
        self.braces.open.span().merge(self.braces.close.span())
    }
}

impl Spanned for TableTypeField {
    fn span(&self) -> Span {
        match self {
            TableTypeField::NameProp(node) => {
                let start = node
                    .access
                    .as_ref()
                    .map(Spanned::span)
                    .unwrap_or_else(|| node.name.span());
                start.merge(node.ty.span())
            }
            TableTypeField::StringProp(node) => {
                let start = node
                    .access
                    .as_ref()
                    .map(Spanned::span)
                    .unwrap_or_else(|| node.bracks.open.span());
                start.merge(node.ty.span())
            }
            TableTypeField::Indexer(node) => {
                let start = node
                    .access
                    .as_ref()
                    .map(Spanned::span)
                    .unwrap_or_else(|| node.bracks.open.span());
                start.merge(node.ty.span())
            }
        }
    }
}

impl Spanned for FunctionType {
    fn span(&self) -> Span {
        let start = match &self.generics {
            Some(generics) => generics.angles.open.span(),
            None => self.parens.open.span(),
        };
        start.merge(self.ret.span())
    }
}

impl Spanned for TypeParam {
    fn span(&self) -> Span {
        match &self.name {
            Some(name) => name.name.span().merge(self.ty.span()),
            None => self.ty.span(),
        }
    }
}

impl Spanned for ParenType {
    fn span(&self) -> Span {
        self.parens.open.span().merge(self.parens.close.span())
    }
}

impl Spanned for OptionalType {
    fn span(&self) -> Span {
        self.ty.span().merge(self.question.span())
    }
}

impl Spanned for UnionType {
    fn span(&self) -> Span {
        let types = list_span(&self.types).unwrap();
        match &self.leading {
            Some(leading) => leading.span().merge(types),
            None => types,
        }
    }
}

impl Spanned for IntersectionType {
    fn span(&self) -> Span {
        let types = list_span(&self.types).unwrap();
        match &self.leading {
            Some(leading) => leading.span().merge(types),
            None => types,
        }
    }
}

impl Spanned for TypeOrPack {
    fn span(&self) -> Span {
        match self {
            TypeOrPack::Type(node) => node.span(),
            TypeOrPack::Pack(node) => node.span(),
        }
    }
}

impl Spanned for TypePack {
    fn span(&self) -> Span {
        match self {
            TypePack::List(node) => node.span(),
            TypePack::Variadic(node) => node.span(),
            TypePack::Generic(node) => node.span(),
        }
    }
}

impl Spanned for TypePackList {
    fn span(&self) -> Span {
        self.parens.open.span().merge(self.parens.close.span())
    }
}

impl Spanned for VariadicTypePack {
    fn span(&self) -> Span {
        self.dots.span().merge(self.ty.span())
    }
}

impl Spanned for GenericTypePack {
    fn span(&self) -> Span {
        self.name.span().merge(self.dots.span())
    }
}

impl Spanned for GenericDecl {
    fn span(&self) -> Span {
        self.angles.open.span().merge(self.angles.close.span())
    }
}

impl Spanned for GenericParam {
    fn span(&self) -> Span {
        let start = match &self.info {
            GenericParamInfo::Name(token) => token.span(),
            GenericParamInfo::Pack { name, .. } => name.span(),
        };
        let end = match (&self.default, &self.info) {
            (Some(default), _) => default.value.span(),
            (None, GenericParamInfo::Name(token)) => token.span(),
            (None, GenericParamInfo::Pack { dots, .. }) => dots.span(),
        };
        start.merge(end)
    }
}
