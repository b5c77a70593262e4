use super::nodes::*;
use luau_syntax::Token;

/// A generic pre-order, left-to-right walk over the tree. Every method has a
/// default implementation that simply continues the walk, so an
/// implementation only overrides the kinds it cares about; the default trait
/// body is the no-op base visitor. `visit_token` sees every token in source
/// order, which is all the printer needs.
pub trait Visit: Sized {
    fn visit_token(&mut self, _token: &Token) {}

    fn visit_cst(&mut self, node: &Cst) {
        node.visit_children_with(self);
    }
    fn visit_block(&mut self, node: &Block) {
        node.visit_children_with(self);
    }
    fn visit_stat(&mut self, node: &Stat) {
        node.visit_children_with(self);
    }
    fn visit_last_stat(&mut self, node: &LastStat) {
        node.visit_children_with(self);
    }
    fn visit_return_stat(&mut self, node: &ReturnStat) {
        node.visit_children_with(self);
    }
    fn visit_assign(&mut self, node: &Assign) {
        node.visit_children_with(self);
    }
    fn visit_compound_assign(&mut self, node: &CompoundAssign) {
        node.visit_children_with(self);
    }
    fn visit_do_stat(&mut self, node: &DoStat) {
        node.visit_children_with(self);
    }
    fn visit_while_stat(&mut self, node: &WhileStat) {
        node.visit_children_with(self);
    }
    fn visit_repeat_stat(&mut self, node: &RepeatStat) {
        node.visit_children_with(self);
    }
    fn visit_if_stat(&mut self, node: &IfStat) {
        node.visit_children_with(self);
    }
    fn visit_else_if_branch(&mut self, node: &ElseIfBranch) {
        node.visit_children_with(self);
    }
    fn visit_else_branch(&mut self, node: &ElseBranch) {
        node.visit_children_with(self);
    }
    fn visit_numeric_for(&mut self, node: &NumericFor) {
        node.visit_children_with(self);
    }
    fn visit_for_in(&mut self, node: &ForIn) {
        node.visit_children_with(self);
    }
    fn visit_function_stat(&mut self, node: &FunctionStat) {
        node.visit_children_with(self);
    }
    fn visit_function_name(&mut self, node: &FunctionName) {
        node.visit_children_with(self);
    }
    fn visit_local_function(&mut self, node: &LocalFunction) {
        node.visit_children_with(self);
    }
    fn visit_local_variable(&mut self, node: &LocalVariable) {
        node.visit_children_with(self);
    }
    fn visit_type_alias(&mut self, node: &TypeAlias) {
        node.visit_children_with(self);
    }
    fn visit_attribute(&mut self, node: &Attribute) {
        node.visit_children_with(self);
    }
    fn visit_function_body(&mut self, node: &FunctionBody) {
        node.visit_children_with(self);
    }
    fn visit_param(&mut self, node: &Param) {
        node.visit_children_with(self);
    }
    fn visit_varargs_param(&mut self, node: &VarargsParam) {
        node.visit_children_with(self);
    }
    fn visit_binding(&mut self, node: &Binding) {
        node.visit_children_with(self);
    }
    fn visit_expr(&mut self, node: &Expr) {
        node.visit_children_with(self);
    }
    fn visit_function_expr(&mut self, node: &FunctionExpr) {
        node.visit_children_with(self);
    }
    fn visit_if_else_expr(&mut self, node: &IfElseExpr) {
        node.visit_children_with(self);
    }
    fn visit_else_if_expr_branch(&mut self, node: &ElseIfExprBranch) {
        node.visit_children_with(self);
    }
    fn visit_assertion(&mut self, node: &Assertion) {
        node.visit_children_with(self);
    }
    fn visit_unary_expr(&mut self, node: &UnaryExpr) {
        node.visit_children_with(self);
    }
    fn visit_binary_expr(&mut self, node: &BinaryExpr) {
        node.visit_children_with(self);
    }
    fn visit_interp_string(&mut self, node: &InterpString) {
        node.visit_children_with(self);
    }
    fn visit_var(&mut self, node: &Var) {
        node.visit_children_with(self);
    }
    fn visit_var_root(&mut self, node: &VarRoot) {
        node.visit_children_with(self);
    }
    fn visit_paren_expr(&mut self, node: &ParenExpr) {
        node.visit_children_with(self);
    }
    fn visit_var_suffix(&mut self, node: &VarSuffix) {
        node.visit_children_with(self);
    }
    fn visit_name_index(&mut self, node: &NameIndex) {
        node.visit_children_with(self);
    }
    fn visit_expr_index(&mut self, node: &ExprIndex) {
        node.visit_children_with(self);
    }
    fn visit_call_suffix(&mut self, node: &CallSuffix) {
        node.visit_children_with(self);
    }
    fn visit_function_args(&mut self, node: &FunctionArgs) {
        node.visit_children_with(self);
    }
    fn visit_pack_args(&mut self, node: &PackArgs) {
        node.visit_children_with(self);
    }
    fn visit_table_constructor(&mut self, node: &TableConstructor) {
        node.visit_children_with(self);
    }
    fn visit_table_field(&mut self, node: &TableField) {
        node.visit_children_with(self);
    }
    fn visit_name_key_field(&mut self, node: &NameKeyField) {
        node.visit_children_with(self);
    }
    fn visit_expr_key_field(&mut self, node: &ExprKeyField) {
        node.visit_children_with(self);
    }
    fn visit_type(&mut self, node: &Type) {
        node.visit_children_with(self);
    }
    fn visit_type_reference(&mut self, node: &TypeReference) {
        node.visit_children_with(self);
    }
    fn visit_type_generics(&mut self, node: &TypeGenerics) {
        node.visit_children_with(self);
    }
    fn visit_typeof_type(&mut self, node: &TypeofType) {
        node.visit_children_with(self);
    }
    fn visit_array_type(&mut self, node: &ArrayType) {
        node.visit_children_with(self);
    }
    fn visit_table_type(&mut self, node: &TableType) {
        node.visit_children_with(self);
    }
    fn visit_table_type_field(&mut self, node: &TableTypeField) {
        node.visit_children_with(self);
    }
    fn visit_name_prop(&mut self, node: &NameProp) {
        node.visit_children_with(self);
    }
    fn visit_string_prop(&mut self, node: &StringProp) {
        node.visit_children_with(self);
    }
    fn visit_indexer(&mut self, node: &Indexer) {
        node.visit_children_with(self);
    }
    fn visit_function_type(&mut self, node: &FunctionType) {
        node.visit_children_with(self);
    }
    fn visit_type_param(&mut self, node: &TypeParam) {
        node.visit_children_with(self);
    }
    fn visit_paren_type(&mut self, node: &ParenType) {
        node.visit_children_with(self);
    }
    fn visit_optional_type(&mut self, node: &OptionalType) {
        node.visit_children_with(self);
    }
    fn visit_union_type(&mut self, node: &UnionType) {
        node.visit_children_with(self);
    }
    fn visit_intersection_type(&mut self, node: &IntersectionType) {
        node.visit_children_with(self);
    }
    fn visit_type_or_pack(&mut self, node: &TypeOrPack) {
        node.visit_children_with(self);
    }
    fn visit_type_pack(&mut self, node: &TypePack) {
        node.visit_children_with(self);
    }
    fn visit_type_pack_list(&mut self, node: &TypePackList) {
        node.visit_children_with(self);
    }
    fn visit_variadic_type_pack(&mut self, node: &VariadicTypePack) {
        node.visit_children_with(self);
    }
    fn visit_generic_type_pack(&mut self, node: &GenericTypePack) {
        node.visit_children_with(self);
    }
    fn visit_generic_decl(&mut self, node: &GenericDecl) {
        node.visit_children_with(self);
    }
    fn visit_generic_param(&mut self, node: &GenericParam) {
        node.visit_children_with(self);
    }
}

/// Implemented by every node kind: `visit_with` enters this node through its
/// visitor callback, and `visit_children_with` continues the walk through
/// every child token and node in source order.
pub trait VisitWith {
    fn visit_with<V: Visit>(&self, visitor: &mut V);
    fn visit_children_with<V: Visit>(&self, visitor: &mut V);
}

fn walk_list<T: VisitWith, V: Visit>(list: &Punctuated<T>, visitor: &mut V) {
    for pair in list.pairs() {
        pair.node.visit_with(visitor);
        if let Some(sep) = &pair.sep {
            visitor.visit_token(sep);
        }
    }
}

fn walk_opt_token<V: Visit>(token: &Option<Token>, visitor: &mut V) {
    if let Some(token) = token {
        visitor.visit_token(token);
    }
}

impl VisitWith for Cst {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_cst(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        self.block.visit_with(visitor);
        visitor.visit_token(&self.eof);
    }
}

impl VisitWith for Block {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_block(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        for pair in &self.stats {
            pair.node.visit_with(visitor);
            walk_opt_token(&pair.sep, visitor);
        }
        if let Some(pair) = &self.last_stat {
            pair.node.visit_with(visitor);
            walk_opt_token(&pair.sep, visitor);
        }
    }
}

impl VisitWith for Stat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            Stat::Assign(node) => node.visit_with(visitor),
            Stat::CompoundAssign(node) => node.visit_with(visitor),
            Stat::Call(node) => node.visit_with(visitor),
            Stat::Do(node) => node.visit_with(visitor),
            Stat::While(node) => node.visit_with(visitor),
            Stat::Repeat(node) => node.visit_with(visitor),
            Stat::If(node) => node.visit_with(visitor),
            Stat::NumericFor(node) => node.visit_with(visitor),
            Stat::ForIn(node) => node.visit_with(visitor),
            Stat::Function(node) => node.visit_with(visitor),
            Stat::LocalFunction(node) => node.visit_with(visitor),
            Stat::LocalVariable(node) => node.visit_with(visitor),
            Stat::TypeAlias(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for LastStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_last_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            LastStat::Return(node) => node.visit_with(visitor),
            LastStat::Break(token) | LastStat::Continue(token) => visitor.visit_token(token),
        }
    }
}

impl VisitWith for ReturnStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_return_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.return_token);
        walk_list(&self.exprs, visitor);
    }
}

impl VisitWith for Assign {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_assign(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_list(&self.targets, visitor);
        visitor.visit_token(&self.equal);
        walk_list(&self.values, visitor);
    }
}

impl VisitWith for CompoundAssign {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_compound_assign(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        self.target.visit_with(visitor);
        visitor.visit_token(&self.op);
        self.value.visit_with(visitor);
    }
}

impl VisitWith for DoStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_do_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.do_token);
        self.block.visit_with(visitor);
        visitor.visit_token(&self.end_token);
    }
}

impl VisitWith for WhileStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_while_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.while_token);
        self.condition.visit_with(visitor);
        visitor.visit_token(&self.do_token);
        self.block.visit_with(visitor);
        visitor.visit_token(&self.end_token);
    }
}

impl VisitWith for RepeatStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_repeat_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.repeat_token);
        self.block.visit_with(visitor);
        visitor.visit_token(&self.until_token);
        self.condition.visit_with(visitor);
    }
}

impl VisitWith for IfStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_if_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.if_token);
        self.condition.visit_with(visitor);
        visitor.visit_token(&self.then_token);
        self.block.visit_with(visitor);
        for branch in &self.elseifs {
            branch.visit_with(visitor);
        }
        if let Some(branch) = &self.else_branch {
            branch.visit_with(visitor);
        }
        visitor.visit_token(&self.end_token);
    }
}

impl VisitWith for ElseIfBranch {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_else_if_branch(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.elseif_token);
        self.condition.visit_with(visitor);
        visitor.visit_token(&self.then_token);
        self.block.visit_with(visitor);
    }
}

impl VisitWith for ElseBranch {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_else_branch(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.else_token);
        self.block.visit_with(visitor);
    }
}

impl VisitWith for NumericFor {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_numeric_for(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.for_token);
        self.binding.visit_with(visitor);
        visitor.visit_token(&self.equal);
        self.start.visit_with(visitor);
        visitor.visit_token(&self.first_comma);
        self.limit.visit_with(visitor);
        if let Some(step) = &self.step {
            visitor.visit_token(&step.comma);
            step.expr.visit_with(visitor);
        }
        visitor.visit_token(&self.do_token);
        self.block.visit_with(visitor);
        visitor.visit_token(&self.end_token);
    }
}

impl VisitWith for ForIn {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_for_in(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.for_token);
        walk_list(&self.bindings, visitor);
        visitor.visit_token(&self.in_token);
        walk_list(&self.exprs, visitor);
        visitor.visit_token(&self.do_token);
        self.block.visit_with(visitor);
        visitor.visit_token(&self.end_token);
    }
}

impl VisitWith for FunctionStat {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_function_stat(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        for attribute in &self.attributes {
            attribute.visit_with(visitor);
        }
        visitor.visit_token(&self.function_token);
        self.name.visit_with(visitor);
        self.body.visit_with(visitor);
    }
}

impl VisitWith for FunctionName {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_function_name(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.base);
        for field in &self.fields {
            field.visit_with(visitor);
        }
        if let Some(method) = &self.method {
            visitor.visit_token(&method.colon);
            visitor.visit_token(&method.name);
        }
    }
}

impl VisitWith for LocalFunction {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_local_function(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        for attribute in &self.attributes {
            attribute.visit_with(visitor);
        }
        visitor.visit_token(&self.local_token);
        visitor.visit_token(&self.function_token);
        visitor.visit_token(&self.name);
        self.body.visit_with(visitor);
    }
}

impl VisitWith for LocalVariable {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_local_variable(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.local_token);
        walk_list(&self.bindings, visitor);
        if let Some(assignment) = &self.assignment {
            visitor.visit_token(&assignment.equal);
            walk_list(&assignment.exprs, visitor);
        }
    }
}

impl VisitWith for TypeAlias {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_alias(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_opt_token(&self.export_token, visitor);
        visitor.visit_token(&self.type_token);
        visitor.visit_token(&self.name);
        if let Some(generics) = &self.generics {
            generics.visit_with(visitor);
        }
        visitor.visit_token(&self.equal);
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for Attribute {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_attribute(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.at);
        visitor.visit_token(&self.name);
    }
}

impl VisitWith for FunctionBody {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_function_body(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        if let Some(generics) = &self.generics {
            generics.visit_with(visitor);
        }
        visitor.visit_token(&self.parens.open);
        walk_list(&self.params, visitor);
        visitor.visit_token(&self.parens.close);
        if let Some(ret) = &self.ret {
            visitor.visit_token(&ret.colon);
            ret.ty.visit_with(visitor);
        }
        self.block.visit_with(visitor);
        visitor.visit_token(&self.end_token);
    }
}

impl VisitWith for Param {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_param(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            Param::Binding(node) => node.visit_with(visitor),
            Param::Varargs(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for VarargsParam {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_varargs_param(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.dots);
        if let Some(annotation) = &self.annotation {
            visitor.visit_token(&annotation.colon);
            annotation.ty.visit_with(visitor);
        }
    }
}

impl VisitWith for Binding {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_binding(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.name);
        if let Some(annotation) = &self.annotation {
            visitor.visit_token(&annotation.colon);
            annotation.ty.visit_with(visitor);
        }
    }
}

impl VisitWith for Expr {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_expr(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            Expr::Nil(token)
            | Expr::Boolean(token)
            | Expr::Number(token)
            | Expr::String(token)
            | Expr::Varargs(token) => visitor.visit_token(token),
            Expr::InterpString(node) => node.visit_with(visitor),
            Expr::Table(node) => node.visit_with(visitor),
            Expr::Function(node) => node.visit_with(visitor),
            Expr::IfElse(node) => node.visit_with(visitor),
            Expr::Var(node) => node.visit_with(visitor),
            Expr::Assertion(node) => node.visit_with(visitor),
            Expr::Unary(node) => node.visit_with(visitor),
            Expr::Binary(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for FunctionExpr {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_function_expr(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        for attribute in &self.attributes {
            attribute.visit_with(visitor);
        }
        visitor.visit_token(&self.function_token);
        self.body.visit_with(visitor);
    }
}

impl VisitWith for IfElseExpr {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_if_else_expr(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.if_token);
        self.condition.visit_with(visitor);
        visitor.visit_token(&self.then_token);
        self.value.visit_with(visitor);
        for branch in &self.elseifs {
            branch.visit_with(visitor);
        }
        visitor.visit_token(&self.else_token);
        self.else_value.visit_with(visitor);
    }
}

impl VisitWith for ElseIfExprBranch {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_else_if_expr_branch(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.elseif_token);
        self.condition.visit_with(visitor);
        visitor.visit_token(&self.then_token);
        self.value.visit_with(visitor);
    }
}

impl VisitWith for Assertion {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_assertion(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        self.expr.visit_with(visitor);
        visitor.visit_token(&self.colons);
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for UnaryExpr {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_unary_expr(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.op);
        self.expr.visit_with(visitor);
    }
}

impl VisitWith for BinaryExpr {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_binary_expr(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        self.lhs.visit_with(visitor);
        visitor.visit_token(&self.op);
        self.rhs.visit_with(visitor);
    }
}

impl VisitWith for InterpString {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_interp_string(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            InterpString::Simple(token) => visitor.visit_token(token),
            InterpString::Complex(node) => {
                visitor.visit_token(&node.first);
                for segment in &node.segments {
                    segment.expr.visit_with(visitor);
                    visitor.visit_token(&segment.text);
                }
            }
        }
    }
}

impl VisitWith for Var {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_var(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        self.root.visit_with(visitor);
        for suffix in &self.suffixes {
            suffix.visit_with(visitor);
        }
    }
}

impl VisitWith for VarRoot {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_var_root(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            VarRoot::Name(token) => visitor.visit_token(token),
            VarRoot::Paren(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for ParenExpr {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_paren_expr(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.parens.open);
        self.expr.visit_with(visitor);
        visitor.visit_token(&self.parens.close);
    }
}

impl VisitWith for VarSuffix {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_var_suffix(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            VarSuffix::NameIndex(node) => node.visit_with(visitor),
            VarSuffix::ExprIndex(node) => node.visit_with(visitor),
            VarSuffix::Call(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for NameIndex {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_name_index(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.dot);
        visitor.visit_token(&self.name);
    }
}

impl VisitWith for ExprIndex {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_expr_index(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.bracks.open);
        self.expr.visit_with(visitor);
        visitor.visit_token(&self.bracks.close);
    }
}

impl VisitWith for CallSuffix {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_call_suffix(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        if let Some(method) = &self.method {
            visitor.visit_token(&method.colon);
            visitor.visit_token(&method.name);
        }
        self.args.visit_with(visitor);
    }
}

impl VisitWith for FunctionArgs {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_function_args(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            FunctionArgs::Pack(node) => node.visit_with(visitor),
            FunctionArgs::Table(node) => node.visit_with(visitor),
            FunctionArgs::String(token) => visitor.visit_token(token),
        }
    }
}

impl VisitWith for PackArgs {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_pack_args(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.parens.open);
        walk_list(&self.exprs, visitor);
        visitor.visit_token(&self.parens.close);
    }
}

impl VisitWith for TableConstructor {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_table_constructor(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.braces.open);
        walk_list(&self.fields, visitor);
        visitor.visit_token(&self.braces.close);
    }
}

impl VisitWith for TableField {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_table_field(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            TableField::NameKey(node) => node.visit_with(visitor),
            TableField::ExprKey(node) => node.visit_with(visitor),
            TableField::NoKey(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for NameKeyField {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_name_key_field(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.name);
        visitor.visit_token(&self.equal);
        self.value.visit_with(visitor);
    }
}

impl VisitWith for ExprKeyField {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_expr_key_field(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.bracks.open);
        self.key.visit_with(visitor);
        visitor.visit_token(&self.bracks.close);
        visitor.visit_token(&self.equal);
        self.value.visit_with(visitor);
    }
}

impl VisitWith for Type {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            Type::Nil(token) | Type::Boolean(token) | Type::String(token) => {
                visitor.visit_token(token)
            }
            Type::Reference(node) => node.visit_with(visitor),
            Type::Typeof(node) => node.visit_with(visitor),
            Type::Array(node) => node.visit_with(visitor),
            Type::Table(node) => node.visit_with(visitor),
            Type::Function(node) => node.visit_with(visitor),
            Type::Paren(node) => node.visit_with(visitor),
            Type::Optional(node) => node.visit_with(visitor),
            Type::Union(node) => node.visit_with(visitor),
            Type::Intersection(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for TypeReference {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_reference(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        if let Some(prefix) = &self.prefix {
            visitor.visit_token(&prefix.name);
            visitor.visit_token(&prefix.dot);
        }
        visitor.visit_token(&self.name);
        if let Some(generics) = &self.generics {
            generics.visit_with(visitor);
        }
    }
}

impl VisitWith for TypeGenerics {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_generics(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.angles.open);
        walk_list(&self.args, visitor);
        visitor.visit_token(&self.angles.close);
    }
}

impl VisitWith for TypeofType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_typeof_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.typeof_token);
        visitor.visit_token(&self.parens.open);
        self.expr.visit_with(visitor);
        visitor.visit_token(&self.parens.close);
    }
}

impl VisitWith for ArrayType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_array_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.braces.open);
        self.element.visit_with(visitor);
        visitor.visit_token(&self.braces.close);
    }
}

impl VisitWith for TableType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_table_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.braces.open);
        walk_list(&self.fields, visitor);
        visitor.visit_token(&self.braces.close);
    }
}

impl VisitWith for TableTypeField {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_table_type_field(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            TableTypeField::NameProp(node) => node.visit_with(visitor),
            TableTypeField::StringProp(node) => node.visit_with(visitor),
            TableTypeField::Indexer(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for NameProp {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_name_prop(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_opt_token(&self.access, visitor);
        visitor.visit_token(&self.name);
        visitor.visit_token(&self.colon);
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for StringProp {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_string_prop(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_opt_token(&self.access, visitor);
        visitor.visit_token(&self.bracks.open);
        visitor.visit_token(&self.key);
        visitor.visit_token(&self.bracks.close);
        visitor.visit_token(&self.colon);
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for Indexer {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_indexer(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_opt_token(&self.access, visitor);
        visitor.visit_token(&self.bracks.open);
        self.key.visit_with(visitor);
        visitor.visit_token(&self.bracks.close);
        visitor.visit_token(&self.colon);
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for FunctionType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_function_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        if let Some(generics) = &self.generics {
            generics.visit_with(visitor);
        }
        visitor.visit_token(&self.parens.open);
        walk_list(&self.params, visitor);
        visitor.visit_token(&self.parens.close);
        visitor.visit_token(&self.arrow);
        self.ret.visit_with(visitor);
    }
}

impl VisitWith for TypeParam {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_param(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        if let Some(name) = &self.name {
            visitor.visit_token(&name.name);
            visitor.visit_token(&name.colon);
        }
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for ParenType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_paren_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.parens.open);
        self.ty.visit_with(visitor);
        visitor.visit_token(&self.parens.close);
    }
}

impl VisitWith for OptionalType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_optional_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        self.ty.visit_with(visitor);
        visitor.visit_token(&self.question);
    }
}

impl VisitWith for UnionType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_union_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_opt_token(&self.leading, visitor);
        walk_list(&self.types, visitor);
    }
}

impl VisitWith for IntersectionType {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_intersection_type(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        walk_opt_token(&self.leading, visitor);
        walk_list(&self.types, visitor);
    }
}

impl VisitWith for TypeOrPack {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_or_pack(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            TypeOrPack::Type(node) => node.visit_with(visitor),
            TypeOrPack::Pack(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for TypePack {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_pack(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match self {
            TypePack::List(node) => node.visit_with(visitor),
            TypePack::Variadic(node) => node.visit_with(visitor),
            TypePack::Generic(node) => node.visit_with(visitor),
        }
    }
}

impl VisitWith for TypePackList {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_type_pack_list(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.parens.open);
        walk_list(&self.types, visitor);
        visitor.visit_token(&self.parens.close);
    }
}

impl VisitWith for VariadicTypePack {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_variadic_type_pack(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.dots);
        self.ty.visit_with(visitor);
    }
}

impl VisitWith for GenericTypePack {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_generic_type_pack(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.name);
        visitor.visit_token(&self.dots);
    }
}

impl VisitWith for GenericDecl {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_generic_decl(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_token(&self.angles.open);
        walk_list(&self.params, visitor);
        visitor.visit_token(&self.angles.close);
    }
}

impl VisitWith for GenericParam {
    fn visit_with<V: Visit>(&self, visitor: &mut V) {
        visitor.visit_generic_param(self);
    }
    fn visit_children_with<V: Visit>(&self, visitor: &mut V) {
        match &self.info {
            GenericParamInfo::Name(token) => visitor.visit_token(token),
            GenericParamInfo::Pack { name, dots } => {
                visitor.visit_token(name);
                visitor.visit_token(dots);
            }
        }
        if let Some(default) = &self.default {
            visitor.visit_token(&default.equal);
            default.value.visit_with(visitor);
        }
    }
}
