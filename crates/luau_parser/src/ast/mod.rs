//! The lossy AST view: a normalized tree that discards trivia, delimiters,
//! and separator tokens while keeping all semantic structure. Produced from a
//! CST by [`lower`]; the types serialize with a `kind` tag so downstream
//! tools can snapshot and diff them.

mod lower;

pub use lower::lower;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub stats: Vec<Stat>,
    pub last_stat: Option<LastStat>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Stat {
    Assign {
        targets: Vec<Var>,
        values: Vec<Expr>,
    },
    CompoundAssign {
        target: Var,
        op: CompoundOp,
        value: Expr,
    },
    Call {
        var: Var,
    },
    Do {
        body: Block,
    },
    While {
        condition: Expr,
        body: Block,
    },
    Repeat {
        body: Block,
        condition: Expr,
    },
    If {
        branches: Vec<IfBranch>,
        else_body: Option<Block>,
    },
    NumericFor {
        binding: Binding,
        start: Expr,
        limit: Expr,
        step: Option<Expr>,
        body: Block,
    },
    ForIn {
        bindings: Vec<Binding>,
        exprs: Vec<Expr>,
        body: Block,
    },
    Function {
        attributes: Vec<String>,
        name: FunctionName,
        body: FunctionBody,
    },
    LocalFunction {
        attributes: Vec<String>,
        name: String,
        body: FunctionBody,
    },
    LocalVariable {
        bindings: Vec<Binding>,
        exprs: Vec<Expr>,
    },
    Type {
        export: bool,
        name: String,
        generics: Vec<GenericParam>,
        value: Type,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LastStat {
    Return { exprs: Vec<Expr> },
    Break,
    Continue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfBranch {
    pub condition: Expr,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionName {
    pub base: String,
    pub fields: Vec<String>,
    pub method: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionBody {
    pub generics: Vec<GenericParam>,
    pub params: Vec<Binding>,
    pub varargs: Option<Varargs>,
    pub ret: Option<TypeOrPack>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Varargs {
    #[serde(rename = "type")]
    pub ty: Option<TypeOrPack>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericParam {
    pub name: String,
    pub pack: bool,
    pub default: Option<TypeOrPack>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Expr {
    Nil,
    Boolean {
        value: bool,
    },
    Number {
        value: String,
    },
    String {
        value: String,
    },
    Varargs,
    Istring {
        value: Vec<IstringPart>,
    },
    Table {
        table: Vec<TableField>,
    },
    Function {
        attributes: Vec<String>,
        body: Box<FunctionBody>,
    },
    IfElse {
        branches: Vec<IfElseBranch>,
        else_body: Box<Expr>,
    },
    Var {
        var: Box<Var>,
    },
    Assertion {
        expr: Box<Expr>,
        #[serde(rename = "type")]
        ty: Type,
    },
    Unary {
        operator: UnOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: BinOp,
        right: Box<Expr>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfElseBranch {
    pub condition: Expr,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IstringPart {
    /// A raw text segment, delimiters included.
    Text { text: String },
    Expr { expr: Expr },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Var {
    pub root: VarRoot,
    pub suffixes: Vec<VarSuffix>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VarRoot {
    Name { name: String },
    Paren { expr: Box<Expr> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VarSuffix {
    NameIndex {
        name: String,
    },
    ExprIndex {
        expr: Expr,
    },
    Call {
        method: Option<String>,
        arg: FunctionArg,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FunctionArg {
    Pack { exprs: Vec<Expr> },
    Table { table: Vec<TableField> },
    String { value: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TableField {
    NameKey { name: String, value: Expr },
    ExprKey { key: Expr, value: Expr },
    NoKey { value: Expr },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Type {
    Nil,
    Boolean {
        value: bool,
    },
    String {
        value: String,
    },
    Reference {
        prefix: Option<String>,
        name: String,
        generics: Vec<TypeOrPack>,
    },
    Typeof {
        expr: Box<Expr>,
    },
    Array {
        #[serde(rename = "type")]
        ty: Box<Type>,
    },
    Table {
        fields: Vec<TableTypeField>,
    },
    Function {
        generics: Vec<GenericParam>,
        params: Vec<Type>,
        varargs: Option<Box<TypePack>>,
        ret: Option<Box<TypeOrPack>>,
    },
    Paren {
        #[serde(rename = "type")]
        ty: Box<Type>,
    },
    Optional {
        #[serde(rename = "type")]
        ty: Box<Type>,
    },
    Union {
        types: Vec<Type>,
    },
    Intersection {
        types: Vec<Type>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypePack {
    Variadic {
        #[serde(rename = "type")]
        ty: Box<Type>,
    },
    Generic {
        name: String,
    },
    List {
        types: Vec<Type>,
        tail: Option<Box<TypePack>>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeOrPack {
    Type(Type),
    Pack(TypePack),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TableTypeField {
    NameProp {
        access: Option<Access>,
        name: String,
        #[serde(rename = "type")]
        ty: Type,
    },
    StringProp {
        access: Option<Access>,
        key: String,
        #[serde(rename = "type")]
        ty: Type,
    },
    Indexer {
        access: Option<Access>,
        key: Type,
        #[serde(rename = "type")]
        ty: Type,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "not")]
    Not,
    #[serde(rename = "#")]
    Len,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "//")]
    FloorDiv,
    #[serde(rename = "%")]
    Mod,
    #[serde(rename = "^")]
    Pow,
    #[serde(rename = "..")]
    Concat,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "~=")]
    Ne,
    #[serde(rename = "and")]
    And,
    #[serde(rename = "or")]
    Or,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundOp {
    #[serde(rename = "+=")]
    Add,
    #[serde(rename = "-=")]
    Sub,
    #[serde(rename = "*=")]
    Mul,
    #[serde(rename = "/=")]
    Div,
    #[serde(rename = "//=")]
    FloorDiv,
    #[serde(rename = "%=")]
    Mod,
    #[serde(rename = "^=")]
    Pow,
    #[serde(rename = "..=")]
    Concat,
}
