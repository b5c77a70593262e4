use super::Parser;
use crate::cst::*;
use crate::error::ParseError;
use luau_syntax::SyntaxKind;

/// Binding powers for the binary operators, as `(left, right)` pairs for
/// precedence climbing. Left-associative operators bind the right side one
/// level tighter; the right-associative `..` and `^` reuse their own level.
fn binary_binding(kind: SyntaxKind) -> Option<(u8, u8)> {
    let binding = match kind {
        SyntaxKind::OR_KW => (1, 2),
        SyntaxKind::AND_KW => (2, 3),
        SyntaxKind::LANGLE
        | SyntaxKind::LANGLE_EQUAL
        | SyntaxKind::RANGLE
        | SyntaxKind::RANGLE_EQUAL
        | SyntaxKind::EQUAL2
        | SyntaxKind::TILDE_EQUAL => (3, 4),
        SyntaxKind::DOT2 => (4, 4),
        SyntaxKind::PLUS | SyntaxKind::MINUS => (5, 6),
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::SLASH2 | SyntaxKind::PERCENT => (6, 7),
        SyntaxKind::CARET => (8, 8),
        _ => return None,
    };
    Some(binding)
}

/// The binding power of a unary operand: tighter than every binary operator
/// except `^`, so `-a * b` is `(-a) * b` but `-a ^ b` is `-(a ^ b)`.
const UNARY_OPERAND_PRECEDENCE: u8 = 8;

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_expr(0)
    }

    /// A comma-separated expression list with at least one element. Trailing
    /// commas are not permitted in expression lists.
    pub(crate) fn parse_expr_list(&mut self) -> Result<Punctuated<Expr>, ParseError> {
        let mut list = Punctuated::new();
        loop {
            let expr = self.parse_expr()?;
            match self.eat(SyntaxKind::COMMA) {
                Some(sep) => list.push(expr, Some(sep)),
                None => {
                    list.push(expr, None);
                    return Ok(list);
                }
            }
        }
    }

    fn parse_binary_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary_expr()?;
        loop {
            let Some((left, right)) = binary_binding(self.current_kind()) else {
                break;
            };
            if left < min_precedence {
                break;
            }
            let op = self.bump();
            let rhs = self.parse_binary_expr(right)?;
            lhs = Expr::Binary(BinaryExpr {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            });
        }
        Ok(lhs)
    }

    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            SyntaxKind::NOT_KW | SyntaxKind::HASH | SyntaxKind::MINUS | SyntaxKind::PLUS => {
                let op = self.bump();
                let expr = self.parse_binary_expr(UNARY_OPERAND_PRECEDENCE)?;
                Ok(Expr::Unary(UnaryExpr {
                    op,
                    expr: Box::new(expr),
                }))
            }
            _ => self.parse_simple_expr(),
        }
    }

    fn parse_simple_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = match self.current_kind() {
            SyntaxKind::NIL_KW => Expr::Nil(self.bump()),
            SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => Expr::Boolean(self.bump()),
            SyntaxKind::NUMBER => Expr::Number(self.bump()),
            SyntaxKind::STRING | SyntaxKind::LONG_STRING => Expr::String(self.bump()),
            SyntaxKind::DOT3 => Expr::Varargs(self.bump()),
            SyntaxKind::INTERP_STRING_SIMPLE => {
                Expr::InterpString(InterpString::Simple(self.bump()))
            }
            SyntaxKind::INTERP_STRING_BEGIN => {
                Expr::InterpString(self.parse_complex_interp_string()?)
            }
            SyntaxKind::LCURLY => Expr::Table(self.parse_table_constructor()?),
            SyntaxKind::FUNCTION_KW => {
                let function_token = self.bump();
                Expr::Function(FunctionExpr {
                    attributes: Vec::new(),
                    function_token,
                    body: self.parse_function_body()?,
                })
            }
            SyntaxKind::AT => {
                let attributes = self.parse_attributes()?;
                let function_token =
                    self.expect(SyntaxKind::FUNCTION_KW, "`function` after the attributes")?;
                Expr::Function(FunctionExpr {
                    attributes,
                    function_token,
                    body: self.parse_function_body()?,
                })
            }
            SyntaxKind::IF_KW => Expr::IfElse(self.parse_if_else_expr()?),
            SyntaxKind::LPAREN => Expr::Var(Box::new(self.parse_var()?)),
            kind if kind.is_name() => Expr::Var(Box::new(self.parse_var()?)),
            _ => {
                return Err(self.error_here(format!(
                    "expected an expression, found {}",
                    self.describe_current()
                )))
            }
        };

        // `::` assertions bind tighter than any operator, including unary.
        while self.at(SyntaxKind::DOUBLE_COLON) {
            let colons = self.bump();
            let ty = self.parse_type()?;
            expr = Expr::Assertion(Assertion {
                expr: Box::new(expr),
                colons,
                ty,
            });
        }
        Ok(expr)
    }

    fn parse_if_else_expr(&mut self) -> Result<IfElseExpr, ParseError> {
        let if_token = self.bump();
        let condition = self.parse_expr()?;
        let then_token = self.expect(SyntaxKind::THEN_KW, "`then` after the condition")?;
        let value = self.parse_expr()?;

        let mut elseifs = Vec::new();
        while self.at(SyntaxKind::ELSEIF_KW) {
            let elseif_token = self.bump();
            let condition = self.parse_expr()?;
            let then_token = self.expect(SyntaxKind::THEN_KW, "`then` after the condition")?;
            let value = self.parse_expr()?;
            elseifs.push(ElseIfExprBranch {
                elseif_token,
                condition,
                then_token,
                value,
            });
        }

        // Unlike the statement form, the expression form requires `else`.
        let else_token = self.expect(SyntaxKind::ELSE_KW, "`else` in the if expression")?;
        let else_value = self.parse_expr()?;
        Ok(IfElseExpr {
            if_token,
            condition: Box::new(condition),
            then_token,
            value: Box::new(value),
            elseifs,
            else_token,
            else_value: Box::new(else_value),
        })
    }

    fn parse_complex_interp_string(&mut self) -> Result<InterpString, ParseError> {
        let first = self.bump();
        let mut segments = Vec::new();
        loop {
            let expr = self.parse_expr()?;
            match self.current_kind() {
                SyntaxKind::INTERP_STRING_MID => {
                    segments.push(InterpSegment {
                        expr,
                        text: self.bump(),
                    });
                }
                SyntaxKind::INTERP_STRING_END => {
                    segments.push(InterpSegment {
                        expr,
                        text: self.bump(),
                    });
                    return Ok(InterpString::Complex(ComplexInterpString { first, segments }));
                }
                _ => {
                    return Err(self.error_here(format!(
                        "expected `}}` to close the interpolated expression, found {}",
                        self.describe_current()
                    )))
                }
            }
        }
    }

    //#region Vars and calls

    /// A root (name or parenthesized expression) followed by any number of
    /// index and call suffixes, consumed greedily.
    pub(crate) fn parse_var(&mut self) -> Result<Var, ParseError> {
        let root = match self.current_kind() {
            SyntaxKind::LPAREN => {
                let open = self.bump();
                let expr = self.parse_expr()?;
                let close = self.expect(
                    SyntaxKind::RPAREN,
                    "`)` to close the parenthesized expression",
                )?;
                VarRoot::Paren(ParenExpr {
                    parens: Parens { open, close },
                    expr: Box::new(expr),
                })
            }
            kind if kind.is_name() => VarRoot::Name(self.bump()),
            _ => {
                return Err(self.error_here(format!(
                    "expected an expression, found {}",
                    self.describe_current()
                )))
            }
        };

        let mut suffixes = Vec::new();
        loop {
            let suffix = match self.current_kind() {
                SyntaxKind::DOT => {
                    let dot = self.bump();
                    let name = self.expect_name("a name after `.`")?;
                    VarSuffix::NameIndex(NameIndex { dot, name })
                }
                SyntaxKind::LSQUARE => {
                    let open = self.bump();
                    let expr = self.parse_expr()?;
                    let close =
                        self.expect(SyntaxKind::RSQUARE, "`]` to close the index expression")?;
                    VarSuffix::ExprIndex(ExprIndex {
                        bracks: Bracks { open, close },
                        expr,
                    })
                }
                SyntaxKind::COLON => {
                    let colon = self.bump();
                    let name = self.expect_name("a method name after `:`")?;
                    let args = self.parse_call_args()?;
                    VarSuffix::Call(CallSuffix {
                        method: Some(MethodName { colon, name }),
                        args,
                    })
                }
                SyntaxKind::LPAREN
                | SyntaxKind::LCURLY
                | SyntaxKind::STRING
                | SyntaxKind::LONG_STRING => VarSuffix::Call(CallSuffix {
                    method: None,
                    args: self.parse_call_args()?,
                }),
                _ => break,
            };
            suffixes.push(suffix);
        }
        Ok(Var { root, suffixes })
    }

    fn parse_call_args(&mut self) -> Result<FunctionArgs, ParseError> {
        match self.current_kind() {
            SyntaxKind::LPAREN => {
                let open = self.bump();
                let exprs = if self.at(SyntaxKind::RPAREN) {
                    Punctuated::new()
                } else {
                    self.parse_expr_list()?
                };
                let close = self.expect(SyntaxKind::RPAREN, "`)` to close the argument list")?;
                Ok(FunctionArgs::Pack(PackArgs {
                    parens: Parens { open, close },
                    exprs,
                }))
            }
            SyntaxKind::LCURLY => Ok(FunctionArgs::Table(self.parse_table_constructor()?)),
            SyntaxKind::STRING | SyntaxKind::LONG_STRING => {
                Ok(FunctionArgs::String(self.bump()))
            }
            _ => Err(self.error_here(format!(
                "expected function call arguments, found {}",
                self.describe_current()
            ))),
        }
    }
    //#endregion

    //#region Tables

    pub(crate) fn parse_table_constructor(&mut self) -> Result<TableConstructor, ParseError> {
        let open = self.bump();
        let mut fields = Punctuated::new();
        loop {
            if self.at(SyntaxKind::RCURLY) {
                break;
            }
            let field = match self.current_kind() {
                SyntaxKind::LSQUARE => {
                    let bracket_open = self.bump();
                    let key = self.parse_expr()?;
                    let bracket_close =
                        self.expect(SyntaxKind::RSQUARE, "`]` to close the table key")?;
                    let equal = self.expect(SyntaxKind::EQUAL, "`=` after the table key")?;
                    let value = self.parse_expr()?;
                    TableField::ExprKey(ExprKeyField {
                        bracks: Bracks {
                            open: bracket_open,
                            close: bracket_close,
                        },
                        key,
                        equal,
                        value,
                    })
                }
                kind if kind.is_name() && self.peek_kind(1) == SyntaxKind::EQUAL => {
                    let name = self.bump();
                    let equal = self.bump();
                    let value = self.parse_expr()?;
                    TableField::NameKey(NameKeyField { name, equal, value })
                }
                _ => TableField::NoKey(self.parse_expr()?),
            };

            match self.current_kind() {
                SyntaxKind::COMMA | SyntaxKind::SEMI => {
                    let sep = self.bump();
                    fields.push(field, Some(sep));
                }
                _ => {
                    fields.push(field, None);
                    break;
                }
            }
        }
        let close = self.expect(SyntaxKind::RCURLY, "`}` to close the table constructor")?;
        Ok(TableConstructor {
            braces: Braces { open, close },
            fields,
        })
    }
    //#endregion

    //#region Function bodies

    pub(crate) fn parse_function_body(&mut self) -> Result<FunctionBody, ParseError> {
        let generics = if self.at(SyntaxKind::LANGLE) {
            Some(self.parse_generic_decl(false)?)
        } else {
            None
        };
        let open = self.expect(SyntaxKind::LPAREN, "`(` to begin the parameter list")?;

        let mut params = Punctuated::new();
        if !self.at(SyntaxKind::RPAREN) {
            loop {
                if self.at(SyntaxKind::DOT3) {
                    let dots = self.bump();
                    let annotation = match self.eat(SyntaxKind::COLON) {
                        Some(colon) => Some(VarargsAnnotation {
                            colon,
                            ty: self.parse_varargs_annotation()?,
                        }),
                        None => None,
                    };
                    if self.at(SyntaxKind::COMMA) {
                        return Err(self.error_here("`...` must be the last parameter"));
                    }
                    params.push(Param::Varargs(VarargsParam { dots, annotation }), None);
                    break;
                }
                let binding = self.parse_binding()?;
                match self.eat(SyntaxKind::COMMA) {
                    Some(sep) => params.push(Param::Binding(binding), Some(sep)),
                    None => {
                        params.push(Param::Binding(binding), None);
                        break;
                    }
                }
            }
        }
        let close = self.expect(SyntaxKind::RPAREN, "`)` to close the parameter list")?;

        let ret = match self.eat(SyntaxKind::COLON) {
            Some(colon) => Some(ReturnTypeAnnotation {
                colon,
                ty: self.parse_return_type()?,
            }),
            None => None,
        };

        let block = self.parse_block()?;
        let end_token = self.expect(SyntaxKind::END_KW, "`end` to close the function body")?;
        Ok(FunctionBody {
            generics,
            parens: Parens { open, close },
            params,
            ret,
            block,
            end_token,
        })
    }

    /// The annotation after `...:` is a plain type or a generic pack `T...`.
    fn parse_varargs_annotation(&mut self) -> Result<TypeOrPack, ParseError> {
        if self.at_name() && self.peek_kind(1) == SyntaxKind::DOT3 {
            let name = self.bump();
            let dots = self.bump();
            return Ok(TypeOrPack::Pack(TypePack::Generic(GenericTypePack {
                name,
                dots,
            })));
        }
        Ok(TypeOrPack::Type(self.parse_type()?))
    }
    //#endregion
}
