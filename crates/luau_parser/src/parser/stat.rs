use super::Parser;
use crate::cst::*;
use crate::error::ParseError;
use luau_syntax::SyntaxKind;

/// Kinds that terminate the statement list of the enclosing block.
fn is_block_end(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::EOF
            | SyntaxKind::END_KW
            | SyntaxKind::ELSE_KW
            | SyntaxKind::ELSEIF_KW
            | SyntaxKind::UNTIL_KW
    )
}

fn is_compound_op(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PLUS_EQUAL
            | SyntaxKind::MINUS_EQUAL
            | SyntaxKind::STAR_EQUAL
            | SyntaxKind::SLASH_EQUAL
            | SyntaxKind::SLASH2_EQUAL
            | SyntaxKind::PERCENT_EQUAL
            | SyntaxKind::CARET_EQUAL
            | SyntaxKind::DOT2_EQUAL
    )
}

impl Parser {
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let mut stats = Vec::new();
        let mut last_stat = None;
        loop {
            let kind = self.current_kind();
            if is_block_end(kind) {
                break;
            }

            let is_last = matches!(kind, SyntaxKind::RETURN_KW | SyntaxKind::BREAK_KW)
                || (kind == SyntaxKind::CONTINUE_KW && self.continue_is_last_stat());
            if is_last {
                let node = self.parse_last_stat()?;
                let sep = self.eat(SyntaxKind::SEMI);
                last_stat = Some(Pair::new(node, sep));
                if !is_block_end(self.current_kind()) {
                    return Err(self.error_here(format!(
                        "no statements are allowed after the final statement of a block, found {}",
                        self.describe_current()
                    )));
                }
                break;
            }

            let stat = self.parse_stat()?;
            let sep = self.eat(SyntaxKind::SEMI);
            stats.push(Pair::new(stat, sep));
        }
        Ok(Block { stats, last_stat })
    }

    /// `continue` is only a keyword when it ends a block; followed by
    /// anything that would extend it into a var, call, or assignment it is a
    /// plain name beginning an expression statement.
    fn continue_is_last_stat(&self) -> bool {
        let next = self.peek_kind(1);
        !matches!(
            next,
            SyntaxKind::LPAREN
                | SyntaxKind::LCURLY
                | SyntaxKind::STRING
                | SyntaxKind::LONG_STRING
                | SyntaxKind::DOT
                | SyntaxKind::LSQUARE
                | SyntaxKind::COLON
                | SyntaxKind::COMMA
                | SyntaxKind::EQUAL
        ) && !is_compound_op(next)
    }

    fn parse_last_stat(&mut self) -> Result<LastStat, ParseError> {
        match self.current_kind() {
            SyntaxKind::RETURN_KW => {
                let return_token = self.bump();
                let exprs = if is_block_end(self.current_kind()) || self.at(SyntaxKind::SEMI) {
                    Punctuated::new()
                } else {
                    self.parse_expr_list()?
                };
                Ok(LastStat::Return(ReturnStat { return_token, exprs }))
            }
            SyntaxKind::BREAK_KW => Ok(LastStat::Break(self.bump())),
            SyntaxKind::CONTINUE_KW => Ok(LastStat::Continue(self.bump())),
            kind => unreachable!("parse_last_stat called on {kind:?}"),
        }
    }

    fn parse_stat(&mut self) -> Result<Stat, ParseError> {
        match self.current_kind() {
            SyntaxKind::DO_KW => self.parse_do_stat(),
            SyntaxKind::WHILE_KW => self.parse_while_stat(),
            SyntaxKind::REPEAT_KW => self.parse_repeat_stat(),
            SyntaxKind::IF_KW => self.parse_if_stat(),
            SyntaxKind::FOR_KW => self.parse_for_stat(),
            SyntaxKind::FUNCTION_KW => self.parse_function_stat(Vec::new()),
            SyntaxKind::LOCAL_KW => {
                if self.peek_kind(1) == SyntaxKind::FUNCTION_KW {
                    self.parse_local_function(Vec::new())
                } else {
                    self.parse_local_variable()
                }
            }
            SyntaxKind::AT => {
                let attributes = self.parse_attributes()?;
                match self.current_kind() {
                    SyntaxKind::FUNCTION_KW => self.parse_function_stat(attributes),
                    SyntaxKind::LOCAL_KW if self.peek_kind(1) == SyntaxKind::FUNCTION_KW => {
                        self.parse_local_function(attributes)
                    }
                    _ => Err(self.error_here(format!(
                        "expected a function declaration after the attributes, found {}",
                        self.describe_current()
                    ))),
                }
            }
            // `type` and `export type` declare aliases only when a name
            // follows; otherwise they begin an ordinary expression statement.
            SyntaxKind::TYPE_KW if self.peek_kind(1).is_name() => self.parse_type_alias(None),
            SyntaxKind::EXPORT_KW
                if self.peek_kind(1) == SyntaxKind::TYPE_KW && self.peek_kind(2).is_name() =>
            {
                let export_token = self.bump();
                self.parse_type_alias(Some(export_token))
            }
            kind if kind.is_name() || kind == SyntaxKind::LPAREN => self.parse_expression_stat(),
            _ => Err(self.error_here(format!(
                "expected a statement, found {}",
                self.describe_current()
            ))),
        }
    }

    //#region Simple statements

    fn parse_do_stat(&mut self) -> Result<Stat, ParseError> {
        let do_token = self.bump();
        let block = self.parse_block()?;
        let end_token = self.expect(SyntaxKind::END_KW, "`end` to close the `do` block")?;
        Ok(Stat::Do(DoStat {
            do_token,
            block,
            end_token,
        }))
    }

    fn parse_while_stat(&mut self) -> Result<Stat, ParseError> {
        let while_token = self.bump();
        let condition = self.parse_expr()?;
        let do_token = self.expect(SyntaxKind::DO_KW, "`do` after the loop condition")?;
        let block = self.parse_block()?;
        let end_token = self.expect(SyntaxKind::END_KW, "`end` to close the `while` loop")?;
        Ok(Stat::While(WhileStat {
            while_token,
            condition,
            do_token,
            block,
            end_token,
        }))
    }

    fn parse_repeat_stat(&mut self) -> Result<Stat, ParseError> {
        let repeat_token = self.bump();
        let block = self.parse_block()?;
        let until_token = self.expect(SyntaxKind::UNTIL_KW, "`until` to close the `repeat` loop")?;
        let condition = self.parse_expr()?;
        Ok(Stat::Repeat(RepeatStat {
            repeat_token,
            block,
            until_token,
            condition,
        }))
    }

    fn parse_if_stat(&mut self) -> Result<Stat, ParseError> {
        let if_token = self.bump();
        let condition = self.parse_expr()?;
        let then_token = self.expect(SyntaxKind::THEN_KW, "`then` after the condition")?;
        let block = self.parse_block()?;

        let mut elseifs = Vec::new();
        while self.at(SyntaxKind::ELSEIF_KW) {
            let elseif_token = self.bump();
            let condition = self.parse_expr()?;
            let then_token = self.expect(SyntaxKind::THEN_KW, "`then` after the condition")?;
            let block = self.parse_block()?;
            elseifs.push(ElseIfBranch {
                elseif_token,
                condition,
                then_token,
                block,
            });
        }

        let else_branch = if self.at(SyntaxKind::ELSE_KW) {
            let else_token = self.bump();
            let block = self.parse_block()?;
            Some(ElseBranch { else_token, block })
        } else {
            None
        };

        let end_token = self.expect(SyntaxKind::END_KW, "`end` to close the `if` statement")?;
        Ok(Stat::If(IfStat {
            if_token,
            condition,
            then_token,
            block,
            elseifs,
            else_branch,
            end_token,
        }))
    }
    //#endregion

    //#region For loops

    fn parse_for_stat(&mut self) -> Result<Stat, ParseError> {
        let for_token = self.bump();
        let first = self.parse_binding()?;

        if self.at(SyntaxKind::EQUAL) {
            let equal = self.bump();
            let start = self.parse_expr()?;
            let first_comma = self.expect(SyntaxKind::COMMA, "`,` after the loop start value")?;
            let limit = self.parse_expr()?;
            let step = match self.eat(SyntaxKind::COMMA) {
                Some(comma) => Some(ForStep {
                    comma,
                    expr: self.parse_expr()?,
                }),
                None => None,
            };
            let do_token = self.expect(SyntaxKind::DO_KW, "`do` after the loop bounds")?;
            let block = self.parse_block()?;
            let end_token = self.expect(SyntaxKind::END_KW, "`end` to close the `for` loop")?;
            return Ok(Stat::NumericFor(NumericFor {
                for_token,
                binding: first,
                equal,
                start,
                first_comma,
                limit,
                step,
                do_token,
                block,
                end_token,
            }));
        }

        let mut bindings = Punctuated::new();
        let mut current = first;
        while self.at(SyntaxKind::COMMA) {
            let sep = self.bump();
            bindings.push(current, Some(sep));
            current = self.parse_binding()?;
        }
        bindings.push(current, None);

        let in_token = self.expect(SyntaxKind::IN_KW, "`in` after the loop bindings")?;
        let exprs = self.parse_expr_list()?;
        let do_token = self.expect(SyntaxKind::DO_KW, "`do` after the loop values")?;
        let block = self.parse_block()?;
        let end_token = self.expect(SyntaxKind::END_KW, "`end` to close the `for` loop")?;
        Ok(Stat::ForIn(ForIn {
            for_token,
            bindings,
            in_token,
            exprs,
            do_token,
            block,
            end_token,
        }))
    }
    //#endregion

    //#region Functions and locals

    fn parse_function_stat(&mut self, attributes: Vec<Attribute>) -> Result<Stat, ParseError> {
        let function_token = self.bump();
        let name = self.parse_function_name()?;
        let body = self.parse_function_body()?;
        Ok(Stat::Function(FunctionStat {
            attributes,
            function_token,
            name,
            body,
        }))
    }

    fn parse_function_name(&mut self) -> Result<FunctionName, ParseError> {
        let base = self.expect_name("a function name")?;
        let mut fields = Vec::new();
        while self.at(SyntaxKind::DOT) {
            let dot = self.bump();
            let name = self.expect_name("a name after `.`")?;
            fields.push(NameIndex { dot, name });
        }
        let method = match self.eat(SyntaxKind::COLON) {
            Some(colon) => Some(MethodName {
                colon,
                name: self.expect_name("a method name after `:`")?,
            }),
            None => None,
        };
        Ok(FunctionName {
            base,
            fields,
            method,
        })
    }

    fn parse_local_function(&mut self, attributes: Vec<Attribute>) -> Result<Stat, ParseError> {
        let local_token = self.bump();
        let function_token = self.bump();
        let name = self.expect_name("a function name")?;
        let body = self.parse_function_body()?;
        Ok(Stat::LocalFunction(LocalFunction {
            attributes,
            local_token,
            function_token,
            name,
            body,
        }))
    }

    fn parse_local_variable(&mut self) -> Result<Stat, ParseError> {
        let local_token = self.bump();

        let mut bindings = Punctuated::new();
        let mut current = self.parse_binding()?;
        while self.at(SyntaxKind::COMMA) {
            let sep = self.bump();
            bindings.push(current, Some(sep));
            current = self.parse_binding()?;
        }
        bindings.push(current, None);

        let assignment = match self.eat(SyntaxKind::EQUAL) {
            Some(equal) => Some(LocalAssignment {
                equal,
                exprs: self.parse_expr_list()?,
            }),
            None => None,
        };
        Ok(Stat::LocalVariable(LocalVariable {
            local_token,
            bindings,
            assignment,
        }))
    }

    pub(crate) fn parse_binding(&mut self) -> Result<Binding, ParseError> {
        let name = self.expect_name("a variable name")?;
        let annotation = match self.eat(SyntaxKind::COLON) {
            Some(colon) => Some(TypeAnnotation {
                colon,
                ty: self.parse_type()?,
            }),
            None => None,
        };
        Ok(Binding { name, annotation })
    }

    pub(crate) fn parse_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = Vec::new();
        while self.at(SyntaxKind::AT) {
            let at = self.bump();
            let name = self.expect_name("an attribute name")?;
            attributes.push(Attribute { at, name });
        }
        Ok(attributes)
    }

    fn parse_type_alias(&mut self, export_token: Option<luau_syntax::Token>) -> Result<Stat, ParseError> {
        let type_token = self.bump();
        let name = self.expect_name("a type alias name")?;
        let generics = if self.at(SyntaxKind::LANGLE) {
            Some(self.parse_generic_decl(true)?)
        } else {
            None
        };
        let equal = self.expect(SyntaxKind::EQUAL, "`=` after the type alias name")?;
        let ty = self.parse_type()?;
        Ok(Stat::TypeAlias(TypeAlias {
            export_token,
            type_token,
            name,
            generics,
            equal,
            ty,
        }))
    }
    //#endregion

    //#region Expression statements

    /// Assignment, compound assignment, or call. A comma-separated var list
    /// followed by `=` is an assignment; a single var followed by a compound
    /// operator is a compound assignment; otherwise the statement must be a
    /// single var whose final suffix is a call.
    fn parse_expression_stat(&mut self) -> Result<Stat, ParseError> {
        let first = self.parse_var()?;

        if is_compound_op(self.current_kind()) {
            self.check_assign_target(&first)?;
            let op = self.bump();
            let value = self.parse_expr()?;
            return Ok(Stat::CompoundAssign(CompoundAssign {
                target: first,
                op,
                value,
            }));
        }

        let mut targets = Punctuated::new();
        let mut current = first;
        while self.at(SyntaxKind::COMMA) {
            let sep = self.bump();
            targets.push(current, Some(sep));
            current = self.parse_var()?;
        }

        if self.at(SyntaxKind::EQUAL) {
            targets.push(current, None);
            for pair in targets.pairs() {
                self.check_assign_target(&pair.node)?;
            }
            let equal = self.bump();
            let values = self.parse_expr_list()?;
            return Ok(Stat::Assign(Assign {
                targets,
                equal,
                values,
            }));
        }

        if !targets.is_empty() {
            return Err(self.error_here(format!(
                "expected `=` after the assignment targets, found {}",
                self.describe_current()
            )));
        }
        if current.ends_in_call() {
            return Ok(Stat::Call(current));
        }
        Err(ParseError::new(
            current.span(),
            "incomplete statement: expected an assignment or a function call",
        ))
    }

    fn check_assign_target(&self, var: &Var) -> Result<(), ParseError> {
        if var.ends_in_call() {
            return Err(ParseError::new(var.span(), "cannot assign to a function call"));
        }
        if var.suffixes.is_empty() && matches!(var.root, VarRoot::Paren(_)) {
            return Err(ParseError::new(
                var.span(),
                "cannot assign to a parenthesized expression",
            ));
        }
        Ok(())
    }
    //#endregion
}
