use super::Parser;
use crate::cst::*;
use crate::error::ParseError;
use luau_syntax::SyntaxKind;

impl Parser {
    /// Parse a full type: a primary type with `?` postfixes, combined into
    /// flat `&` and `|` lists. `&` binds tighter than `|`, so `A | B & C`
    /// is a union of `A` and `B & C`. A single leading `|` or `&` is allowed
    /// and preserved.
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let leading = self.eat(SyntaxKind::PIPE);
        let first = self.parse_intersection_type(leading.is_none())?;
        if leading.is_none() && !self.at(SyntaxKind::PIPE) {
            return Ok(first);
        }

        let mut types = Punctuated::new();
        let mut current = first;
        while self.at(SyntaxKind::PIPE) {
            let sep = self.bump();
            types.push(current, Some(sep));
            current = self.parse_intersection_type(false)?;
        }
        types.push(current, None);
        Ok(Type::Union(UnionType { leading, types }))
    }

    fn parse_intersection_type(&mut self, allow_leading: bool) -> Result<Type, ParseError> {
        let leading = if allow_leading {
            self.eat(SyntaxKind::AMPER)
        } else {
            None
        };
        let first = self.parse_postfix_type()?;
        if leading.is_none() && !self.at(SyntaxKind::AMPER) {
            return Ok(first);
        }

        let mut types = Punctuated::new();
        let mut current = first;
        while self.at(SyntaxKind::AMPER) {
            let sep = self.bump();
            types.push(current, Some(sep));
            current = self.parse_postfix_type()?;
        }
        types.push(current, None);
        Ok(Type::Intersection(IntersectionType { leading, types }))
    }

    fn parse_postfix_type(&mut self) -> Result<Type, ParseError> {
        let mut ty = self.parse_primary_type()?;
        while self.at(SyntaxKind::QUESTION) {
            let question = self.bump();
            ty = Type::Optional(OptionalType {
                ty: Box::new(ty),
                question,
            });
        }
        Ok(ty)
    }

    fn parse_primary_type(&mut self) -> Result<Type, ParseError> {
        match self.current_kind() {
            SyntaxKind::NIL_KW => Ok(Type::Nil(self.bump())),
            SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => Ok(Type::Boolean(self.bump())),
            SyntaxKind::STRING => Ok(Type::String(self.bump())),
            // `typeof` only opens an expression capture when called; alone it
            // is an ordinary type name.
            SyntaxKind::TYPEOF_KW if self.peek_kind(1) == SyntaxKind::LPAREN => {
                self.parse_typeof_type()
            }
            SyntaxKind::LANGLE => {
                let generics = self.parse_generic_decl(false)?;
                if !self.at(SyntaxKind::LPAREN) {
                    return Err(self.error_here(format!(
                        "expected `(` after the generic parameters, found {}",
                        self.describe_current()
                    )));
                }
                match self.parse_paren_type_or_pack(false, Some(generics))? {
                    TypeOrPack::Type(ty) => Ok(ty),
                    TypeOrPack::Pack(_) => unreachable!("packs are rejected without `->`"),
                }
            }
            SyntaxKind::LPAREN => match self.parse_paren_type_or_pack(false, None)? {
                TypeOrPack::Type(ty) => Ok(ty),
                TypeOrPack::Pack(_) => unreachable!("packs are rejected when not allowed"),
            },
            SyntaxKind::LCURLY => self.parse_table_or_array_type(),
            kind if kind.is_name() => self.parse_type_reference(),
            _ => Err(self.error_here(format!(
                "expected a type, found {}",
                self.describe_current()
            ))),
        }
    }

    fn parse_typeof_type(&mut self) -> Result<Type, ParseError> {
        let typeof_token = self.bump();
        let open = self.bump();
        let expr = self.parse_expr()?;
        let close = self.expect(SyntaxKind::RPAREN, "`)` to close `typeof`")?;
        Ok(Type::Typeof(TypeofType {
            typeof_token,
            parens: Parens { open, close },
            expr: Box::new(expr),
        }))
    }

    fn parse_type_reference(&mut self) -> Result<Type, ParseError> {
        let first = self.bump();
        let (prefix, name) = if self.at(SyntaxKind::DOT) {
            let dot = self.bump();
            let name = self.expect_name("a type name after `.`")?;
            (Some(TypePrefix { name: first, dot }), name)
        } else {
            (None, first)
        };
        if self.at(SyntaxKind::DOT) {
            return Err(self.error_here("a type reference may only have a single module prefix"));
        }
        let generics = if self.at(SyntaxKind::LANGLE) {
            Some(self.parse_type_generics()?)
        } else {
            None
        };
        Ok(Type::Reference(TypeReference {
            prefix,
            name,
            generics,
        }))
    }

    fn parse_type_generics(&mut self) -> Result<TypeGenerics, ParseError> {
        let open = self.bump();
        let mut args = Punctuated::new();
        if !self.at(SyntaxKind::RANGLE) {
            loop {
                let arg = self.parse_type_or_pack()?;
                match self.eat(SyntaxKind::COMMA) {
                    Some(sep) => args.push(arg, Some(sep)),
                    None => {
                        args.push(arg, None);
                        break;
                    }
                }
            }
        }
        let close = self.expect(SyntaxKind::RANGLE, "`>` to close the type arguments")?;
        Ok(TypeGenerics {
            angles: Angles { open, close },
            args,
        })
    }

    /// A type or a type pack, in positions where both are allowed: generic
    /// arguments, return types, and pack defaults.
    pub(crate) fn parse_type_or_pack(&mut self) -> Result<TypeOrPack, ParseError> {
        match self.current_kind() {
            SyntaxKind::DOT3 => {
                let dots = self.bump();
                let ty = self.parse_type()?;
                Ok(TypeOrPack::Pack(TypePack::Variadic(VariadicTypePack {
                    dots,
                    ty: Box::new(ty),
                })))
            }
            kind if kind.is_name() && self.peek_kind(1) == SyntaxKind::DOT3 => {
                let name = self.bump();
                let dots = self.bump();
                Ok(TypeOrPack::Pack(TypePack::Generic(GenericTypePack {
                    name,
                    dots,
                })))
            }
            SyntaxKind::LPAREN => {
                // A parenthesized form is a pack when it holds zero or
                // several types (or a trailing pack); otherwise rewind and
                // let the type grammar consume it, so that postfix `?` and
                // `|`/`&` combinations still apply.
                let checkpoint = self.checkpoint();
                if let TypeOrPack::Pack(pack) = self.parse_paren_type_or_pack(true, None)? {
                    return Ok(TypeOrPack::Pack(pack));
                }
                self.rewind(checkpoint);
                Ok(TypeOrPack::Type(self.parse_type()?))
            }
            _ => Ok(TypeOrPack::Type(self.parse_type()?)),
        }
    }

    /// The return type after `->` or after the `:` of a function signature.
    pub(crate) fn parse_return_type(&mut self) -> Result<TypeOrPack, ParseError> {
        self.parse_type_or_pack()
    }

    /// Everything that can start with `(` in type position: a function type
    /// `(params) -> ret`, a parenthesized type `(T)`, or, when `allow_pack`
    /// holds, a type pack `(A, B)`. `generics` carries already-parsed generic
    /// parameters, which force the function type reading.
    fn parse_paren_type_or_pack(
        &mut self,
        allow_pack: bool,
        generics: Option<GenericDecl>,
    ) -> Result<TypeOrPack, ParseError> {
        let open = self.bump();
        let mut params: Punctuated<TypeParam> = Punctuated::new();
        if !self.at(SyntaxKind::RPAREN) {
            loop {
                let param = self.parse_type_param()?;
                let is_pack = matches!(param.ty, TypeOrPack::Pack(_));
                match self.eat(SyntaxKind::COMMA) {
                    Some(sep) => {
                        if is_pack {
                            return Err(ParseError::new(
                                param.span(),
                                "a type pack must be the last element of a type list",
                            ));
                        }
                        params.push(param, Some(sep));
                    }
                    None => {
                        params.push(param, None);
                        break;
                    }
                }
            }
        }
        let close = self.expect(SyntaxKind::RPAREN, "`)` to close the type list")?;
        let parens = Parens { open, close };

        if self.at(SyntaxKind::ARROW) {
            let arrow = self.bump();
            let ret = self.parse_return_type()?;
            return Ok(TypeOrPack::Type(Type::Function(FunctionType {
                generics,
                parens,
                params,
                arrow,
                ret: Box::new(ret),
            })));
        }
        if generics.is_some() {
            return Err(self.error_here(format!(
                "expected `->` after the generic function type parameters, found {}",
                self.describe_current()
            )));
        }
        if let Some(named) = params.nodes().find(|param| param.name.is_some()) {
            return Err(ParseError::new(
                named.span(),
                "expected `->` after the function type parameters",
            ));
        }

        let is_single_type = params.len() == 1
            && !params.has_trailing_sep()
            && matches!(params.first().unwrap().node.ty, TypeOrPack::Type(_));
        if is_single_type {
            let pair = params.into_pairs().pop().unwrap();
            let TypeOrPack::Type(ty) = pair.node.ty else {
                unreachable!("single element was checked to be a type");
            };
            return Ok(TypeOrPack::Type(Type::Paren(ParenType {
                parens,
                ty: Box::new(ty),
            })));
        }

        if !allow_pack {
            return Err(ParseError::new(
                parens.open.span().merge(parens.close.span()),
                "a type pack is not allowed in this position",
            ));
        }
        let types = params
            .into_pairs()
            .into_iter()
            .map(|pair| Pair::new(pair.node.ty, pair.sep))
            .collect();
        Ok(TypeOrPack::Pack(TypePack::List(TypePackList {
            parens,
            types,
        })))
    }

    /// One element of a parenthesized type list: `...T`, `T...`, `name: T`,
    /// or a plain type.
    fn parse_type_param(&mut self) -> Result<TypeParam, ParseError> {
        if self.at(SyntaxKind::DOT3) {
            let dots = self.bump();
            let ty = self.parse_type()?;
            return Ok(TypeParam {
                name: None,
                ty: TypeOrPack::Pack(TypePack::Variadic(VariadicTypePack {
                    dots,
                    ty: Box::new(ty),
                })),
            });
        }
        if self.at_name() && self.peek_kind(1) == SyntaxKind::DOT3 {
            let name = self.bump();
            let dots = self.bump();
            return Ok(TypeParam {
                name: None,
                ty: TypeOrPack::Pack(TypePack::Generic(GenericTypePack { name, dots })),
            });
        }
        if self.at_name() && self.peek_kind(1) == SyntaxKind::COLON {
            let name = self.bump();
            let colon = self.bump();
            let ty = self.parse_type()?;
            return Ok(TypeParam {
                name: Some(TypeParamName { name, colon }),
                ty: TypeOrPack::Type(ty),
            });
        }
        Ok(TypeParam {
            name: None,
            ty: TypeOrPack::Type(self.parse_type()?),
        })
    }

    //#region Table types

    fn parse_table_or_array_type(&mut self) -> Result<Type, ParseError> {
        let open = self.bump();
        if self.at(SyntaxKind::RCURLY) {
            let close = self.bump();
            return Ok(Type::Table(TableType {
                braces: Braces { open, close },
                fields: Punctuated::new(),
            }));
        }

        if !self.at_table_type_field_start() {
            let element = self.parse_type()?;
            let close = self.expect(SyntaxKind::RCURLY, "`}` to close the array type")?;
            return Ok(Type::Array(ArrayType {
                braces: Braces { open, close },
                element: Box::new(element),
            }));
        }

        let mut fields = Punctuated::new();
        loop {
            if self.at(SyntaxKind::RCURLY) {
                break;
            }
            let field = self.parse_table_type_field()?;
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
        let close = self.expect(SyntaxKind::RCURLY, "`}` to close the table type")?;
        Ok(Type::Table(TableType {
            braces: Braces { open, close },
            fields,
        }))
    }

    fn at_table_type_field_start(&self) -> bool {
        match self.current_kind() {
            SyntaxKind::LSQUARE => true,
            kind if kind.is_name() => {
                self.peek_kind(1) == SyntaxKind::COLON || self.at_access_modifier()
            }
            _ => false,
        }
    }

    /// `read` and `write` are plain names that act as access modifiers when
    /// a property or indexer follows them.
    fn at_access_modifier(&self) -> bool {
        self.at_name()
            && matches!(self.current().text(), "read" | "write")
            && (self.peek_kind(1) == SyntaxKind::LSQUARE
                || (self.peek_kind(1).is_name() && self.peek_kind(2) == SyntaxKind::COLON))
    }

    fn parse_table_type_field(&mut self) -> Result<TableTypeField, ParseError> {
        let access = if self.at_access_modifier() {
            Some(self.bump())
        } else {
            None
        };

        if self.at(SyntaxKind::LSQUARE) {
            let open = self.bump();
            // `["key"]: T` is a string property; any other bracketed key is
            // an indexer type.
            if self.at(SyntaxKind::STRING) && self.peek_kind(1) == SyntaxKind::RSQUARE {
                let key = self.bump();
                let close = self.bump();
                let colon = self.expect(SyntaxKind::COLON, "`:` after the table type key")?;
                let ty = self.parse_type()?;
                return Ok(TableTypeField::StringProp(StringProp {
                    access,
                    bracks: Bracks { open, close },
                    key,
                    colon,
                    ty,
                }));
            }
            let key = self.parse_type()?;
            let close = self.expect(SyntaxKind::RSQUARE, "`]` to close the indexer key")?;
            let colon = self.expect(SyntaxKind::COLON, "`:` after the indexer key")?;
            let ty = self.parse_type()?;
            return Ok(TableTypeField::Indexer(Indexer {
                access,
                bracks: Bracks { open, close },
                key: Box::new(key),
                colon,
                ty,
            }));
        }

        let name = self.expect_name("a property name")?;
        let colon = self.expect(SyntaxKind::COLON, "`:` after the property name")?;
        let ty = self.parse_type()?;
        Ok(TableTypeField::NameProp(NameProp {
            access,
            name,
            colon,
            ty,
        }))
    }
    //#endregion

    //#region Generic declarations

    /// `<T, U..., V = string>`. Defaults are only permitted in type alias
    /// declarations; function definitions declare generics without them.
    pub(crate) fn parse_generic_decl(
        &mut self,
        defaults_allowed: bool,
    ) -> Result<GenericDecl, ParseError> {
        let open = self.bump();
        let mut params = Punctuated::new();
        let mut seen_pack = false;
        let mut seen_default = false;
        loop {
            let name = self.expect_name("a generic type parameter name")?;
            let info = if self.at(SyntaxKind::DOT3) {
                seen_pack = true;
                GenericParamInfo::Pack {
                    name,
                    dots: self.bump(),
                }
            } else {
                if seen_pack {
                    return Err(ParseError::new(
                        name.span(),
                        "generic type parameters must come before generic type packs",
                    ));
                }
                GenericParamInfo::Name(name)
            };

            let default = if self.at(SyntaxKind::EQUAL) {
                if !defaults_allowed {
                    return Err(self.error_here(
                        "generic parameter defaults are only allowed in type alias declarations",
                    ));
                }
                let equal = self.bump();
                let value = match &info {
                    GenericParamInfo::Name(_) => TypeOrPack::Type(self.parse_type()?),
                    GenericParamInfo::Pack { .. } => self.parse_type_or_pack()?,
                };
                seen_default = true;
                Some(GenericDefault { equal, value })
            } else {
                if seen_default {
                    let span = match &info {
                        GenericParamInfo::Name(token) => token.span(),
                        GenericParamInfo::Pack { name, dots } => name.span().merge(dots.span()),
                    };
                    return Err(ParseError::new(
                        span,
                        "generic parameters after a defaulted parameter must also have defaults",
                    ));
                }
                None
            };

            let param = GenericParam { info, default };
            match self.eat(SyntaxKind::COMMA) {
                Some(sep) => params.push(param, Some(sep)),
                None => {
                    params.push(param, None);
                    break;
                }
            }
        }
        let close = self.expect(SyntaxKind::RANGLE, "`>` to close the generic parameters")?;
        Ok(GenericDecl {
            angles: Angles { open, close },
            params,
        })
    }
    //#endregion
}
