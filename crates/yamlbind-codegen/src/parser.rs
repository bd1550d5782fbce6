//! Recursive-descent parser for the C++ header subset.
//!
//! Builds the declaration model from `yamlbind-core`. The subset covers what
//! annotated serialization headers are made of: namespaces, records with
//! data members and nested declarations, enumerations, and attribute groups.
//! Member functions, `static`/`using`/`typedef`/`friend` members, base
//! clauses, and pointer/reference/operator declarators are recognized and
//! skipped. Everything else is a parse error; the first error aborts the
//! unit.

use yamlbind_core::{
    Attribute, Decl, DeclId, EnumDecl, FieldMember, Item, Member, NamespaceDecl, RecordDecl,
    RecordKeyword, TypeRef, TypeSeg, Unit, Visibility,
};

use crate::lexer::{self, Span, Token, TokenKind};

/// A spanned parse failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

/// Parse one input unit.
pub fn parse(source: &str) -> Result<Unit, ParseError> {
    let tokens = lexer::lex(source);
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
        next_id: 0,
    };
    parser.parse_unit()
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    next_id: u32,
}

impl Parser<'_> {
    fn current(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len()..self.source.len(), |token| {
                token.span.clone()
            })
    }

    fn current_text(&self) -> &str {
        self.tokens
            .get(self.pos)
            .map_or("", |token| lexer::token_text(self.source, token))
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn error(&self, what: &str) -> ParseError {
        let message = match self.current() {
            TokenKind::Eof => format!("expected {what}, found end of input"),
            _ => format!("expected {what}, found `{}`", self.current_text()),
        };
        ParseError {
            message,
            span: self.current_span(),
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(what))
        }
    }

    fn ident_text(&mut self, what: &str) -> Result<String, ParseError> {
        if self.at(TokenKind::Ident) {
            let text = self.current_text().to_string();
            self.bump();
            Ok(text)
        } else {
            Err(self.error(what))
        }
    }

    fn fresh_id(&mut self) -> DeclId {
        let id = DeclId(self.next_id);
        self.next_id += 1;
        id
    }

    // ---- units and namespaces ----

    fn parse_unit(&mut self) -> Result<Unit, ParseError> {
        let items = self.parse_items_until(None)?;
        Ok(Unit { items })
    }

    fn parse_items_until(&mut self, end: Option<TokenKind>) -> Result<Vec<Item>, ParseError> {
        let mut items = Vec::new();
        loop {
            if self.current() == end.unwrap_or(TokenKind::Eof) {
                break;
            }
            match self.current() {
                TokenKind::KwNamespace => {
                    items.push(Item::Namespace(self.parse_namespace()?));
                }
                TokenKind::KwStruct | TokenKind::KwClass => {
                    if let Some(decl) = self.parse_record()? {
                        items.push(Item::Decl(decl));
                    }
                }
                TokenKind::KwEnum => {
                    if let Some(decl) = self.parse_enum()? {
                        items.push(Item::Decl(decl));
                    }
                }
                TokenKind::Semi => self.bump(),
                _ => return Err(self.error("a declaration")),
            }
        }
        Ok(items)
    }

    fn parse_namespace(&mut self) -> Result<NamespaceDecl, ParseError> {
        self.bump(); // namespace

        // `namespace a::b` folds into nested declarations.
        let mut names: Vec<String> = Vec::new();
        if self.at(TokenKind::Ident) {
            names.push(self.ident_text("namespace name")?);
            while self.eat(TokenKind::PathSep) {
                names.push(self.ident_text("namespace name")?);
            }
        }

        self.expect(TokenKind::BraceOpen, "'{' after namespace name")?;
        let items = self.parse_items_until(Some(TokenKind::BraceClose))?;
        self.expect(TokenKind::BraceClose, "'}' closing namespace")?;

        if names.is_empty() {
            return Ok(NamespaceDecl { name: None, items });
        }

        let mut decl = NamespaceDecl {
            name: Some(names.pop().expect("nonempty names")),
            items,
        };
        while let Some(name) = names.pop() {
            decl = NamespaceDecl {
                name: Some(name),
                items: vec![Item::Namespace(decl)],
            };
        }
        Ok(decl)
    }

    // ---- records ----

    fn parse_record(&mut self) -> Result<Option<Decl>, ParseError> {
        let keyword = match self.current() {
            TokenKind::KwStruct => RecordKeyword::Struct,
            TokenKind::KwClass => RecordKeyword::Class,
            _ => return Err(self.error("`struct` or `class`")),
        };
        self.bump();

        let attrs = self.parse_attr_groups()?;
        let name = self.ident_text("record name")?;
        let id = self.fresh_id();

        // Forward declaration: nothing to serialize.
        if self.eat(TokenKind::Semi) {
            return Ok(None);
        }

        // Base clause, skipped.
        if self.eat(TokenKind::Colon) {
            while !self.at(TokenKind::BraceOpen) && !self.at(TokenKind::Eof) {
                self.bump();
            }
        }

        self.expect(TokenKind::BraceOpen, "'{' opening record body")?;
        let members = self.parse_members(keyword)?;
        self.expect(TokenKind::BraceClose, "'}' closing record body")?;
        self.expect(TokenKind::Semi, "';' after record body")?;

        Ok(Some(Decl::Record(RecordDecl {
            id,
            keyword,
            name,
            attrs,
            members,
        })))
    }

    fn parse_members(&mut self, keyword: RecordKeyword) -> Result<Vec<Member>, ParseError> {
        let mut members = Vec::new();
        let mut vis = keyword.default_visibility();

        loop {
            match self.current() {
                TokenKind::BraceClose => break,
                TokenKind::KwPublic => {
                    self.bump();
                    self.expect(TokenKind::Colon, "':' after access specifier")?;
                    vis = Visibility::Public;
                }
                TokenKind::KwProtected => {
                    self.bump();
                    self.expect(TokenKind::Colon, "':' after access specifier")?;
                    vis = Visibility::Protected;
                }
                TokenKind::KwPrivate => {
                    self.bump();
                    self.expect(TokenKind::Colon, "':' after access specifier")?;
                    vis = Visibility::Private;
                }
                TokenKind::KwStruct | TokenKind::KwClass => {
                    if let Some(decl) = self.parse_record()? {
                        members.push(Member::Nested(decl));
                    }
                }
                TokenKind::KwEnum => {
                    if let Some(decl) = self.parse_enum()? {
                        members.push(Member::Nested(decl));
                    }
                }
                TokenKind::KwStatic
                | TokenKind::KwUsing
                | TokenKind::KwTypedef
                | TokenKind::KwFriend => {
                    self.bump();
                    self.skip_to_semi()?;
                }
                TokenKind::Tilde => {
                    self.bump();
                    self.ident_text("destructor name")?;
                    self.skip_function()?;
                }
                TokenKind::Semi => self.bump(),
                TokenKind::Ident | TokenKind::PathSep => {
                    self.parse_field_or_function(&mut members, vis)?;
                }
                _ => return Err(self.error("a member declaration")),
            }
        }

        Ok(members)
    }

    /// One member statement starting with a type name: either a data member
    /// declarator list, a member function, or a constructor.
    fn parse_field_or_function(
        &mut self,
        members: &mut Vec<Member>,
        vis: Visibility,
    ) -> Result<(), ParseError> {
        let ty = self.parse_type_ref()?;

        // `Name(...)`: a constructor; the "type" was its name.
        if self.at(TokenKind::ParenOpen) {
            return self.skip_function();
        }

        // Pointer, reference, and operator declarators are not data members
        // in the serialization sense; skip the whole statement.
        if self.at(TokenKind::Op) {
            return self.skip_member_tail();
        }

        loop {
            let name = self.ident_text("member name")?;

            // `T name(...)`: a member function.
            if self.at(TokenKind::ParenOpen) {
                return self.skip_function();
            }

            let mut has_default = false;
            if self.eat(TokenKind::Equals) {
                self.skip_initializer(&[TokenKind::Comma, TokenKind::Semi])?;
                has_default = true;
            } else if self.at(TokenKind::BraceOpen) {
                self.skip_balanced(TokenKind::BraceOpen, TokenKind::BraceClose)?;
                has_default = true;
            }

            members.push(Member::Field(FieldMember {
                name,
                ty: ty.clone(),
                vis,
                has_default,
            }));

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::Semi, "';' after member declaration")
    }

    // ---- enumerations ----

    fn parse_enum(&mut self) -> Result<Option<Decl>, ParseError> {
        self.bump(); // enum
        let scoped = self.eat(TokenKind::KwClass) || self.eat(TokenKind::KwStruct);
        let attrs = self.parse_attr_groups()?;
        let name = self.ident_text("enumeration name")?;
        let id = self.fresh_id();

        // Underlying type, discarded.
        if self.eat(TokenKind::Colon) {
            self.parse_type_ref()?;
        }

        if self.eat(TokenKind::Semi) {
            return Ok(None);
        }

        self.expect(TokenKind::BraceOpen, "'{' opening enumerator list")?;

        let mut enumerators = Vec::new();
        loop {
            if self.at(TokenKind::BraceClose) {
                break;
            }
            enumerators.push(self.ident_text("enumerator name")?);
            if self.eat(TokenKind::Equals) {
                self.skip_initializer(&[TokenKind::Comma, TokenKind::BraceClose])?;
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::BraceClose, "'}' closing enumerator list")?;
        self.expect(TokenKind::Semi, "';' after enumeration body")?;

        Ok(Some(Decl::Enum(EnumDecl {
            id,
            name,
            scoped,
            attrs,
            enumerators,
        })))
    }

    // ---- attributes ----

    fn parse_attr_groups(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attrs = Vec::new();
        loop {
            match self.current() {
                TokenKind::AttrOpen => {
                    self.bump();
                    loop {
                        attrs.push(self.parse_attr()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::AttrClose, "']]' closing attribute group")?;
                }
                TokenKind::KwAttribute => {
                    self.bump();
                    self.expect(TokenKind::ParenOpen, "'((' after `__attribute__`")?;
                    self.expect(TokenKind::ParenOpen, "'((' after `__attribute__`")?;
                    loop {
                        attrs.push(self.parse_attr()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::ParenClose, "'))' closing `__attribute__`")?;
                    self.expect(TokenKind::ParenClose, "'))' closing `__attribute__`")?;
                }
                _ => break,
            }
        }
        Ok(attrs)
    }

    fn parse_attr(&mut self) -> Result<Attribute, ParseError> {
        let first = self.ident_text("attribute name")?;
        let (scope, name) = if self.eat(TokenKind::PathSep) {
            (Some(first), self.ident_text("attribute name")?)
        } else {
            (None, first)
        };

        let mut payload = None;
        if self.eat(TokenKind::ParenOpen) {
            if self.at(TokenKind::String) {
                let text = self.current_text();
                payload = Some(text[1..text.len() - 1].to_string());
                self.bump();
            }
            // Tolerate non-string arguments without interpreting them.
            self.skip_initializer(&[TokenKind::ParenClose])?;
            self.expect(TokenKind::ParenClose, "')' closing attribute arguments")?;
        }

        Ok(Attribute {
            scope,
            name,
            payload,
        })
    }

    // ---- types ----

    fn parse_type_ref(&mut self) -> Result<TypeRef, ParseError> {
        let absolute = self.eat(TokenKind::PathSep);
        let mut segments = Vec::new();
        loop {
            let name = self.ident_text("type name")?;
            let mut args = Vec::new();
            if self.eat(TokenKind::AngleOpen) {
                args.push(self.parse_type_ref()?);
                while self.eat(TokenKind::Comma) {
                    args.push(self.parse_type_ref()?);
                }
                self.expect(TokenKind::AngleClose, "'>' closing template arguments")?;
            }
            segments.push(TypeSeg { name, args });
            if !self.eat(TokenKind::PathSep) {
                break;
            }
        }
        Ok(TypeRef { absolute, segments })
    }

    // ---- skipping ----

    /// Consume an expression until one of `terminators` at bracket depth
    /// zero. The terminator itself is left in place.
    fn skip_initializer(&mut self, terminators: &[TokenKind]) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            let kind = self.current();
            if kind == TokenKind::Eof {
                return Err(self.error("the end of an initializer"));
            }
            if depth == 0 && terminators.contains(&kind) {
                return Ok(());
            }
            match kind {
                TokenKind::ParenOpen | TokenKind::BracketOpen | TokenKind::BraceOpen => depth += 1,
                TokenKind::ParenClose | TokenKind::BracketClose | TokenKind::BraceClose => {
                    if depth == 0 {
                        return Err(self.error("the end of an initializer"));
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Consume a balanced `open`...`close` region, starting at `open`.
    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> Result<(), ParseError> {
        self.expect(open, "an opening bracket")?;
        let mut depth = 1usize;
        while depth > 0 {
            let kind = self.current();
            if kind == TokenKind::Eof {
                return Err(self.error("a closing bracket"));
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
            }
            self.bump();
        }
        Ok(())
    }

    /// Skip the remainder of a member function, starting at its parameter
    /// list: parameters, cv-qualifiers, ctor initializers, `= default`, and
    /// either a `;` or a balanced body.
    fn skip_function(&mut self) -> Result<(), ParseError> {
        self.skip_balanced(TokenKind::ParenOpen, TokenKind::ParenClose)?;
        loop {
            match self.current() {
                TokenKind::Semi => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::BraceOpen => {
                    self.skip_balanced(TokenKind::BraceOpen, TokenKind::BraceClose)?;
                    self.eat(TokenKind::Semi);
                    return Ok(());
                }
                TokenKind::ParenOpen => {
                    self.skip_balanced(TokenKind::ParenOpen, TokenKind::ParenClose)?;
                }
                TokenKind::Eof => return Err(self.error("a member function body or ';'")),
                _ => self.bump(),
            }
        }
    }

    /// Skip the remainder of a member statement of unsupported shape:
    /// everything up to a `;` at depth zero or a balanced `{...}` body.
    fn skip_member_tail(&mut self) -> Result<(), ParseError> {
        loop {
            match self.current() {
                TokenKind::Semi => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::BraceOpen => {
                    self.skip_balanced(TokenKind::BraceOpen, TokenKind::BraceClose)?;
                    self.eat(TokenKind::Semi);
                    return Ok(());
                }
                TokenKind::ParenOpen => {
                    self.skip_balanced(TokenKind::ParenOpen, TokenKind::ParenClose)?;
                }
                TokenKind::Eof => return Err(self.error("';'")),
                _ => self.bump(),
            }
        }
    }

    /// Skip an uninteresting member statement up to and including its `;`.
    fn skip_to_semi(&mut self) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.current() {
                TokenKind::Semi if depth == 0 => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::ParenOpen | TokenKind::BracketOpen | TokenKind::BraceOpen => {
                    depth += 1;
                    self.bump();
                }
                TokenKind::ParenClose | TokenKind::BracketClose | TokenKind::BraceClose => {
                    depth = depth.saturating_sub(1);
                    self.bump();
                }
                TokenKind::Eof => return Err(self.error("';'")),
                _ => self.bump(),
            }
        }
    }
}
