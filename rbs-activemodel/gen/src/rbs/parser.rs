//! Recursive-descent parser producing [`Signature`] trees.

use tracing::trace;

use super::ast::{
    AttributeKind, BaseType, ClassType, Declaration, DeclarationKind, Member, MemberKind,
    MethodDef, MethodType, Param, ParamKind, Signature, Type, TypeName,
};
use super::lexer::{Token, TokenKind, tokenize};
use crate::errors::FormatError;

/// Parses RBS source into a [`Signature`].
///
/// ## Errors
///
/// Returns a [`FormatError`] pointing at the first token that does not fit
/// the grammar.
pub fn parse_signature(source: &str) -> Result<Signature, FormatError> {
    let tokens = tokenize(source)?;
    trace!(tokens = tokens.len(), "tokenized signature");
    Parser::new(tokens).signature()
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Word(word) => format!("`{word}`"),
        TokenKind::ColonColon => "`::`".to_string(),
        TokenKind::Colon => "`:`".to_string(),
        TokenKind::Arrow => "`->`".to_string(),
        TokenKind::Pipe => "`|`".to_string(),
        TokenKind::Question => "`?`".to_string(),
        TokenKind::Bang => "`!`".to_string(),
        TokenKind::Equals => "`=`".to_string(),
        TokenKind::Star => "`*`".to_string(),
        TokenKind::StarStar => "`**`".to_string(),
        TokenKind::Comma => "`,`".to_string(),
        TokenKind::Dot => "`.`".to_string(),
        TokenKind::Lt => "`<`".to_string(),
        TokenKind::LParen => "`(`".to_string(),
        TokenKind::RParen => "`)`".to_string(),
        TokenKind::LBracket => "`[`".to_string(),
        TokenKind::RBracket => "`]`".to_string(),
        TokenKind::LBrace => "`{`".to_string(),
        TokenKind::RBrace => "`}`".to_string(),
        TokenKind::Annotation(_) => "annotation".to_string(),
        TokenKind::Comment(_) => "comment".to_string(),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Last line of the most recently consumed token.
    last_line: usize,
    /// Position of the first comment stepped over inside a member.
    skipped_comment: Option<(usize, usize)>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            last_line: 0,
            skipped_comment: None,
        }
    }

    // ------------------------------------------------------------------
    // Token access. `peek*` look past comments without consuming them so
    // that member boundaries can still collect them.
    // ------------------------------------------------------------------

    fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !matches!(t.kind, TokenKind::Comment(_)))
    }

    fn peek(&self) -> Option<&Token> {
        self.significant().next()
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn peek_nth_kind(&self, n: usize) -> Option<&TokenKind> {
        self.significant().nth(n).map(|t| &t.kind)
    }

    fn peek_is(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn peek_word(&self) -> Option<&str> {
        match self.peek_kind() {
            Some(TokenKind::Word(word)) => Some(word),
            _ => None,
        }
    }

    fn at_word(&self, expected: &str) -> bool {
        self.peek_word() == Some(expected)
    }

    fn advance(&mut self) -> Option<Token> {
        while let Some(Token {
            kind: TokenKind::Comment(_),
            line,
            column,
            ..
        }) = self.tokens.get(self.pos)
        {
            self.skipped_comment.get_or_insert((*line, *column));
            self.pos += 1;
        }
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        self.last_line = token.end_line;
        Some(token)
    }

    fn error_here(&self, expected: &str) -> FormatError {
        match self.peek() {
            Some(token) => FormatError::new(
                token.line,
                token.column,
                format!("expected {expected}, found {}", describe(&token.kind)),
            ),
            None => {
                let (line, column) = self
                    .tokens
                    .last()
                    .map(|t| (t.end_line, t.column + (t.end - t.start)))
                    .unwrap_or((1, 1));
                FormatError::new(line, column, format!("expected {expected}, found end of input"))
            }
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token, FormatError> {
        if self.peek_is(kind) {
            self.advance().ok_or_else(|| self.error_here(expected))
        } else {
            Err(self.error_here(expected))
        }
    }

    fn expect_word(&mut self, expected: &str) -> Result<String, FormatError> {
        match self.peek_kind() {
            Some(TokenKind::Word(_)) => match self.advance() {
                Some(Token {
                    kind: TokenKind::Word(word),
                    ..
                }) => Ok(word),
                _ => Err(self.error_here(expected)),
            },
            _ => Err(self.error_here(expected)),
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), FormatError> {
        if self.at_word(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("`{keyword}`")))
        }
    }

    /// Line of the next raw token, comments included.
    fn next_raw_line(&self) -> Option<usize> {
        self.tokens.get(self.pos).map(|t| t.line)
    }

    fn comments(&mut self) -> Vec<String> {
        let mut comments = Vec::new();
        while let Some(Token {
            kind: TokenKind::Comment(text),
            end_line,
            ..
        }) = self.tokens.get(self.pos)
        {
            comments.push(text.clone());
            self.last_line = *end_line;
            self.pos += 1;
        }
        comments
    }

    /// A comment on the same line as the last consumed token.
    fn line_comment(&mut self) -> Option<String> {
        match self.tokens.get(self.pos) {
            Some(Token {
                kind: TokenKind::Comment(text),
                line,
                ..
            }) if *line == self.last_line => {
                let text = text.clone();
                self.pos += 1;
                Some(text)
            }
            _ => None,
        }
    }

    /// Comments are kept only between members or at the end of a line.
    fn reject_skipped_comment(&mut self) -> Result<(), FormatError> {
        match self.skipped_comment.take() {
            Some((line, column)) => Err(FormatError::new(
                line,
                column,
                "comments are only supported on their own line or at the end of a line",
            )),
            None => Ok(()),
        }
    }

    fn annotations(&mut self) -> Vec<String> {
        let mut annotations = Vec::new();
        while let Some(TokenKind::Annotation(text)) = self.peek_kind() {
            annotations.push(text.clone());
            self.advance();
        }
        annotations
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn signature(mut self) -> Result<Signature, FormatError> {
        let mut signature = Signature::default();
        loop {
            let comments = self.comments();
            let annotations = self.annotations();
            if self.peek().is_none() {
                if !annotations.is_empty() {
                    return Err(self.error_here("a declaration after annotation"));
                }
                signature.trailing_comments = comments;
                return Ok(signature);
            }
            let declaration = self.declaration(comments, annotations)?;
            signature.declarations.push(declaration);
        }
    }

    fn declaration(
        &mut self,
        comments: Vec<String>,
        annotations: Vec<String>,
    ) -> Result<Declaration, FormatError> {
        let (name, kind) = match self.peek_word() {
            Some("class") => {
                self.advance();
                let name = self.type_name()?;
                let superclass = if self.peek_is(&TokenKind::Lt) {
                    self.advance();
                    Some(self.class_type()?)
                } else {
                    None
                };
                (name, DeclarationKind::Class { superclass })
            }
            Some("module") => {
                self.advance();
                (self.type_name()?, DeclarationKind::Module)
            }
            _ => return Err(self.error_here("`class` or `module`")),
        };
        self.reject_skipped_comment()?;
        let header_comment = self.line_comment();
        let (members, trailing_comments) = self.members()?;
        self.expect_keyword("end")?;
        let end_comment = self.line_comment();

        Ok(Declaration {
            kind,
            name,
            comments,
            annotations,
            header_comment,
            members,
            trailing_comments,
            end_comment,
        })
    }

    fn members(&mut self) -> Result<(Vec<Member>, Vec<String>), FormatError> {
        let mut members = Vec::new();
        loop {
            let previous_line = self.last_line;
            let start_line = self.next_raw_line();
            let comments = self.comments();
            let annotations = self.annotations();

            if self.at_word("end") {
                if !annotations.is_empty() {
                    return Err(self.error_here("a member after annotation"));
                }
                return Ok((members, comments));
            }
            if self.peek().is_none() {
                return Err(self.error_here("`end`"));
            }

            let blank_before = !members.is_empty()
                && start_line.is_some_and(|line| line > previous_line + 1);
            let kind = self.member_kind()?;
            self.reject_skipped_comment()?;
            let line_comment = self.line_comment();
            members.push(Member {
                kind,
                comments,
                annotations,
                line_comment,
                blank_before,
            });
        }
    }

    fn member_kind(&mut self) -> Result<MemberKind, FormatError> {
        let keyword = self.peek_word().map(str::to_string);
        match keyword.as_deref() {
            Some("include") => {
                self.advance();
                Ok(MemberKind::Include(self.class_type()?))
            }
            Some("extend") => {
                self.advance();
                Ok(MemberKind::Extend(self.class_type()?))
            }
            Some(keyword @ ("attr_reader" | "attr_writer" | "attr_accessor")) => {
                let kind = match keyword {
                    "attr_reader" => AttributeKind::Reader,
                    "attr_writer" => AttributeKind::Writer,
                    _ => AttributeKind::Accessor,
                };
                self.advance();
                let name = self.method_name()?;
                self.expect(&TokenKind::Colon, "`:`")?;
                let ty = self.ty()?;
                Ok(MemberKind::Attribute { kind, name, ty })
            }
            Some("def") => {
                self.advance();
                Ok(MemberKind::Method(self.method_def()?))
            }
            Some("alias") => {
                self.advance();
                let new_name = self.method_name()?;
                let old_name = self.method_name()?;
                Ok(MemberKind::Alias { new_name, old_name })
            }
            Some("class" | "module") => Ok(MemberKind::Declaration(
                self.declaration(Vec::new(), Vec::new())?,
            )),
            _ => Err(self.error_here("a member declaration")),
        }
    }

    // ------------------------------------------------------------------
    // Methods
    // ------------------------------------------------------------------

    /// A method name, with an adjacent `?`, `!`, or `=` suffix folded in.
    fn method_name(&mut self) -> Result<String, FormatError> {
        let first = self
            .peek()
            .cloned()
            .ok_or_else(|| self.error_here("a method name"))?;
        let mut name = self.expect_word("a method name")?;
        if let Some(next) = self.tokens.get(self.pos)
            && first.is_adjacent_to(next)
        {
            let suffix = match next.kind {
                TokenKind::Question => Some('?'),
                TokenKind::Bang => Some('!'),
                TokenKind::Equals => Some('='),
                _ => None,
            };
            if let Some(suffix) = suffix {
                name.push(suffix);
                self.advance();
            }
        }
        Ok(name)
    }

    fn method_def(&mut self) -> Result<MethodDef, FormatError> {
        let singleton = self.at_word("self") && self.peek_nth_kind(1) == Some(&TokenKind::Dot);
        if singleton {
            self.advance();
            self.advance();
        }
        let name = self.method_name()?;
        self.expect(&TokenKind::Colon, "`:`")?;

        let mut overloads = vec![self.method_type()?];
        while self.peek_is(&TokenKind::Pipe) {
            self.advance();
            overloads.push(self.method_type()?);
        }

        Ok(MethodDef {
            name,
            singleton,
            overloads,
        })
    }

    fn method_type(&mut self) -> Result<MethodType, FormatError> {
        self.expect(&TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        if !self.peek_is(&TokenKind::RParen) {
            params.push(self.param()?);
            while self.peek_is(&TokenKind::Comma) {
                self.advance();
                params.push(self.param()?);
            }
        }
        self.expect(&TokenKind::RParen, "`,` or `)`")?;
        self.expect(&TokenKind::Arrow, "`->`")?;
        // A bare `|` after the return type starts the next overload.
        let return_type = self.optional_type()?;
        Ok(MethodType {
            params,
            return_type,
        })
    }

    fn keyword_ahead(&self, offset: usize) -> bool {
        matches!(self.peek_nth_kind(offset), Some(TokenKind::Word(_)))
            && self.peek_nth_kind(offset + 1) == Some(&TokenKind::Colon)
    }

    fn param(&mut self) -> Result<Param, FormatError> {
        let kind = match self.peek_kind() {
            Some(TokenKind::StarStar) => {
                self.advance();
                ParamKind::KeywordRest
            }
            Some(TokenKind::Star) => {
                self.advance();
                ParamKind::Rest
            }
            Some(TokenKind::Question) if self.keyword_ahead(1) => {
                self.advance();
                let key = self.expect_word("a keyword")?;
                self.advance();
                ParamKind::OptionalKeyword(key)
            }
            Some(TokenKind::Question) => {
                self.advance();
                ParamKind::Optional
            }
            Some(TokenKind::Word(_)) if self.keyword_ahead(0) => {
                let key = self.expect_word("a keyword")?;
                self.advance();
                ParamKind::RequiredKeyword(key)
            }
            _ => ParamKind::Required,
        };
        let ty = self.ty()?;
        let name = match self.peek_kind() {
            Some(TokenKind::Word(_)) => Some(self.expect_word("a parameter name")?),
            _ => None,
        };
        Ok(Param { kind, ty, name })
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    fn type_name(&mut self) -> Result<TypeName, FormatError> {
        let absolute = self.peek_is(&TokenKind::ColonColon);
        if absolute {
            self.advance();
        }
        let mut path = vec![self.expect_word("a constant name")?];
        while self.peek_is(&TokenKind::ColonColon) {
            self.advance();
            path.push(self.expect_word("a constant name")?);
        }
        Ok(TypeName { absolute, path })
    }

    fn type_args(&mut self) -> Result<Vec<Type>, FormatError> {
        let mut args = Vec::new();
        if self.peek_is(&TokenKind::LBracket) {
            self.advance();
            args.push(self.ty()?);
            while self.peek_is(&TokenKind::Comma) {
                self.advance();
                args.push(self.ty()?);
            }
            self.expect(&TokenKind::RBracket, "`,` or `]`")?;
        }
        Ok(args)
    }

    fn class_type(&mut self) -> Result<ClassType, FormatError> {
        let name = self.type_name()?;
        let args = self.type_args()?;
        Ok(ClassType { name, args })
    }

    /// Full type, unions included.
    fn ty(&mut self) -> Result<Type, FormatError> {
        let first = self.optional_type()?;
        if !self.peek_is(&TokenKind::Pipe) {
            return Ok(first);
        }
        let mut members = vec![first];
        while self.peek_is(&TokenKind::Pipe) {
            self.advance();
            members.push(self.optional_type()?);
        }
        Ok(Type::Union(members))
    }

    /// `T?`. An optional of an optional is the same type, so `(T?)?`
    /// collapses to `T?`.
    fn optional_type(&mut self) -> Result<Type, FormatError> {
        let primary = self.primary_type()?;
        if self.peek_is(&TokenKind::Question) {
            self.advance();
            return Ok(match primary {
                optional @ Type::Optional(_) => optional,
                other => Type::Optional(Box::new(other)),
            });
        }
        Ok(primary)
    }

    fn primary_type(&mut self) -> Result<Type, FormatError> {
        match self.peek_kind() {
            Some(TokenKind::LParen) => {
                self.advance();
                let inner = self.ty()?;
                self.expect(&TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            Some(TokenKind::Word(word)) if BaseType::from_keyword(word).is_some() => {
                let base = BaseType::from_keyword(word);
                self.advance();
                base.map(Type::Base)
                    .ok_or_else(|| self.error_here("a type"))
            }
            Some(TokenKind::Word(_) | TokenKind::ColonColon) => {
                let name = self.type_name()?;
                let is_alias = name
                    .path
                    .last()
                    .and_then(|segment| segment.chars().next())
                    .is_some_and(|c| c.is_ascii_lowercase());
                if is_alias {
                    Ok(Type::Alias(name))
                } else {
                    let args = self.type_args()?;
                    Ok(Type::Class(ClassType { name, args }))
                }
            }
            _ => Err(self.error_here("a type")),
        }
    }
}
