//! Tokenizer for RBS source.

use crate::errors::FormatError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword. Keywords are recognized by the parser in context.
    Word(String),
    ColonColon,
    Colon,
    Arrow,
    Pipe,
    Question,
    Bang,
    Equals,
    Star,
    StarStar,
    Comma,
    Dot,
    Lt,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    /// `%a{...}` body, without delimiters.
    Annotation(String),
    /// `# ...` body, without the `#`.
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the last character.
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
}

impl Token {
    /// `true` when `next` starts exactly where this token ends.
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.end == next.start
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn closing_delimiter(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        '<' => Some('>'),
        '|' => Some('|'),
        _ => None,
    }
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> FormatError {
        FormatError::new(self.line, self.column, message)
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let source: &'a str = self.source;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            self.bump();
        }
        &source[start..self.pos]
    }

    fn annotation(&mut self) -> Result<TokenKind, FormatError> {
        // `%` already consumed.
        if self.peek() != Some('a') {
            return Err(self.error("expected `a` after `%`"));
        }
        self.bump();
        let open = self
            .peek()
            .ok_or_else(|| self.error("unterminated annotation"))?;
        let close =
            closing_delimiter(open).ok_or_else(|| self.error("invalid annotation delimiter"))?;
        self.bump();
        let body = self.take_while(|c| c != close).to_string();
        if self.bump() != Some(close) {
            return Err(self.error("unterminated annotation"));
        }
        Ok(TokenKind::Annotation(body))
    }

    fn next_token(&mut self) -> Result<Option<Token>, FormatError> {
        self.take_while(char::is_whitespace);

        let (start, line, column) = (self.pos, self.line, self.column);
        let Some(c) = self.bump() else {
            return Ok(None);
        };

        let kind = match c {
            ':' if self.peek() == Some(':') => {
                self.bump();
                TokenKind::ColonColon
            }
            ':' => TokenKind::Colon,
            '-' if self.peek() == Some('>') => {
                self.bump();
                TokenKind::Arrow
            }
            '*' if self.peek() == Some('*') => {
                self.bump();
                TokenKind::StarStar
            }
            '*' => TokenKind::Star,
            '|' => TokenKind::Pipe,
            '?' => TokenKind::Question,
            '!' => TokenKind::Bang,
            '=' => TokenKind::Equals,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '<' => TokenKind::Lt,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '%' => self.annotation()?,
            '#' => TokenKind::Comment(self.take_while(|c| c != '\n').trim_end().to_string()),
            c if is_word_char(c) => {
                let rest = self.take_while(is_word_char);
                TokenKind::Word(format!("{c}{rest}"))
            }
            other => {
                return Err(FormatError::new(
                    line,
                    column,
                    format!("unexpected character `{other}`"),
                ));
            }
        };

        Ok(Some(Token {
            kind,
            start,
            end: self.pos,
            line,
            column,
            end_line: self.line,
        }))
    }
}

/// Splits `source` into tokens, comments included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, FormatError> {
    let mut lexer = Lexer {
        source,
        pos: 0,
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
