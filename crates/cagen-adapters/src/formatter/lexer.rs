//! Lexical scanner for generated Go source.
//!
//! Not a parser. It tokenizes just far enough to reject text gofmt would
//! reject on lexical grounds (unterminated literals and comments, unbalanced
//! brackets, a missing package clause) and to expose identifiers and
//! punctuation outside strings and comments to the import resolver.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Punct(char),
    /// Interpreted, raw or rune literal, with its quotes.
    Literal(String),
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offsets into the source.
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Token {
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

/// A lexical error at a 1-based line and byte column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.col, self.message)
    }
}

/// Multi-line spans (raw strings, block comments) whose interior lines must
/// not be touched by whitespace normalization.
#[derive(Debug, Default)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub verbatim_lines: Vec<(usize, usize)>,
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    fn col(&self) -> usize {
        self.pos - self.line_start + 1
    }

    fn error(&self, line: usize, col: usize, message: impl Into<String>) -> SyntaxError {
        SyntaxError {
            line,
            col,
            message: message.into(),
        }
    }
}

/// Tokenize `src`, checking literal termination and bracket balance.
pub fn scan(src: &str) -> Result<Scan, SyntaxError> {
    let mut cur = Cursor {
        src,
        pos: 0,
        line: 1,
        line_start: 0,
    };
    let mut out = Scan::default();
    let mut open: Vec<(char, usize, usize)> = Vec::new();

    while let Some(c) = cur.peek() {
        let (start, line, col) = (cur.pos, cur.line, cur.col());

        if c.is_whitespace() {
            cur.bump();
            continue;
        }

        if c == '/' && cur.peek_second() == Some('/') {
            while cur.peek().is_some_and(|c| c != '\n') {
                cur.bump();
            }
            continue;
        }

        if c == '/' && cur.peek_second() == Some('*') {
            cur.bump();
            cur.bump();
            loop {
                match cur.bump() {
                    Some('*') if cur.peek() == Some('/') => {
                        cur.bump();
                        break;
                    }
                    Some(_) => {}
                    None => return Err(cur.error(line, col, "comment not terminated")),
                }
            }
            if cur.line > line {
                out.verbatim_lines.push((line, cur.line));
            }
            continue;
        }

        let kind = match c {
            '"' | '\'' => {
                cur.bump();
                quoted(&mut cur, c, line, col)?;
                TokenKind::Literal(src[start..cur.pos].to_string())
            }
            '`' => {
                cur.bump();
                loop {
                    match cur.bump() {
                        Some('`') => break,
                        Some(_) => {}
                        None => {
                            return Err(cur.error(line, col, "raw string literal not terminated"));
                        }
                    }
                }
                if cur.line > line {
                    out.verbatim_lines.push((line, cur.line));
                }
                TokenKind::Literal(src[start..cur.pos].to_string())
            }
            c if c == '_' || c.is_alphabetic() => {
                while cur.peek().is_some_and(|c| c == '_' || c.is_alphanumeric()) {
                    cur.bump();
                }
                TokenKind::Ident(src[start..cur.pos].to_string())
            }
            c if c.is_ascii_digit() => {
                while cur
                    .peek()
                    .is_some_and(|c| c == '_' || c == '.' || c.is_ascii_alphanumeric())
                {
                    cur.bump();
                }
                TokenKind::Number
            }
            '(' | '[' | '{' => {
                cur.bump();
                open.push((c, line, col));
                TokenKind::Punct(c)
            }
            ')' | ']' | '}' => {
                cur.bump();
                match open.pop() {
                    Some((o, _, _)) if closer(o) == c => {}
                    Some((o, _, _)) => {
                        return Err(cur.error(
                            line,
                            col,
                            format!("expected '{}', found '{}'", closer(o), c),
                        ));
                    }
                    None => return Err(cur.error(line, col, format!("unexpected '{c}'"))),
                }
                TokenKind::Punct(c)
            }
            _ => {
                cur.bump();
                TokenKind::Punct(c)
            }
        };

        out.tokens.push(Token {
            kind,
            start,
            end: cur.pos,
            line,
        });
    }

    if let Some((o, _, _)) = open.pop() {
        return Err(cur.error(
            cur.line,
            cur.col(),
            format!("expected '{}', found 'EOF'", closer(o)),
        ));
    }

    check_package_clause(&out.tokens)?;
    Ok(out)
}

fn quoted(cur: &mut Cursor<'_>, quote: char, line: usize, col: usize) -> Result<(), SyntaxError> {
    let what = if quote == '"' { "string" } else { "rune" };
    loop {
        match cur.peek() {
            Some(c) if c == quote => {
                cur.bump();
                return Ok(());
            }
            Some('\\') => {
                cur.bump();
                if cur.peek().is_some_and(|c| c != '\n') {
                    cur.bump();
                }
            }
            Some('\n') | None => {
                return Err(cur.error(line, col, format!("{what} literal not terminated")));
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

fn closer(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

fn check_package_clause(tokens: &[Token]) -> Result<(), SyntaxError> {
    let found = |t: Option<&Token>| -> String {
        match t.map(|t| &t.kind) {
            Some(TokenKind::Ident(s)) => s.clone(),
            Some(TokenKind::Punct(c)) => c.to_string(),
            Some(TokenKind::Literal(s)) => s.clone(),
            Some(TokenKind::Number) => "number".into(),
            None => "EOF".into(),
        }
    };
    let at = |t: Option<&Token>| t.map_or((1, 1), |t| (t.line, 1));

    let first = tokens.first();
    if first.and_then(Token::ident) != Some("package") {
        let (line, col) = at(first);
        return Err(SyntaxError {
            line,
            col,
            message: format!("expected 'package', found '{}'", found(first)),
        });
    }
    let name = tokens.get(1);
    if name.and_then(Token::ident).is_none() {
        let (line, col) = at(name.or(first));
        return Err(SyntaxError {
            line,
            col,
            message: format!("expected 'IDENT', found '{}'", found(name)),
        });
    }
    Ok(())
}
