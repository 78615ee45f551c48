use crate::token::Location;
use crate::token::Token;
use crate::token::TokenKind;
use anyhow::Result;

pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 0,
            column: 0,
        }
    }
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }
    fn peek(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.source[self.current]
    }
    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.source[self.start..self.current]
            .iter()
            .collect::<String>();
        let column = self.column - (self.current - self.start);
        let location = Location::new(self.line, column);
        self.tokens.push(Token::new(kind, lexeme, location));
    }
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        self.add_token(TokenKind::Integer);
    }
    fn scan_token(&mut self, src: &str) -> Result<()> {
        let c = self.advance();
        match c {
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '*' => self.add_token(TokenKind::Star),
            '/' => self.add_token(TokenKind::Slash),
            '%' => self.add_token(TokenKind::Percent),
            '^' => self.add_token(TokenKind::Caret),
            '!' => self.add_token(TokenKind::Exclamation),
            '?' => self.add_token(TokenKind::Question),
            ':' => self.add_token(TokenKind::Colon),
            '(' => self.add_token(TokenKind::LParen),
            ')' => self.add_token(TokenKind::RParen),
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            s if s.is_whitespace() => (),
            s if s.is_ascii_digit() => self.number(),
            _ => {
                let location = Location::new(self.line, self.column - 1);
                let msg = format!("Scanning failed starting at: {c}");
                return Err(anyhow::anyhow!(Self::error(src, &location, &msg)));
            }
        }
        Ok(())
    }
    fn scan_tokens(&mut self, src: &str) -> Result<()> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(src)?;
        }
        self.start = self.current;
        self.add_token(TokenKind::Eof);
        Ok(())
    }
    /// Split `src` into tokens, ending with a [TokenKind::Eof] token.
    pub fn scan(src: &str) -> Result<Vec<Token>> {
        let mut scanner = Scanner::new(src);
        scanner.scan_tokens(src)?;
        Ok(scanner.tokens)
    }
    /// Format `msg` with the source line that `loc` points into.
    pub fn error(src: &str, loc: &Location, msg: &str) -> String {
        let lines = src.split('\n').collect::<Vec<&str>>();
        let n = loc.line();
        let line = lines.get(n).copied().unwrap_or("");
        let line_num_width = 4 + n.to_string().len();
        let err_indent = " ".repeat(loc.column() + line_num_width);
        format!("```\n{n}  | {line}\n{err_indent}^ {msg}\n```")
    }
}
