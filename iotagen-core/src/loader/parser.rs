//! Go const-declaration parser over the lexer's token stream.
//!
//! Reads the `package` clause and every `const` declaration in a file,
//! wherever it appears (top level or inside a function body, matching
//! what a full AST inspection would visit). All other syntax is skipped
//! token by token; inside a declaration, unrecognized type and
//! initializer shapes are consumed by delimiter matching and recorded
//! as "not a bare identifier", which is all the extraction rules need.

use super::lexer::{tokenize, Token};
use crate::tree::{BindingSpec, ConstBlock, Expr};

/// One parsed Go source file.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Package name from the `package` clause
    pub package: String,
    /// Const declarations in source order
    pub blocks: Vec<ConstBlock>,
}

/// Parse error; always fatal to the load.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse one Go source file.
pub fn parse_file(source: &str) -> Result<ParsedFile, ParseError> {
    let tokens = tokenize(source).map_err(|e| ParseError::new(e.to_string()))?;
    Parser::new(tokens).parse()
}

/// Parser state.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_semicolons(&mut self) {
        while matches!(self.peek(), Some(Token::Semicolon)) {
            self.pos += 1;
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        match self.advance() {
            Some(Token::Ident(name)) => Ok(name),
            other => Err(ParseError::new(format!(
                "expected {}, found {:?}",
                what, other
            ))),
        }
    }

    fn parse(mut self) -> Result<ParsedFile, ParseError> {
        self.skip_semicolons();
        match self.advance() {
            Some(Token::Package) => {}
            other => {
                return Err(ParseError::new(format!(
                    "missing package clause, found {:?}",
                    other
                )))
            }
        }
        let package = self.expect_ident("package name")?;

        let mut blocks = Vec::new();
        while let Some(token) = self.peek() {
            if matches!(token, Token::Const) {
                self.pos += 1;
                blocks.push(self.parse_const_decl()?);
            } else {
                self.pos += 1;
            }
        }

        Ok(ParsedFile { package, blocks })
    }

    /// Parse a const declaration: grouped `const ( ... )` or a single
    /// spec line, which is a block of one.
    fn parse_const_decl(&mut self) -> Result<ConstBlock, ParseError> {
        if matches!(self.peek(), Some(Token::LParen)) {
            self.pos += 1;
            let mut specs = Vec::new();
            loop {
                self.skip_semicolons();
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        break;
                    }
                    None => return Err(ParseError::new("unterminated const block")),
                    _ => specs.push(self.parse_spec(true)?),
                }
            }
            Ok(ConstBlock { specs })
        } else {
            Ok(ConstBlock {
                specs: vec![self.parse_spec(false)?],
            })
        }
    }

    /// Parse one binding spec: `IdentList [Type] [= ExprList]`.
    fn parse_spec(&mut self, in_group: bool) -> Result<BindingSpec, ParseError> {
        let mut names = vec![self.expect_ident("constant name")?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.pos += 1;
            names.push(self.expect_ident("constant name")?);
        }

        let mut type_annotation = None;
        if !self.at_spec_end(in_group) && !matches!(self.peek(), Some(Token::Assign)) {
            // A type is present. Only a lone identifier counts as a bare
            // annotation; anything structured is consumed and dropped.
            if let Some(Token::Ident(name)) = self.peek() {
                let bare = match self.peek_ahead(1) {
                    None | Some(Token::Assign) | Some(Token::Semicolon) => true,
                    Some(Token::RParen) if in_group => true,
                    _ => false,
                };
                if bare {
                    type_annotation = Some(name.clone());
                    self.pos += 1;
                } else {
                    self.consume_balanced(in_group, true)?;
                }
            } else {
                self.consume_balanced(in_group, true)?;
            }
        }

        let mut initializers = Vec::new();
        if matches!(self.peek(), Some(Token::Assign)) {
            self.pos += 1;
            loop {
                initializers.push(self.parse_expr(in_group)?);
                if matches!(self.peek(), Some(Token::Comma)) {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }

        // Each spec ends at a semicolon, the closing paren, or EOF
        match self.peek() {
            None => {}
            Some(Token::Semicolon) => self.pos += 1,
            Some(Token::RParen) if in_group => {}
            other => {
                return Err(ParseError::new(format!(
                    "unexpected token after spec: {:?}",
                    other
                )))
            }
        }

        Ok(BindingSpec {
            names,
            type_annotation,
            initializers,
        })
    }

    /// Parse one initializer expression by consuming to the next
    /// delimiter. A single bare identifier is the only shape the
    /// matching rules distinguish.
    fn parse_expr(&mut self, in_group: bool) -> Result<Expr, ParseError> {
        let start = self.pos;
        self.consume_balanced(in_group, false)?;
        let consumed = &self.tokens[start..self.pos];
        match consumed {
            [Token::Ident(name)] => Ok(Expr::Ident(name.clone())),
            [] => Err(ParseError::new("expected expression")),
            _ => Ok(Expr::Other),
        }
    }

    /// Consume tokens up to (not including) the next delimiter at
    /// nesting depth zero: a comma or semicolon, the group's closing
    /// paren, or EOF. With `stop_at_assign`, `=` also ends the run
    /// (used for skipping type expressions).
    fn consume_balanced(&mut self, in_group: bool, stop_at_assign: bool) -> Result<(), ParseError> {
        let mut depth: usize = 0;
        while let Some(token) = self.peek() {
            match token {
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen if depth == 0 => {
                    if in_group {
                        return Ok(());
                    }
                    return Err(ParseError::new("unbalanced ')' in declaration"));
                }
                Token::RParen | Token::RBracket | Token::RBrace => {
                    depth = depth.saturating_sub(1)
                }
                Token::Comma | Token::Semicolon if depth == 0 => return Ok(()),
                Token::Assign if depth == 0 && stop_at_assign => return Ok(()),
                _ => {}
            }
            self.pos += 1;
        }
        Ok(())
    }

    fn at_spec_end(&self, in_group: bool) -> bool {
        match self.peek() {
            None | Some(Token::Semicolon) => true,
            Some(Token::RParen) => in_group,
            _ => false,
        }
    }
}
