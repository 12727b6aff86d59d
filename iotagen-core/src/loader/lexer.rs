//! Go lexer using the logos crate.
//!
//! Covers the token subset a `const`-block scan needs. Everything the
//! parser does not understand still lexes (operators fall into one
//! catch-all token) so unrelated syntax can be skipped by delimiter
//! matching. Go's automatic semicolon insertion is applied in a
//! normalization pass: a newline terminates a statement only after an
//! identifier, a literal, or a closing delimiter.

use logos::Logos;

/// Tokens for Go source files.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Keywords the parser dispatches on
    #[token("package")]
    Package,

    #[token("const")]
    Const,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Literals; the contents never matter, only statement boundaries do
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLit,

    #[regex(r"`[^`]*`")]
    RawStringLit,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    RuneLit,

    #[regex(r"[0-9][0-9a-zA-Z_.]*|\.[0-9][0-9a-zA-Z_.]*")]
    NumberLit,

    // Delimiters and punctuation
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Assign,

    #[token(".")]
    Dot,

    #[token("\n")]
    Newline,

    // Comments are filtered during normalization; a general comment
    // spanning lines counts as a newline for semicolon insertion
    #[regex(r"//[^\n]*", priority = 10, allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| lex.slice().contains('\n'), priority = 10)]
    BlockComment(bool),

    // Catch-all for every other operator; `=` stays its own token, so
    // compound assignments lex as two tokens, which only ever occurs in
    // regions the parser skips
    #[regex(r"[!#$%&*+\-/:<>?@^|~]+")]
    Op,
}

impl Token {
    /// Whether a newline after this token ends the statement.
    fn ends_statement(&self) -> bool {
        matches!(
            self,
            Token::Ident(_)
                | Token::StringLit
                | Token::RawStringLit
                | Token::RuneLit
                | Token::NumberLit
                | Token::RParen
                | Token::RBracket
                | Token::RBrace
        )
    }
}

/// Lexer error.
#[derive(Debug, Clone)]
pub struct LexError {
    pub span: std::ops::Range<usize>,
    pub message: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lex error at {:?}: {}", self.span, self.message)
    }
}

impl std::error::Error for LexError {}

/// Tokenize Go source, applying semicolon insertion.
///
/// Comments and newlines never reach the parser: a qualifying newline
/// (or a multi-line general comment) becomes a `Semicolon` token and
/// everything else is dropped.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => match token {
                Token::LineComment | Token::BlockComment(false) => {}
                Token::Newline | Token::BlockComment(true) => {
                    if tokens.last().is_some_and(Token::ends_statement) {
                        tokens.push(Token::Semicolon);
                    }
                }
                other => tokens.push(other),
            },
            Err(()) => {
                return Err(LexError {
                    span: lexer.span(),
                    message: format!(
                        "unexpected character: '{}'",
                        &source[lexer.span().start..lexer.span().end.min(source.len())]
                    ),
                });
            }
        }
    }

    Ok(tokens)
}
