//! Lexer for the C++ header subset.
//!
//! Produces span-based tokens without storing text - text is sliced from
//! source only when needed. Whitespace, comments, and preprocessor lines are
//! skipped in the lexer.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into single `Garbage`
//! tokens rather than one error per character, keeping the token stream
//! manageable for malformed input. The parser reports the first `Garbage`
//! token it actually reaches.

use logos::Logos;
use std::ops::Range;

pub type Span = Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
#[logos(skip(r"#[^\n]*", allow_greedy = true))]
pub enum TokenKind {
    #[token("namespace")]
    KwNamespace,
    #[token("struct")]
    KwStruct,
    #[token("class")]
    KwClass,
    #[token("enum")]
    KwEnum,
    #[token("public")]
    KwPublic,
    #[token("protected")]
    KwProtected,
    #[token("private")]
    KwPrivate,
    #[token("static")]
    KwStatic,
    #[token("using")]
    KwUsing,
    #[token("typedef")]
    KwTypedef,
    #[token("friend")]
    KwFriend,
    #[token("__attribute__")]
    KwAttribute,

    #[token("[[")]
    AttrOpen,
    #[token("]]")]
    AttrClose,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("<")]
    AngleOpen,
    #[token(">")]
    AngleClose,
    #[token("::")]
    PathSep,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token("~")]
    Tilde,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    #[regex(r"'([^'\\]|\\.)+'")]
    Char,
    #[regex(r"[0-9][0-9A-Za-z_'.]*")]
    Number,

    /// Operator characters that only occur inside skipped expressions.
    #[regex(r"[&|+*/%!^?.-]")]
    Op,

    /// Coalesced run of characters the lexer does not recognize.
    Garbage,

    /// Virtual end-of-input token.
    Eof,
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output to coalesce consecutive lexer errors into
/// single `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, start..end));
                }

                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
