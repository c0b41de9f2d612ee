use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// The scanner is generated by `logos`. Keyword kinds carry no pattern of
/// their own: every word is matched by the identifier rule and then resolved
/// through [`KEYWORDS`], so one keyword may be reachable through several
/// spellings.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// A character the language does not recognise.
    Illegal,
    /// End of input.
    Eof,

    /// Identifier tokens such as `x`, `add_two` or `ফল`.
    #[regex(r"[A-Za-z_\x{0980}-\x{09FF}][A-Za-z0-9_\x{0980}-\x{09FF}]*", lookup_word)]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens. An unterminated string runs to the end of input.
    #[regex(r#""[^"]*"?"#, string_literal)]
    Str,

    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Eq,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`, `kaj`, `কাজ`
    Function,
    /// `let`, `dhori`, `ধরি`
    Let,
    /// `true`, `sotto`, `সত্য`
    True,
    /// `false`, `mittha`, `মিথ্যা`
    False,
    /// `if`, `jodi`, `যদি`
    If,
    /// `else`, `nahole`, `নাহলে`
    Else,
    /// `return`, `ferau`, `ফেরাও`
    Return,

    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        logos::Skip
    })]
    Whitespace,
}

/// Every accepted keyword spelling and the kind it resolves to.
///
/// Each keyword has an English spelling, a romanised Bengali spelling and a
/// Bengali spelling.
pub const KEYWORDS: &[(&str, TokenKind)] = &[("fn", TokenKind::Function),
                                              ("kaj", TokenKind::Function),
                                              ("কাজ", TokenKind::Function),
                                              ("let", TokenKind::Let),
                                              ("dhori", TokenKind::Let),
                                              ("ধরি", TokenKind::Let),
                                              ("true", TokenKind::True),
                                              ("sotto", TokenKind::True),
                                              ("সত্য", TokenKind::True),
                                              ("false", TokenKind::False),
                                              ("mittha", TokenKind::False),
                                              ("মিথ্যা", TokenKind::False),
                                              ("if", TokenKind::If),
                                              ("jodi", TokenKind::If),
                                              ("যদি", TokenKind::If),
                                              ("else", TokenKind::Else),
                                              ("nahole", TokenKind::Else),
                                              ("নাহলে", TokenKind::Else),
                                              ("return", TokenKind::Return),
                                              ("ferau", TokenKind::Return),
                                              ("ফেরাও", TokenKind::Return)];

/// Resolves a word against the keyword table.
///
/// Returns the keyword kind when `ident` is one of its spellings and
/// [`TokenKind::Ident`] otherwise.
///
/// # Example
/// ```
/// use vabna::interpreter::lexer::{TokenKind, lookup_ident};
///
/// assert_eq!(lookup_ident("fn"), TokenKind::Function);
/// assert_eq!(lookup_ident("kaj"), TokenKind::Function);
/// assert_eq!(lookup_ident("কাজ"), TokenKind::Function);
/// assert_eq!(lookup_ident("kajer"), TokenKind::Ident);
/// ```
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.iter()
            .find(|(spelling, _)| *spelling == ident)
            .map_or(TokenKind::Ident, |&(_, kind)| kind)
}

fn lookup_word(lex: &logos::Lexer<TokenKind>) -> TokenKind {
    lookup_ident(lex.slice())
}

fn string_literal(lex: &mut logos::Lexer<TokenKind>) -> TokenKind {
    lex.extras.line += lex.slice().matches('\n').count();
    TokenKind::Str
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::Bang => "!",
            Self::NotEq => "!=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Whitespace => "WHITESPACE",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A lexical token: its kind, the text it was read from and its line.
///
/// For string literals `literal` holds the text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What sort of token this is.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub literal: String,
    /// Line number in the source code.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

/// Produces tokens from source text one at a time.
///
/// Once the input is exhausted [`Scanner::next_token`] keeps returning
/// [`TokenKind::Eof`]. As an [`Iterator`] the scanner yields the `Eof` token
/// exactly once and then stops.
///
/// # Example
/// ```
/// use vabna::interpreter::lexer::{Scanner, TokenKind};
///
/// let kinds = Scanner::new("dhori x = 5;").map(|token| token.kind)
///                                         .collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Ident,
///             TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }

    /// Reads the next token.
    pub fn next_token(&mut self) -> Token {
        match self.lexer.next() {
            Some(Ok(TokenKind::Str)) => {
                let slice = self.lexer.slice();
                let line = self.lexer.extras.line - slice.matches('\n').count();
                let body = slice.strip_prefix('"').unwrap_or(slice);
                let body = body.strip_suffix('"').unwrap_or(body);
                Token::new(TokenKind::Str, body, line)
            },
            Some(Ok(kind)) => Token::new(kind, self.lexer.slice(), self.lexer.extras.line),
            Some(Err(())) => {
                Token::new(TokenKind::Illegal, self.lexer.slice(), self.lexer.extras.line)
            },
            None => Token::new(TokenKind::Eof, "", self.lexer.extras.line),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}
