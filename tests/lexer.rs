use pretty_assertions::assert_eq;
use vabna::interpreter::lexer::{KEYWORDS, Scanner, Token, TokenKind, lookup_ident};

fn scan(src: &str) -> Vec<Token> {
    Scanner::new(src).collect()
}

fn kinds(src: &str) -> Vec<TokenKind> {
    Scanner::new(src).map(|token| token.kind).collect()
}

#[test]
fn operators_and_delimiters() {
    use TokenKind::*;

    assert_eq!(kinds("=+(){}[],;:"),
               [Assign, Plus, LParen, RParen, LBrace, RBrace, LBracket, RBracket, Comma,
                Semicolon, Colon, Eof]);
    assert_eq!(kinds("!-/*5;\n5 < 10 > 5;"),
               [Bang, Minus, Slash, Asterisk, Int, Semicolon, Int, Lt, Int, Gt, Int, Semicolon,
                Eof]);
    assert_eq!(kinds("10 == 10; 10 != 9; a = !b"),
               [Int, Eq, Int, Semicolon, Int, NotEq, Int, Semicolon, Ident, Assign, Bang, Ident,
                Eof]);
}

#[test]
fn full_program_tokens() {
    let src = "let five = 5;
let add = fn(x, y) {
  x + y;
};
let result = add(five, 10);
if (5 < 10) { return true; } else { return false; }
\"foo bar\"
[1, 2];";

    let expected = [(TokenKind::Let, "let"),
                    (TokenKind::Ident, "five"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Int, "5"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Let, "let"),
                    (TokenKind::Ident, "add"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Function, "fn"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Ident, "x"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Ident, "y"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Ident, "x"),
                    (TokenKind::Plus, "+"),
                    (TokenKind::Ident, "y"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Let, "let"),
                    (TokenKind::Ident, "result"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Ident, "add"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Ident, "five"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Int, "10"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::If, "if"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Int, "5"),
                    (TokenKind::Lt, "<"),
                    (TokenKind::Int, "10"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Return, "return"),
                    (TokenKind::True, "true"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Else, "else"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Return, "return"),
                    (TokenKind::False, "false"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Str, "foo bar"),
                    (TokenKind::LBracket, "["),
                    (TokenKind::Int, "1"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Int, "2"),
                    (TokenKind::RBracket, "]"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Eof, "")];

    let actual = scan(src).into_iter()
                          .map(|token| (token.kind, token.literal))
                          .collect::<Vec<_>>();
    let expected = expected.iter()
                           .map(|&(kind, literal)| (kind, literal.to_string()))
                           .collect::<Vec<_>>();

    assert_eq!(actual, expected);
}

#[test]
fn every_keyword_has_three_spellings() {
    for kind in [TokenKind::Function,
                 TokenKind::Let,
                 TokenKind::True,
                 TokenKind::False,
                 TokenKind::If,
                 TokenKind::Else,
                 TokenKind::Return]
    {
        let spellings = KEYWORDS.iter().filter(|(_, k)| *k == kind).count();
        assert_eq!(spellings, 3, "{kind}");
    }

    for (spelling, kind) in KEYWORDS {
        assert_eq!(lookup_ident(spelling), *kind);
        assert_eq!(kinds(spelling), [*kind, TokenKind::Eof], "{spelling}");
    }
}

#[test]
fn keyword_tokens_keep_their_spelling() {
    let tokens = scan("dhori ধরি let");

    assert!(tokens[..3].iter().all(|token| token.kind == TokenKind::Let));
    assert_eq!(tokens[0].literal, "dhori");
    assert_eq!(tokens[1].literal, "ধরি");
    assert_eq!(tokens[2].literal, "let");
}

#[test]
fn identifiers() {
    let tokens = scan("foo_bar x1 _tmp ফলাফল মান২ letter iffy");

    assert!(tokens[..7].iter().all(|token| token.kind == TokenKind::Ident));
    assert_eq!(tokens.iter().map(|token| token.literal.as_str()).collect::<Vec<_>>(),
               ["foo_bar", "x1", "_tmp", "ফলাফল", "মান২", "letter", "iffy", ""]);
}

#[test]
fn integers_are_digit_runs() {
    assert_eq!(kinds("-5"), [TokenKind::Minus, TokenKind::Int, TokenKind::Eof]);
    assert_eq!(kinds("12ab"), [TokenKind::Int, TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(scan("007")[0].literal, "007");
}

#[test]
fn strings() {
    let tokens = scan("\"hello\" \"\" \"ভাষা\"");

    assert_eq!(tokens[0], Token::new(TokenKind::Str, "hello", 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Str, "", 1));
    assert_eq!(tokens[2], Token::new(TokenKind::Str, "ভাষা", 1));
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let tokens = scan("let s = \"abc; x");

    assert_eq!(tokens[3], Token::new(TokenKind::Str, "abc; x", 1));
    assert_eq!(tokens[4].kind, TokenKind::Eof);
    assert_eq!(tokens.len(), 5);

    let tokens = scan("\"abc");
    assert_eq!(tokens[0], Token::new(TokenKind::Str, "abc", 1));
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn illegal_characters_do_not_stop_scanning() {
    let tokens = scan("a @ b $");

    assert_eq!(tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
               [TokenKind::Ident,
                TokenKind::Illegal,
                TokenKind::Ident,
                TokenKind::Illegal,
                TokenKind::Eof]);
    assert_eq!(tokens[1].literal, "@");
}

#[test]
fn line_numbers() {
    let tokens = scan("a\nb\r\n\n\"x\ny\" c");

    assert_eq!(tokens.iter().map(|token| token.line).collect::<Vec<_>>(), [1, 2, 4, 5, 5]);
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("  \t\n ");

    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    assert_eq!(scanner.next_token().literal, "");
}
