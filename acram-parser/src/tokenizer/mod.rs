pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows the
/// parser to look at the raw token following a number without skipping whitespace.
pub fn tokenize_complete(input: &str) -> Box<[Token<'_>]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn definition_header() {
        compare_tokens(
            "f(x) = x",
            [
                (TokenKind::Name, "f"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Assign, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn numbers_and_operators() {
        compare_tokens(
            "3,25*x2 - 1.5^a $",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Comma, ","),
                (TokenKind::Int, "25"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "x2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "1"),
                (TokenKind::Dot, "."),
                (TokenKind::Int, "5"),
                (TokenKind::Pwr, "^"),
                (TokenKind::Name, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn implicit_product_is_two_tokens() {
        compare_tokens("2x", [(TokenKind::Int, "2"), (TokenKind::Name, "x")]);
    }
}
