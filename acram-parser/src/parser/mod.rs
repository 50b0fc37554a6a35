pub mod ast;
pub mod binary;
pub mod call;
pub mod error;
pub mod fmt;
pub mod header;
pub mod iter;
pub mod literal;
pub mod paren;
pub mod sym_table;

use acram_error::ErrorKind;
use ast::{function::Function, tree::Ast};
use error::{kind, Error};
use log::debug;
use std::ops::Range;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use sym_table::SymbolTable;

/// Parses a complete function definition, such as `f(x) = a*x^2 + b`.
///
/// Parsing stops at the first error.
pub fn parse_function(source: &str) -> Result<Function, Error> {
    Parser::new(source).parse_function()
}

/// A recursive-descent parser for function definitions.
///
/// The grammar of a definition is:
///
/// ```text
/// definition := name '(' name ')' '=' sum
/// sum        := ['+' | '-'] product (('+' | '-') product)*
/// product    := power (('*' | '/') power)*
/// power      := primary ['^' primary]
/// primary    := '(' sum ')' | number | function '(' sum ')' | name
/// number     := digits [('.' | ',') digits]
/// ```
///
/// Whitespace is allowed between any two tokens, except inside a number.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The tree being built.
    ast: Ast,

    /// The free parameters found so far.
    params: SymbolTable,

    /// The name of the bound variable, known once the header is parsed.
    variable: String,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            ast: Ast::new(),
            params: SymbolTable::new(),
            variable: String::new(),
        }
    }

    /// Parses the whole source as a function definition, consuming the parser.
    pub fn parse_function(mut self) -> Result<Function, Error> {
        let name = self.parse_header()?;
        let root = self.parse_sum()?;
        self.expect_end()?;
        self.ast.set_root(root);

        debug!(
            "parsed `{}({})` with {} node(s) and {} parameter(s)",
            name,
            self.variable,
            self.ast.len(),
            self.params.len(),
        );
        Ok(Function::new(name, self.variable, self.params, self.ast))
    }

    /// Creates an error that points at the next non-whitespace token, or the end of the source
    /// code if there are no more tokens.
    pub fn error(&mut self, kind: impl ErrorKind + 'static) -> Error {
        self.skip_whitespace();
        Error::new(vec![self.span()], kind)
    }

    /// Creates an error for a parenthesis opened at `open` that is not closed at the next
    /// non-whitespace token.
    pub fn unclosed(&mut self, open: Range<usize>) -> Error {
        self.skip_whitespace();
        Error::new(vec![self.span(), open], kind::UnclosedParenthesis)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream. Whitespace is not skipped.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved, and whitespace is not skipped.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the last non-whitespace token before the cursor.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens[..self.cursor]
            .iter()
            .rev()
            .find(|token| !token.is_whitespace())
    }

    /// Moves the cursor past any whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming it.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.skip_whitespace();
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next non-whitespace token, then advances the cursor past it.
    pub fn next_token(&mut self) -> Option<Token<'source>> {
        self.skip_whitespace();
        let token = self.current_token()?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Consumes the next non-whitespace token if it is of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_kind() == Some(kind) {
            self.next_token()
        } else {
            None
        }
    }

    /// Ensures that nothing but whitespace remains after the expression.
    fn expect_end(&mut self) -> Result<(), Error> {
        self.skip_whitespace();
        if self.cursor >= self.tokens.len() {
            return Ok(());
        }

        // `sinn(x)` leaves `(x)` behind after the parameter `sinn`
        let suggestions = match (self.prev_token(), self.current_token()) {
            (Some(prev), Some(current)) if prev.kind == TokenKind::Name
                && current.kind == TokenKind::OpenParen => call::suggest_functions(prev.lexeme),
            _ => Vec::new(),
        };
        let span = self.span().start..self.eof_span().end;
        Err(Error::new(vec![span], kind::TrailingGarbage { suggestions }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::node::{NodeKind, Op};

    /// Parses the source, expecting failure, and returns the error.
    fn parse_err(source: &str) -> Error {
        match parse_function(source) {
            Ok(function) => panic!("expected `{}` to fail, got `{}`", source, function),
            Err(err) => err,
        }
    }

    #[test]
    fn quadratic_with_parameters() {
        let function = parse_function("f(x) = a*x^2 + b").unwrap();
        assert_eq!(function.name, "f");
        assert_eq!(function.variable, "x");
        assert_eq!(function.params.as_slice(), ["a", "b"]);

        let ast = &function.ast;
        let root = ast.root();
        assert_eq!(ast.op(root), Some(Op::Add));

        let product = ast.left(root).unwrap();
        assert_eq!(ast.op(product), Some(Op::Mul));
        assert_eq!(ast.kind(ast.left(product).unwrap()), NodeKind::Parameter(0));

        let power = ast.right(product).unwrap();
        assert_eq!(ast.op(power), Some(Op::Pwr));
        assert_eq!(ast.kind(ast.left(power).unwrap()), NodeKind::Variable);
        assert_eq!(ast.kind(ast.right(power).unwrap()), NodeKind::Integer(2));

        assert_eq!(ast.kind(ast.right(root).unwrap()), NodeKind::Parameter(1));
    }

    #[test]
    fn left_associative_chains() {
        let function = parse_function("f(x) = 1 - 2 - 3").unwrap();
        let ast = &function.ast;
        let root = ast.root();
        let inner = ast.left(root).unwrap();
        assert_eq!(ast.op(inner), Some(Op::Sub));
        assert_eq!(ast.kind(ast.right(root).unwrap()), NodeKind::Integer(3));
        assert_eq!(function.to_str(), "1-2-3");
    }

    #[test]
    fn leading_signs() {
        let function = parse_function("f(x) = -x*2").unwrap();
        let ast = &function.ast;
        let root = ast.root();
        assert_eq!(ast.op(root), Some(Op::Sub));
        assert_eq!(ast.left(root), None);
        assert_eq!(ast.op(ast.right(root).unwrap()), Some(Op::Mul));

        let function = parse_function("f(x) = +x").unwrap();
        assert_eq!(function.ast.kind(function.ast.root()), NodeKind::Variable);
    }

    #[test]
    fn whitespace_anywhere() {
        let spaced = parse_function("  f ( x )  =  sin ( x ) * 2 ").unwrap();
        let packed = parse_function("f(x)=sin(x)*2").unwrap();
        assert_eq!(spaced.ast, packed.ast);
    }

    #[test]
    fn parameter_reuse() {
        let function = parse_function("f(t) = b*t + a*t + b").unwrap();
        assert_eq!(function.params.as_slice(), ["b", "a"]);
        assert_eq!(function.ast.kind(function.ast.right(function.ast.root()).unwrap()), NodeKind::Parameter(0));
    }

    #[test]
    fn fraction_literals() {
        let function = parse_function("f(x) = 2.5 + 0,25").unwrap();
        let ast = &function.ast;
        assert_eq!(ast.kind(ast.left(ast.root()).unwrap()), NodeKind::Fraction(2.5));
        assert_eq!(ast.kind(ast.right(ast.root()).unwrap()), NodeKind::Fraction(0.25));

        let function = parse_function("f(x) = 0.0625").unwrap();
        assert_eq!(function.ast.kind(function.ast.root()), NodeKind::Fraction(0.0625));
    }

    #[test]
    fn function_call_spans() {
        let function = parse_function("f(x) = cos(x)").unwrap();
        let root = function.ast.root();
        assert_eq!(function.ast.op(root), Some(Op::Cos));
        assert_eq!(function.ast[root].span, 7..13);
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse_err("f(x)=(x+1");
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(err.spans, vec![9..9, 5..6]);

        let err = parse_err("f(x = x");
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn missing_operand() {
        let err = parse_err("f(x) = x +");
        assert!(err.is::<kind::MissingOperand>());
        assert_eq!(err.offset(), 10);

        let err = parse_err("f(x) = sin x");
        assert_eq!(
            err.downcast_ref::<kind::MissingOperand>(),
            Some(&kind::MissingOperand { function: Some(String::from("sin")) }),
        );

        assert!(parse_err("f(x) = x * * 2").is::<kind::MissingOperand>());
        assert!(parse_err("f(x) = x^-1").is::<kind::MissingOperand>());
        assert!(parse_err("f(x) = ()").is::<kind::MissingOperand>());
    }

    #[test]
    fn invalid_operand() {
        let err = parse_err("f(x) = 2. + x");
        assert_eq!(err.downcast_ref::<kind::InvalidOperand>(), Some(&kind::InvalidOperand { overflow: false }));
        assert_eq!(err.offset(), 9);

        let err = parse_err("f(x) = 99999999999999999999");
        assert_eq!(err.downcast_ref::<kind::InvalidOperand>(), Some(&kind::InvalidOperand { overflow: true }));
    }

    #[test]
    fn no_expression() {
        assert!(parse_err("").is::<kind::NoExpression>());
        assert!(parse_err("   ").is::<kind::NoExpression>());
        assert!(parse_err("x + 1").is::<kind::NoExpression>());
        assert!(parse_err("f() = 1").is::<kind::NoExpression>());
        assert!(parse_err("2(x) = 1").is::<kind::NoExpression>());
    }

    #[test]
    fn missing_equals_sign() {
        let err = parse_err("f(x) x + 1");
        assert!(err.is::<kind::MissingEqualsSign>());
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn trailing_garbage() {
        let err = parse_err("f(x) = x + 1 )");
        assert!(err.is::<kind::TrailingGarbage>());
        assert_eq!(err.spans, vec![13..14]);

        // only one exponent is allowed without parentheses
        assert!(parse_err("f(x) = x^2^3").is::<kind::TrailingGarbage>());
        assert!(parse_err("f(x) = 2x").is::<kind::TrailingGarbage>());
        assert!(parse_err("f(x) = x $").is::<kind::TrailingGarbage>());
    }

    #[test]
    fn misspelled_function() {
        let err = parse_err("f(x) = sinn(x)");
        assert_eq!(
            err.downcast_ref::<kind::TrailingGarbage>(),
            Some(&kind::TrailingGarbage { suggestions: vec!["sin"] }),
        );

        let err = parse_err("f(x) = a(x)");
        assert_eq!(
            err.downcast_ref::<kind::TrailingGarbage>(),
            Some(&kind::TrailingGarbage { suggestions: vec![] }),
        );
    }

    #[test]
    fn first_error_wins() {
        // the missing parenthesis is found before the trailing `$`
        assert!(parse_err("f(x) = (x + 1 $").is::<kind::UnclosedParenthesis>());
        assert!(parse_err("f(x) = (x + ) $").is::<kind::MissingOperand>());
    }
}
